//! Hook lookup for generated code.
//!
//! `reform-gen` only sees hook impls written next to the struct.  For everything else, generated code asks the
//! compiler: `Detect(self).before_insert_hook()` resolves to the by-value impl when the concrete type implements the
//! hook, and falls back to the impl on `&Detect` otherwise.  This only works where the type is concrete, which it
//! always is in generated code.
use crate::record::{AfterFind, BeforeInsert, BeforeUpdate};

pub struct Detect<'a, T>(pub &'a mut T);

macro_rules! detect_hook {
    ($hook: ident, $method: ident, $found: ident, $missing: ident) => {
        pub trait $found<'a> {
            fn $method(self) -> Option<&'a mut dyn $hook>;
        }

        impl<'a, T: $hook> $found<'a> for Detect<'a, T> {
            fn $method(self) -> Option<&'a mut dyn $hook> {
                Some(self.0)
            }
        }

        pub trait $missing<'a> {
            fn $method(self) -> Option<&'a mut dyn $hook>;
        }

        impl<'a, T> $missing<'a> for &Detect<'a, T> {
            fn $method(self) -> Option<&'a mut dyn $hook> {
                None
            }
        }
    };
}

detect_hook!(
    BeforeInsert,
    before_insert_hook,
    HasBeforeInsert,
    NoBeforeInsert
);
detect_hook!(
    BeforeUpdate,
    before_update_hook,
    HasBeforeUpdate,
    NoBeforeUpdate
);
detect_hook!(AfterFind, after_find_hook, HasAfterFind, NoAfterFind);
