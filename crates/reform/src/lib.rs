//! Typed records to relational rows and back, for several SQL dialects.
//!
//! Records are plain structs with `#[reform(...)]` directives.  `reform-gen` reads their source and writes the
//! [Struct], [Record], [View] and [Table] impls, with the record metadata embedded as constants.  The first use of a
//! generated view checks that metadata against `#[derive(Reflect)]`, so a declaration changed without regenerating is
//! caught before any SQL is built from stale metadata.
//!
//! A [Querier] then runs inserts, updates, deletes and selects over any [Client], writing SQL for the chosen
//! [Dialect].  There is no query DSL: filters, ordering and the like are raw SQL tails.
mod client;
mod commands;
#[doc(hidden)]
pub mod detect;
pub mod dialect;
mod error;
mod inspect;
mod querier;
mod record;
mod selects;
pub mod sqlite;
mod value;

pub use client::*;
pub use dialect::{Dialect, DialectTrait};
pub use error::*;
pub use inspect::*;
pub use querier::*;
pub use record::*;
pub use value::*;

pub use reform_derive::Reflect;
pub use reform_metadata as metadata;
pub use reform_metadata::{assert_up_to_date, FieldDescriptor, RecordDescriptor, Reflect};

// Generated code uses this, so that users don't need their own dependency.
pub use lazy_static::lazy_static;
