//! What the querier needs from record types.
//!
//! Every mapped struct implements [Struct]; those mapped to tables also implement [Record].  Lifecycle hooks are
//! separate traits, found through the `as_*` probes so that the querier can work with `dyn Struct`.  All of this is
//! normally generated by `reform-gen`.
use reform_metadata::RecordDescriptor;

use crate::value::{ConversionError, Scan, Value};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type HookResult = Result<(), BoxError>;

/// A view or table.
///
/// Generated code provides one static value per record type.
pub trait View {
    fn descriptor(&self) -> &RecordDescriptor;

    /// A new, zeroed struct for this view.
    fn new_struct(&self) -> Box<dyn Struct>;

    fn get_schema(&self) -> Option<&str> {
        self.descriptor().get_schema()
    }

    fn get_name(&self) -> &str {
        self.descriptor().get_name()
    }

    fn columns(&self) -> Vec<&str> {
        self.descriptor().columns()
    }
}

/// A view with a primary key.
pub trait Table: View {
    fn new_record(&self) -> Box<dyn Record>;

    fn pk_column_index(&self) -> usize;
}

pub trait Struct {
    fn view(&self) -> &'static dyn View;

    /// Field values, in column order.
    fn values(&self) -> Vec<Value>;

    /// Fields to scan into, in column order.
    fn pointers(&mut self) -> Vec<&mut dyn Scan>;

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    fn as_before_insert(&mut self) -> Option<&mut dyn BeforeInsert> {
        None
    }

    fn as_before_update(&mut self) -> Option<&mut dyn BeforeUpdate> {
        None
    }

    fn as_after_find(&mut self) -> Option<&mut dyn AfterFind> {
        None
    }
}

/// A struct mapped to a table.
pub trait Record: Struct {
    fn table(&self) -> &'static dyn Table;

    fn pk_value(&self) -> Value;

    fn pk_pointer(&mut self) -> &mut dyn Scan;

    /// Whether the primary key is set to something other than its zero value.
    fn has_pk(&self) -> bool;

    /// Set the primary key from a database-generated value.
    fn set_pk(&mut self, pk: Value) -> Result<(), ConversionError> {
        self.pk_pointer().scan(pk)
    }
}

/// Called before a struct is inserted.  An error aborts the insert.
pub trait BeforeInsert {
    fn before_insert(&mut self) -> HookResult;
}

/// Called before a record is updated.  An error aborts the update.
pub trait BeforeUpdate {
    fn before_update(&mut self) -> HookResult;
}

/// Called after a struct is loaded.
pub trait AfterFind {
    fn after_find(&mut self) -> HookResult;
}

/// Two views are the same view if they describe the same table.
pub(crate) fn same_view(a: &dyn View, b: &dyn View) -> bool {
    std::ptr::eq(a.descriptor(), b.descriptor())
        || (a.get_schema() == b.get_schema() && a.get_name() == b.get_name())
}
