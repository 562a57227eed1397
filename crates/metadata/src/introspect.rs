//! The runtime introspector.
use log::*;

use crate::rules::{self, FieldDeclaration};
use crate::{DeclarationError, RecordDescriptor, Reflect, TypeInfo};

fn declarations(info: &TypeInfo) -> impl Iterator<Item = FieldDeclaration<'static>> + '_ {
    info.fields.iter().map(|f| FieldDeclaration {
        name: f.name,
        visibility: f.visibility,
        declared_type: f.declared_type,
        directive: f.directive,
        resolved_type: Some(f.resolved_type),
    })
}

/// Build a descriptor from reflection data, for the given table.
pub fn introspect_info(
    info: &TypeInfo,
    schema: Option<&str>,
    name: &str,
) -> Result<RecordDescriptor, DeclarationError> {
    trace!("Introspecting {}::{}", info.module_path, info.name);
    rules::build_descriptor(info.name, schema, name, declarations(info))
}

/// Build a descriptor for `T`, taking the table from its own table directive.
pub fn introspect<T: Reflect>() -> Result<RecordDescriptor, DeclarationError> {
    let info = T::type_info();
    let directive = info
        .directive
        .ok_or_else(|| DeclarationError::MissingTableDirective {
            record: info.name.to_string(),
        })?;
    let table = rules::parse_table_directive(info.name, directive)?;
    introspect_info(&info, table.schema.as_deref(), &table.name)
}

/// Build a descriptor for `T` mapped onto an arbitrary table, ignoring any table directive.
pub fn introspect_as<T: Reflect>(
    schema: Option<&str>,
    name: &str,
) -> Result<RecordDescriptor, DeclarationError> {
    introspect_info(&T::type_info(), schema, name)
}

/// Like [introspect], for a live value.
pub fn introspect_value<T: Reflect>(_value: &T) -> Result<RecordDescriptor, DeclarationError> {
    introspect::<T>()
}
