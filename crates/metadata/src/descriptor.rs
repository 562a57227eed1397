//! Field and record descriptors.
//!
//! Descriptors are immutable once built.  Generated code builds them in `const` context with the `new_static`
//! constructors; the runtime introspector builds owned ones.  Both kinds compare equal when they describe the same
//! declaration, see [RecordDescriptor::matches_declaration].
use std::borrow::Cow;

/// A mapped field of a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: Cow<'static, str>,
    declared_type: Cow<'static, str>,
    column: Cow<'static, str>,
    primary_key: bool,
    /// Only known at runtime, via `std::any::type_name`.
    resolved_type: Option<Cow<'static, str>>,
}

/// A record: a struct mapped to a table (with a primary key) or a view (without one).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDescriptor {
    record_type: Cow<'static, str>,
    schema: Option<Cow<'static, str>>,
    name: Cow<'static, str>,
    fields: Cow<'static, [FieldDescriptor]>,
    primary_key: Option<usize>,
}

impl FieldDescriptor {
    pub fn new(
        name: String,
        declared_type: String,
        column: String,
        primary_key: bool,
        resolved_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            column: column.into(),
            primary_key,
            resolved_type: resolved_type.map(Into::into),
        }
    }

    /// Build a descriptor for embedding in generated code.
    pub const fn new_static(
        name: &'static str,
        declared_type: &'static str,
        column: &'static str,
        primary_key: bool,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            declared_type: Cow::Borrowed(declared_type),
            column: Cow::Borrowed(column),
            primary_key,
            resolved_type: None,
        }
    }

    /// The Rust field name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The field type as written in the declaration, normalized by [crate::rules::normalize_type].
    pub fn get_declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn get_column(&self) -> &str {
        &self.column
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn get_resolved_type(&self) -> Option<&str> {
        self.resolved_type.as_deref()
    }

    /// Compare everything the static analyzer knows about.
    pub fn matches_declaration(&self, other: &FieldDescriptor) -> bool {
        self.name == other.name
            && self.declared_type == other.declared_type
            && self.column == other.column
            && self.primary_key == other.primary_key
    }
}

impl RecordDescriptor {
    /// Build a descriptor.
    ///
    /// This doesn't validate anything; descriptors should come from [crate::rules::build_descriptor], the
    /// introspector, or generated code.
    pub fn new(
        record_type: String,
        schema: Option<String>,
        name: String,
        fields: Vec<FieldDescriptor>,
        primary_key: Option<usize>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            schema: schema.map(Into::into),
            name: name.into(),
            fields: fields.into(),
            primary_key,
        }
    }

    /// Build a descriptor for embedding in generated code.
    pub const fn new_static(
        record_type: &'static str,
        schema: Option<&'static str>,
        name: &'static str,
        fields: &'static [FieldDescriptor],
        primary_key: Option<usize>,
    ) -> Self {
        let schema = match schema {
            Some(s) => Some(Cow::Borrowed(s)),
            None => None,
        };

        Self {
            record_type: Cow::Borrowed(record_type),
            schema,
            name: Cow::Borrowed(name),
            fields: Cow::Borrowed(fields),
            primary_key,
        }
    }

    /// The Rust type name, without the module path.
    pub fn get_record_type(&self) -> &str {
        &self.record_type
    }

    pub fn get_schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// The table or view name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn iter_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn get_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn get_field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Column names, in field order.
    pub fn columns(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.get_column()).collect()
    }

    /// Index of the field mapped to `column`.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.get_column() == column)
    }

    /// Index of the primary key field, or `None` for views.
    pub fn get_primary_key_index(&self) -> Option<usize> {
        self.primary_key
    }

    /// Tables have a primary key, views don't.
    pub fn is_table(&self) -> bool {
        self.primary_key.is_some()
    }

    pub fn pk_field(&self) -> Option<&FieldDescriptor> {
        self.primary_key.map(|i| &self.fields[i])
    }

    pub fn pk_column(&self) -> Option<&str> {
        self.pk_field().map(|f| f.get_column())
    }

    /// Structural equality which ignores what only the runtime introspector fills in.
    pub fn matches_declaration(&self, other: &RecordDescriptor) -> bool {
        self.record_type == other.record_type
            && self.schema == other.schema
            && self.name == other.name
            && self.primary_key == other.primary_key
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(other.fields.iter())
                .all(|(a, b)| a.matches_declaration(b))
    }
}
