//! Runtime reflection tables.
//!
//! Rust has no runtime reflection, so `#[derive(Reflect)]` writes down what the compiler saw: each field's name,
//! visibility, type and directive.  Nothing is validated at that point; the introspector does that at runtime with the
//! shared rules.

/// Reflection data for one struct field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    /// `None` for tuple struct fields.
    pub name: Option<&'static str>,
    pub visibility: &'static str,
    pub declared_type: &'static str,
    /// From `std::any::type_name`.
    pub resolved_type: &'static str,
    pub directive: Option<&'static str>,
}

/// Reflection data for a struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: &'static str,
    pub module_path: &'static str,
    /// Payload of the struct's `#[reform("...")]` attribute.
    pub directive: Option<&'static str>,
    pub fields: Vec<FieldInfo>,
}

/// Types which can describe their own declaration at runtime.
///
/// Implement with `#[derive(Reflect)]`.
pub trait Reflect {
    fn type_info() -> TypeInfo;
}
