//! Declaration rules shared by the static analyzer and the runtime introspector.
//!
//! Each side extracts a list of [FieldDeclaration]s its own way and hands them to [build_descriptor].  Nothing else
//! decides whether a declaration is valid.
//!
//! Field directives are `column` or `column,pk`; the directive `-` skips the field.  Table directives are `table` or
//! `schema.table`.
use lazy_static::lazy_static;
use regex::Regex;

use crate::{DeclarationError, FieldDescriptor, RecordDescriptor};

/// One field of a struct, as seen by either parser.
#[derive(Clone, Debug, Default)]
pub struct FieldDeclaration<'a> {
    /// `None` for tuple struct fields.
    pub name: Option<&'a str>,

    /// Visibility as written, e.g. `pub` or `pub(crate)`; empty for private fields.
    pub visibility: &'a str,

    /// The type as written.  Normalized here, so either token spacing is fine.
    pub declared_type: &'a str,

    /// Payload of the field's `#[reform("...")]` attribute, if it has one.
    pub directive: Option<&'a str>,

    pub resolved_type: Option<&'a str>,
}

/// A parsed field directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldDirective {
    Column { column: String, primary_key: bool },
    Skip,
}

/// Schema and name from a table directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableName {
    pub schema: Option<String>,
    pub name: String,
}

/// What a type is, as far as primary keys care.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeShape {
    Plain,
    /// Options, smart pointers, references, raw pointers.
    Pointer,
    /// Vectors, maps, sets, arrays, slices.
    Collection,
}

lazy_static! {
    static ref TABLE_DIRECTIVE: Regex =
        Regex::new(r"^(?:([0-9A-Za-z_]+)\.)?([0-9A-Za-z_]+)$").expect("Regex should compile");
}

const POINTER_TYPES: &[&str] = &["Option", "Box", "Rc", "Arc"];
const COLLECTION_TYPES: &[&str] = &[
    "Vec",
    "VecDeque",
    "LinkedList",
    "HashMap",
    "HashSet",
    "BTreeMap",
    "BTreeSet",
    "SmallVec",
];

/// Parse a field directive.  Returns `None` if it is malformed.
pub fn parse_field_directive(payload: &str) -> Option<FieldDirective> {
    if payload == "-" {
        return Some(FieldDirective::Skip);
    }

    let parts = payload.split(',').collect::<Vec<_>>();
    let primary_key = match parts.as_slice() {
        [_] => false,
        [_, "pk"] => true,
        _ => return None,
    };

    let column = parts[0];
    if column.is_empty() || !column.chars().all(is_ident_char) {
        return None;
    }

    Some(FieldDirective::Column {
        column: column.to_string(),
        primary_key,
    })
}

pub fn parse_table_directive(record: &str, payload: &str) -> Result<TableName, DeclarationError> {
    let caps = TABLE_DIRECTIVE
        .captures(payload)
        .ok_or_else(|| DeclarationError::InvalidTableDirective {
            record: record.to_string(),
            directive: payload.to_string(),
        })?;

    Ok(TableName {
        schema: caps.get(1).map(|m| m.as_str().to_string()),
        name: caps[2].to_string(),
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize the textual form of a type so that token spacing doesn't matter.
///
/// Whitespace is dropped unless it separates two identifier characters, so `Option < Vec < u8 > >` becomes
/// `Option<Vec<u8>>` and `& 'a str` becomes `&'a str`.
pub fn normalize_type(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space && is_ident_char(c) && out.chars().last().map_or(false, is_ident_char) {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Classify a normalized type.
pub fn type_shape(normalized: &str) -> TypeShape {
    if normalized.starts_with('&') || normalized.starts_with('*') {
        return TypeShape::Pointer;
    }

    if normalized.starts_with('[') {
        return TypeShape::Collection;
    }

    let head = normalized.split('<').next().unwrap_or(normalized);
    let last = head.rsplit("::").next().unwrap_or(head);
    if POINTER_TYPES.contains(&last) {
        TypeShape::Pointer
    } else if COLLECTION_TYPES.contains(&last) {
        TypeShape::Collection
    } else {
        TypeShape::Plain
    }
}

pub fn is_public(visibility: &str) -> bool {
    !visibility.trim().is_empty()
}

/// Validate a struct's fields and build its descriptor.
///
/// Fields without a directive (or with `-`) are not mapped.
pub fn build_descriptor<'a>(
    record: &str,
    schema: Option<&str>,
    name: &str,
    fields: impl IntoIterator<Item = FieldDeclaration<'a>>,
) -> Result<RecordDescriptor, DeclarationError> {
    let mut out: Vec<FieldDescriptor> = vec![];
    let mut primary_key: Option<usize> = None;

    for decl in fields {
        let directive = match decl.directive {
            Some(d) => d,
            None => continue,
        };

        let declared_type = normalize_type(decl.declared_type);

        let field_name = decl
            .name
            .ok_or_else(|| DeclarationError::AnonymousField {
                record: record.to_string(),
                field_type: declared_type.clone(),
            })?;

        if !is_public(decl.visibility) {
            return Err(DeclarationError::PrivateField {
                record: record.to_string(),
                field: field_name.to_string(),
            });
        }

        let (column, is_pk) = match parse_field_directive(directive) {
            Some(FieldDirective::Skip) => continue,
            Some(FieldDirective::Column {
                column,
                primary_key,
            }) => (column, primary_key),
            None => {
                return Err(DeclarationError::InvalidDirective {
                    record: record.to_string(),
                    field: field_name.to_string(),
                    directive: directive.to_string(),
                })
            }
        };

        if is_pk {
            match type_shape(&declared_type) {
                TypeShape::Plain => {}
                TypeShape::Pointer => {
                    return Err(DeclarationError::PointerPrimaryKey {
                        record: record.to_string(),
                        field: field_name.to_string(),
                    })
                }
                TypeShape::Collection => {
                    return Err(DeclarationError::CollectionPrimaryKey {
                        record: record.to_string(),
                        field: field_name.to_string(),
                    })
                }
            }

            if let Some(first) = primary_key {
                return Err(DeclarationError::DuplicatePrimaryKey {
                    record: record.to_string(),
                    field: field_name.to_string(),
                    first: out[first].get_name().to_string(),
                });
            }
            primary_key = Some(out.len());
        }

        out.push(FieldDescriptor::new(
            field_name.to_string(),
            declared_type,
            column,
            is_pk,
            decl.resolved_type.map(|x| x.to_string()),
        ));
    }

    if out.is_empty() {
        return Err(DeclarationError::NoMappedFields {
            record: record.to_string(),
        });
    }

    for (i, f) in out.iter().enumerate() {
        if let Some(first) = out[..i].iter().find(|x| x.get_column() == f.get_column()) {
            return Err(DeclarationError::DuplicateColumn {
                record: record.to_string(),
                field: f.get_name().to_string(),
                column: f.get_column().to_string(),
                first: first.get_name().to_string(),
            });
        }
    }

    Ok(RecordDescriptor::new(
        record.to_string(),
        schema.map(|x| x.to_string()),
        name.to_string(),
        out,
        primary_key,
    ))
}
