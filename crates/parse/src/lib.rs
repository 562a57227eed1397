//! The static analyzer.
//!
//! Reads Rust source text and finds record declarations: top-level structs carrying a `#[reform("table")]` directive.
//! For each, it extracts the fields with their directives and runs them through [reform_metadata::rules], producing
//! the same [RecordDescriptor] the runtime introspector would.
//!
//! This only parses text; it never compiles or loads the program, so it can run before the build.
use std::path::{Path, PathBuf};

use log::*;
use quote::ToTokens;
use reform_metadata::rules::{self, FieldDeclaration};
use reform_metadata::{DeclarationError, RecordDescriptor};

/// Name of the attribute carrying directives.
pub const DIRECTIVE_ATTRIBUTE: &str = "reform";

const BEFORE_INSERT: &str = "BeforeInsert";
const BEFORE_UPDATE: &str = "BeforeUpdate";
const AFTER_FIND: &str = "AfterFind";

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("Unable to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error: {}", _0)]
    Syntax(#[from] syn::Error),

    #[error(transparent)]
    Declaration(#[from] DeclarationError),
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Lifecycle hooks implemented for a struct in the same source file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Hooks {
    pub before_insert: bool,
    pub before_update: bool,
    pub after_find: bool,
}

/// A record found in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedStruct {
    pub descriptor: RecordDescriptor,
    pub hooks: Hooks,
}

/// Get the payload of a `#[reform(...)]` attribute.
///
/// The payload is normally a string literal.  Anything else is passed through as token text, which the rules will
/// then reject.
pub fn directive_payload(attrs: &[syn::Attribute]) -> Option<String> {
    let attr = attrs
        .iter()
        .find(|a| a.path.is_ident(DIRECTIVE_ATTRIBUTE))?;

    match attr.parse_args::<syn::LitStr>() {
        Ok(lit) => Some(lit.value()),
        Err(_) => Some(attr.tokens.to_string()),
    }
}

/// The normalized text of a type.
pub fn type_text(ty: &syn::Type) -> String {
    rules::normalize_type(&ty.to_token_stream().to_string())
}

pub fn visibility_text(vis: &syn::Visibility) -> String {
    vis.to_token_stream().to_string()
}

/// Owned counterpart of [FieldDeclaration], since syn hands out temporaries.
struct FieldText {
    name: Option<String>,
    visibility: String,
    declared_type: String,
    directive: Option<String>,
}

impl FieldText {
    fn from_field(field: &syn::Field) -> Self {
        Self {
            name: field.ident.as_ref().map(|x| x.to_string()),
            visibility: visibility_text(&field.vis),
            declared_type: type_text(&field.ty),
            directive: directive_payload(&field.attrs),
        }
    }

    fn declaration(&self) -> FieldDeclaration<'_> {
        FieldDeclaration {
            name: self.name.as_deref(),
            visibility: &self.visibility,
            declared_type: &self.declared_type,
            directive: self.directive.as_deref(),
            resolved_type: None,
        }
    }
}

fn parse_struct(item: &syn::ItemStruct, directive: &str) -> Result<RecordDescriptor> {
    let record = item.ident.to_string();
    let table = rules::parse_table_directive(&record, directive)?;

    let fields = item.fields.iter().map(FieldText::from_field).collect::<Vec<_>>();
    let desc = rules::build_descriptor(
        &record,
        table.schema.as_deref(),
        &table.name,
        fields.iter().map(|f| f.declaration()),
    )?;
    Ok(desc)
}

/// Last path segment of a type, if it is a plain path.
fn type_ident(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(p) => p.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

fn find_hooks(file: &syn::File, record: &str) -> Hooks {
    let mut hooks = Hooks::default();

    for item in file.items.iter() {
        let imp = match item {
            syn::Item::Impl(i) => i,
            _ => continue,
        };

        let trait_name = match imp.trait_.as_ref().and_then(|t| t.1.segments.last()) {
            Some(seg) => seg.ident.to_string(),
            None => continue,
        };

        if type_ident(&imp.self_ty).as_deref() != Some(record) {
            continue;
        }

        match trait_name.as_str() {
            BEFORE_INSERT => hooks.before_insert = true,
            BEFORE_UPDATE => hooks.before_update = true,
            AFTER_FIND => hooks.after_find = true,
            _ => {}
        }
    }

    hooks
}

/// Find all records in the given source text, in declaration order.
pub fn parse_source(source: &str) -> Result<Vec<ParsedStruct>> {
    let file = syn::parse_file(source)?;
    let mut ret = vec![];

    for item in file.items.iter() {
        let item = match item {
            syn::Item::Struct(s) => s,
            _ => continue,
        };

        // Only structs with a table directive are records.
        let directive = match directive_payload(&item.attrs) {
            Some(d) => d,
            None => continue,
        };

        let descriptor = parse_struct(item, &directive)?;
        debug!(
            "Found {} mapped to {:?}.{}",
            descriptor.get_record_type(),
            descriptor.get_schema(),
            descriptor.get_name()
        );
        let hooks = find_hooks(&file, descriptor.get_record_type());
        ret.push(ParsedStruct { descriptor, hooks });
    }

    Ok(ret)
}

/// Find one record by type name.
///
/// Errors in other records of the same source are still reported.
pub fn parse_type(source: &str, type_name: &str) -> Result<Option<ParsedStruct>> {
    Ok(parse_source(source)?
        .into_iter()
        .find(|s| s.descriptor.get_record_type() == type_name))
}

pub fn parse_file(path: &Path) -> Result<Vec<ParsedStruct>> {
    let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&source)
}
