//! The code generator behind `reform-gen`.
//!
//! For a source file `models.rs`, the static analyzer finds the records and we render `models_reform.rs` next to it:
//! a view or table value per record holding its embedded descriptor, and the [reform] trait impls for the struct.  The
//! generated file is meant to be pulled into the declaring module with `include!`.
use std::collections::HashSet;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use convert_case::{Case, Casing};
use log::*;
use reform_parse::ParsedStruct;

const RECORDS_TEMPLATE: &str = include_str!("templates/records.rs.tera");

/// Suffix of generated files.  These are never used as input.
pub const GENERATED_SUFFIX: &str = "_reform.rs";

#[derive(Debug, serde::Serialize)]
struct FieldContext {
    name: String,
    name_lit: String,
    declared_type_lit: String,
    column_lit: String,
    primary_key: bool,
}

#[derive(Debug, serde::Serialize)]
struct RecordContext {
    type_name: String,
    type_name_lit: String,
    qualified_name: String,
    view_type: String,
    view_static: String,
    schema_lit: String,
    name_lit: String,
    is_table: bool,
    pk_index: usize,
    pk_field: String,
    fields: Vec<FieldContext>,
    before_insert: bool,
    before_update: bool,
    after_find: bool,
}

/// A string literal for embedding in generated code.
fn literal(s: &str) -> String {
    format!("{:?}", s)
}

fn record_context(parsed: &ParsedStruct) -> RecordContext {
    let desc = &parsed.descriptor;
    let type_name = desc.get_record_type().to_string();
    let suffix = if desc.is_table() { "Table" } else { "View" };
    let view_type = format!("{}{}", type_name, suffix);

    let qualified_name = match desc.get_schema() {
        Some(s) => format!("{}.{}", s, desc.get_name()),
        None => desc.get_name().to_string(),
    };

    let fields = desc
        .iter_fields()
        .map(|f| FieldContext {
            name: f.get_name().to_string(),
            name_lit: literal(f.get_name()),
            declared_type_lit: literal(f.get_declared_type()),
            column_lit: literal(f.get_column()),
            primary_key: f.is_primary_key(),
        })
        .collect();

    RecordContext {
        type_name_lit: literal(&type_name),
        view_static: view_type.to_case(Case::UpperSnake),
        view_type,
        type_name,
        qualified_name,
        schema_lit: match desc.get_schema() {
            Some(s) => format!("Some({})", literal(s)),
            None => "None".to_string(),
        },
        name_lit: literal(desc.get_name()),
        is_table: desc.is_table(),
        pk_index: desc.get_primary_key_index().unwrap_or_default(),
        pk_field: desc
            .pk_field()
            .map(|f| f.get_name().to_string())
            .unwrap_or_default(),
        fields,
        before_insert: parsed.hooks.before_insert,
        before_update: parsed.hooks.before_update,
        after_find: parsed.hooks.after_find,
    }
}

/// Render the generated code for some already-parsed records.
pub fn render(source_name: &str, records: &[ParsedStruct]) -> Result<String> {
    let records = records.iter().map(record_context).collect::<Vec<_>>();

    let mut seen = HashSet::new();
    for r in records.iter() {
        anyhow::ensure!(
            seen.insert(r.view_static.as_str()),
            "{} would generate {} twice",
            source_name,
            r.view_static
        );
    }

    let mut context = tera::Context::new();
    context.insert("source_name", source_name);
    context.insert("records", &records);
    let out = tera::Tera::one_off(RECORDS_TEMPLATE, &context, false)?;
    Ok(out)
}

/// Generate code for a source text.
///
/// Returns `None` if the source declares no records.
pub fn generate_source(source_name: &str, source: &str) -> Result<Option<String>> {
    let records = reform_parse::parse_source(source)
        .with_context(|| format!("While analyzing {}", source_name))?;
    if records.is_empty() {
        return Ok(None);
    }

    Ok(Some(render(source_name, &records)?))
}

/// Is this a file we should read?
pub fn is_input(path: &Utf8Path) -> bool {
    path.extension() == Some("rs") && !path.as_str().ends_with(GENERATED_SUFFIX)
}

/// Where the code for `path` goes: `models.rs` becomes `models_reform.rs`.
pub fn output_path(path: &Utf8Path) -> Option<Utf8PathBuf> {
    let stem = path.file_stem()?;
    Some(path.with_file_name(format!("{}{}", stem, GENERATED_SUFFIX)))
}

/// Generate code for one file, writing the output next to it.
///
/// Returns the output path, or `None` if there was nothing to generate.
pub fn generate_file(path: &Utf8Path) -> Result<Option<Utf8PathBuf>> {
    let source = std::fs::read_to_string(path).with_context(|| format!("Unable to read {}", path))?;
    let source_name = path.file_name().unwrap_or(path.as_str());

    let code = match generate_source(source_name, &source)? {
        Some(c) => c,
        None => {
            debug!("No records in {}", path);
            return Ok(None);
        }
    };

    let out = output_path(path).with_context(|| format!("{} has no file name", path))?;
    std::fs::write(&out, code).with_context(|| format!("Unable to write {}", out))?;
    info!("Generated {}", out);
    Ok(Some(out))
}

/// Find the inputs under a path, which may be a file or a directory.
fn collect_inputs(path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut ret = vec![];
    for entry in walkdir::WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let p = Utf8PathBuf::try_from(entry.into_path())?;
        if is_input(&p) {
            ret.push(p);
        }
    }

    Ok(ret)
}

/// Generate code for every file given, and every source file under every directory given.
///
/// Returns the files written.
pub fn run(paths: &[Utf8PathBuf]) -> Result<Vec<Utf8PathBuf>> {
    let mut written = vec![];

    for p in paths.iter() {
        for input in collect_inputs(p)? {
            debug!("Processing {}", input);
            if let Some(out) = generate_file(&input)? {
                written.push(out);
            }
        }
    }

    Ok(written)
}
