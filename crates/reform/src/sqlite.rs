//! [Client] for rusqlite.
//!
//! Works for both connections and transactions, since a `rusqlite::Transaction` derefs to its connection.  Rows are
//! read eagerly: a rusqlite cursor borrows its statement, which can't outlive the call that prepared it.
use std::collections::VecDeque;
use std::path::Path;

use log::*;
use rusqlite::types::{ToSqlOutput, ValueRef};
use time::format_description::well_known::Rfc3339;

use crate::client::{Client, Context, ExecResult, Rows};
use crate::record::BoxError;
use crate::value::Value;

/// SQL that we run as part of opening a connection.
///
/// - Enables the busy timeout
/// - Enables foreign key enforcement.
/// - Sets up WAL, so that readers don't block the writer.
const INITIAL_SQL: &str = r#"
PRAGMA busy_timeout = 1000;
PRAGMA foreign_keys = 1;
PRAGMA journal_mode = WAL;
"#;

/// Open a database file and configure the connection.
pub fn open(path: &Path) -> rusqlite::Result<rusqlite::Connection> {
    info!("Opening database at {}", path.display());
    let conn = rusqlite::Connection::open(path)?;
    conn.execute_batch(INITIAL_SQL)?;
    Ok(conn)
}

/// Open an in-memory database.
pub fn open_in_memory() -> rusqlite::Result<rusqlite::Connection> {
    let conn = rusqlite::Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys = 1;")?;
    Ok(conn)
}

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Bool(b) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*b as i64)),
            Value::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Borrowed(ValueRef::Real(*r)),
            Value::Text(t) => ToSqlOutput::Borrowed(ValueRef::Text(t.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
            // SQLite has no timestamp type; RFC 3339 text sorts and compares correctly within one offset.
            Value::Timestamp(t) => {
                let text = t
                    .format(&Rfc3339)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                ToSqlOutput::Owned(rusqlite::types::Value::Text(text))
            }
        })
    }
}

fn from_value_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        // SQLite doesn't enforce encodings.  Hand back the bytes rather than lose them.
        ValueRef::Text(t) => match std::str::from_utf8(t) {
            Ok(s) => Value::Text(s.to_string()),
            Err(_) => Value::Blob(t.to_vec()),
        },
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

/// Rows read ahead of time.
pub struct BufferedRows {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
}

impl Rows for BufferedRows {
    fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn fetch(&mut self) -> Result<Option<Vec<Value>>, BoxError> {
        Ok(self.rows.pop_front())
    }
}

fn read_rows(
    conn: &rusqlite::Connection,
    query: &str,
    args: &[Value],
    limit: Option<usize>,
) -> Result<BufferedRows, BoxError> {
    let mut stmt = conn.prepare_cached(query)?;
    let columns = stmt
        .column_names()
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>();

    let mut rows = stmt.query(rusqlite::params_from_iter(args.iter()))?;
    let mut out = VecDeque::new();
    while let Some(r) = rows.next()? {
        let mut row = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            row.push(from_value_ref(r.get_ref(i)?));
        }
        out.push_back(row);

        if limit.map_or(false, |l| out.len() >= l) {
            break;
        }
    }

    Ok(BufferedRows { columns, rows: out })
}

impl Client for rusqlite::Connection {
    fn exec(&self, ctx: &Context, query: &str, args: &[Value]) -> Result<ExecResult, BoxError> {
        ctx.check()?;
        let mut stmt = self.prepare_cached(query)?;
        let rows_affected = stmt.execute(rusqlite::params_from_iter(args.iter()))?;
        Ok(ExecResult {
            rows_affected: rows_affected as u64,
            last_insert_id: Some(self.last_insert_rowid()),
        })
    }

    fn query<'a>(
        &'a self,
        ctx: &Context,
        query: &str,
        args: &[Value],
    ) -> Result<Box<dyn Rows + 'a>, BoxError> {
        ctx.check()?;
        Ok(Box::new(read_rows(self, query, args, None)?))
    }

    fn query_row(
        &self,
        ctx: &Context,
        query: &str,
        args: &[Value],
    ) -> Result<Option<Vec<Value>>, BoxError> {
        ctx.check()?;
        Ok(read_rows(self, query, args, Some(1))?.rows.pop_front())
    }
}
