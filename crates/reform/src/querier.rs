//! The querier builds statements for one client in one dialect, runs them, and logs them.
//!
//! The write path is in [crate::commands], the read path in [crate::selects].
use std::time::{Duration, Instant};

use itertools::Itertools;
use log::*;
use reform_metadata::RecordDescriptor;

use crate::client::{Client, Context, ExecResult, Rows};
use crate::dialect::{Dialect, DialectTrait};
use crate::error::{Error, Result};
use crate::inspect::inspect_args;
use crate::value::Value;

/// Issues statements over one client.
///
/// Holds no per-call state, so it is cheap to clone and derive variants from with [Querier::with_tag] and
/// [Querier::with_context].
#[derive(Clone)]
pub struct Querier<'a> {
    client: &'a dyn Client,
    dialect: Dialect,
    tag: Option<String>,
    ctx: Context,
    log_types: bool,
}

impl<'a> Querier<'a> {
    pub fn new(client: &'a dyn Client, dialect: Dialect) -> Querier<'a> {
        Querier {
            client,
            dialect,
            tag: None,
            ctx: Context::background(),
            log_types: false,
        }
    }

    /// A querier which puts `/* tag */` after the command keyword of every statement, so statements can be traced
    /// back to their caller in database logs.  An empty tag removes it.
    pub fn with_tag(&self, tag: impl Into<String>) -> Querier<'a> {
        let tag = tag.into();
        Querier {
            tag: (!tag.is_empty()).then(|| tag),
            ..self.clone()
        }
    }

    /// A querier passing `ctx` to every client call.
    pub fn with_context(&self, ctx: Context) -> Querier<'a> {
        Querier {
            ctx,
            ..self.clone()
        }
    }

    /// Whether to log argument types next to their values.
    pub fn with_log_types(&self, log_types: bool) -> Querier<'a> {
        Querier {
            log_types,
            ..self.clone()
        }
    }

    pub fn get_dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn get_tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn get_context(&self) -> &Context {
        &self.ctx
    }

    /// The command keyword, followed by the tag if any.
    pub(crate) fn start_query(&self, command: &str) -> String {
        match self.tag.as_ref() {
            Some(t) => format!("{} /* {} */", command, t),
            None => command.to_string(),
        }
    }

    pub(crate) fn quote(&self, identifier: &str) -> String {
        self.dialect.quote_identifier(identifier)
    }

    pub(crate) fn placeholders(&self, start: usize, count: usize) -> Vec<String> {
        self.dialect.placeholders(start, count)
    }

    /// The quoted, schema-qualified name of a view.
    pub fn qualified_view(&self, desc: &RecordDescriptor) -> String {
        let name = self.quote(desc.get_name());
        match desc.get_schema() {
            Some(s) => format!("{}.{}", self.quote(s), name),
            None => name,
        }
    }

    /// Columns qualified with the view name.
    pub fn qualified_columns(&self, desc: &RecordDescriptor) -> Vec<String> {
        let view = self.qualified_view(desc);
        desc.iter_fields()
            .map(|f| format!("{}.{}", view, self.quote(f.get_column())))
            .collect()
    }

    fn log_before(&self, query: &str, args: &[Value]) {
        if !log_enabled!(Level::Debug) {
            return;
        }

        if args.is_empty() {
            debug!(">>> {}", query);
        } else {
            debug!(">>> {} {}", query, inspect_args(args, self.log_types));
        }
    }

    fn log_after<T, E: std::fmt::Display>(
        &self,
        query: &str,
        args: &[Value],
        elapsed: Duration,
        result: &std::result::Result<T, E>,
    ) {
        if !log_enabled!(Level::Debug) {
            return;
        }

        let mut msg = if args.is_empty() {
            format!("{} {:?}", query, elapsed)
        } else {
            format!(
                "{} {} {:?}",
                query,
                inspect_args(args, self.log_types),
                elapsed
            )
        };
        if let Err(e) = result {
            msg.push_str(&format!(": {}", e));
        }
        debug!("<<< {}", msg);
    }

    /// Run a statement which returns no rows.
    pub fn exec(&self, query: &str, args: &[Value]) -> Result<ExecResult> {
        self.log_before(query, args);
        let start = Instant::now();
        let res = self.client.exec(&self.ctx, query, args);
        self.log_after(query, args, start.elapsed(), &res);
        res.map_err(Error::Driver)
    }

    /// Run a query.
    pub fn query(&self, query: &str, args: &[Value]) -> Result<Box<dyn Rows + 'a>> {
        self.log_before(query, args);
        let start = Instant::now();
        let res = self.client.query(&self.ctx, query, args);
        self.log_after(query, args, start.elapsed(), &res);
        res.map_err(Error::Driver)
    }

    /// Run a query, returning at most one row.
    pub fn query_row(&self, query: &str, args: &[Value]) -> Result<Option<Vec<Value>>> {
        self.log_before(query, args);
        let start = Instant::now();
        let res = self.client.query_row(&self.ctx, query, args);
        self.log_after(query, args, start.elapsed(), &res);
        res.map_err(Error::Driver)
    }

    /// `a = ph, b = ph, ...` for the given columns, placeholders starting at 1.
    pub(crate) fn assignments(&self, columns: &[&str]) -> String {
        columns
            .iter()
            .zip(self.placeholders(1, columns.len()))
            .map(|(c, p)| format!("{} = {}", self.quote(c), p))
            .join(", ")
    }
}
