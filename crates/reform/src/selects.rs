//! Selects, and mapping rows back onto structs.
use reform_metadata::RecordDescriptor;

use crate::client::Rows;
use crate::commands::check_column_count;
use crate::dialect::{DialectTrait, SelectLimitMethod};
use crate::error::{Error, Result};
use crate::querier::Querier;
use crate::record::{Record, Struct, Table, View};
use crate::value::{FromValue, Value};

/// Scan a row into a struct and run its after-find hook.
fn scan_row<S: Struct + ?Sized>(s: &mut S, row: Vec<Value>) -> Result<()> {
    {
        let mut pointers = s.pointers();
        if pointers.len() != row.len() {
            return Err(Error::ColumnCount {
                expected: pointers.len(),
                got: row.len(),
            });
        }

        for (p, v) in pointers.iter_mut().zip(row.into_iter()) {
            p.scan(v)?;
        }
    }

    if let Some(h) = s.as_after_find() {
        h.after_find().map_err(Error::Hook)?;
    }

    Ok(())
}

impl<'a> Querier<'a> {
    fn select_query(&self, desc: &RecordDescriptor, tail: &str, limit1: bool) -> String {
        let mut query = self.start_query("SELECT");
        if limit1 && self.get_dialect().select_limit_method() == SelectLimitMethod::SelectTop {
            query.push_str(" TOP 1");
        }

        query.push_str(&format!(
            " {} FROM {}",
            self.qualified_columns(desc).join(", "),
            self.qualified_view(desc)
        ));
        if !tail.is_empty() {
            query.push(' ');
            query.push_str(tail);
        }
        query
    }

    /// `WHERE view.column = ph` or `WHERE view.column IS NULL`, and the argument if one is needed.
    fn find_tail(
        &self,
        desc: &RecordDescriptor,
        column: &str,
        arg: Value,
        limit1: bool,
    ) -> (String, Vec<Value>) {
        let qi = format!("{}.{}", self.qualified_view(desc), self.quote(column));
        let (mut tail, args) = if arg.is_null() {
            (format!("WHERE {} IS NULL", qi), vec![])
        } else {
            (
                format!("WHERE {} = {}", qi, self.get_dialect().placeholder(1)),
                vec![arg],
            )
        };

        if limit1 && self.get_dialect().select_limit_method() == SelectLimitMethod::Limit {
            tail.push_str(" LIMIT 1");
        }

        (tail, args)
    }

    /// Select rows from a view with a raw tail.  The rows are left for the caller to read with [Querier::next_row].
    pub fn select_rows<V: View + ?Sized>(
        &self,
        view: &V,
        tail: &str,
        args: &[Value],
    ) -> Result<Box<dyn Rows + 'a>> {
        let query = self.select_query(view.descriptor(), tail, false);
        self.query(&query, args)
    }

    /// Read the next row into `s`.
    ///
    /// Returns [Error::NoRows] once the rows are exhausted.
    pub fn next_row<S: Struct + ?Sized>(&self, s: &mut S, rows: &mut dyn Rows) -> Result<()> {
        match rows.fetch().map_err(Error::Driver)? {
            Some(row) => scan_row(s, row),
            None => Err(Error::NoRows),
        }
    }

    /// Select the first row matching the tail into `s`.
    pub fn select_one_to<S: Struct + ?Sized>(&self, s: &mut S, tail: &str, args: &[Value]) -> Result<()> {
        let query = self.select_query(s.view().descriptor(), tail, true);
        let row = self.query_row(&query, args)?.ok_or(Error::NoRows)?;
        scan_row(s, row)
    }

    /// Select the first row matching the tail into a new struct.
    pub fn select_one_from<V: View + ?Sized>(
        &self,
        view: &V,
        tail: &str,
        args: &[Value],
    ) -> Result<Box<dyn Struct>> {
        let mut s = view.new_struct();
        self.select_one_to(&mut *s, tail, args)?;
        Ok(s)
    }

    /// Select all rows matching the tail.  No rows is an empty vector, not an error.
    pub fn select_all_from<V: View + ?Sized>(
        &self,
        view: &V,
        tail: &str,
        args: &[Value],
    ) -> Result<Vec<Box<dyn Struct>>> {
        let mut rows = self.select_rows(view, tail, args)?;
        let mut ret = vec![];

        loop {
            let mut s = view.new_struct();
            match self.next_row(&mut *s, rows.as_mut()) {
                Ok(()) => ret.push(s),
                Err(Error::NoRows) => break,
                Err(e) => return Err(e),
            }
        }

        Ok(ret)
    }

    /// Like [Querier::select_all_from], for a concrete type.
    pub fn select_all<T: Struct + Default>(&self, tail: &str, args: &[Value]) -> Result<Vec<T>> {
        let view = T::default().view();
        let mut rows = self.select_rows(view, tail, args)?;
        let mut ret = vec![];

        loop {
            let mut s = T::default();
            match self.next_row(&mut s, rows.as_mut()) {
                Ok(()) => ret.push(s),
                Err(Error::NoRows) => break,
                Err(e) => return Err(e),
            }
        }

        Ok(ret)
    }

    /// Find the first row where `column` equals `arg` (or is NULL, for [Value::Null]) into `s`.
    pub fn find_one_to<S: Struct + ?Sized>(
        &self,
        s: &mut S,
        column: &str,
        arg: impl Into<Value>,
    ) -> Result<()> {
        let (tail, args) = self.find_tail(s.view().descriptor(), column, arg.into(), true);
        self.select_one_to(s, &tail, &args)
    }

    pub fn find_one_from<V: View + ?Sized>(
        &self,
        view: &V,
        column: &str,
        arg: impl Into<Value>,
    ) -> Result<Box<dyn Struct>> {
        let (tail, args) = self.find_tail(view.descriptor(), column, arg.into(), true);
        self.select_one_from(view, &tail, &args)
    }

    /// Select rows where `column` equals `arg`, for reading with [Querier::next_row].
    pub fn find_rows<V: View + ?Sized>(
        &self,
        view: &V,
        column: &str,
        arg: impl Into<Value>,
    ) -> Result<Box<dyn Rows + 'a>> {
        let (tail, args) = self.find_tail(view.descriptor(), column, arg.into(), false);
        self.select_rows(view, &tail, &args)
    }

    /// Find all rows where `column` is one of `args`.
    ///
    /// An empty list matches nothing and runs no query.
    pub fn find_all_from<V: View + ?Sized>(
        &self,
        view: &V,
        column: &str,
        args: &[Value],
    ) -> Result<Vec<Box<dyn Struct>>> {
        if args.is_empty() {
            return Ok(vec![]);
        }

        let tail = self.in_tail(view.descriptor(), column, args.len());
        self.select_all_from(view, &tail, args)
    }

    /// Like [Querier::find_all_from], for a concrete type.
    pub fn find_all<T: Struct + Default>(&self, column: &str, args: &[Value]) -> Result<Vec<T>> {
        if args.is_empty() {
            return Ok(vec![]);
        }

        let tail = self.in_tail(T::default().view().descriptor(), column, args.len());
        self.select_all(&tail, args)
    }

    fn in_tail(&self, desc: &RecordDescriptor, column: &str, count: usize) -> String {
        format!(
            "WHERE {}.{} IN ({})",
            self.qualified_view(desc),
            self.quote(column),
            self.placeholders(1, count).join(", ")
        )
    }

    /// Load the row with the given primary key into `r`.
    pub fn find_by_primary_key_to<R: Record + ?Sized>(&self, r: &mut R, pk: impl Into<Value>) -> Result<()> {
        let desc = r.table().descriptor();
        let column = desc
            .pk_column()
            .ok_or_else(|| Error::NotATable(desc.get_name().to_string()))?;
        self.find_one_to(r, column, pk)
    }

    /// Load the row with the given primary key into a new record.
    pub fn find_by_primary_key_from<T: Table + ?Sized>(
        &self,
        table: &T,
        pk: impl Into<Value>,
    ) -> Result<Box<dyn Record>> {
        let mut r = table.new_record();
        self.find_by_primary_key_to(&mut *r, pk)?;
        Ok(r)
    }

    /// Load the record's row again, by its primary key.
    pub fn reload<R: Record + ?Sized>(&self, r: &mut R) -> Result<()> {
        let pk = r.pk_value();
        self.find_by_primary_key_to(r, pk)
    }

    /// Count rows matching a raw tail.
    pub fn count<V: View + ?Sized>(&self, view: &V, tail: &str, args: &[Value]) -> Result<i64> {
        let mut query = format!(
            "{} COUNT(*) FROM {}",
            self.start_query("SELECT"),
            self.qualified_view(view.descriptor())
        );
        if !tail.is_empty() {
            query.push(' ');
            query.push_str(tail);
        }

        let row = self.query_row(&query, args)?.ok_or(Error::NoRows)?;
        let count = row.into_iter().next().ok_or(Error::ColumnCount {
            expected: 1,
            got: 0,
        })?;
        Ok(i64::from_value(count)?)
    }
}
