//! Insert, update and delete.
use itertools::Itertools;
use log::*;
use reform_metadata::RecordDescriptor;

use crate::dialect::{DefaultValuesMethod, DialectTrait, LastInsertIdMethod};
use crate::error::{Error, Result};
use crate::querier::Querier;
use crate::record::{same_view, Record, Struct, View};
use crate::value::Value;

/// Check that a struct produced one value per column.
pub(crate) fn check_column_count(desc: &RecordDescriptor, got: usize) -> Result<()> {
    let expected = desc.get_fields().len();
    if expected != got {
        return Err(Error::ColumnCount { expected, got });
    }
    Ok(())
}

/// Split `columns` into the ones `desc` knows, in declaration order, and complain about the rest.
fn select_columns(desc: &RecordDescriptor, columns: &[&str]) -> Result<Vec<usize>> {
    let unexpected = columns
        .iter()
        .filter(|c| desc.column_index(c).is_none())
        .unique()
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    if !unexpected.is_empty() {
        return Err(Error::UnexpectedColumns(unexpected));
    }

    Ok((0..desc.get_fields().len())
        .filter(|i| columns.contains(&desc.get_fields()[*i].get_column()))
        .collect())
}

/// Rows affected by a statement scoped to one primary key.
fn check_single_row(statement: &str, rows_affected: u64) -> Result<()> {
    match rows_affected {
        0 => Err(Error::NoRows),
        1 => Ok(()),
        n => panic!(
            "reform: {} rows by {} by primary key. Please report this bug.",
            n, statement
        ),
    }
}

impl<'a> Querier<'a> {
    fn run_before_insert<S: Struct + ?Sized>(&self, s: &mut S) -> Result<()> {
        if let Some(h) = s.as_before_insert() {
            h.before_insert().map_err(Error::Hook)?;
        }
        Ok(())
    }

    fn run_before_update<R: Record + ?Sized>(&self, r: &mut R) -> Result<()> {
        if let Some(h) = r.as_before_update() {
            h.before_update().map_err(Error::Hook)?;
        }
        Ok(())
    }

    /// Insert a struct.
    ///
    /// If it is a record whose primary key is zero, the key column is left out and the generated key written back.
    pub fn insert<S: Struct + ?Sized>(&self, s: &mut S) -> Result<()> {
        self.run_before_insert(s)?;

        let desc = s.view().descriptor();
        let values = s.values();
        check_column_count(desc, values.len())?;

        let had_pk = s.as_record().map(|r| r.has_pk());
        let pk = desc.get_primary_key_index();
        let indices = (0..values.len())
            .filter(|i| had_pk != Some(false) || Some(*i) != pk)
            .collect::<Vec<_>>();

        self.insert_indices(s, desc, &indices, values)
    }

    /// Insert only the given columns of a struct.
    ///
    /// Unknown columns are an error.  The primary key column is dropped if the key is zero.
    pub fn insert_columns<S: Struct + ?Sized>(&self, s: &mut S, columns: &[&str]) -> Result<()> {
        let desc = s.view().descriptor();
        let selected = select_columns(desc, columns)?;

        self.run_before_insert(s)?;

        let values = s.values();
        check_column_count(desc, values.len())?;

        let had_pk = s.as_record().map(|r| r.has_pk());
        let pk = desc.get_primary_key_index();
        let indices = selected
            .into_iter()
            .filter(|i| had_pk != Some(false) || Some(*i) != pk)
            .collect::<Vec<_>>();

        self.insert_indices(s, desc, &indices, values)
    }

    fn insert_indices<S: Struct + ?Sized>(
        &self,
        s: &mut S,
        desc: &RecordDescriptor,
        indices: &[usize],
        mut values: Vec<Value>,
    ) -> Result<()> {
        let had_pk = s.as_record().map(|r| r.has_pk());
        let pk_column = if had_pk.is_some() {
            desc.pk_column()
        } else {
            None
        };
        let method = self.get_dialect().last_insert_id_method();

        let columns = indices
            .iter()
            .map(|i| self.quote(desc.get_fields()[*i].get_column()))
            .collect::<Vec<_>>();
        let args = indices
            .iter()
            .map(|i| std::mem::replace(&mut values[*i], Value::Null))
            .collect::<Vec<_>>();

        let mut query = format!("{} INTO {}", self.start_query("INSERT"), self.qualified_view(desc));
        if !columns.is_empty() {
            query.push_str(&format!(" ({})", columns.join(", ")));
        }

        if let (LastInsertIdMethod::OutputInserted, Some(pk)) = (method, pk_column) {
            query.push_str(&format!(" OUTPUT INSERTED.{}", self.quote(pk)));
        }

        if columns.is_empty() {
            match self.get_dialect().default_values_method() {
                DefaultValuesMethod::DefaultValues => query.push_str(" DEFAULT VALUES"),
                DefaultValuesMethod::EmptyLists => query.push_str(" () VALUES ()"),
            }
        } else {
            query.push_str(&format!(
                " VALUES ({})",
                self.placeholders(1, columns.len()).join(", ")
            ));
        }

        if let (LastInsertIdMethod::Returning, Some(pk)) = (method, pk_column) {
            query.push_str(&format!(" RETURNING {}", self.quote(pk)));
        }

        match (method, pk_column) {
            (LastInsertIdMethod::LastInsertId, _) | (_, None) => {
                let res = self.exec(&query, &args)?;
                if had_pk == Some(false) {
                    let id = res.last_insert_id.ok_or(Error::NoLastInsertId)?;
                    if let Some(r) = s.as_record_mut() {
                        r.set_pk(Value::Integer(id))?;
                    }
                }
            }
            (LastInsertIdMethod::Returning | LastInsertIdMethod::OutputInserted, Some(_)) => {
                let row = self.query_row(&query, &args)?.ok_or(Error::NoRows)?;
                let id = match <[Value; 1]>::try_from(row) {
                    Ok([id]) => id,
                    Err(row) => {
                        return Err(Error::ColumnCount {
                            expected: 1,
                            got: row.len(),
                        })
                    }
                };
                if let Some(r) = s.as_record_mut() {
                    r.pk_pointer().scan(id)?;
                }
            }
        }

        Ok(())
    }

    /// Insert several structs of the same view with one statement.
    ///
    /// Generated primary keys are not written back to any of them.
    pub fn insert_multi<S: Struct + ?Sized>(&self, structs: &mut [&mut S]) -> Result<()> {
        let view = match structs.first() {
            Some(s) => s.view(),
            None => return Ok(()),
        };

        for s in structs.iter() {
            if !same_view(view, s.view()) {
                return Err(Error::DifferentTables {
                    first: view.get_name().to_string(),
                    second: s.view().get_name().to_string(),
                });
            }
        }

        // Every hook runs; the first failure is reported.
        let mut hook_error = None;
        for s in structs.iter_mut() {
            if let Err(e) = self.run_before_insert(&mut **s) {
                hook_error.get_or_insert(e);
            }
        }
        if let Some(e) = hook_error {
            return Err(e);
        }

        let had_pk = structs[0].as_record().map(|r| r.has_pk());
        if structs
            .iter()
            .any(|s| s.as_record().map(|r| r.has_pk()) != had_pk)
        {
            return Err(Error::MixedPrimaryKeys);
        }

        let desc = view.descriptor();
        let pk = desc.get_primary_key_index();
        let keep = |i: &usize| had_pk != Some(false) || Some(*i) != pk;

        let columns = desc
            .iter_fields()
            .enumerate()
            .filter(|(i, _)| keep(i))
            .map(|(_, f)| self.quote(f.get_column()))
            .collect::<Vec<_>>();
        if columns.is_empty() {
            return Err(Error::NothingToInsert);
        }

        let mut args = Vec::with_capacity(columns.len() * structs.len());
        for s in structs.iter() {
            let values = s.values();
            check_column_count(desc, values.len())?;
            args.extend(
                values
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| keep(i))
                    .map(|(_, v)| v),
            );
        }

        let placeholders = self.placeholders(1, args.len());
        let rows = placeholders
            .chunks(columns.len())
            .map(|c| format!("({})", c.join(", ")))
            .join(", ");
        let query = format!(
            "{} INTO {} ({}) VALUES {}",
            self.start_query("INSERT"),
            self.qualified_view(desc),
            columns.join(", "),
            rows
        );

        let res = self.exec(&query, &args)?;
        trace!("Inserted {} rows into {}", res.rows_affected, desc.get_name());
        Ok(())
    }

    fn update_indices<R: Record + ?Sized>(&self, r: &mut R, indices: &[usize]) -> Result<()> {
        let table = r.table();
        let desc = table.descriptor();
        let pk = table.pk_column_index();

        let mut values = r.values();
        check_column_count(desc, values.len())?;

        let columns = indices
            .iter()
            .map(|i| desc.get_fields()[*i].get_column())
            .collect::<Vec<_>>();
        let mut args = indices
            .iter()
            .map(|i| std::mem::replace(&mut values[*i], Value::Null))
            .collect::<Vec<_>>();
        args.push(r.pk_value());

        let query = format!(
            "{} {} SET {} WHERE {} = {}",
            self.start_query("UPDATE"),
            self.qualified_view(desc),
            self.assignments(&columns),
            self.quote(desc.get_fields()[pk].get_column()),
            self.get_dialect().placeholder(columns.len() + 1),
        );

        let res = self.exec(&query, &args)?;
        check_single_row("UPDATE", res.rows_affected)
    }

    /// Update all columns of a record, by primary key.
    pub fn update<R: Record + ?Sized>(&self, r: &mut R) -> Result<()> {
        if !r.has_pk() {
            return Err(Error::NoPrimaryKey);
        }

        let table = r.table();
        let pk = table.pk_column_index();
        let indices = (0..table.descriptor().get_fields().len())
            .filter(|i| *i != pk)
            .collect::<Vec<_>>();
        if indices.is_empty() {
            return Err(Error::NothingToUpdate);
        }

        self.run_before_update(r)?;
        self.update_indices(r, &indices)
    }

    /// Update only the given columns of a record, by primary key.
    ///
    /// Unknown columns and the primary key column are errors, as is an empty list.  Nothing is run in those cases.
    pub fn update_columns<R: Record + ?Sized>(&self, r: &mut R, columns: &[&str]) -> Result<()> {
        if !r.has_pk() {
            return Err(Error::NoPrimaryKey);
        }

        let table = r.table();
        let desc = table.descriptor();
        let pk = table.pk_column_index();
        let indices = select_columns(desc, columns)?;
        if indices.contains(&pk) {
            return Err(Error::PrimaryKeyColumn(
                desc.get_fields()[pk].get_column().to_string(),
            ));
        }
        if indices.is_empty() {
            return Err(Error::NothingToUpdate);
        }

        self.run_before_update(r)?;
        self.update_indices(r, &indices)
    }

    /// Update a record if its primary key is set and the row exists, otherwise insert it.
    pub fn save<R: Record + ?Sized>(&self, r: &mut R) -> Result<()> {
        if r.has_pk() {
            match self.update(r) {
                Err(Error::NoRows) => {
                    debug!("No row to update for {}, inserting", r.table().get_name());
                }
                other => return other,
            }
        }

        self.insert(r)
    }

    /// Delete a record by primary key.
    pub fn delete<R: Record + ?Sized>(&self, r: &R) -> Result<()> {
        if !r.has_pk() {
            return Err(Error::NoPrimaryKey);
        }

        let table = r.table();
        let desc = table.descriptor();
        let query = format!(
            "{} FROM {} WHERE {} = {}",
            self.start_query("DELETE"),
            self.qualified_view(desc),
            self.quote(desc.get_fields()[table.pk_column_index()].get_column()),
            self.get_dialect().placeholder(1),
        );

        let res = self.exec(&query, &[r.pk_value()])?;
        check_single_row("DELETE", res.rows_affected)
    }

    /// Delete rows from a view using a raw tail such as a `WHERE` clause, returning how many were deleted.
    ///
    /// Deleting nothing isn't an error.
    pub fn delete_from<V: View + ?Sized>(&self, view: &V, tail: &str, args: &[Value]) -> Result<u64> {
        let mut query = format!(
            "{} FROM {}",
            self.start_query("DELETE"),
            self.qualified_view(view.descriptor())
        );
        if !tail.is_empty() {
            query.push(' ');
            query.push_str(tail);
        }

        Ok(self.exec(&query, args)?.rows_affected)
    }
}
