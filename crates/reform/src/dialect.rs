//! SQL dialects.
//!
//! A dialect is everything the querier needs to know about a database's syntax.  The querier never asks which
//! database it's talking to, only which method the dialect uses for each variation point.

/// How to get the primary key the database generated for an insert.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LastInsertIdMethod {
    /// The driver reports it after executing the statement.
    LastInsertId,
    /// `INSERT ... RETURNING pk`.
    Returning,
    /// `INSERT ... OUTPUT INSERTED.pk VALUES ...`.
    OutputInserted,
}

/// How to limit a select to one row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectLimitMethod {
    /// `... LIMIT 1` after the tail.
    Limit,
    /// `SELECT TOP 1 ...`.
    SelectTop,
}

/// How to insert a row without specifying any columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefaultValuesMethod {
    /// `INSERT INTO t DEFAULT VALUES`.
    DefaultValues,
    /// `INSERT INTO t () VALUES ()`.
    EmptyLists,
}

#[enum_dispatch::enum_dispatch(Dialect)]
pub trait DialectTrait {
    fn name(&self) -> &'static str;

    /// Placeholder for the parameter at 1-based `index`.
    fn placeholder(&self, index: usize) -> String;

    /// `count` placeholders starting at the 1-based `start`.
    fn placeholders(&self, start: usize, count: usize) -> Vec<String> {
        (start..start + count).map(|i| self.placeholder(i)).collect()
    }

    fn quote_identifier(&self, identifier: &str) -> String;

    fn last_insert_id_method(&self) -> LastInsertIdMethod;

    fn select_limit_method(&self) -> SelectLimitMethod;

    fn default_values_method(&self) -> DefaultValuesMethod;
}

/// Quote with double quotes, as the SQL standard says.
fn quote_standard(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

fn quote_brackets(identifier: &str) -> String {
    format!("[{}]", identifier.replace(']', "]]"))
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PostgreSql;

impl DialectTrait for PostgreSql {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        quote_standard(identifier)
    }

    fn last_insert_id_method(&self) -> LastInsertIdMethod {
        LastInsertIdMethod::Returning
    }

    fn select_limit_method(&self) -> SelectLimitMethod {
        SelectLimitMethod::Limit
    }

    fn default_values_method(&self) -> DefaultValuesMethod {
        DefaultValuesMethod::DefaultValues
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MySql;

impl DialectTrait for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        format!("`{}`", identifier.replace('`', "``"))
    }

    fn last_insert_id_method(&self) -> LastInsertIdMethod {
        LastInsertIdMethod::LastInsertId
    }

    fn select_limit_method(&self) -> SelectLimitMethod {
        SelectLimitMethod::Limit
    }

    fn default_values_method(&self) -> DefaultValuesMethod {
        DefaultValuesMethod::EmptyLists
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sqlite3;

impl DialectTrait for Sqlite3 {
    fn name(&self) -> &'static str {
        "sqlite3"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        quote_standard(identifier)
    }

    fn last_insert_id_method(&self) -> LastInsertIdMethod {
        LastInsertIdMethod::LastInsertId
    }

    fn select_limit_method(&self) -> SelectLimitMethod {
        SelectLimitMethod::Limit
    }

    fn default_values_method(&self) -> DefaultValuesMethod {
        DefaultValuesMethod::DefaultValues
    }
}

/// Microsoft SQL Server through drivers using `?` placeholders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Mssql;

impl DialectTrait for Mssql {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        quote_brackets(identifier)
    }

    fn last_insert_id_method(&self) -> LastInsertIdMethod {
        LastInsertIdMethod::OutputInserted
    }

    fn select_limit_method(&self) -> SelectLimitMethod {
        SelectLimitMethod::SelectTop
    }

    fn default_values_method(&self) -> DefaultValuesMethod {
        DefaultValuesMethod::DefaultValues
    }
}

/// Microsoft SQL Server through drivers using named `@PN` parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SqlServer;

impl DialectTrait for SqlServer {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn placeholder(&self, index: usize) -> String {
        format!("@P{}", index)
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        quote_brackets(identifier)
    }

    fn last_insert_id_method(&self) -> LastInsertIdMethod {
        LastInsertIdMethod::OutputInserted
    }

    fn select_limit_method(&self) -> SelectLimitMethod {
        SelectLimitMethod::SelectTop
    }

    fn default_values_method(&self) -> DefaultValuesMethod {
        DefaultValuesMethod::DefaultValues
    }
}

#[enum_dispatch::enum_dispatch]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dialect {
    PostgreSql(PostgreSql),
    MySql(MySql),
    Sqlite3(Sqlite3),
    Mssql(Mssql),
    SqlServer(SqlServer),
}

impl Dialect {
    /// All dialects, mostly for tests.
    pub const ALL: [Dialect; 5] = [
        Dialect::PostgreSql(PostgreSql),
        Dialect::MySql(MySql),
        Dialect::Sqlite3(Sqlite3),
        Dialect::Mssql(Mssql),
        Dialect::SqlServer(SqlServer),
    ];

    /// Pick a dialect by driver name.
    pub fn for_driver(driver: &str) -> Option<Dialect> {
        Some(match driver {
            "postgres" | "pgx" | "postgresql" => PostgreSql.into(),
            "mysql" => MySql.into(),
            "sqlite3" | "sqlite" => Sqlite3.into(),
            "mssql" => Mssql.into(),
            "sqlserver" => SqlServer.into(),
            _ => return None,
        })
    }
}
