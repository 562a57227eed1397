use crate::record::BoxError;
use crate::value::ConversionError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No row matched where exactly one was expected.
    #[error("reform: no rows in result set")]
    NoRows,

    /// The record's primary key isn't set.
    #[error("reform: no primary key")]
    NoPrimaryKey,

    /// The view has no primary key.
    #[error("reform: {0} is not a table")]
    NotATable(String),

    #[error("reform: unexpected columns: {}", .0.join(", "))]
    UnexpectedColumns(Vec<String>),

    #[error("reform: primary key column {0} can't be updated")]
    PrimaryKeyColumn(String),

    #[error("reform: nothing to update")]
    NothingToUpdate,

    #[error("reform: nothing to insert")]
    NothingToInsert,

    #[error("reform: different tables in insert_multi: {first} and {second}")]
    DifferentTables { first: String, second: String },

    #[error("reform: primary key is present in some records and absent in others")]
    MixedPrimaryKeys,

    #[error("reform: expected {expected} columns, got {got}")]
    ColumnCount { expected: usize, got: usize },

    #[error("reform: the driver didn't report the last insert id")]
    NoLastInsertId,

    #[error(transparent)]
    Hook(BoxError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Anything the client reported, untouched.
    #[error(transparent)]
    Driver(BoxError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn is_no_rows(&self) -> bool {
        matches!(self, Error::NoRows)
    }

    /// The underlying client error, for downcasting.
    pub fn driver_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Driver(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
