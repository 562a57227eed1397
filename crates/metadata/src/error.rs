/// Errors in a record declaration.
///
/// Both the static analyzer and the runtime introspector report these, with the same text for the same declaration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DeclarationError {
    #[error("{record} has anonymous field {field_type} with reform directive, it is not allowed")]
    AnonymousField { record: String, field_type: String },

    #[error("{record} has non-public field {field} with reform directive, it is not allowed")]
    PrivateField { record: String, field: String },

    #[error("{record} has field {field} with invalid reform directive {directive:?}, it is not allowed")]
    InvalidDirective {
        record: String,
        field: String,
        directive: String,
    },

    #[error("{record} has invalid table directive {directive:?}, it is not allowed")]
    InvalidTableDirective { record: String, directive: String },

    #[error("{record} has no table directive")]
    MissingTableDirective { record: String },

    #[error("{record} has no fields with reform directive, it is not allowed")]
    NoMappedFields { record: String },

    #[error("{record} has pointer or optional field {field} with pk label in reform directive, it is not allowed")]
    PointerPrimaryKey { record: String, field: String },

    #[error("{record} has collection field {field} with pk label in reform directive, it is not allowed")]
    CollectionPrimaryKey { record: String, field: String },

    #[error("{record} has field {field} with reform directive with duplicate column name {column} (used by {first}), it is not allowed")]
    DuplicateColumn {
        record: String,
        field: String,
        column: String,
        first: String,
    },

    #[error("{record} has field {field} with duplicate pk label in reform directive (first used by {first}), it is not allowed")]
    DuplicatePrimaryKey {
        record: String,
        field: String,
        first: String,
    },
}

/// What kind of declaration error this is, without the names.
///
/// Useful to compare errors from different sources.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationErrorKind {
    AnonymousField,
    PrivateField,
    InvalidDirective,
    InvalidTableDirective,
    MissingTableDirective,
    NoMappedFields,
    PointerPrimaryKey,
    CollectionPrimaryKey,
    DuplicateColumn,
    DuplicatePrimaryKey,
}

impl DeclarationError {
    pub fn kind(&self) -> DeclarationErrorKind {
        use DeclarationErrorKind as K;

        match self {
            Self::AnonymousField { .. } => K::AnonymousField,
            Self::PrivateField { .. } => K::PrivateField,
            Self::InvalidDirective { .. } => K::InvalidDirective,
            Self::InvalidTableDirective { .. } => K::InvalidTableDirective,
            Self::MissingTableDirective { .. } => K::MissingTableDirective,
            Self::NoMappedFields { .. } => K::NoMappedFields,
            Self::PointerPrimaryKey { .. } => K::PointerPrimaryKey,
            Self::CollectionPrimaryKey { .. } => K::CollectionPrimaryKey,
            Self::DuplicateColumn { .. } => K::DuplicateColumn,
            Self::DuplicatePrimaryKey { .. } => K::DuplicatePrimaryKey,
        }
    }
}

/// The embedded metadata of a record doesn't match its declaration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UpToDateError {
    #[error("{record} can't be introspected: {source}")]
    Declaration {
        record: String,
        #[source]
        source: DeclarationError,
    },

    #[error("{record} struct information is not up-to-date")]
    Mismatch { record: String },
}
