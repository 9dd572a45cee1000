use thiserror::Error;

/// Broad classification of reshape failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An expected column is missing, duplicated, or collides with another.
    Schema,
    /// A wide column name does not follow the `<metric>_<CODE>` pattern.
    Format,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReshapeError {
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },

    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },

    #[error("row {row} has {found} values but the table has {expected} columns")]
    RowArity {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot combine tables: table {index} has columns {found:?}, expected {expected:?}")]
    ColumnMismatch {
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("cannot combine an empty sequence of tables")]
    NoTables,

    #[error("cannot rename '{from}' to '{to}': target column already exists")]
    RenameCollision { from: String, to: String },

    #[error("column '{column}' has no segment {index} when split on '{separator}'")]
    Format {
        column: String,
        separator: String,
        index: usize,
    },
}

impl ReshapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { .. } => ErrorKind::Format,
            _ => ErrorKind::Schema,
        }
    }

    pub fn missing(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
