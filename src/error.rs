//! Error types for schema reflection.

use std::fmt;

/// Errors surfaced when descriptor metadata is interrogated or compared
/// against another schema snapshot.
///
/// Descriptor construction itself is infallible by design: generated code
/// is trusted, and invariant violations there (bad identifiers, mismatched
/// key arities) are programming errors that panic at first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A column was requested by name but the table does not declare it.
    UnknownColumn {
        table: String,
        column: String,
    },
    /// Two schema snapshots of the same table disagree. Each entry is one
    /// human-readable difference.
    Drift {
        table: String,
        differences: Vec<String>,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnknownColumn { table, column } => {
                write!(f, "table {table} has no column {column}")
            }
            SchemaError::Drift { table, differences } => {
                write!(f, "schema drift on table {table}: {}", differences.join("; "))
            }
        }
    }
}

impl std::error::Error for SchemaError {}

pub type Result<T> = std::result::Result<T, SchemaError>;
