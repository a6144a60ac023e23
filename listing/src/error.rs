//! Construction errors.
//!
//! Interaction with a live table never fails: out-of-range pages are clamped
//! and sort requests for unknown columns are ignored. Only building a table
//! from an inconsistent column list is an error.

use thiserror::Error;

/// Errors raised while validating a column list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnsError {
    /// The column list is empty.
    #[error("a table needs at least one column")]
    Empty,

    /// Two columns share the same id.
    #[error("duplicate column id '{0}'")]
    Duplicate(String),

    /// A column uses the id reserved for the row-selection column.
    #[error("column id '{0}' is reserved for the selection column")]
    Reserved(String),
}
