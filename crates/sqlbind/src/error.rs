//! Error types for sqlbind

use thiserror::Error;

/// Result type alias for builder diagnostics
pub type BuildResult<T> = Result<T, BuildError>;

/// Diagnostics recorded by permissive builder operations.
///
/// Rendering never fails; these kinds are recorded at the offending call
/// and reported through [`StatementBuilder::validate`](crate::StatementBuilder::validate)
/// for callers who want to reject the statement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// A table-requiring statement was rendered before a table was selected
    #[error("no table selected for {0} statement")]
    NoTableSelected(String),

    /// An INSERT or UPDATE received no columns
    #[error("empty column set for {0} statement")]
    EmptyColumnSet(String),

    /// LIMIT received a value below zero
    #[error("negative limit: {0}")]
    NegativeLimit(i64),
}
