//! Error Taxonomy
//!
//! Every failure in the widget is recoverable at single-operation granularity.

use thiserror::Error;

/// Common result type for core operations
pub type TallyResult<T> = Result<T, TallyError>;

/// A line of imported text did not fit the two-column grouped format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected two fields separated by '{separator}'")]
    MissingSeparator { line: usize, separator: char },

    #[error("line {line}: item has no group (first column is empty and no group was started)")]
    NoCurrentGroup { line: usize },

    #[error("file contains no items")]
    Empty,
}

/// The selected file could not be read as text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not read file: {0}")]
pub struct ReadFailure(pub String);

/// The persisted board could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not restore saved counters: {0}")]
pub struct RestoreError(pub String);

/// The durable key-value store rejected an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

/// Top-level error surfaced to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error(transparent)]
    Read(#[from] ReadFailure),

    #[error("import rejected: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Restore(#[from] RestoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("no group '{0}'")]
    GroupNotFound(String),

    #[error("no item '{record}' in group '{group}'")]
    NotFound { group: String, record: String },

    #[error("an import is already in progress")]
    ImportBusy,
}

impl TallyError {
    /// Warnings are logged and otherwise ignored by the UI
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            TallyError::GroupNotFound(_) | TallyError::NotFound { .. } | TallyError::ImportBusy
        )
    }
}
