//! Error types for TableDB core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in TableDB core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The load source is missing or unreadable.
    #[error("source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        /// Path that was being loaded.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line of the source is not valid UTF-8.
    #[error("invalid UTF-8 on line {line} of {}", .path.display())]
    InvalidEncoding {
        /// Path that was being loaded.
        path: PathBuf,
        /// One-based line number in the source.
        line: usize,
    },

    /// The source has no header line.
    #[error("source has no header line")]
    MissingHeader,

    /// A column name appears more than once in the header.
    #[error("duplicate column '{column}' in header")]
    DuplicateColumn {
        /// The repeated column name.
        column: String,
    },

    /// A row's field count does not match the header.
    #[error("line {line}: expected {expected} fields, found {actual}")]
    MalformedRow {
        /// One-based line number in the source.
        line: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields on the line.
        actual: usize,
    },

    /// Column is not in the current header.
    #[error("column '{column}' does not exist")]
    NoSuchColumn {
        /// The requested column name.
        column: String,
    },

    /// The column already has an index.
    #[error("index already exists on '{column}'")]
    IndexAlreadyExists {
        /// The indexed column name.
        column: String,
    },

    /// The column has no index to drop.
    #[error("no index exists on '{column}'")]
    NoIndexExists {
        /// The requested column name.
        column: String,
    },
}

impl CoreError {
    /// Creates a source unavailable error.
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Creates a duplicate column error.
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Creates a no such column error.
    pub fn no_such_column(column: impl Into<String>) -> Self {
        Self::NoSuchColumn {
            column: column.into(),
        }
    }

    /// Creates an index already exists error.
    pub fn index_already_exists(column: impl Into<String>) -> Self {
        Self::IndexAlreadyExists {
            column: column.into(),
        }
    }

    /// Creates a no index exists error.
    pub fn no_index_exists(column: impl Into<String>) -> Self {
        Self::NoIndexExists {
            column: column.into(),
        }
    }

    /// Returns true if this error was raised while loading a source.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. }
                | Self::InvalidEncoding { .. }
                | Self::MissingHeader
                | Self::DuplicateColumn { .. }
                | Self::MalformedRow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_column() {
        assert_eq!(
            CoreError::no_such_column("age").to_string(),
            "column 'age' does not exist"
        );
        assert_eq!(
            CoreError::index_already_exists("grade").to_string(),
            "index already exists on 'grade'"
        );
        assert_eq!(
            CoreError::no_index_exists("grade").to_string(),
            "no index exists on 'grade'"
        );
    }

    #[test]
    fn load_errors_are_classified() {
        let err = CoreError::source_unavailable(
            "missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.is_load_error());
        assert!(CoreError::MissingHeader.is_load_error());
        assert!(CoreError::InvalidEncoding {
            path: "t.csv".into(),
            line: 2
        }
        .is_load_error());
        assert!(!CoreError::no_such_column("x").is_load_error());
    }
}
