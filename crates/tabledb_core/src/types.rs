//! Core type definitions for TableDB.

use std::fmt;

/// A single record: one string field per header column.
pub type Row = Vec<String>;

/// Zero-based position of a row within the loaded table.
///
/// Row IDs are only meaningful for the table they were taken from; a new
/// load invalidates every previously issued ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub usize);

impl RowId {
    /// Creates a new row ID.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the raw position.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_display() {
        assert_eq!(RowId::new(7).to_string(), "row:7");
        assert_eq!(RowId::new(7).as_usize(), 7);
    }

    #[test]
    fn row_id_ordering() {
        assert!(RowId::new(1) < RowId::new(2));
    }
}
