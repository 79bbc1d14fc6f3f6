//! Equality lookup dispatch.
//!
//! A selection resolves the table and column, then answers from the
//! column's index when one is built and from a full scan otherwise. Both
//! paths return the same rows in source order.

use crate::error::CoreResult;
use crate::index::IndexRegistry;
use crate::table::Table;
use crate::types::Row;
use std::fmt;

/// How a selection was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessPath {
    /// Answered from the column's hash index.
    Index,
    /// Answered by scanning every row.
    Scan,
    /// Not answered: table or column did not resolve.
    None,
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => f.write_str("index"),
            Self::Scan => f.write_str("scan"),
            Self::None => f.write_str("none"),
        }
    }
}

/// Result of a selection: the table header and the matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    /// Column names of the table, or empty on a table mismatch.
    pub header: Vec<String>,
    /// Matching rows in source order.
    pub rows: Vec<Row>,
    /// Path that produced the rows.
    pub access: AccessPath,
}

impl Selection {
    /// Selection for a table name that is not loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
            access: AccessPath::None,
        }
    }

    /// Returns the number of matching rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Selects the rows of `table` whose `column` equals `value`.
///
/// A missing table or a table under another name gives an empty header and
/// no rows. An unknown column gives the header and no rows. Neither is an
/// error.
#[must_use]
pub fn select_rows(
    table: Option<&Table>,
    indexes: &IndexRegistry,
    table_name: &str,
    column: &str,
    value: &str,
) -> Selection {
    let Some(table) = table.filter(|t| t.name() == table_name) else {
        return Selection::empty();
    };

    let header = table.header().to_vec();
    let Ok(position) = table.column_position(column) else {
        return Selection {
            header,
            rows: Vec::new(),
            access: AccessPath::None,
        };
    };

    match indexes.get(position) {
        Some(index) => Selection {
            header,
            rows: table.materialize(index.lookup(value)),
            access: AccessPath::Index,
        },
        None => Selection {
            header,
            rows: table.materialize(&table.scan(position, value)),
            access: AccessPath::Scan,
        },
    }
}

/// Success flag and message for an index command.
///
/// Front ends that report index commands as `(ok, message)` pairs build one
/// of these from the command's result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexOutcome {
    /// Whether the command succeeded.
    pub ok: bool,
    /// Human-readable confirmation or error.
    pub message: String,
}

impl IndexOutcome {
    /// Outcome of a create-index command.
    pub fn created<T>(column: &str, result: CoreResult<T>) -> Self {
        Self::from_result(result, || format!("Index created on '{column}'."))
    }

    /// Outcome of a drop-index command.
    pub fn dropped<T>(column: &str, result: CoreResult<T>) -> Self {
        Self::from_result(result, || format!("Index dropped on '{column}'."))
    }

    fn from_result<T>(result: CoreResult<T>, success: impl FnOnce() -> String) -> Self {
        match result {
            Ok(_) => Self {
                ok: true,
                message: success(),
            },
            Err(err) => Self {
                ok: false,
                message: format!("Error: {err}."),
            },
        }
    }
}

impl fmt::Display for IndexOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    fn students() -> Table {
        Table::new(
            "students",
            row(&["name", "id", "grade"]),
            vec![
                row(&["Alice", "a1", "HD"]),
                row(&["Bob", "a2", "D"]),
                row(&["Carol", "a3", "HD"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn no_table_loaded() {
        let selection = select_rows(None, &IndexRegistry::default(), "students", "grade", "HD");
        assert_eq!(selection, Selection::empty());
    }

    #[test]
    fn table_mismatch_is_empty() {
        let table = students();
        let registry = IndexRegistry::with_slots(3);

        let selection = select_rows(Some(&table), &registry, "teachers", "grade", "HD");
        assert!(selection.header.is_empty());
        assert!(selection.rows.is_empty());
        assert_eq!(selection.access, AccessPath::None);
    }

    #[test]
    fn unknown_column_keeps_header() {
        let table = students();
        let registry = IndexRegistry::with_slots(3);

        let selection = select_rows(Some(&table), &registry, "students", "age", "20");
        assert_eq!(selection.header, ["name", "id", "grade"]);
        assert!(selection.rows.is_empty());
        assert_eq!(selection.access, AccessPath::None);
    }

    #[test]
    fn scan_path() {
        let table = students();
        let registry = IndexRegistry::with_slots(3);

        let selection = select_rows(Some(&table), &registry, "students", "grade", "HD");
        assert_eq!(selection.access, AccessPath::Scan);
        assert_eq!(
            selection.rows,
            vec![row(&["Alice", "a1", "HD"]), row(&["Carol", "a3", "HD"])]
        );
    }

    #[test]
    fn index_path_matches_scan() {
        let table = students();
        let mut registry = IndexRegistry::with_slots(3);
        let scanned = select_rows(Some(&table), &registry, "students", "grade", "HD");

        registry.create(&table, "grade").unwrap();
        let indexed = select_rows(Some(&table), &registry, "students", "grade", "HD");

        assert_eq!(indexed.access, AccessPath::Index);
        assert_eq!(indexed.header, scanned.header);
        assert_eq!(indexed.rows, scanned.rows);
    }

    #[test]
    fn index_miss_is_empty() {
        let table = students();
        let mut registry = IndexRegistry::with_slots(3);
        registry.create(&table, "grade").unwrap();

        let selection = select_rows(Some(&table), &registry, "students", "grade", "F");
        assert_eq!(selection.access, AccessPath::Index);
        assert_eq!(selection.header.len(), 3);
        assert!(selection.is_empty());
    }

    #[test]
    fn outcome_messages() {
        let ok = IndexOutcome::created("grade", Ok(()));
        assert!(ok.ok);
        assert_eq!(ok.message, "Index created on 'grade'.");

        let dropped = IndexOutcome::dropped("grade", Ok(()));
        assert_eq!(dropped.to_string(), "Index dropped on 'grade'.");

        let failed = IndexOutcome::dropped::<()>("grade", Err(CoreError::no_index_exists("grade")));
        assert!(!failed.ok);
        assert_eq!(failed.message, "Error: no index exists on 'grade'.");
    }
}
