//! The resident table: schema plus row data.
//!
//! A [`Table`] is immutable once built. Loading a new source produces a new
//! `Table` that replaces the old one wholesale; there is no partial mutation.

mod loader;

pub use loader::{load_path, load_reader};

use crate::error::{CoreError, CoreResult};
use crate::types::{Row, RowId};
use std::collections::HashMap;

/// A loaded table.
#[derive(Debug, Clone)]
pub struct Table {
    /// Name the table was loaded under.
    name: String,
    /// Ordered column names.
    header: Vec<String>,
    /// Column name to position, derived from `header`.
    columns: HashMap<String, usize>,
    /// Row data in source order.
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from a header and rows.
    ///
    /// Rows are not checked against the header width here; the loader
    /// applies the configured [`RowValidation`](crate::RowValidation).
    ///
    /// # Errors
    ///
    /// Returns `DuplicateColumn` if a header name is repeated.
    pub fn new(name: impl Into<String>, header: Vec<String>, rows: Vec<Row>) -> CoreResult<Self> {
        let mut columns = HashMap::with_capacity(header.len());
        for (position, column) in header.iter().enumerate() {
            if columns.insert(column.clone(), position).is_some() {
                return Err(CoreError::duplicate_column(column.as_str()));
            }
        }

        Ok(Self {
            name: name.into(),
            header,
            columns,
            rows,
        })
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered column names.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns all rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of header columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Resolves a column name to its zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchColumn` if the column is not in the header.
    pub fn column_position(&self, column: &str) -> CoreResult<usize> {
        self.columns
            .get(column)
            .copied()
            .ok_or_else(|| CoreError::no_such_column(column))
    }

    /// Returns the row at `id`.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id.as_usize())
    }

    /// Iterates the field at `position` of every row that has one.
    ///
    /// Short rows (only possible under permissive validation) are skipped.
    pub fn column_values(&self, position: usize) -> impl Iterator<Item = (RowId, &str)> + '_ {
        self.rows.iter().enumerate().filter_map(move |(i, row)| {
            row.get(position)
                .map(|field| (RowId::new(i), field.as_str()))
        })
    }

    /// Returns the IDs of every row whose field at `position` equals `value`.
    ///
    /// Comparison is exact string equality. Every row is inspected and the
    /// result is in source order.
    #[must_use]
    pub fn scan(&self, position: usize, value: &str) -> Vec<RowId> {
        self.column_values(position)
            .filter(|(_, field)| *field == value)
            .map(|(id, _)| id)
            .collect()
    }

    /// Clones the rows named by `ids`, in the order given.
    #[must_use]
    pub fn materialize(&self, ids: &[RowId]) -> Vec<Row> {
        ids.iter().filter_map(|id| self.row(*id)).cloned().collect()
    }
}
