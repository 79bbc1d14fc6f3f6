//! Per-table index registry.

use crate::error::{CoreError, CoreResult};
use crate::index::HashIndex;
use crate::table::Table;
use tracing::debug;

/// Summary of a built column index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexInfo {
    /// Indexed column name.
    pub column: String,
    /// Indexed column position.
    pub position: usize,
    /// Number of distinct values in the column.
    pub distinct_values: usize,
    /// Number of rows entered into the index.
    pub indexed_rows: usize,
}

impl IndexInfo {
    fn describe(column: &str, index: &HashIndex) -> Self {
        Self {
            column: column.to_owned(),
            position: index.position(),
            distinct_values: index.distinct_values(),
            indexed_rows: index.len(),
        }
    }
}

/// One index slot per header column, each either populated or absent.
///
/// The registry is sized to the header of the table it was created for and
/// must be replaced whenever a new table loads.
#[derive(Debug, Clone, Default)]
pub struct IndexRegistry {
    slots: Vec<Option<HashIndex>>,
}

impl IndexRegistry {
    /// Creates a registry with `columns` absent slots.
    #[must_use]
    pub fn with_slots(columns: usize) -> Self {
        Self {
            slots: vec![None; columns],
        }
    }

    /// Returns the index at `position`, if one is built.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&HashIndex> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    /// Returns the number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if no slot is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Builds and stores an index on `column`.
    ///
    /// # Errors
    ///
    /// - `NoSuchColumn` if `column` is not in the table header
    /// - `IndexAlreadyExists` if the slot is already populated
    pub fn create(&mut self, table: &Table, column: &str) -> CoreResult<IndexInfo> {
        let position = table.column_position(column)?;
        let slot = self.slot_mut(position, column)?;
        if slot.is_some() {
            return Err(CoreError::index_already_exists(column));
        }

        let index = HashIndex::build(table, position);
        debug!(
            column,
            position,
            distinct = index.distinct_values(),
            "built column index"
        );
        let info = IndexInfo::describe(column, &index);
        *slot = Some(index);
        Ok(info)
    }

    /// Clears the slot for `column`, returning the dropped index.
    ///
    /// # Errors
    ///
    /// - `NoSuchColumn` if `column` is not in the table header
    /// - `NoIndexExists` if the slot is already empty
    pub fn remove(&mut self, table: &Table, column: &str) -> CoreResult<HashIndex> {
        let position = table.column_position(column)?;
        self.slot_mut(position, column)?
            .take()
            .ok_or_else(|| CoreError::no_index_exists(column))
    }

    /// Describes the index on `column`.
    ///
    /// # Errors
    ///
    /// - `NoSuchColumn` if `column` is not in the table header
    /// - `NoIndexExists` if the slot is empty
    pub fn info(&self, table: &Table, column: &str) -> CoreResult<IndexInfo> {
        let position = table.column_position(column)?;
        self.get(position)
            .map(|index| IndexInfo::describe(column, index))
            .ok_or_else(|| CoreError::no_index_exists(column))
    }

    /// Returns the names of indexed columns, in header order.
    #[must_use]
    pub fn indexed_columns(&self, header: &[String]) -> Vec<String> {
        self.slots
            .iter()
            .zip(header)
            .filter(|(slot, _)| slot.is_some())
            .map(|(_, column)| column.clone())
            .collect()
    }

    // The registry is sized from the same header the position came from, so
    // a miss here means the registry belongs to a different table.
    fn slot_mut(&mut self, position: usize, column: &str) -> CoreResult<&mut Option<HashIndex>> {
        self.slots
            .get_mut(position)
            .ok_or_else(|| CoreError::no_such_column(column))
    }
}
