//! Owned single-table state.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::index::{IndexInfo, IndexRegistry};
use crate::query::{self, Selection};
use crate::table::{self, Table};
use std::io::BufRead;
use std::path::Path;

/// Summary of the loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableInfo {
    /// Table name.
    pub name: String,
    /// Ordered column names.
    pub header: Vec<String>,
    /// Number of rows.
    pub row_count: usize,
    /// Indexed columns, in header order.
    pub indexed_columns: Vec<String>,
}

/// The resident table together with its index registry.
///
/// `TableStore` holds at most one table. Loading replaces the table and
/// resets every index slot to absent; a failed load changes nothing.
/// It is single-threaded; [`Database`](crate::Database) wraps it for
/// shared use.
#[derive(Debug, Default)]
pub struct TableStore {
    config: Config,
    table: Option<Table>,
    indexes: IndexRegistry,
}

impl TableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            table: None,
            indexes: IndexRegistry::default(),
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads `path` as table `name`, replacing any resident table.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` or a parse error; the previous table and
    /// its indexes are kept in that case.
    pub fn load(&mut self, name: &str, path: &Path) -> CoreResult<&Table> {
        let table = table::load_path(name, path, &self.config)?;
        Ok(self.replace(table))
    }

    /// Loads table `name` from `reader`, replacing any resident table.
    ///
    /// # Errors
    ///
    /// Same as [`TableStore::load`].
    pub fn load_from_reader<R: BufRead>(&mut self, name: &str, reader: R) -> CoreResult<&Table> {
        let table = table::load_reader(name, reader, &self.config)?;
        Ok(self.replace(table))
    }

    /// Installs an already-parsed table and resets the index registry.
    pub fn replace(&mut self, table: Table) -> &Table {
        self.indexes = IndexRegistry::with_slots(table.column_count());
        self.table.insert(table)
    }

    /// Returns the resident table.
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Returns the index registry of the resident table.
    #[must_use]
    pub fn indexes(&self) -> &IndexRegistry {
        &self.indexes
    }

    /// Returns the name of the resident table.
    #[must_use]
    pub fn current_table_name(&self) -> Option<&str> {
        self.table.as_ref().map(Table::name)
    }

    /// Resolves a column of the resident table to its position.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchColumn` if no table is loaded or the column is unknown.
    pub fn column_position(&self, column: &str) -> CoreResult<usize> {
        self.resident(column)?.column_position(column)
    }

    /// Builds an index on `column`.
    ///
    /// # Errors
    ///
    /// `NoSuchColumn` or `IndexAlreadyExists`; state is unchanged on error.
    pub fn create_index(&mut self, column: &str) -> CoreResult<IndexInfo> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| CoreError::no_such_column(column))?;
        self.indexes.create(table, column)
    }

    /// Drops the index on `column`.
    ///
    /// # Errors
    ///
    /// `NoSuchColumn` or `NoIndexExists`; state is unchanged on error.
    pub fn drop_index(&mut self, column: &str) -> CoreResult<()> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| CoreError::no_such_column(column))?;
        self.indexes.remove(table, column).map(|_| ())
    }

    /// Describes the index on `column`.
    ///
    /// # Errors
    ///
    /// `NoSuchColumn` or `NoIndexExists`.
    pub fn index_info(&self, column: &str) -> CoreResult<IndexInfo> {
        self.indexes.info(self.resident(column)?, column)
    }

    /// Returns indexed column names in header order.
    #[must_use]
    pub fn indexed_columns(&self) -> Vec<String> {
        self.table
            .as_ref()
            .map(|table| self.indexes.indexed_columns(table.header()))
            .unwrap_or_default()
    }

    /// Selects rows of `table_name` whose `column` equals `value`.
    #[must_use]
    pub fn select_rows(&self, table_name: &str, column: &str, value: &str) -> Selection {
        query::select_rows(self.table.as_ref(), &self.indexes, table_name, column, value)
    }

    /// Summarizes the resident table.
    #[must_use]
    pub fn table_info(&self) -> Option<TableInfo> {
        self.table.as_ref().map(|table| TableInfo {
            name: table.name().to_owned(),
            header: table.header().to_vec(),
            row_count: table.row_count(),
            indexed_columns: self.indexes.indexed_columns(table.header()),
        })
    }

    // With no table there is no header, so every column is unknown.
    fn resident(&self, column: &str) -> CoreResult<&Table> {
        self.table
            .as_ref()
            .ok_or_else(|| CoreError::no_such_column(column))
    }
}
