//! Shared database handle.

use crate::config::Config;
use crate::error::CoreResult;
use crate::index::IndexInfo;
use crate::query::{AccessPath, Selection};
use crate::stats::{DatabaseStats, StatsSnapshot};
use crate::store::{TableInfo, TableStore};
use crate::table::{self, Table};
use parking_lot::RwLock;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, warn};

/// The main database handle.
///
/// `Database` wraps a [`TableStore`] behind one lock so it can be shared
/// between threads:
/// - `load`, `create_index` and `drop_index` take the write lock
/// - selections and listings take the read lock
///
/// Sources are parsed before the write lock is taken, so a slow or failing
/// load never blocks readers and never touches the resident table.
///
/// # Example
///
/// ```rust,ignore
/// use tabledb_core::Database;
/// use std::path::Path;
///
/// let db = Database::new();
/// db.load("students", Path::new("students.csv"))?;
///
/// db.create_index("grade")?;
/// let selection = db.select_rows("students", "grade", "HD");
/// for row in &selection.rows {
///     println!("{}", row.join(","));
/// }
/// ```
#[derive(Debug, Default)]
pub struct Database {
    /// Resident table and its indexes.
    store: RwLock<TableStore>,
    /// Statistics.
    stats: DatabaseStats,
}

impl Database {
    /// Creates an empty database with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty database with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tabledb_core::{Config, Database, RowValidation};
    ///
    /// let config = Config::default()
    ///     .delimiter('\t')
    ///     .row_validation(RowValidation::Permissive);
    ///
    /// let db = Database::with_config(config);
    /// ```
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            store: RwLock::new(TableStore::new(config)),
            stats: DatabaseStats::new(),
        }
    }

    /// Returns a copy of the configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        self.store.read().config().clone()
    }

    /// Loads the file at `path` as table `name`, replacing the resident table.
    ///
    /// All existing indexes are discarded on success.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the file cannot be read, or
    /// `MissingHeader`, `DuplicateColumn` or `MalformedRow` if it does not
    /// parse. The resident table and indexes are unchanged on error.
    pub fn load(&self, name: &str, path: &Path) -> CoreResult<TableInfo> {
        let parsed = table::load_path(name, path, &self.config());
        self.install(parsed)
    }

    /// Loads table `name` from `reader`, replacing the resident table.
    ///
    /// # Errors
    ///
    /// Same as [`Database::load`].
    pub fn load_from_reader<R: BufRead>(&self, name: &str, reader: R) -> CoreResult<TableInfo> {
        let parsed = table::load_reader(name, reader, &self.config());
        self.install(parsed)
    }

    fn install(&self, parsed: CoreResult<Table>) -> CoreResult<TableInfo> {
        let table = parsed.inspect_err(|err| {
            self.stats.record_failed_load();
            warn!(error = %err, "load failed, keeping resident table");
        })?;

        let info = TableInfo {
            name: table.name().to_owned(),
            header: table.header().to_vec(),
            row_count: table.row_count(),
            indexed_columns: Vec::new(),
        };

        let replaced = {
            let mut store = self.store.write();
            let replaced = store.current_table_name().map(str::to_owned);
            store.replace(table);
            replaced
        };
        self.stats.record_load();
        if let Some(previous) = replaced {
            info!(table = %info.name, previous = %previous, "replaced resident table");
        }
        Ok(info)
    }

    /// Returns the name of the resident table.
    #[must_use]
    pub fn current_table_name(&self) -> Option<String> {
        self.store.read().current_table_name().map(str::to_owned)
    }

    /// Resolves a column of the resident table to its position.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchColumn` if no table is loaded or the column is unknown.
    pub fn column_position(&self, column: &str) -> CoreResult<usize> {
        self.store.read().column_position(column)
    }

    /// Builds an index on `column` with one pass over the rows.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchColumn` or `IndexAlreadyExists`. An existing index is
    /// left intact.
    pub fn create_index(&self, column: &str) -> CoreResult<IndexInfo> {
        let result = self.store.write().create_index(column);
        match &result {
            Ok(info) => {
                self.stats.record_index_created();
                info!(
                    column,
                    distinct = info.distinct_values,
                    rows = info.indexed_rows,
                    "index created"
                );
            }
            Err(_) => self.stats.record_index_error(),
        }
        result
    }

    /// Drops the index on `column`.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchColumn` or `NoIndexExists`.
    pub fn drop_index(&self, column: &str) -> CoreResult<()> {
        let result = self.store.write().drop_index(column);
        match &result {
            Ok(()) => {
                self.stats.record_index_dropped();
                info!(column, "index dropped");
            }
            Err(_) => self.stats.record_index_error(),
        }
        result
    }

    /// Describes the index on `column`.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchColumn` or `NoIndexExists`.
    pub fn index_info(&self, column: &str) -> CoreResult<IndexInfo> {
        self.store.read().index_info(column)
    }

    /// Returns indexed column names in header order.
    #[must_use]
    pub fn indexed_columns(&self) -> Vec<String> {
        self.store.read().indexed_columns()
    }

    /// Selects rows of `table_name` whose `column` equals `value`.
    ///
    /// See [`query::select_rows`](crate::query::select_rows) for the
    /// handling of unknown tables and columns.
    #[must_use]
    pub fn select_rows(&self, table_name: &str, column: &str, value: &str) -> Selection {
        let (selection, scanned, threshold) = {
            let store = self.store.read();
            let selection = store.select_rows(table_name, column, value);
            let scanned = store.table().map_or(0, Table::row_count);
            (selection, scanned, store.config().scan_warning_threshold)
        };

        if selection.access == AccessPath::Scan && scanned > threshold {
            warn!(
                column,
                rows = scanned,
                "full scan on unindexed column; consider create_index"
            );
        }
        self.stats
            .record_selection(selection.access, selection.rows.len());
        selection
    }

    /// Summarizes the resident table.
    #[must_use]
    pub fn table_info(&self) -> Option<TableInfo> {
        self.store.read().table_info()
    }

    /// Returns a snapshot of the statistics.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
