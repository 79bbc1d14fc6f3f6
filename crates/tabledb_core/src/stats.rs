//! Database statistics.
//!
//! Counters for loads, selections and index maintenance.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tabledb_core::Database;
//!
//! let db = Database::new();
//! db.load("students", path)?;
//! db.select_rows("students", "grade", "HD");
//!
//! let stats = db.stats();
//! println!("Scans: {}", stats.scans);
//! println!("Index lookups: {}", stats.index_lookups);
//! ```

use crate::query::AccessPath;
use std::sync::atomic::{AtomicU64, Ordering};

/// Database statistics and metrics.
///
/// All counters are atomic and monotonically increasing.
#[derive(Debug, Default)]
pub struct DatabaseStats {
    /// Successful loads.
    loads: AtomicU64,
    /// Loads that failed and left state untouched.
    failed_loads: AtomicU64,
    /// Selections answered by an index.
    index_lookups: AtomicU64,
    /// Selections answered by a full scan.
    scans: AtomicU64,
    /// Selections whose table or column did not resolve.
    misses: AtomicU64,
    /// Rows returned across all selections.
    rows_returned: AtomicU64,
    /// Indexes built.
    indexes_created: AtomicU64,
    /// Indexes dropped.
    indexes_dropped: AtomicU64,
    /// Failed create/drop index commands.
    index_errors: AtomicU64,
}

impl DatabaseStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed_load(&self) {
        self.failed_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a selection by the path that answered it.
    pub(crate) fn record_selection(&self, access: AccessPath, rows: usize) {
        let counter = match access {
            AccessPath::Index => &self.index_lookups,
            AccessPath::Scan => &self.scans,
            AccessPath::None => &self.misses,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.rows_returned.fetch_add(rows as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_index_created(&self) {
        self.indexes_created.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_index_dropped(&self) {
        self.indexes_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_index_error(&self) {
        self.index_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time copy of the counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            loads: self.loads.load(Ordering::Relaxed),
            failed_loads: self.failed_loads.load(Ordering::Relaxed),
            index_lookups: self.index_lookups.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            rows_returned: self.rows_returned.load(Ordering::Relaxed),
            indexes_created: self.indexes_created.load(Ordering::Relaxed),
            indexes_dropped: self.indexes_dropped.load(Ordering::Relaxed),
            index_errors: self.index_errors.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of [`DatabaseStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatsSnapshot {
    /// Successful loads.
    pub loads: u64,
    /// Failed loads.
    pub failed_loads: u64,
    /// Selections answered by an index.
    pub index_lookups: u64,
    /// Selections answered by a full scan.
    pub scans: u64,
    /// Selections whose table or column did not resolve.
    pub misses: u64,
    /// Rows returned across all selections.
    pub rows_returned: u64,
    /// Indexes built.
    pub indexes_created: u64,
    /// Indexes dropped.
    pub indexes_dropped: u64,
    /// Failed create/drop index commands.
    pub index_errors: u64,
}

impl StatsSnapshot {
    /// Total selections, answered or not.
    #[must_use]
    pub fn selections(&self) -> u64 {
        self.index_lookups + self.scans + self.misses
    }
}
