//! # TableDB Core
//!
//! In-memory single-table store with per-column hash indexes.
//!
//! This crate provides:
//! - Delimited-text loading into a resident [`Table`]
//! - An [`IndexRegistry`] with at most one [`HashIndex`] per column
//! - Equality selection that uses an index when present and scans otherwise
//! - A thread-safe [`Database`] handle with statistics
//!
//! ## Example
//!
//! ```rust
//! use tabledb_core::{AccessPath, Database};
//! use std::io::Cursor;
//!
//! let db = Database::new();
//! db.load_from_reader("students", Cursor::new("name,grade\nAlice,HD\nBob,D\n"))
//!     .unwrap();
//!
//! let scanned = db.select_rows("students", "grade", "HD");
//! assert_eq!(scanned.access, AccessPath::Scan);
//!
//! db.create_index("grade").unwrap();
//! let indexed = db.select_rows("students", "grade", "HD");
//! assert_eq!(indexed.access, AccessPath::Index);
//! assert_eq!(indexed.rows, scanned.rows);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
pub mod index;
pub mod query;
mod stats;
mod store;
pub mod table;
mod types;

pub use config::{Config, RowValidation};
pub use database::Database;
pub use error::{CoreError, CoreResult};
pub use index::{HashIndex, IndexInfo, IndexRegistry};
pub use query::{AccessPath, IndexOutcome, Selection};
pub use stats::{DatabaseStats, StatsSnapshot};
pub use store::{TableInfo, TableStore};
pub use table::Table;
pub use types::{Row, RowId};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
