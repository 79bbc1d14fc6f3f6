//! # TableDB Testkit
//!
//! Test utilities for TableDB.
//!
//! This crate provides:
//! - Fixtures: the student table and temporary source files
//! - Property-based generators for tables and index command sequences
//! - A reference model that answers selections by brute force
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tabledb_testkit::prelude::*;
//!
//! #[test]
//! fn grade_lookup() {
//!     with_students(|db| {
//!         db.create_index("grade").unwrap();
//!         assert_eq!(db.select_rows(STUDENTS_TABLE, "grade", "HD").len(), 2);
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
