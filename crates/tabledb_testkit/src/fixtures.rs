//! Test fixtures and database helpers.
//!
//! Provides the student table used throughout the tests and helpers for
//! writing sources to temporary files.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tabledb_core::{Config, Database};
use tempfile::TempDir;

/// Name the student fixture is loaded under.
pub const STUDENTS_TABLE: &str = "students";

/// Student fixture source.
pub const STUDENTS_CSV: &str = "name,id,grade\nAlice,a1,HD\nBob,a2,D\nCarol,a3,HD\n";

/// A delimited source written to a temporary directory.
pub struct TempSource {
    /// Path of the written file.
    pub path: PathBuf,
    /// The temporary directory (kept alive to prevent cleanup).
    temp_dir: TempDir,
}

impl TempSource {
    /// Writes `contents` to a fresh temporary file named `file_name`.
    pub fn new(file_name: &str, contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(file_name);
        fs::write(&path, contents).expect("Failed to write source");
        Self {
            path,
            temp_dir,
        }
    }

    /// Returns a path in the same directory that does not exist.
    pub fn missing_sibling(&self) -> PathBuf {
        self.temp_dir.path().join("missing.csv")
    }

    /// Returns the path of the written file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A database with a table already loaded.
pub struct TestDatabase {
    /// The database instance.
    pub db: Database,
    /// Source file, if the table was loaded from disk.
    pub source: Option<TempSource>,
}

impl TestDatabase {
    /// Loads the student fixture from memory.
    pub fn students() -> Self {
        Self::from_source(STUDENTS_TABLE, STUDENTS_CSV, Config::default())
    }

    /// Loads the student fixture from a temporary file.
    pub fn students_file() -> Self {
        let source = TempSource::new("students.csv", STUDENTS_CSV);
        let db = Database::new();
        db.load(STUDENTS_TABLE, source.path())
            .expect("Failed to load student fixture");
        Self {
            db,
            source: Some(source),
        }
    }

    /// Loads `contents` from memory as table `name`.
    pub fn from_source(name: &str, contents: &str, config: Config) -> Self {
        let db = Database::with_config(config);
        db.load_from_reader(name, Cursor::new(contents))
            .expect("Failed to load fixture");
        Self { db, source: None }
    }
}

impl std::ops::Deref for TestDatabase {
    type Target = Database;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

/// Runs a test against a database holding the student fixture.
///
/// # Example
///
/// ```rust,ignore
/// use tabledb_testkit::with_students;
///
/// #[test]
/// fn my_test() {
///     with_students(|db| {
///         db.create_index("grade").unwrap();
///     });
/// }
/// ```
pub fn with_students<F, R>(f: F) -> R
where
    F: FnOnce(&Database) -> R,
{
    let test_db = TestDatabase::students();
    f(&test_db.db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabledb_core::AccessPath;

    #[test]
    fn students_fixture_loaded() {
        let db = TestDatabase::students();
        assert_eq!(db.current_table_name().as_deref(), Some(STUDENTS_TABLE));
        assert_eq!(db.table_info().unwrap().row_count, 3);
    }

    #[test]
    fn students_file_fixture_loaded() {
        let db = TestDatabase::students_file();
        let source = db.source.as_ref().unwrap();
        assert!(source.path().exists());
        assert!(!source.missing_sibling().exists());
        assert_eq!(db.select_rows(STUDENTS_TABLE, "grade", "D").len(), 1);
    }

    #[test]
    fn with_students_runs_closure() {
        let access = with_students(|db| {
            db.create_index("grade").unwrap();
            db.select_rows(STUDENTS_TABLE, "grade", "HD").access
        });
        assert_eq!(access, AccessPath::Index);
    }
}
