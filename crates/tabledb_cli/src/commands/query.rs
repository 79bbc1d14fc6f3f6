//! Query command implementation.

use super::output::{self, Format};
use std::io::{self, Write};
use std::path::Path;
use tabledb_core::{Config, Database, IndexOutcome};

/// Runs the query command.
pub fn run(
    config: Config,
    table: &str,
    file: &Path,
    column: &str,
    value: &str,
    index: bool,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::with_config(config);
    db.load(table, file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&db, &mut out, table, column, value, index, format)
}

fn execute<W: Write>(
    db: &Database,
    out: &mut W,
    table: &str,
    column: &str,
    value: &str,
    index: bool,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    if index {
        let outcome = IndexOutcome::created(column, db.create_index(column));
        if !outcome.ok {
            return Err(outcome.message.into());
        }
        tracing::debug!(column, "{}", outcome);
    }

    let selection = db.select_rows(table, column, value);
    output::write_selection(out, &selection, format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn students() -> Database {
        let db = Database::new();
        db.load_from_reader(
            "students",
            Cursor::new("name,id,grade\nAlice,a1,HD\nBob,a2,D\nCarol,a3,HD\n"),
        )
        .unwrap();
        db
    }

    fn capture(db: &Database, column: &str, index: bool) -> Result<String, String> {
        let mut out = Vec::new();
        execute(db, &mut out, "students", column, "HD", index, Format::Text)
            .map_err(|e| e.to_string())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn scan_query() {
        let text = capture(&students(), "grade", false).unwrap();
        assert!(text.contains("Alice"));
        assert!(text.contains("Carol"));
        assert!(!text.contains("Bob"));
        assert!(text.ends_with("(2 rows, scan)\n"));
    }

    #[test]
    fn indexed_query() {
        let text = capture(&students(), "grade", true).unwrap();
        assert!(text.ends_with("(2 rows, index)\n"));
    }

    #[test]
    fn index_on_unknown_column_fails() {
        let err = capture(&students(), "age", true).unwrap_err();
        assert_eq!(err, "Error: column 'age' does not exist.");
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let db = Database::new();
        db.load("s", &path).unwrap();
        let mut out = Vec::new();
        execute(&db, &mut out, "s", "a", "1", false, Format::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["rows"][0][1], "2");
    }
}
