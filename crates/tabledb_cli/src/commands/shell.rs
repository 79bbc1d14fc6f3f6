//! Interactive shell implementation.

use super::output::{self, Format};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tabledb_core::{Config, Database, IndexOutcome};

const PROMPT: &str = "tabledb> ";

const HELP: &str = "\
Commands:
  load <table> <file>              load a delimited file, replacing the current table
  select <table> <column> <value>  rows where column equals value (rest of line, verbatim)
  create-index <column>            build an index on a column
  drop-index <column>              drop the index on a column
  indexes                          list indexed columns
  info                             describe the current table
  stats                            show query statistics
  format <text|json>               set the output format
  help                             show this message
  quit                             leave the shell";

/// A parsed shell command.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Load { table: String, file: PathBuf },
    Select { table: String, column: String, value: String },
    CreateIndex { column: String },
    DropIndex { column: String },
    Indexes,
    Info,
    Stats,
    Format(Format),
    Help,
    Quit,
}

/// Splits the leading word off `text`, consuming one separator character.
fn next_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    match text.find(char::is_whitespace) {
        Some(end) => {
            let sep = text[end..].chars().next().map_or(0, char::len_utf8);
            Some((&text[..end], &text[end + sep..]))
        }
        None => Some((text, "")),
    }
}

impl Command {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        if let Some(("select", rest)) = next_word(line) {
            return Self::parse_select(rest).map(Some);
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb, args.as_slice()) {
            ("load", [table, file]) => Self::Load {
                table: (*table).to_owned(),
                file: PathBuf::from(file),
            },
            ("create-index", [column]) => Self::CreateIndex {
                column: (*column).to_owned(),
            },
            ("drop-index", [column]) => Self::DropIndex {
                column: (*column).to_owned(),
            },
            ("indexes", []) => Self::Indexes,
            ("info", []) => Self::Info,
            ("stats", []) => Self::Stats,
            ("format", [format]) => Self::Format(Format::parse(format)?),
            ("help", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            ("load" | "create-index" | "drop-index" | "indexes" | "info" | "stats"
            | "format", _) => return Err(format!("wrong arguments for '{verb}'; type 'help'")),
            _ => return Err(format!("unknown command '{verb}'; type 'help'")),
        };
        Ok(Some(command))
    }

    /// The value is everything after the single space that ends the column
    /// word, so repeated and surrounding spaces survive.
    fn parse_select(rest: &str) -> Result<Self, String> {
        let usage = || "wrong arguments for 'select'; type 'help'".to_string();
        let (table, rest) = next_word(rest).ok_or_else(usage)?;
        let (column, value) = next_word(rest).ok_or_else(usage)?;
        if value.is_empty() && !rest.trim_start().contains(char::is_whitespace) {
            return Err(usage());
        }
        Ok(Self::Select {
            table: table.to_owned(),
            column: column.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Runs the shell command.
pub fn run(
    config: Config,
    file: Option<&Path>,
    table: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::with_config(config);

    if let Some(path) = file {
        let name = match table {
            Some(name) => name.to_owned(),
            None => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .ok_or_else(|| format!("cannot derive a table name from {}", path.display()))?,
        };
        db.load(&name, path)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&db).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Command loop over one database.
struct Shell<'a> {
    db: &'a Database,
    format: Format,
}

impl<'a> Shell<'a> {
    fn new(db: &'a Database) -> Self {
        Self {
            db,
            format: Format::Text,
        }
    }

    fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            match Command::parse(&line?) {
                Ok(Some(Command::Quit)) => return Ok(()),
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Ok(None) => {}
                Err(message) => writeln!(out, "{message}")?,
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Load { table, file } => match self.db.load(&table, &file) {
                Ok(info) => writeln!(out, "Loaded {} ({} rows)", info.name, info.row_count),
                Err(err) => writeln!(out, "Error: {err}"),
            },
            Command::Select {
                table,
                column,
                value,
            } => {
                let selection = self.db.select_rows(&table, &column, &value);
                output::write_selection(out, &selection, self.format)
            }
            Command::CreateIndex { column } => {
                let outcome = IndexOutcome::created(&column, self.db.create_index(&column));
                writeln!(out, "{outcome}")
            }
            Command::DropIndex { column } => {
                let outcome = IndexOutcome::dropped(&column, self.db.drop_index(&column));
                writeln!(out, "{outcome}")
            }
            Command::Indexes => {
                let columns = self.db.indexed_columns();
                if columns.is_empty() {
                    writeln!(out, "(no indexes)")
                } else {
                    writeln!(out, "{}", columns.join(", "))
                }
            }
            Command::Info => match (self.db.table_info(), self.format) {
                (None, _) => writeln!(out, "(no table loaded)"),
                (Some(info), Format::Json) => output::write_json(out, &info),
                (Some(info), Format::Text) => output::write_table_info(out, &info),
            },
            Command::Stats => match self.format {
                Format::Json => output::write_json(out, &self.db.stats()),
                Format::Text => output::write_stats(out, &self.db.stats()),
            },
            Command::Format(format) => {
                self.format = format;
                Ok(())
            }
            Command::Help => writeln!(out, "{HELP}"),
            Command::Quit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(db: &Database, script: &str) -> String {
        let mut out = Vec::new();
        Shell::new(db).run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn students_file() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        std::fs::write(&path, "name,id,grade\nAlice,a1,HD\nBob,a2,D\nCarol,a3,HD\n").unwrap();
        (dir, path)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(
            Command::parse("select students name Mary Ann").unwrap(),
            Some(Command::Select {
                table: "students".into(),
                column: "name".into(),
                value: "Mary Ann".into(),
            })
        );
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("indexes").unwrap(), Some(Command::Indexes));
        assert!(Command::parse("select students name").is_err());
        assert!(Command::parse("frobnicate").unwrap_err().contains("unknown command"));
        assert!(Command::parse("format xml").is_err());
    }

    #[test]
    fn select_value_is_verbatim() {
        let value = |line: &str| match Command::parse(line).unwrap() {
            Some(Command::Select { value, .. }) => value,
            other => panic!("unexpected parse: {other:?}"),
        };

        assert_eq!(value("select t name Mary  Ann"), "Mary  Ann");
        assert_eq!(value("select t name  x "), " x ");
        assert_eq!(value("  select  t   name Bob"), "Bob");
        assert_eq!(value("select t name "), "");
    }

    #[test]
    fn select_spaced_value_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "name\nMary  Ann\nMary Ann\n").unwrap();
        let db = Database::new();
        db.load("people", &path).unwrap();

        let text = session(&db, "select people name Mary  Ann\n");
        assert!(text.contains("Mary  Ann"));
        assert!(text.contains("(1 row, scan)"));
    }

    #[test]
    fn index_lifecycle() {
        let (_dir, path) = students_file();
        let db = Database::new();
        let script = format!(
            "load students {}\n\
             select students grade HD\n\
             create-index grade\n\
             create-index grade\n\
             indexes\n\
             select students grade HD\n\
             drop-index grade\n\
             drop-index grade\n\
             quit\n",
            path.display()
        );

        let text = session(&db, &script);
        assert!(text.contains("Loaded students (3 rows)"));
        assert!(text.contains("(2 rows, scan)"));
        assert!(text.contains("Index created on 'grade'."));
        assert!(text.contains("Error: index already exists on 'grade'."));
        assert!(text.contains("(2 rows, index)"));
        assert!(text.contains("Index dropped on 'grade'."));
        assert!(text.contains("Error: no index exists on 'grade'."));
    }

    #[test]
    fn load_failure_reported() {
        let db = Database::new();
        let text = session(&db, "load t /definitely/not/here.csv\ninfo\n");

        assert!(text.contains("Error: source unavailable"));
        assert!(text.contains("(no table loaded)"));
    }

    #[test]
    fn json_info() {
        let (_dir, path) = students_file();
        let db = Database::new();
        db.load("students", &path).unwrap();

        let text = session(&db, "format json\ninfo\n");
        assert!(text.contains("\"row_count\": 3"));
    }

    #[test]
    fn stats_after_queries() {
        let (_dir, path) = students_file();
        let db = Database::new();
        db.load("students", &path).unwrap();

        let text = session(&db, "select students grade D\nselect other grade D\nstats\n");
        assert!(text.contains("via scan:     1"));
        assert!(text.contains("unresolved:   1"));
    }
}
