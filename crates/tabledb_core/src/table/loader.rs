//! Delimited-text loader.
//!
//! The first non-empty line is the header; every following line is a row,
//! including empty ones. Fields are split on the configured delimiter with no quoting or
//! escaping, and every field stays a string.

use crate::config::{Config, RowValidation};
use crate::error::{CoreError, CoreResult};
use crate::table::Table;
use crate::types::Row;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Origin reported for sources that did not come from a file.
const READER_ORIGIN: &str = "<reader>";

/// Loads a table from the file at `path`.
///
/// # Errors
///
/// Returns `SourceUnavailable` if the file cannot be opened or read, and the
/// parse errors of [`load_reader`] otherwise.
pub fn load_path(name: &str, path: &Path, config: &Config) -> CoreResult<Table> {
    info!(table = name, path = %path.display(), "loading table");
    let file = File::open(path).map_err(|e| CoreError::source_unavailable(path, e))?;
    parse(name, BufReader::new(file), config, path)
}

/// Loads a table from an in-memory or streamed source.
///
/// # Errors
///
/// - `SourceUnavailable` if reading fails
/// - `InvalidEncoding` if a line is not valid UTF-8
/// - `MissingHeader` if the source has no non-empty line
/// - `DuplicateColumn` if a header name repeats
/// - `MalformedRow` under strict validation when a row's width differs
pub fn load_reader<R: BufRead>(name: &str, reader: R, config: &Config) -> CoreResult<Table> {
    info!(table = name, "loading table from reader");
    parse(name, reader, config, Path::new(READER_ORIGIN))
}

fn parse<R: BufRead>(name: &str, reader: R, config: &Config, origin: &Path) -> CoreResult<Table> {
    let mut header: Option<Row> = None;
    let mut rows: Vec<Row> = Vec::new();

    // `lines()` already strips both `\n` and `\r\n`.
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => CoreError::InvalidEncoding {
                path: origin.to_path_buf(),
                line: index + 1,
            },
            _ => CoreError::source_unavailable(origin, e),
        })?;
        // Blank lines ahead of the header are padding; after it they are rows.
        if header.is_none() && line.is_empty() {
            continue;
        }

        let fields = split(&line, config.delimiter);
        match &header {
            None => header = Some(fields),
            Some(columns) => {
                if config.row_validation == RowValidation::Strict && fields.len() != columns.len() {
                    return Err(CoreError::MalformedRow {
                        line: index + 1,
                        expected: columns.len(),
                        actual: fields.len(),
                    });
                }
                rows.push(fields);
            }
        }
    }

    let header = header.ok_or(CoreError::MissingHeader)?;
    debug!(columns = header.len(), "parsed header");

    let table = Table::new(name, header, rows)?;
    info!(table = name, rows = table.row_count(), "loaded table");
    Ok(table)
}

fn split(line: &str, delimiter: char) -> Row {
    line.split(delimiter).map(str::to_owned).collect()
}
