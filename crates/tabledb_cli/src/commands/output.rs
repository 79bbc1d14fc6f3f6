//! Rendering of selections and summaries.

use serde::Serialize;
use std::io::{self, Write};
use tabledb_core::{Selection, StatsSnapshot, TableInfo};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Aligned plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl Format {
    /// Parses a `--format` value.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected text or json)")),
        }
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Writes a selection in `format`.
pub fn write_selection<W: Write>(
    out: &mut W,
    selection: &Selection,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Json => write_json(out, selection),
        Format::Text => {
            if selection.header.is_empty() {
                return writeln!(out, "(no such table)");
            }

            let widths = column_widths(selection);
            write_row(out, &selection.header, &widths)?;
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            write_row(out, &rule, &widths)?;
            for row in &selection.rows {
                write_row(out, row, &widths)?;
            }
            writeln!(
                out,
                "({} row{}, {})",
                selection.len(),
                if selection.len() == 1 { "" } else { "s" },
                selection.access
            )
        }
    }
}

/// Writes a table summary.
pub fn write_table_info<W: Write>(out: &mut W, info: &TableInfo) -> io::Result<()> {
    writeln!(out, "Table:   {}", info.name)?;
    writeln!(out, "Columns: {}", info.header.join(", "))?;
    writeln!(out, "Rows:    {}", info.row_count)?;
    if info.indexed_columns.is_empty() {
        writeln!(out, "Indexes: (none)")
    } else {
        writeln!(out, "Indexes: {}", info.indexed_columns.join(", "))
    }
}

/// Writes the statistics counters.
pub fn write_stats<W: Write>(out: &mut W, stats: &StatsSnapshot) -> io::Result<()> {
    writeln!(out, "Loads:          {} ({} failed)", stats.loads, stats.failed_loads)?;
    writeln!(out, "Selections:     {}", stats.selections())?;
    writeln!(out, "  via index:    {}", stats.index_lookups)?;
    writeln!(out, "  via scan:     {}", stats.scans)?;
    writeln!(out, "  unresolved:   {}", stats.misses)?;
    writeln!(out, "Rows returned:  {}", stats.rows_returned)?;
    writeln!(
        out,
        "Indexes:        {} created, {} dropped, {} rejected",
        stats.indexes_created, stats.indexes_dropped, stats.index_errors
    )
}

fn column_widths(selection: &Selection) -> Vec<usize> {
    let mut widths: Vec<usize> = selection.header.iter().map(String::len).collect();
    for row in &selection.rows {
        for (i, field) in row.iter().enumerate() {
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(field.len()),
                None => widths.push(field.len()),
            }
        }
    }
    widths
}

fn write_row<W: Write>(out: &mut W, fields: &[String], widths: &[usize]) -> io::Result<()> {
    let cells: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let width = widths.get(i).copied().unwrap_or(0);
            format!("{field:<width$}")
        })
        .collect();
    writeln!(out, "{}", cells.join(" | ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabledb_core::AccessPath;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    fn selection() -> Selection {
        Selection {
            header: strings(&["name", "grade"]),
            rows: vec![strings(&["Alice", "HD"]), strings(&["Carol", "HD"])],
            access: AccessPath::Index,
        }
    }

    fn render(selection: &Selection, format: Format) -> String {
        let mut out = Vec::new();
        write_selection(&mut out, selection, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_format() {
        assert_eq!(Format::parse("text").unwrap(), Format::Text);
        assert_eq!(Format::parse("json").unwrap(), Format::Json);
        assert!(Format::parse("xml").is_err());
    }

    #[test]
    fn text_table_is_aligned() {
        let text = render(&selection(), Format::Text);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "name  | grade");
        assert_eq!(lines[1], "----- | -----");
        assert_eq!(lines[2], "Alice | HD");
        assert_eq!(lines[4], "(2 rows, index)");
    }

    #[test]
    fn missing_table_text() {
        assert_eq!(render(&Selection::empty(), Format::Text), "(no such table)\n");
    }

    #[test]
    fn json_includes_access_path() {
        let json = render(&selection(), Format::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["access"], "index");
        assert_eq!(value["rows"][1][0], "Carol");
    }
}
