//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random tables and index command
//! sequences. Field values come from a small alphabet so that columns have
//! repeated values and indexes group several rows per key.

use proptest::prelude::*;
use tabledb_core::Row;

/// A generated table: unique header names and rows of matching width.
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// Column names.
    pub header: Vec<String>,
    /// Rows, each as wide as the header.
    pub rows: Vec<Row>,
}

impl TableSpec {
    /// Renders the table as delimited text.
    pub fn to_source(&self, delimiter: char) -> String {
        let sep = delimiter.to_string();
        let mut out = self.header.join(&sep);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join(&sep));
            out.push('\n');
        }
        out
    }

    /// Distinct values of the column at `position`, in first-seen order.
    pub fn values(&self, position: usize) -> Vec<String> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row[position]) {
                seen.push(row[position].clone());
            }
        }
        seen
    }
}

/// Strategy for generating column names.
pub fn column_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("Invalid regex")
}

/// Strategy for generating field values, including the empty string.
pub fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{0,2}").expect("Invalid regex")
}

/// Strategy for generating a table with up to `max_columns` columns and
/// fewer than `max_rows` rows.
pub fn table_spec_strategy(max_columns: usize, max_rows: usize) -> impl Strategy<Value = TableSpec> {
    prop::collection::btree_set(column_name_strategy(), 1..=max_columns)
        .prop_map(|names| names.into_iter().collect::<Vec<_>>())
        .prop_flat_map(move |header| {
            let width = header.len();
            let rows = prop::collection::vec(
                prop::collection::vec(field_strategy(), width),
                0..max_rows,
            );
            (Just(header), rows)
        })
        .prop_map(|(header, rows)| TableSpec { header, rows })
}

/// An index command or selection against a loaded table.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create an index on a column.
    CreateIndex {
        /// Column name.
        column: String,
    },
    /// Drop the index on a column.
    DropIndex {
        /// Column name.
        column: String,
    },
    /// Select rows where a column equals a value.
    Select {
        /// Column name.
        column: String,
        /// Value to match.
        value: String,
    },
}

/// Strategy for generating one command against `header`.
///
/// Column names outside the header are mixed in to exercise `NoSuchColumn`.
pub fn command_strategy(header: Vec<String>) -> impl Strategy<Value = Command> {
    let column = prop_oneof![
        4 => prop::sample::select(header),
        1 => Just("missing".to_string()),
    ];
    (0..3u8, column, field_strategy()).prop_map(|(kind, column, value)| match kind {
        0 => Command::CreateIndex { column },
        1 => Command::DropIndex { column },
        _ => Command::Select { column, value },
    })
}

/// Strategy for generating a table and a command sequence against it.
pub fn table_and_commands_strategy(
    max_commands: usize,
) -> impl Strategy<Value = (TableSpec, Vec<Command>)> {
    table_spec_strategy(4, 30).prop_flat_map(move |spec| {
        let commands =
            prop::collection::vec(command_strategy(spec.header.clone()), 1..max_commands);
        (Just(spec), commands)
    })
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
