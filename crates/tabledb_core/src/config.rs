//! Database configuration.

/// How rows whose field count differs from the header are handled on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowValidation {
    /// Reject the whole load on the first ragged row.
    #[default]
    Strict,
    /// Accept ragged rows as-is. Missing fields never match a lookup.
    Permissive,
}

/// Configuration for loading and querying a table.
#[derive(Debug, Clone)]
pub struct Config {
    /// Field delimiter used for the header and every row.
    pub delimiter: char,

    /// Row field-count validation mode.
    pub row_validation: RowValidation,

    /// Emit a warning when an unindexed scan covers more rows than this.
    pub scan_warning_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: ',',
            row_validation: RowValidation::Strict,
            scan_warning_threshold: 10_000,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn delimiter(mut self, value: char) -> Self {
        self.delimiter = value;
        self
    }

    /// Sets the row validation mode.
    #[must_use]
    pub const fn row_validation(mut self, value: RowValidation) -> Self {
        self.row_validation = value;
        self
    }

    /// Sets the scan size above which a warning is logged.
    #[must_use]
    pub const fn scan_warning_threshold(mut self, rows: usize) -> Self {
        self.scan_warning_threshold = rows;
        self
    }
}
