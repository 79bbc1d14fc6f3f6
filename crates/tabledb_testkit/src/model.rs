//! Brute-force reference model.
//!
//! `TableModel` answers every question about a [`TableSpec`] by direct
//! iteration, with no index. Property tests drive a real
//! [`Database`](tabledb_core::Database) and the model with the same
//! commands and compare the answers.

use crate::generators::TableSpec;
use std::collections::BTreeSet;
use tabledb_core::Row;

/// Expected result of an index command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The command succeeds.
    Ok,
    /// The column is not in the header.
    NoSuchColumn,
    /// The column is already indexed.
    IndexAlreadyExists,
    /// The column has no index.
    NoIndexExists,
}

/// Reference model of one loaded table and its indexed columns.
#[derive(Debug, Clone)]
pub struct TableModel {
    spec: TableSpec,
    indexed: BTreeSet<usize>,
}

impl TableModel {
    /// Creates a model with no indexes.
    pub fn new(spec: TableSpec) -> Self {
        Self {
            spec,
            indexed: BTreeSet::new(),
        }
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.spec.header.iter().position(|c| c == column)
    }

    /// Applies a create-index command.
    pub fn create_index(&mut self, column: &str) -> Expected {
        match self.position(column) {
            None => Expected::NoSuchColumn,
            Some(pos) if !self.indexed.insert(pos) => Expected::IndexAlreadyExists,
            Some(_) => Expected::Ok,
        }
    }

    /// Applies a drop-index command.
    pub fn drop_index(&mut self, column: &str) -> Expected {
        match self.position(column) {
            None => Expected::NoSuchColumn,
            Some(pos) if !self.indexed.remove(&pos) => Expected::NoIndexExists,
            Some(_) => Expected::Ok,
        }
    }

    /// Rows whose `column` equals `value`, in source order.
    pub fn select(&self, column: &str, value: &str) -> Vec<Row> {
        let Some(pos) = self.position(column) else {
            return Vec::new();
        };
        self.spec
            .rows
            .iter()
            .filter(|row| row[pos] == value)
            .cloned()
            .collect()
    }

    /// Returns true if `column` is modelled as indexed.
    pub fn is_indexed(&self, column: &str) -> bool {
        self.position(column)
            .is_some_and(|pos| self.indexed.contains(&pos))
    }

    /// Indexed column names in header order.
    pub fn indexed_columns(&self) -> Vec<String> {
        self.indexed
            .iter()
            .map(|&pos| self.spec.header[pos].clone())
            .collect()
    }
}
