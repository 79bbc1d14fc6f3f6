//! Hash index implementation.

use crate::table::Table;
use crate::types::RowId;
use std::collections::HashMap;

/// Hash-based inverted index over one column.
///
/// `HashIndex` maps each distinct field value to the positions of the rows
/// holding it. It answers exact-match queries only; there is no ordering
/// and no range capability.
///
/// Row IDs within a key are kept in insertion order. [`HashIndex::build`]
/// inserts in table order, so lookups return rows in source order.
///
/// # Example
///
/// ```rust,ignore
/// let index = HashIndex::build(&table, position);
///
/// for id in index.lookup("HD") {
///     println!("{:?}", table.row(*id));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HashIndex {
    /// Column position this index covers.
    position: usize,
    /// Field value to row IDs mapping.
    entries: HashMap<String, Vec<RowId>>,
    /// Total indexed row count.
    count: usize,
}

impl HashIndex {
    /// Creates an empty index for the column at `position`.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self {
            position,
            entries: HashMap::new(),
            count: 0,
        }
    }

    /// Builds an index over `position` with one pass over `table`.
    #[must_use]
    pub fn build(table: &Table, position: usize) -> Self {
        let mut index = Self::new(position);
        index.rebuild(
            table
                .column_values(position)
                .map(|(id, value)| (value.to_owned(), id)),
        );
        index
    }

    /// Rebuilds the index from a set of value-row pairs.
    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, RowId)>,
    {
        self.clear();
        for (key, row_id) in entries {
            self.insert(key, row_id);
        }
    }

    /// Adds a value-row mapping.
    ///
    /// Callers insert rows in ascending order to keep lookups in source order.
    pub fn insert(&mut self, key: String, row_id: RowId) {
        self.entries.entry(key).or_default().push(row_id);
        self.count += 1;
    }

    /// Returns the rows holding `key`; empty if the value is absent.
    #[must_use]
    pub fn lookup(&self, key: &str) -> &[RowId] {
        match self.entries.get(key) {
            Some(ids) => ids,
            None => &[],
        }
    }

    /// Checks if any row holds `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the column position this index covers.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of indexed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no rows are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn distinct_values(&self) -> usize {
        self.entries.len()
    }

    /// Clears the index.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Row;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    fn grades() -> Table {
        Table::new(
            "students",
            row(&["name", "grade"]),
            vec![
                row(&["Alice", "HD"]),
                row(&["Bob", "D"]),
                row(&["Carol", "HD"]),
                row(&["Dan", "P"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn build_groups_rows_by_value() {
        let index = HashIndex::build(&grades(), 1);

        assert_eq!(index.lookup("HD"), [RowId::new(0), RowId::new(2)]);
        assert_eq!(index.lookup("D"), [RowId::new(1)]);
        assert_eq!(index.len(), 4);
        assert_eq!(index.distinct_values(), 3);
        assert_eq!(index.position(), 1);
    }

    #[test]
    fn lookup_missing() {
        let index = HashIndex::build(&grades(), 1);

        assert!(index.lookup("F").is_empty());
        assert!(!index.contains("F"));
    }

    #[test]
    fn lookup_matches_scan() {
        let table = grades();
        let index = HashIndex::build(&table, 1);

        for value in ["HD", "D", "P", "F"] {
            assert_eq!(index.lookup(value), table.scan(1, value).as_slice());
        }
    }

    #[test]
    fn empty_table() {
        let table = Table::new("t", row(&["a"]), Vec::new()).unwrap();
        let index = HashIndex::build(&table, 0);

        assert!(index.is_empty());
        assert_eq!(index.distinct_values(), 0);
    }

    #[test]
    fn short_rows_not_indexed() {
        let table = Table::new(
            "ragged",
            row(&["a", "b"]),
            vec![row(&["1", "x"]), row(&["2"])],
        )
        .unwrap();
        let index = HashIndex::build(&table, 1);

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("x"), [RowId::new(0)]);
    }

    #[test]
    fn rebuild_index() {
        let mut index = HashIndex::new(0);
        index.insert("old".to_string(), RowId::new(0));
        assert_eq!(index.len(), 1);

        index.rebuild(vec![
            ("a".to_string(), RowId::new(0)),
            ("b".to_string(), RowId::new(1)),
            ("a".to_string(), RowId::new(2)),
        ]);

        assert_eq!(index.len(), 3);
        assert!(!index.contains("old"));
        assert_eq!(index.lookup("a"), [RowId::new(0), RowId::new(2)]);
    }
}
