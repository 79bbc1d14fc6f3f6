//! Benchmark utilities.

use rand::Rng;
use std::io::Cursor;
use tabledb_core::Database;

/// Table name used by every benchmark.
pub const TABLE: &str = "bench";

/// Generates a delimited source with `rows` rows over the columns
/// `id,group,payload`. `group` takes `cardinality` distinct values.
pub fn generate_source(rows: usize, cardinality: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(rows * 24);
    out.push_str("id,group,payload\n");
    for i in 0..rows {
        let group = rng.gen_range(0..cardinality.max(1));
        let payload: u32 = rng.gen();
        out.push_str(&format!("r{i},g{group},{payload:08x}\n"));
    }
    out
}

/// Loads a generated table into a fresh database.
pub fn loaded_database(rows: usize, cardinality: usize) -> Database {
    let db = Database::new();
    db.load_from_reader(TABLE, Cursor::new(generate_source(rows, cardinality)))
        .expect("generated source should load");
    db
}
