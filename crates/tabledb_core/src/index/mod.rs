//! Secondary column indexes.
//!
//! Indexes are optional access paths. A selection gives the same rows with
//! or without one; an index only turns a full scan into a map lookup.
//! Indexes are:
//! - Created and dropped explicitly, one per column at most
//! - Built with a single pass over the rows at creation time
//! - Discarded wholesale when a new table loads
//!
//! # Index Types
//!
//! - [`HashIndex`]: O(1) equality lookup

mod hash;
mod registry;

pub use hash::HashIndex;
pub use registry::{IndexInfo, IndexRegistry};
