//! CLI command implementations.

pub mod output;
pub mod query;
pub mod shell;
