//! Fixed-width table parsing for the runtime's column-aligned CLI output.
//!
//! Column boundaries are wherever the header labels start; data rows are
//! sliced at those same character positions.

pub mod columns;
pub mod parse;

pub use columns::{locate, split};
pub use parse::parse_table;
