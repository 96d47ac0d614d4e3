//! The fixed table of external dependencies to scan.
//!
//! The registry is pure static configuration: an ordered list of
//! (repository, label) pairs, baked in at compile time. There is no runtime
//! registration; changing the set of tracked dependencies means editing
//! [`table::ENTRIES`] and rebuilding.

pub mod table;

pub use table::{entries, DependencyEntry};
