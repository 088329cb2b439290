//! Level table module
//!
//! Derives the per-level upgrade time of a component from its base time
//! and assembles the ordered table that gets written to disk.

mod table;


pub use table::*;
