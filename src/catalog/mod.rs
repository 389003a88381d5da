//! Catalog loading
//!
//! Parses the JSON catalog file supplied at startup into the immutable
//! Library the player runs against.

mod loader;

pub use loader::load_catalog;
