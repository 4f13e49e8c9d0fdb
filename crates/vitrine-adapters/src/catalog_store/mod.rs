//! Catalog store adapters.

pub mod memory;

pub use memory::InMemoryCatalog;
