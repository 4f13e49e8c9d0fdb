//! Infrastructure adapters for Vitrine.
//!
//! This crate implements the ports defined in `vitrine_core::application::ports`.
//! Storage is in-memory and reference data is compiled in; there is no
//! persistence layer.

pub mod builtin_config;
pub mod catalog_store;
pub mod config_source;

// Re-export commonly used adapters
pub use catalog_store::InMemoryCatalog;
pub use config_source::StaticConfigSource;
