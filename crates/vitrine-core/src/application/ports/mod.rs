//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `vitrine-adapters` implement
//! these.
//!
//! - `CatalogStore`: ordered product storage
//! - `ConfigSource`: the fixed category list and color palette

pub mod output;

pub use output::{CatalogStore, ConfigSource};
