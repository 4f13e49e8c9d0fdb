//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! catalog use cases: create, update, and remove products.

pub mod catalog_service;

pub use catalog_service::CatalogService;
