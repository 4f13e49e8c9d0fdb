//! Vitrine Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Vitrine
//! product catalog editor, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          vitrine-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (CatalogService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: CatalogStore, ConfigSource)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vitrine-adapters (Infrastructure)    │
//! │  (InMemoryCatalog, StaticConfigSource)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Product, ProductDraft, ErrorReport)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitrine_core::{
//!     application::CatalogService,
//!     domain::{Category, ProductDraft},
//! };
//!
//! // 1. Build a draft from user input
//! let draft = ProductDraft::new()
//!     .title("Trail running shoes, size 42")
//!     .description("Lightweight trail shoes with a reinforced toe cap.")
//!     .image_url("https://example.com/shoes.jpg")
//!     .price("89.99")
//!     .colors(["#1F8A70"]);
//!
//! // 2. Commit it through the service (with an injected store adapter)
//! let service = CatalogService::new(store);
//! let (product, note) = service.create(draft, Category::new("Shoes", "https://example.com/cat.jpg"))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, Notification, NotificationKind, NotificationStyle,
        ports::{CatalogStore, ConfigSource},
    };
    pub use crate::domain::{
        Category, ErrorReport, FIELDS, Field, FieldSpec, Product, ProductDraft, ProductId, Rule,
        validate,
    };
    pub use crate::error::{VitrineError, VitrineResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
