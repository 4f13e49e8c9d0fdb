//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vitrine-adapters` crate provides implementations.

use crate::domain::{Category, Product, ProductId};
use crate::error::VitrineResult;

/// Port for ordered product storage.
///
/// Implemented by:
/// - `vitrine_adapters::catalog_store::InMemoryCatalog` (production)
///
/// ## Design Notes
///
/// - The store preserves insertion order: `list` returns products newest
///   first because `insert_front` prepends.
/// - The store never validates. Drafts are checked by `CatalogService`
///   before anything reaches these methods.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogStore: Send + Sync {
    /// All products, newest first.
    fn list(&self) -> VitrineResult<Vec<Product>>;

    /// The product with the given identifier, if present.
    fn get(&self, id: &ProductId) -> VitrineResult<Option<Product>>;

    /// Number of products in the catalog.
    fn len(&self) -> VitrineResult<usize>;

    /// Prepend a product, making it the newest entry.
    fn insert_front(&self, product: Product) -> VitrineResult<()>;

    /// Replace the product with `id` in place, preserving its position.
    ///
    /// Returns `false` when no product has that identifier; the catalog is
    /// left untouched in that case.
    fn replace(&self, id: &ProductId, product: Product) -> VitrineResult<bool>;

    /// Remove the product with `id`.
    ///
    /// Returns `false` when no product has that identifier.
    fn remove(&self, id: &ProductId) -> VitrineResult<bool>;
}

/// Port for the fixed reference data the editor offers the user.
///
/// Implemented by:
/// - `vitrine_adapters::config_source::StaticConfigSource` (built-in lists)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    /// The selectable product categories.
    fn categories(&self) -> VitrineResult<Vec<Category>>;

    /// The selectable color tokens (hex strings).
    fn palette(&self) -> VitrineResult<Vec<String>>;
}
