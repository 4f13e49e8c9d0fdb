//! In-memory product catalog with optional built-in seed data.

use std::sync::{Arc, RwLock};

use tracing::debug;
use vitrine_core::{
    application::{ApplicationError, ports::CatalogStore},
    domain::{DomainError, Product, ProductDraft, ProductId, validate},
    error::VitrineResult,
};

use crate::builtin_config;

/// Thread-safe in-memory product catalog.
///
/// Backed by a `Vec` rather than a map: catalog order is part of the
/// contract (newest first), and the collection is small enough that linear
/// scans are fine.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a catalog with the built-in seed products loaded.
    pub fn with_builtin() -> VitrineResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load the built-in seed products.
    ///
    /// Seeds go through the same validation as user drafts; a broken seed
    /// is a programming error and surfaces as `DraftRejected`.
    pub fn load_builtin(&self) -> VitrineResult<()> {
        let categories = builtin_config::categories();

        // Seeds are listed newest first; prepending reverses, so walk them
        // oldest first to preserve the intended order.
        for (draft, category_name) in builtin_config::seed_products().into_iter().rev() {
            let category = categories
                .iter()
                .find(|c| c.name == category_name)
                .cloned()
                .ok_or_else(|| ApplicationError::Configuration {
                    message: format!("seed product references unknown category: {category_name}"),
                })?;
            self.insert_checked(draft, category)?;
        }

        debug!(count = self.len()?, "built-in catalog loaded");
        Ok(())
    }

    fn insert_checked(
        &self,
        draft: ProductDraft,
        category: vitrine_core::domain::Category,
    ) -> VitrineResult<()> {
        let report = validate(&draft);
        if !report.is_clean() {
            return Err(DomainError::DraftRejected(report).into());
        }
        self.insert_front(Product::from_draft(ProductId::new(), draft, category))
    }

    pub fn is_empty(&self) -> VitrineResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> VitrineResult<std::sync::RwLockReadGuard<'_, Vec<Product>>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLock.into())
    }

    fn write(&self) -> VitrineResult<std::sync::RwLockWriteGuard<'_, Vec<Product>>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLock.into())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list(&self) -> VitrineResult<Vec<Product>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: &ProductId) -> VitrineResult<Option<Product>> {
        Ok(self.read()?.iter().find(|p| p.id() == *id).cloned())
    }

    fn len(&self) -> VitrineResult<usize> {
        Ok(self.read()?.len())
    }

    fn insert_front(&self, product: Product) -> VitrineResult<()> {
        self.write()?.insert(0, product);
        Ok(())
    }

    fn replace(&self, id: &ProductId, product: Product) -> VitrineResult<bool> {
        let mut inner = self.write()?;
        match inner.iter().position(|p| p.id() == *id) {
            Some(pos) => {
                inner[pos] = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: &ProductId) -> VitrineResult<bool> {
        let mut inner = self.write()?;
        match inner.iter().position(|p| p.id() == *id) {
            Some(pos) => {
                inner.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
