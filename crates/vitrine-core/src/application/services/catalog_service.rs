//! The catalog editing use cases.

use tracing::{info, instrument, warn};

use crate::application::error::ApplicationError;
use crate::application::notification::Notification;
use crate::application::ports::CatalogStore;
use crate::domain::{
    Category, DomainError, Product, ProductDraft, ProductId, validate,
};
use crate::error::VitrineResult;

/// Orchestrates catalog mutations.
///
/// Every mutating operation follows the same contract: validate first,
/// touch the store only on a clean report, and return the notification the
/// presentation layer should show. The service is the single gate between
/// drafts and committed records; the store behind the port never sees an
/// invalid product.
pub struct CatalogService {
    store: Box<dyn CatalogStore>,
}

impl CatalogService {
    /// Create a new catalog service over the given store.
    pub fn new(store: Box<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Commit a draft as a brand-new product.
    ///
    /// Validates the draft, mints a fresh identifier, and prepends the
    /// record so it lists newest-first. A rejected draft leaves the store
    /// untouched and returns the full per-field report.
    #[instrument(skip_all, fields(title = %draft.title))]
    pub fn create(
        &self,
        draft: ProductDraft,
        category: Category,
    ) -> VitrineResult<(Product, Notification)> {
        let report = validate(&draft);
        if !report.is_clean() {
            warn!(violations = report.violations().count(), "draft rejected");
            return Err(DomainError::DraftRejected(report).into());
        }

        let product = Product::from_draft(ProductId::new(), draft, category);
        self.store.insert_front(product.clone())?;

        info!(id = %product.id(), "product created");
        Ok((product, Notification::created()))
    }

    /// Commit an edited draft over an existing product.
    ///
    /// The identifier and catalog position are preserved. When `category`
    /// is `None` the product keeps its current category.
    #[instrument(skip_all, fields(id = %id))]
    pub fn update(
        &self,
        id: &ProductId,
        draft: ProductDraft,
        category: Option<Category>,
    ) -> VitrineResult<(Product, Notification)> {
        let report = validate(&draft);
        if !report.is_clean() {
            warn!(violations = report.violations().count(), "draft rejected");
            return Err(DomainError::DraftRejected(report).into());
        }

        let existing = self
            .store
            .get(id)?
            .ok_or(ApplicationError::ProductNotFound { id: *id })?;

        let product = Product::from_draft(*id, draft, category.unwrap_or(existing.category));
        if !self.store.replace(id, product.clone())? {
            // Raced away between get and replace; same outcome either way.
            return Err(ApplicationError::ProductNotFound { id: *id }.into());
        }

        info!(id = %product.id(), "product updated");
        Ok((product, Notification::updated()))
    }

    /// Remove a product by identifier.
    ///
    /// Deletion is unconditional: removing an identifier that is not in
    /// the catalog is a no-op that still reports success.
    #[instrument(skip_all, fields(id = %id))]
    pub fn remove(&self, id: &ProductId) -> VitrineResult<Notification> {
        let removed = self.store.remove(id)?;
        info!(removed, "product removal requested");
        Ok(Notification::deleted())
    }

    /// All products, newest first.
    pub fn products(&self) -> VitrineResult<Vec<Product>> {
        self.store.list()
    }

    /// One product by identifier.
    pub fn product(&self, id: &ProductId) -> VitrineResult<Product> {
        self.store
            .get(id)?
            .ok_or_else(|| ApplicationError::ProductNotFound { id: *id }.into())
    }

    /// Number of products in the catalog.
    pub fn count(&self) -> VitrineResult<usize> {
        self.store.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notification::NotificationKind;
    use crate::application::ports::output::MockCatalogStore;
    use crate::error::VitrineError;
    use mockall::predicate::eq;

    fn valid_draft() -> ProductDraft {
        ProductDraft::new()
            .title("Mechanical keyboard, tenkeyless")
            .description("Hot-swappable switches, PBT keycaps, USB-C")
            .image_url("https://example.com/kb.jpg")
            .price("129.99")
            .colors(["#1e1e1e"])
    }

    fn category() -> Category {
        Category::new("Electronics", "https://example.com/cat.jpg")
    }

    fn service(store: MockCatalogStore) -> CatalogService {
        CatalogService::new(Box::new(store))
    }

    #[test]
    fn create_prepends_and_notifies() {
        let mut store = MockCatalogStore::new();
        store
            .expect_insert_front()
            .times(1)
            .returning(|_| Ok(()));

        let (product, note) = service(store)
            .create(valid_draft(), category())
            .unwrap();
        assert_eq!(product.title, "Mechanical keyboard, tenkeyless");
        assert_eq!(note.kind, NotificationKind::Created);
    }

    #[test]
    fn create_with_invalid_draft_never_touches_the_store() {
        let mut store = MockCatalogStore::new();
        store.expect_insert_front().times(0);

        let err = service(store)
            .create(ProductDraft::new(), category())
            .unwrap_err();
        let report = err.report().expect("carries a report");
        assert_eq!(report.violations().count(), 5);
    }

    #[test]
    fn update_preserves_identifier_and_category() {
        let id = ProductId::new();
        let existing = Product::from_draft(id, valid_draft(), category());

        let mut store = MockCatalogStore::new();
        let stored = existing.clone();
        store
            .expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored.clone())));
        store
            .expect_replace()
            .withf(move |rid, p| *rid == id && p.id() == id)
            .times(1)
            .returning(|_, _| Ok(true));

        let (product, note) = service(store)
            .update(&id, valid_draft().price("99"), None)
            .unwrap();
        assert_eq!(product.id(), id);
        assert_eq!(product.category, existing.category);
        assert_eq!(product.price, "99");
        assert_eq!(note.kind, NotificationKind::Updated);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_replace().times(0);

        let id = ProductId::new();
        let err = service(store).update(&id, valid_draft(), None).unwrap_err();
        assert!(matches!(
            err,
            VitrineError::Application(ApplicationError::ProductNotFound { .. })
        ));
    }

    #[test]
    fn update_with_invalid_draft_never_touches_the_store() {
        let mut store = MockCatalogStore::new();
        store.expect_get().times(0);
        store.expect_replace().times(0);

        let err = service(store)
            .update(&ProductId::new(), ProductDraft::new(), Some(category()))
            .unwrap_err();
        assert!(err.report().is_some());
    }

    #[test]
    fn remove_succeeds_even_when_absent() {
        let mut store = MockCatalogStore::new();
        store.expect_remove().returning(|_| Ok(false));

        let note = service(store).remove(&ProductId::new()).unwrap();
        assert_eq!(note.kind, NotificationKind::Deleted);
    }

    #[test]
    fn product_lookup_maps_missing_to_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_get().returning(|_| Ok(None));

        let err = service(store).product(&ProductId::new()).unwrap_err();
        assert!(matches!(
            err,
            VitrineError::Application(ApplicationError::ProductNotFound { .. })
        ));
    }
}
