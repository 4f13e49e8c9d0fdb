//! End-to-end catalog flow over the real in-memory adapter.

use vitrine_adapters::{InMemoryCatalog, StaticConfigSource};
use vitrine_core::prelude::*;

fn draft(title: &str) -> ProductDraft {
    ProductDraft::new()
        .title(title)
        .description("A description of sufficient length for the rules")
        .image_url("https://example.com/item.jpg")
        .price("49.99")
        .colors(["#1F8A70"])
}

fn service_over_seeded() -> (CatalogService, usize) {
    let store = InMemoryCatalog::with_builtin().expect("seed data is valid");
    let seeded = store.len().expect("fresh lock");
    (CatalogService::new(Box::new(store)), seeded)
}

#[test]
fn create_edit_remove_lifecycle() {
    let (service, seeded) = service_over_seeded();
    let source = StaticConfigSource::new();
    let category = source.default_category().unwrap();

    // Create: new product lands at the front.
    let (created, note) = service
        .create(draft("Hand-thrown ceramic mug set"), category.clone())
        .unwrap();
    assert_eq!(note.kind, NotificationKind::Created);
    let products = service.products().unwrap();
    assert_eq!(products.len(), seeded + 1);
    assert_eq!(products[0].id(), created.id());

    // Update: same id, same front position, new fields.
    let edited = created.to_draft().price("59.99");
    let (updated, note) = service.update(&created.id(), edited, None).unwrap();
    assert_eq!(note.kind, NotificationKind::Updated);
    assert_eq!(updated.id(), created.id());
    let products = service.products().unwrap();
    assert_eq!(products[0].price, "59.99");
    assert_eq!(products.len(), seeded + 1);

    // Remove: catalog shrinks back to the seeds.
    let note = service.remove(&created.id()).unwrap();
    assert_eq!(note.kind, NotificationKind::Deleted);
    assert_eq!(service.count().unwrap(), seeded);
    assert!(service.product(&created.id()).is_err());
}

#[test]
fn create_into_an_empty_catalog() {
    let service = CatalogService::new(Box::new(InMemoryCatalog::new()));
    let category = Category::new("Shoes", "https://example.com/cat.jpg");

    let candidate = ProductDraft::new()
        .title("A valid ten+ char title")
        .description("A valid description of sufficient length")
        .image_url("https://a.co/x")
        .price("10")
        .colors(["#ff0000"]);
    assert!(validate(&candidate).is_clean());

    let (product, _) = service.create(candidate, category).unwrap();
    let products = service.products().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id(), product.id());
    assert_eq!(products[0].title, "A valid ten+ char title");
    assert_eq!(products[0].colors, vec!["#ff0000"]);
}

#[test]
fn rejected_draft_leaves_the_catalog_untouched() {
    let (service, seeded) = service_over_seeded();
    let source = StaticConfigSource::new();
    let category = source.default_category().unwrap();

    let err = service
        .create(draft("short").price("not a number"), category)
        .unwrap_err();

    let report = err.report().expect("rejection carries the report");
    assert_eq!(
        report.get(Field::Title),
        "Product title must be between  10 and 80 characters"
    );
    assert_eq!(report.get(Field::Price), "Product price is required");
    assert_eq!(service.count().unwrap(), seeded);
}

#[test]
fn updating_a_seed_keeps_its_category() {
    let (service, _) = service_over_seeded();
    let first = service.products().unwrap().remove(0);

    let (updated, _) = service
        .update(&first.id(), first.to_draft().title("Renamed seed product!"), None)
        .unwrap();

    assert_eq!(updated.category, first.category);
    assert_eq!(updated.title, "Renamed seed product!");
}

#[test]
fn palette_and_categories_are_available() {
    let source = StaticConfigSource::new();
    assert!(!source.palette().unwrap().is_empty());
    assert!(!source.categories().unwrap().is_empty());
}
