//! The `Product` aggregate root and its editable draft.
//!
//! A `ProductDraft` is the transient, unvalidated candidate built up by the
//! presentation layer during editing. A `Product` is a committed record: it
//! only ever exists with an identifier, and only enters the catalog after
//! its draft passed validation (enforced by `CatalogService`, not here).
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the application and CLI layers, not the domain.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::category::Category,
    fields::Field,
    value_objects::ProductId,
};

// ── Draft ─────────────────────────────────────────────────────────────────────

/// An unvalidated, uncommitted candidate product record.
///
/// Holds the five editable fields. `price` is deliberately text — the user
/// types it, and the numeric check is a validation rule, not a type
/// constraint. `colors` is the caller-confirmed color token set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: String,
    pub colors: Vec<String>,
}

/// A borrowed view of one draft field, shaped for rule evaluation.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Set(&'a [String]),
}

impl ProductDraft {
    /// An empty draft — every text field blank, no colors selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle a color token: absent → add, present → remove.
    ///
    /// Mirrors how a palette picker behaves; keeps the set free of
    /// duplicates without imposing set semantics on storage order.
    pub fn toggle_color(&mut self, color: &str) {
        if let Some(pos) = self.colors.iter().position(|c| c == color) {
            self.colors.remove(pos);
        } else {
            self.colors.push(color.to_string());
        }
    }

    /// The value of `field`, shaped for the rule table in `fields.rs`.
    pub fn value_of(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Title => FieldValue::Text(&self.title),
            Field::Description => FieldValue::Text(&self.description),
            Field::ImageUrl => FieldValue::Text(&self.image_url),
            Field::Price => FieldValue::Text(&self.price),
            Field::Colors => FieldValue::Set(&self.colors),
        }
    }
}

// ── Product ───────────────────────────────────────────────────────────────────

/// A committed product record.
///
/// The identifier is private and immutable: it is assigned exactly once
/// (by `CatalogService::create`) and survives every subsequent update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: String,
    pub colors: Vec<String>,
    pub category: Category,
}

impl Product {
    /// Finalize a draft into a record.
    ///
    /// Callers are expected to have validated the draft first; this
    /// constructor does not re-check it.
    pub fn from_draft(id: ProductId, draft: ProductDraft, category: Category) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            price: draft.price,
            colors: draft.colors,
            category,
        }
    }

    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Re-open this record as a draft for editing.
    ///
    /// The identifier is not part of the draft; committing the edited draft
    /// through `CatalogService::update` preserves it.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            price: self.price.clone(),
            colors: self.colors.clone(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new()
            .title("A perfectly valid title")
            .description("A description of sufficient length")
            .image_url("https://example.com/p.jpg")
            .price("19.99")
            .colors(["#ff0000", "#00ff00"])
    }

    #[test]
    fn builder_populates_all_fields() {
        let d = draft();
        assert_eq!(d.title, "A perfectly valid title");
        assert_eq!(d.colors.len(), 2);
    }

    #[test]
    fn toggle_color_adds_then_removes() {
        let mut d = ProductDraft::new();
        d.toggle_color("#123456");
        assert_eq!(d.colors, vec!["#123456"]);
        d.toggle_color("#123456");
        assert!(d.colors.is_empty());
    }

    #[test]
    fn from_draft_then_to_draft_round_trips_fields() {
        let d = draft();
        let p = Product::from_draft(
            ProductId::new(),
            d.clone(),
            Category::new("Shoes", "https://example.com/c.jpg"),
        );
        assert_eq!(p.to_draft(), d);
    }

    #[test]
    fn identifier_survives_redraft() {
        let p = Product::from_draft(
            ProductId::new(),
            draft(),
            Category::new("Shoes", "https://example.com/c.jpg"),
        );
        let edited = Product::from_draft(p.id(), p.to_draft().price("5"), p.category.clone());
        assert_eq!(p.id(), edited.id());
        assert_eq!(edited.price, "5");
    }
}
