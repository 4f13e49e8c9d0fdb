//! Domain entities: the product record, its draft, and categories.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::{FieldValue, Product, ProductDraft};
