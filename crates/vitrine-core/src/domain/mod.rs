//! Domain layer: entities, value objects, the field rule table, and the
//! draft validator. No I/O, no storage, no observability.

pub mod entities;
pub mod error;
pub mod fields;
pub mod validation;
pub mod value_objects;

pub use entities::{Category, FieldValue, Product, ProductDraft};
pub use error::{DomainError, ErrorCategory};
pub use fields::{FIELDS, Field, FieldSpec, Rule};
pub use validation::{ErrorReport, validate};
pub use value_objects::ProductId;
