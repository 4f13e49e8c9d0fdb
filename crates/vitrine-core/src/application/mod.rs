//! Application layer: use-case orchestration over the domain.
//!
//! The catalog service sits here, along with the ports it drives and the
//! notifications it hands back to the presentation layer.

pub mod error;
pub mod notification;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use notification::{Notification, NotificationKind, NotificationStyle};
pub use services::CatalogService;
