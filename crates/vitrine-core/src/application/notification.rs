//! User-facing outcome notifications.
//!
//! Every mutating catalog operation yields exactly one of these on
//! success. The service decides the message; how it is rendered (colors,
//! icons, plain text) is up to the presentation layer.

use serde::Serialize;

/// Which operation completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Created,
    Updated,
    Deleted,
}

/// Rendering hint for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    /// Neutral confirmation (dark background in the reference palette).
    Dark,
    /// Destructive-action confirmation (crimson background, `#c2344d`).
    Danger,
}

/// A one-shot success message with its rendering hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
    pub icon: &'static str,
    pub style: NotificationStyle,
}

impl Notification {
    pub const fn created() -> Self {
        Self {
            kind: NotificationKind::Created,
            message: "Product has been added successfully!",
            icon: "✅",
            style: NotificationStyle::Dark,
        }
    }

    pub const fn updated() -> Self {
        Self {
            kind: NotificationKind::Updated,
            message: "Product has been updated successfully!",
            icon: "👍",
            style: NotificationStyle::Dark,
        }
    }

    pub const fn deleted() -> Self {
        Self {
            kind: NotificationKind::Deleted,
            message: "Product has been deleted successfully!",
            icon: "🚫",
            style: NotificationStyle::Danger,
        }
    }
}
