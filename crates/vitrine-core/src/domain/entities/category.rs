//! The `Category` value type.
//!
//! Categories are drawn from a fixed external list (see the `ConfigSource`
//! port) — this core never creates or validates them, it only attaches them
//! to products.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An externally supplied classification label with a display image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl Category {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
