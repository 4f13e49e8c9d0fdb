//! The field descriptor table for editable product fields.
//!
//! # Design
//!
//! Every field the validator knows about is enumerated here together with
//! its display label and the rule that governs it. The validator and any
//! form-rendering layer iterate [`FIELDS`] instead of reflecting over
//! "whichever field names exist" — adding a field means adding an enum
//! variant and a table row, nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Field ─────────────────────────────────────────────────────────────────────

/// Identifier for one editable, validated product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Description,
    ImageUrl,
    Price,
    Colors,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::ImageUrl => "imageURL",
            Self::Price => "price",
            Self::Colors => "colors",
        }
    }

    /// The field's name as it appears inside validation messages.
    ///
    /// Differs from [`Field::as_str`] only for the image URL ("image URL"
    /// rather than "imageURL").
    pub const fn message_name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::ImageUrl => "image URL",
            Self::Price => "price",
            Self::Colors => "colors",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rule ──────────────────────────────────────────────────────────────────────

/// A validation rule, referenced from the descriptor table.
///
/// Rules are independent of each other; evaluating one never short-circuits
/// another. The actual checks live in `validation.rs` — this type only names
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed length must fall within `[min, max]` (inclusive both ends),
    /// counted in Unicode scalar values.
    BoundedText { min: usize, max: usize },
    /// Must match the `scheme://rest` URL shape with scheme ftp, http or
    /// https.
    Url,
    /// Must parse as a numeric value (integer or decimal, optionally
    /// signed). No range constraint.
    Numeric,
    /// At least one element.
    NonEmptySet,
}

// ── Descriptor table ──────────────────────────────────────────────────────────

/// One row of the descriptor table: field identifier, display label, rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub rule: Rule,
}

/// The full, ordered table of validated fields.
///
/// Order matters for rendering (form inputs and report output follow it);
/// it has no effect on validation semantics.
pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        field: Field::Title,
        label: "Product Title",
        rule: Rule::BoundedText { min: 10, max: 80 },
    },
    FieldSpec {
        field: Field::Description,
        label: "Product Description",
        rule: Rule::BoundedText { min: 10, max: 900 },
    },
    FieldSpec {
        field: Field::ImageUrl,
        label: "Product Image URL",
        rule: Rule::Url,
    },
    FieldSpec {
        field: Field::Price,
        label: "Product Price",
        rule: Rule::Numeric,
    },
    FieldSpec {
        field: Field::Colors,
        label: "Product Colors",
        rule: Rule::NonEmptySet,
    },
];

/// Look up the descriptor row for a field.
pub fn spec(field: Field) -> &'static FieldSpec {
    FIELDS
        .iter()
        .find(|s| s.field == field)
        .expect("every Field variant has a table row")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_field_exactly_once() {
        let fields: Vec<Field> = FIELDS.iter().map(|s| s.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Title,
                Field::Description,
                Field::ImageUrl,
                Field::Price,
                Field::Colors
            ]
        );
    }

    #[test]
    fn title_and_description_bounds() {
        assert_eq!(
            spec(Field::Title).rule,
            Rule::BoundedText { min: 10, max: 80 }
        );
        assert_eq!(
            spec(Field::Description).rule,
            Rule::BoundedText { min: 10, max: 900 }
        );
    }

    #[test]
    fn message_name_spells_out_image_url() {
        assert_eq!(Field::ImageUrl.message_name(), "image URL");
        assert_eq!(Field::ImageUrl.as_str(), "imageURL");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Field::Title.to_string(), "title");
        assert_eq!(Field::Colors.to_string(), "colors");
    }
}
