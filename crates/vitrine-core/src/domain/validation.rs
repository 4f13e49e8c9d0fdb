//! Centralized draft validation.
//!
//! All field rules live here, not scattered across entities. The single
//! entry point is [`validate`]: given a draft it always returns a complete
//! [`ErrorReport`] with one message slot per field in the descriptor table.
//! An empty string means the field passed. Rules are independent — every
//! field is always checked, nothing short-circuits.
//!
//! # Length policy
//!
//! Text bounds are measured on the *trimmed* value, in Unicode scalar
//! values, for both the lower and upper bound. Leading or trailing
//! whitespace never counts toward the character caps.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::domain::{
    entities::{FieldValue, ProductDraft},
    fields::{FIELDS, Field, FieldSpec, Rule},
};

/// Accepted image URL shape: ftp/http/https scheme, then anything without
/// a space or double quote. Case-sensitive scheme.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("url pattern compiles"));

// ── Error report ──────────────────────────────────────────────────────────────

/// Per-field validation outcome: one message slot per validated field.
///
/// The empty string marks a passing field. The sole pass condition for the
/// whole report is "every slot is empty" — see [`ErrorReport::is_clean`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: String,
    pub colors: String,
}

impl ErrorReport {
    /// The message slot for `field`; empty when the field passed.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::ImageUrl => &self.image_url,
            Field::Price => &self.price,
            Field::Colors => &self.colors,
        }
    }

    fn set(&mut self, field: Field, message: String) {
        match field {
            Field::Title => self.title = message,
            Field::Description => self.description = message,
            Field::ImageUrl => self.image_url = message,
            Field::Price => self.price = message,
            Field::Colors => self.colors = message,
        }
    }

    /// `true` when every field's message is the empty string.
    ///
    /// This is the only pass condition; there is no "partially valid"
    /// state for a draft.
    pub fn is_clean(&self) -> bool {
        FIELDS.iter().all(|s| self.get(s.field).is_empty())
    }

    /// The failing fields, in table order, with their messages.
    pub fn violations(&self) -> impl Iterator<Item = (Field, &str)> {
        FIELDS
            .iter()
            .map(|s| (s.field, self.get(s.field)))
            .filter(|(_, msg)| !msg.is_empty())
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("all fields valid");
        }
        let mut first = true;
        for (_, msg) in self.violations() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(msg)?;
            first = false;
        }
        Ok(())
    }
}

// ── Validator ─────────────────────────────────────────────────────────────────

/// Validate a draft against the field descriptor table.
///
/// Pure and deterministic: no side effects, never panics, and always
/// returns a report covering all five fields regardless of how many fail.
pub fn validate(draft: &ProductDraft) -> ErrorReport {
    let mut report = ErrorReport::default();
    for spec in &FIELDS {
        if violates(spec.rule, draft.value_of(spec.field)) {
            report.set(spec.field, message_for(spec));
        }
    }
    report
}

/// Whether `value` breaks `rule`.
fn violates(rule: Rule, value: FieldValue<'_>) -> bool {
    match (rule, value) {
        (Rule::BoundedText { min, max }, FieldValue::Text(s)) => {
            let trimmed = s.trim();
            let len = trimmed.chars().count();
            trimmed.is_empty() || len < min || len > max
        }
        (Rule::Url, FieldValue::Text(s)) => {
            s.trim().is_empty() || !URL_PATTERN.is_match(s)
        }
        (Rule::Numeric, FieldValue::Text(s)) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed.parse::<f64>().map_or(true, |v| v.is_nan())
        }
        (Rule::NonEmptySet, FieldValue::Set(items)) => items.is_empty(),
        // The const table always pairs text rules with text fields and the
        // set rule with the colors field.
        _ => true,
    }
}

/// The fixed message for a failing field.
///
/// Bounded-text messages carry both bounds; the other rules share the
/// "is required" form. The double space after "between" is intentional —
/// it matches the shipped message text verbatim.
fn message_for(spec: &FieldSpec) -> String {
    match spec.rule {
        Rule::BoundedText { min, max } => format!(
            "Product {} must be between  {} and {} characters",
            spec.field.message_name(),
            min,
            max
        ),
        Rule::Url | Rule::Numeric | Rule::NonEmptySet => {
            format!("Product {} is required", spec.field.message_name())
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// A draft where every field satisfies its rule.
    fn valid_draft() -> ProductDraft {
        ProductDraft::new()
            .title("A valid ten+ char title")
            .description("A valid description of sufficient length")
            .image_url("https://a.co/x")
            .price("10")
            .colors(["#ff0000"])
    }

    // ── whole-report behavior ─────────────────────────────────────────────

    #[test]
    fn fully_valid_draft_yields_clean_report() {
        let report = validate(&valid_draft());
        assert!(report.is_clean());
        for spec in &FIELDS {
            assert_eq!(report.get(spec.field), "");
        }
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let report = validate(&ProductDraft::new());
        assert!(!report.is_clean());
        assert_eq!(report.violations().count(), 5);
    }

    #[test]
    fn rules_do_not_short_circuit() {
        // Two independent failures must both be reported.
        let draft = valid_draft().title("short").price("abc");
        let report = validate(&draft);
        assert!(!report.get(Field::Title).is_empty());
        assert!(!report.get(Field::Price).is_empty());
        assert!(report.get(Field::Description).is_empty());
    }

    // ── title / description bounds ────────────────────────────────────────

    #[test]
    fn title_boundaries_are_inclusive() {
        let at = |n: usize| validate(&valid_draft().title("x".repeat(n)));
        assert!(!at(9).get(Field::Title).is_empty());
        assert!(at(10).get(Field::Title).is_empty());
        assert!(at(80).get(Field::Title).is_empty());
        assert!(!at(81).get(Field::Title).is_empty());
    }

    #[test]
    fn description_boundaries_are_inclusive() {
        let at = |n: usize| validate(&valid_draft().description("x".repeat(n)));
        assert!(!at(9).get(Field::Description).is_empty());
        assert!(at(10).get(Field::Description).is_empty());
        assert!(at(900).get(Field::Description).is_empty());
        assert!(!at(901).get(Field::Description).is_empty());
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_bounds() {
        // 80 meaningful chars padded with whitespace still passes.
        let padded = format!("  {}  ", "x".repeat(80));
        let report = validate(&valid_draft().title(padded));
        assert!(report.get(Field::Title).is_empty());

        // 9 meaningful chars padded up to 10+ total still fails.
        let report = validate(&valid_draft().title("  xxxxxxxxx  "));
        assert!(!report.get(Field::Title).is_empty());
    }

    #[test]
    fn whitespace_only_title_fails() {
        let report = validate(&valid_draft().title("             "));
        assert!(!report.get(Field::Title).is_empty());
    }

    #[test]
    fn bounds_count_unicode_scalars_not_bytes() {
        // Ten umlauts: 10 chars, 20 bytes.
        let report = validate(&valid_draft().title("ü".repeat(10)));
        assert!(report.get(Field::Title).is_empty());
    }

    #[test]
    fn title_message_text_is_fixed() {
        // Too short and too long produce the identical message.
        let short = validate(&valid_draft().title("short"));
        let long = validate(&valid_draft().title("x".repeat(100)));
        assert_eq!(
            short.get(Field::Title),
            "Product title must be between  10 and 80 characters"
        );
        assert_eq!(short.get(Field::Title), long.get(Field::Title));
    }

    #[test]
    fn description_message_carries_its_own_bound() {
        let report = validate(&valid_draft().description("short"));
        assert_eq!(
            report.get(Field::Description),
            "Product description must be between  10 and 900 characters"
        );
    }

    // ── image URL ─────────────────────────────────────────────────────────

    #[test]
    fn accepts_the_three_schemes() {
        for url in [
            "https://example.com/a",
            "http://example.com/a",
            "ftp://files.example.com/a.jpg",
        ] {
            let report = validate(&valid_draft().image_url(url));
            assert!(report.get(Field::ImageUrl).is_empty(), "rejected {url}");
        }
    }

    #[test]
    fn rejects_non_matching_urls() {
        for url in [
            "www.example.com/x",
            "javascript:alert(1)",
            "HTTPS://example.com/a", // scheme is case-sensitive
            "https://exa mple.com/a",
            "https://example.com/\"a\"",
            "https://",
            "",
            "   ",
        ] {
            let report = validate(&valid_draft().image_url(url));
            assert_eq!(
                report.get(Field::ImageUrl),
                "Product image URL is required",
                "accepted {url:?}"
            );
        }
    }

    // ── price ─────────────────────────────────────────────────────────────

    #[test]
    fn accepts_numeric_prices() {
        for price in ["19.99", "-5", "0", "+3.5", " 42 "] {
            let report = validate(&valid_draft().price(price));
            assert!(report.get(Field::Price).is_empty(), "rejected {price:?}");
        }
    }

    #[test]
    fn rejects_non_numeric_prices() {
        for price in ["abc", "", "  ", "12abc", "1,000", "NaN"] {
            let report = validate(&valid_draft().price(price));
            assert_eq!(
                report.get(Field::Price),
                "Product price is required",
                "accepted {price:?}"
            );
        }
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn colors_fail_iff_empty() {
        let empty = validate(&valid_draft().colors(Vec::<String>::new()));
        assert_eq!(empty.get(Field::Colors), "Product colors is required");

        let one = validate(&valid_draft().colors(["#000000"]));
        assert!(one.get(Field::Colors).is_empty());
    }

    // ── report surface ────────────────────────────────────────────────────

    #[test]
    fn violations_follow_table_order() {
        let report = validate(&ProductDraft::new());
        let fields: Vec<Field> = report.violations().map(|(f, _)| f).collect();
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
    fn display_summarizes_failures() {
        let report = validate(&valid_draft().price("abc"));
        assert_eq!(report.to_string(), "Product price is required");
        assert_eq!(validate(&valid_draft()).to_string(), "all fields valid");
    }

    #[test]
    fn report_serializes_with_source_field_names() {
        let json = serde_json::to_value(validate(&ProductDraft::new())).unwrap();
        assert!(json.get("imageURL").is_some());
        assert!(json.get("image_url").is_none());
    }
}
