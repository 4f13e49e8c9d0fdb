//! Comprehensive error handling for the Vitrine CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use vitrine_core::domain::FIELDS;
use vitrine_core::error::VitrineError;

// Re-export so callers only need `use crate::error::*`.
pub use vitrine_core::domain::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at the CLI layer (before the core is reached).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The user named a category that is not on offer.
    #[error("Unknown category '{name}'")]
    UnknownCategory {
        name: String,
        available: Vec<String>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `vitrine-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] VitrineError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::UnknownCategory { name, available } => {
                let mut suggestions = vec![
                    format!("'{}' is not a known category", name),
                    "Available categories:".into(),
                ];
                for cat in available {
                    suggestions.push(format!("  • {cat}"));
                }
                suggestions.push("Run 'vitrine show categories' for the full list".into());
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/vitrine/config.toml".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::UnknownCategory { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Per-field validation lines, when this error wraps a rejected draft.
    ///
    /// Rendered as `<label>: <message>` using the display labels from the
    /// field table, in table order.
    pub fn field_errors(&self) -> Vec<String> {
        let Self::Core(core) = self else {
            return Vec::new();
        };
        let Some(report) = core.report() else {
            return Vec::new();
        };
        FIELDS
            .iter()
            .filter_map(|spec| {
                let msg = report.get(spec.field);
                (!msg.is_empty()).then(|| format!("{}: {}", spec.label, msg))
            })
            .collect()
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        let _ = write!(
            output,
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        );

        // Main error message
        let _ = writeln!(output, "  {}", self.to_string().red());

        // Per-field breakdown for rejected drafts
        let field_errors = self.field_errors();
        if !field_errors.is_empty() {
            output.push('\n');
            for line in &field_errors {
                let _ = writeln!(output, "  {} {}", "•".red(), line);
            }
        }

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(
                    output,
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                );
                source = err.source();
            }
        }

        // Suggestions (skipped for rejected drafts; the field breakdown
        // already says exactly what to fix)
        let suggestions = self.suggestions();
        if field_errors.is_empty() && !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {suggestion}");
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            let _ = write!(
                output,
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {self}");

        let field_errors = self.field_errors();
        for line in &field_errors {
            let _ = writeln!(out, "  {line}");
        }

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if field_errors.is_empty() && !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use vitrine_core::application::ApplicationError;
    use vitrine_core::domain::{DomainError, ProductDraft, ProductId, validate};

    fn rejected() -> CliError {
        CliError::Core(DomainError::DraftRejected(validate(&ProductDraft::new())).into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(rejected().exit_code(), 2);
        assert_eq!(
            CliError::InvalidInput { message: "x".into() }.exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::Core(
            ApplicationError::ProductNotFound {
                id: ProductId::new(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── field errors ──────────────────────────────────────────────────────

    #[test]
    fn rejected_draft_renders_labelled_field_lines() {
        let lines = rejected().field_errors();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Product Title: Product title must be between  10 and 80 characters"
        );
        assert_eq!(lines[4], "Product Colors: Product colors is required");
    }

    #[test]
    fn non_validation_errors_have_no_field_lines() {
        let err = CliError::InvalidInput { message: "x".into() };
        assert!(err.field_errors().is_empty());
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_field_breakdown() {
        let s = rejected().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Product Price: Product price is required"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = rejected().format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn unknown_category_suggestions_list_available() {
        let err = CliError::UnknownCategory {
            name: "hats".into(),
            available: vec!["Cars".into(), "Shoes".into()],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("Shoes")));
    }
}
