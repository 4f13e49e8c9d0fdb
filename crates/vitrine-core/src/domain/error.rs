//! Domain-layer errors.

use thiserror::Error;

use crate::domain::validation::ErrorReport;

/// Errors raised by domain rules, before any storage is involved.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The draft failed validation; the report carries one message per
    /// failing field.
    #[error("draft rejected: {0}")]
    DraftRejected(ErrorReport),

    #[error("invalid product identifier: {value}")]
    InvalidIdentifier { value: String },
}

impl DomainError {
    /// Actionable hints for the operator facing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DraftRejected(report) => report
                .violations()
                .map(|(_, msg)| msg.to_string())
                .collect(),
            Self::InvalidIdentifier { .. } => vec![
                "Product identifiers are UUIDs, e.g. 67e55044-10b1-426f-9247-bb680e5fe0c8"
                    .to_string(),
                "Run 'vitrine list' to see the identifiers in the catalog".to_string(),
            ],
        }
    }

    /// Coarse classification used for exit codes and log levels.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DraftRejected(_) | Self::InvalidIdentifier { .. } => ErrorCategory::Validation,
        }
    }

    /// The validation report, when this error carries one.
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            Self::DraftRejected(report) => Some(report),
            _ => None,
        }
    }
}

/// Error classification shared across layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input from the user.
    Validation,
    /// A referenced record does not exist.
    NotFound,
    /// Configuration could not be loaded or is inconsistent.
    Configuration,
    /// Unexpected internal failure.
    Internal,
}
