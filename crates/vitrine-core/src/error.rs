//! Unified error type for the core crate.
//!
//! Layered like the modules: domain errors come from validation and value
//! parsing, application errors from orchestration and storage. Consumers
//! match on the layer when they care, or use the shared `suggestions` and
//! `category` surface when they do not.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::error::{DomainError, ErrorCategory};

pub type VitrineResult<T> = Result<T, VitrineError>;

/// Any error the core can produce.
#[derive(Error, Debug)]
pub enum VitrineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl VitrineError {
    /// Actionable hints for the operator facing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Coarse classification used for exit codes and log levels.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// The validation report, when this error wraps a rejected draft.
    pub fn report(&self) -> Option<&crate::domain::ErrorReport> {
        match self {
            Self::Domain(e) => e.report(),
            Self::Application(_) => None,
        }
    }
}
