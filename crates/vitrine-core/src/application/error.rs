//! Application-layer errors.

use thiserror::Error;

use crate::domain::{ProductId, error::ErrorCategory};

/// Errors raised while orchestrating catalog operations.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("product not found: {id}")]
    ProductNotFound { id: ProductId },

    #[error("catalog store lock poisoned")]
    StoreLock,

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProductNotFound { .. } => vec![
                "Run 'vitrine list' to see the products in the catalog".to_string(),
                "The product may have been removed already".to_string(),
            ],
            Self::StoreLock => vec![
                "A previous operation panicked while holding the catalog lock".to_string(),
            ],
            Self::Configuration { .. } => vec![
                "Check the configuration file for syntax errors".to_string(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProductNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLock => ErrorCategory::Internal,
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_identifier() {
        let id = ProductId::new();
        let err = ApplicationError::ProductNotFound { id };
        assert!(err.to_string().contains(&id.to_string()));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
