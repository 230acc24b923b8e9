//! Unified error handling for the dashboard.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::models::ValidationErrors;
use crate::store::StoreError;

/// Application-level error type for dashboard actions.
#[derive(Debug, Error)]
pub enum AppError {
    /// A submitted form failed validation; nothing was changed.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Reading or writing the store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Storage(inner) => Self::Storage(inner),
            other => Self::Repository(other),
        }
    }
}

impl AppError {
    /// Per-field errors when this is a validation failure.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use backoffice_core::EntityKind;

    use super::*;

    #[test]
    fn test_validation_display() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Invalid email");
        let err = AppError::from(errors);
        assert_eq!(err.to_string(), "Validation failed: email: Invalid email");
        assert!(err.validation().is_some());
    }

    #[test]
    fn test_repository_storage_flattens() {
        let err = AppError::from(RepositoryError::Storage(StoreError::Backend(
            "quota exceeded".to_string(),
        )));
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: storage backend error: quota exceeded");
    }

    #[test]
    fn test_not_found_display() {
        let err = AppError::from(RepositoryError::NotFound {
            kind: EntityKind::Product,
            id: 42,
        });
        assert_eq!(err.to_string(), "Repository error: Product 42 not found");
        assert!(err.validation().is_none());
    }
}
