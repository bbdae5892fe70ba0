//! Unified error handling for Patternkit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Patternkit Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatternError {
    /// Errors from the domain layer (rule violations, missing templates).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PatternError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and PATTERNKIT__* environment variables".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Patternkit".into(),
                "Please report this issue at: https://github.com/cosecruz/patternkit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }

    /// `true` when a registry lookup missed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::TemplateNotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type PatternResult<T> = Result<T, PatternError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> PatternResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> PatternResult<T> {
        self.map_err(|e| PatternError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_not_found_category() {
        let err: PatternError = DomainError::TemplateNotFound {
            key: "missing".into(),
        }
        .into();

        assert!(err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.is_retryable());
    }

    #[test]
    fn store_lock_is_retryable() {
        let err: PatternError = ApplicationError::StoreLockError.into();
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result.context("rendering").unwrap_err();
        assert!(matches!(err, PatternError::Internal { ref message } if message.starts_with("rendering")));
    }
}
