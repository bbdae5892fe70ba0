// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can hand them back from shared stores)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid template key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid HTTP request: {0}")]
    InvalidRequest(String),

    #[error("Invalid recipient '{recipient}': {reason}")]
    InvalidRecipient { recipient: String, reason: String },

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Invalid currency code '{code}'")]
    InvalidCurrency { code: String },

    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Invalid database configuration for '{field}': {reason}")]
    InvalidDatabaseConfig { field: &'static str, reason: String },

    // ========================================================================
    // Conflict Errors (409-level equivalent)
    // ========================================================================
    #[error("Template '{key}' is already registered")]
    DuplicateTemplate { key: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Template with key '{key}' not found")]
    TemplateNotFound { key: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { key } => vec![
                format!("No template is registered under '{}'", key),
                "Try: patternkit prototype list to see registered keys".into(),
            ],
            Self::DuplicateTemplate { key } => vec![
                format!("'{}' already exists and the registry rejects duplicates", key),
                "Set registry.duplicate_policy = \"replace\" to allow overwriting".into(),
            ],
            Self::InvalidKey { reason, .. } => vec![
                format!("Key rejected: {reason}"),
                "Template file keys use letters, digits, '-', '_' or '.'".into(),
            ],
            Self::InvalidRequest(msg) => vec![
                format!("Details: {}", msg),
                "Set a URL (http:// or https://) and a method before building".into(),
            ],
            Self::InvalidCurrency { .. } => {
                vec!["Currencies are three-letter ISO 4217 codes, e.g. COP or USD".into()]
            }
            Self::UnknownValue { kind, .. } => match *kind {
                "channel" => vec!["Supported channels: email, sms, whatsapp".into()],
                "provider" => vec!["Supported providers: aws, twilio".into()],
                "method" => vec!["Supported methods: GET, POST, PUT, PATCH, DELETE".into()],
                _ => vec!["See --help for accepted values".into()],
            },
            Self::InvalidDatabaseConfig { field, .. } => vec![format!(
                "Check the DB_{} environment variable",
                field.to_uppercase()
            )],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateTemplate { .. } => ErrorCategory::Conflict,
            Self::InvalidKey { .. }
            | Self::InvalidTemplate(_)
            | Self::InvalidRequest(_)
            | Self::InvalidRecipient { .. }
            | Self::InvalidMessage(_)
            | Self::InvalidAmount { .. }
            | Self::InvalidCurrency { .. }
            | Self::UnknownValue { .. }
            | Self::InvalidDatabaseConfig { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
