//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// A channel or provider refused the message.
    #[error("Delivery via {channel} failed: {reason}")]
    DeliveryFailed { channel: String, reason: String },

    /// The payment processor declined the charge.
    #[error("Payment failed: {amount:.2} {currency} was declined ({reason})")]
    PaymentFailed {
        amount: f64,
        currency: String,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::DeliveryFailed { channel, .. } => vec![
                format!("The {} channel rejected the message", channel),
                "Check the recipient and try another channel".into(),
            ],
            Self::PaymentFailed { .. } => vec![
                "The processor declined the charge".into(),
                "Check the amount and currency, then retry".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreLockError => ErrorCategory::Internal,
            Self::DeliveryFailed { .. } => ErrorCategory::Internal,
            Self::PaymentFailed { .. } => ErrorCategory::Conflict,
        }
    }
}
