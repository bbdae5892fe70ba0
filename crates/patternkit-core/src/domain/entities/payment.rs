use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::Currency};

/// Result of asking a processor to charge an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentOutcome {
    Approved { reference: Option<String> },
    Declined { reason: String },
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }
}

/// What a successful checkout hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReceipt {
    pub amount: f64,
    pub currency: Currency,
    pub reference: Option<String>,
}

impl fmt::Display for CheckoutReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payment successful: {:.2} {}", self.amount, self.currency)?;
        if let Some(reference) = &self.reference {
            write!(f, " (ref {reference})")?;
        }
        Ok(())
    }
}

/// Amounts must be finite and strictly positive.
pub fn validate_amount(amount: f64) -> Result<(), DomainError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DomainError::InvalidAmount { amount });
    }
    Ok(())
}

/// Convert major units to minor units (cents), rounding to the nearest cent.
///
/// `200.95 * 100.0` is `20094.999…` in binary floating point; truncating
/// would lose a cent.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
