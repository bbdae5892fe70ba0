//! Checkout Service - charges through whatever [`PaymentProcessor`] it is given.

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::PaymentProcessor},
    domain::{CheckoutReceipt, Currency, DomainValidator as validator, PaymentOutcome},
    error::PatternResult,
};

pub struct CheckoutService {
    processor: Box<dyn PaymentProcessor>,
    currency: Currency,
}

impl CheckoutService {
    /// Create a checkout charging in the default currency (COP).
    pub fn new(processor: Box<dyn PaymentProcessor>) -> Self {
        Self {
            processor,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Charge `amount` in the checkout currency.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidAmount` for zero, negative, or non-finite amounts
    ///   (the processor is never called).
    /// - `ApplicationError::PaymentFailed` when the processor declines.
    #[instrument(skip(self), fields(currency = %self.currency))]
    pub fn checkout(&self, amount: f64) -> PatternResult<CheckoutReceipt> {
        validator::validate_amount(amount)?;

        match self.processor.pay(amount, &self.currency)? {
            PaymentOutcome::Approved { reference } => {
                info!(reference = reference.as_deref().unwrap_or("-"), "payment approved");
                Ok(CheckoutReceipt {
                    amount,
                    currency: self.currency.clone(),
                    reference,
                })
            }
            PaymentOutcome::Declined { reason } => {
                warn!(%reason, "payment declined");
                Err(ApplicationError::PaymentFailed {
                    amount,
                    currency: self.currency.to_string(),
                    reason,
                }
                .into())
            }
        }
    }
}
