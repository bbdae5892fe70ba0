use patternkit_core::{
    application::ports::PaymentProcessor,
    domain::{Currency, PaymentOutcome},
    error::PatternResult,
};
use tracing::info;

/// Processor that already implements the checkout interface.
///
/// Approves every charge in major units with no conversion.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectPaymentProcessor;

impl PaymentProcessor for DirectPaymentProcessor {
    fn pay(&self, amount: f64, currency: &Currency) -> PatternResult<PaymentOutcome> {
        info!("Processing payment of {amount:.2} {currency}");
        Ok(PaymentOutcome::Approved { reference: None })
    }
}
