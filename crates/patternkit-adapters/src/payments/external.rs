use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, instrument};
use uuid::Uuid;

use patternkit_core::{
    application::ports::PaymentProcessor,
    domain::{Currency, PaymentOutcome, entities::payment::to_minor_units},
    error::{PatternError, PatternResult},
};

/// Simulated third-party payment SDK.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalPaymentSdk;

impl ExternalPaymentSdk {
    /// Charge `total_in_cents` and reply the way the vendor does:
    /// `{"status": "success" | "declined", "transaction_id": "..."}`.
    ///
    /// Positive totals in a three-letter currency succeed.
    pub fn make_transaction(&self, total_in_cents: i64, currency_code: &str) -> Value {
        let currency_ok =
            currency_code.len() == 3 && currency_code.chars().all(|c| c.is_ascii_alphabetic());
        let status = if total_in_cents > 0 && currency_ok {
            TransactionStatus::Success
        } else {
            TransactionStatus::Declined
        };

        json!({
            "status": status,
            "transaction_id": Uuid::new_v4().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Declined,
}

#[derive(Debug, Deserialize)]
struct TransactionResponse {
    status: TransactionStatus,
    transaction_id: String,
}

/// Makes [`ExternalPaymentSdk`] usable as a [`PaymentProcessor`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalPaymentAdapter {
    sdk: ExternalPaymentSdk,
}

impl ExternalPaymentAdapter {
    pub fn new(sdk: ExternalPaymentSdk) -> Self {
        Self { sdk }
    }
}

impl PaymentProcessor for ExternalPaymentAdapter {
    #[instrument(skip(self))]
    fn pay(&self, amount: f64, currency: &Currency) -> PatternResult<PaymentOutcome> {
        let cents = to_minor_units(amount);
        let reply = self.sdk.make_transaction(cents, currency.code());
        debug!(cents, %reply, "sdk replied");

        let response: TransactionResponse =
            serde_json::from_value(reply).map_err(|e| PatternError::Internal {
                message: format!("unexpected payment SDK response: {e}"),
            })?;

        Ok(match response.status {
            TransactionStatus::Success => PaymentOutcome::Approved {
                reference: Some(response.transaction_id),
            },
            TransactionStatus::Declined => PaymentOutcome::Declined {
                reason: format!(
                    "transaction {} declined by payment provider",
                    response.transaction_id
                ),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdk_reply_has_status_and_transaction_id() {
        let reply = ExternalPaymentSdk.make_transaction(10050, "COP");
        assert_eq!(reply["status"], "success");
        assert!(Uuid::parse_str(reply["transaction_id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn sdk_declines_zero_totals_and_bad_codes() {
        assert_eq!(ExternalPaymentSdk.make_transaction(0, "COP")["status"], "declined");
        assert_eq!(ExternalPaymentSdk.make_transaction(100, "PESOS")["status"], "declined");
    }

    #[test]
    fn adapter_approves_with_transaction_reference() {
        let outcome = ExternalPaymentAdapter::default()
            .pay(200.95, &Currency::cop())
            .unwrap();
        assert!(matches!(outcome, PaymentOutcome::Approved { reference: Some(_) }));
    }

    #[test]
    fn sub_cent_amount_rounds_to_zero_and_is_declined() {
        let outcome = ExternalPaymentAdapter::default()
            .pay(0.004, &Currency::cop())
            .unwrap();
        assert!(!outcome.is_approved());
    }
}
