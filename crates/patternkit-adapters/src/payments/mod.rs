//! Adapter pattern: payment backends behind [`PaymentProcessor`].
//!
//! [`ExternalPaymentSdk`] stands in for a third-party library whose
//! interface does not fit ours (cents, raw currency codes, JSON replies).
//! [`ExternalPaymentAdapter`] translates between the two;
//! [`DirectPaymentProcessor`] already speaks our interface.
//!
//! [`PaymentProcessor`]: patternkit_core::application::ports::PaymentProcessor

mod direct;
mod external;

pub use direct::DirectPaymentProcessor;
pub use external::{ExternalPaymentAdapter, ExternalPaymentSdk, TransactionStatus};
