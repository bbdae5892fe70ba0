//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `patternkit-adapters` crate provides implementations.

use tracing::debug;

use crate::domain::{
    Channel, Currency, Delivery, DomainValidator as validator, PaymentOutcome, Prototype, Provider,
    TemplateKey,
};
use crate::error::PatternResult;

/// Port for prototype storage and retrieval.
///
/// Implemented by:
/// - `patternkit_adapters::template_store::InMemoryTemplateStore`
///
/// ## Contract
///
/// - `get` returns a value produced by [`Prototype::clone_prototype`]; callers
///   own it outright and nothing they do to it reaches the store.
/// - Lookups never mutate the store.
pub trait TemplateStore<T: Prototype>: Send + Sync {
    /// Get an independent copy of the template stored under `key`.
    fn get(&self, key: &TemplateKey) -> PatternResult<T>;

    /// Insert or replace a template, returning the one it displaced.
    fn insert(&self, key: TemplateKey, template: T) -> PatternResult<Option<T>>;

    /// Insert only if `key` is vacant. Returns `false` when it was taken.
    fn insert_if_absent(&self, key: TemplateKey, template: T) -> PatternResult<bool>;

    /// Check whether `key` is registered.
    fn contains(&self, key: &TemplateKey) -> PatternResult<bool>;

    /// All registered keys, sorted.
    fn keys(&self) -> PatternResult<Vec<TemplateKey>>;

    /// Number of registered templates.
    fn len(&self) -> PatternResult<usize>;
}

/// Product of the Factory Method: something that can deliver a message.
#[cfg_attr(test, mockall::automock)]
pub trait Notification: Send + Sync {
    fn channel(&self) -> Channel;

    fn send(&self, message: &str) -> PatternResult<Delivery>;
}

/// Creator of the Factory Method.
///
/// Implementors only decide *which* [`Notification`] to build;
/// [`send_notification`](Self::send_notification) is shared.
pub trait NotificationCreator: Send + Sync {
    /// The factory method.
    fn create_notification(&self) -> Box<dyn Notification>;

    /// Create a notification and send `message` through it.
    fn send_notification(&self, message: &str) -> PatternResult<Delivery> {
        validator::validate_message(message)?;

        let notification = self.create_notification();
        debug!(channel = %notification.channel(), "notification created");
        notification.send(message)
    }
}

/// Email product of a provider family.
#[cfg_attr(test, mockall::automock)]
pub trait EmailSender: Send + Sync {
    fn send(&self, to: &str, message: &str) -> PatternResult<Delivery>;
}

/// SMS product of a provider family.
#[cfg_attr(test, mockall::automock)]
pub trait SmsSender: Send + Sync {
    fn send(&self, to: &str, message: &str) -> PatternResult<Delivery>;
}

/// Abstract Factory: builds a matching email + SMS pair from one vendor.
#[cfg_attr(test, mockall::automock)]
pub trait ProviderFactory: Send + Sync {
    fn provider(&self) -> Provider;

    fn create_email_sender(&self) -> Box<dyn EmailSender>;

    fn create_sms_sender(&self) -> Box<dyn SmsSender>;
}

/// Target interface the checkout expects from any payment backend.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentProcessor: Send + Sync {
    /// Charge `amount` (major units) in `currency`.
    fn pay(&self, amount: f64, currency: &Currency) -> PatternResult<PaymentOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::DomainError, error::PatternError};

    struct SmsCreator;

    impl NotificationCreator for SmsCreator {
        fn create_notification(&self) -> Box<dyn Notification> {
            let mut mock = MockNotification::new();
            mock.expect_channel().return_const(Channel::Sms);
            mock.expect_send()
                .returning(|message| Ok(Delivery::new(Channel::Sms, message)));
            Box::new(mock)
        }
    }

    #[test]
    fn send_notification_uses_the_created_product() {
        let delivery = SmsCreator.send_notification("Hello, world!").unwrap();
        assert_eq!(delivery.channel, Channel::Sms);
        assert_eq!(delivery.message, "Hello, world!");
    }

    #[test]
    fn send_notification_rejects_blank_messages() {
        assert!(matches!(
            SmsCreator.send_notification(" "),
            Err(PatternError::Domain(DomainError::InvalidMessage(_)))
        ));
    }
}
