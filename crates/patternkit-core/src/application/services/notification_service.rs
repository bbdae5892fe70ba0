//! Notification Service - sends through one provider family.
//!
//! The service never names a vendor. It receives a [`ProviderFactory`],
//! asks it for an email and an SMS sender once, and keeps them for its
//! lifetime, so both products always come from the same family.

use tracing::{info, instrument};

use crate::{
    application::ports::{EmailSender, ProviderFactory, SmsSender},
    domain::{Delivery, DomainValidator as validator, Provider},
    error::PatternResult,
};

/// Sends a message by email and SMS using senders from one provider.
pub struct NotificationService {
    provider: Provider,
    email_sender: Box<dyn EmailSender>,
    sms_sender: Box<dyn SmsSender>,
}

impl NotificationService {
    pub fn new(factory: &dyn ProviderFactory) -> Self {
        Self {
            provider: factory.provider(),
            email_sender: factory.create_email_sender(),
            sms_sender: factory.create_sms_sender(),
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Send `message` to `email`, then to `phone`.
    ///
    /// All inputs are validated before anything is sent.
    #[instrument(skip(self, message), fields(provider = %self.provider))]
    pub fn send_notification(
        &self,
        email: &str,
        phone: &str,
        message: &str,
    ) -> PatternResult<Vec<Delivery>> {
        validator::validate_message(message)?;
        validator::validate_email(email)?;
        validator::validate_recipient(phone)?;

        let deliveries = vec![
            self.email_sender.send(email, message)?,
            self.sms_sender.send(phone, message)?,
        ];

        info!(count = deliveries.len(), "notifications sent");
        Ok(deliveries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::output::{MockEmailSender, MockProviderFactory, MockSmsSender},
        },
        domain::{Channel, DomainError},
        error::PatternError,
    };

    fn factory(email_calls: usize, sms_calls: usize) -> MockProviderFactory {
        let mut factory = MockProviderFactory::new();
        factory.expect_provider().return_const(Provider::Aws);
        factory.expect_create_email_sender().times(1).returning(move || {
            let mut sender = MockEmailSender::new();
            sender
                .expect_send()
                .times(email_calls)
                .returning(|to, message| {
                    assert_eq!(to, "test@test.com");
                    Ok(Delivery::new(Channel::Email, message).via(Provider::Aws).to(to))
                });
            Box::new(sender)
        });
        factory.expect_create_sms_sender().times(1).returning(move || {
            let mut sender = MockSmsSender::new();
            sender
                .expect_send()
                .times(sms_calls)
                .returning(|to, message| {
                    Ok(Delivery::new(Channel::Sms, message).via(Provider::Aws).to(to))
                });
            Box::new(sender)
        });
        factory
    }

    #[test]
    fn sends_email_then_sms_from_one_family() {
        let service = NotificationService::new(&factory(1, 1));
        let deliveries = service
            .send_notification("test@test.com", "1234567890", "Hello, world!")
            .unwrap();

        assert_eq!(service.provider(), Provider::Aws);
        assert_eq!(deliveries.len(), 2);
        assert_eq!(deliveries[0].channel, Channel::Email);
        assert_eq!(deliveries[1].channel, Channel::Sms);
        assert_eq!(deliveries[1].recipient.as_deref(), Some("1234567890"));
    }

    #[test]
    fn invalid_email_sends_nothing() {
        let service = NotificationService::new(&factory(0, 0));
        let err = service
            .send_notification("not-an-email", "1234567890", "Hello, world!")
            .unwrap_err();

        assert!(matches!(
            err,
            PatternError::Domain(DomainError::InvalidRecipient { .. })
        ));
    }

    #[test]
    fn email_failure_stops_before_sms() {
        let mut factory = MockProviderFactory::new();
        factory.expect_provider().return_const(Provider::Twilio);
        factory.expect_create_email_sender().returning(|| {
            let mut sender = MockEmailSender::new();
            sender.expect_send().returning(|_, _| {
                Err(ApplicationError::DeliveryFailed {
                    channel: "email".into(),
                    reason: "mailbox full".into(),
                }
                .into())
            });
            Box::new(sender)
        });
        factory.expect_create_sms_sender().returning(|| {
            let mut sender = MockSmsSender::new();
            sender.expect_send().never();
            Box::new(sender)
        });

        let service = NotificationService::new(&factory);
        assert!(
            service
                .send_notification("test@test.com", "1234567890", "Hello, world!")
                .is_err()
        );
    }
}
