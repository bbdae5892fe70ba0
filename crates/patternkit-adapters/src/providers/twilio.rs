//! Twilio family (SendGrid for email, Programmable Messaging for SMS).

use patternkit_core::{
    application::ports::{EmailSender, ProviderFactory, SmsSender},
    domain::{Channel, Delivery, DomainValidator as validator, Provider},
    error::PatternResult,
};
use tracing::info;

pub struct TwilioEmailSender;

impl EmailSender for TwilioEmailSender {
    fn send(&self, to: &str, message: &str) -> PatternResult<Delivery> {
        validator::validate_email(to)?;
        let delivery = Delivery::new(Channel::Email, message)
            .via(Provider::Twilio)
            .to(to);
        info!(id = %delivery.id, "{delivery}");
        Ok(delivery)
    }
}

pub struct TwilioSmsSender;

impl SmsSender for TwilioSmsSender {
    fn send(&self, to: &str, message: &str) -> PatternResult<Delivery> {
        validator::validate_recipient(to)?;
        let delivery = Delivery::new(Channel::Sms, message)
            .via(Provider::Twilio)
            .to(to);
        info!(id = %delivery.id, "{delivery}");
        Ok(delivery)
    }
}

pub struct TwilioFactory;

impl ProviderFactory for TwilioFactory {
    fn provider(&self) -> Provider {
        Provider::Twilio
    }

    fn create_email_sender(&self) -> Box<dyn EmailSender> {
        Box::new(TwilioEmailSender)
    }

    fn create_sms_sender(&self) -> Box<dyn SmsSender> {
        Box::new(TwilioSmsSender)
    }
}
