//! Amazon family (SES for email, SNS for SMS).

use patternkit_core::{
    application::ports::{EmailSender, ProviderFactory, SmsSender},
    domain::{Channel, Delivery, DomainValidator as validator, Provider},
    error::PatternResult,
};
use tracing::info;

pub struct AwsEmailSender;

impl EmailSender for AwsEmailSender {
    fn send(&self, to: &str, message: &str) -> PatternResult<Delivery> {
        validator::validate_email(to)?;
        let delivery = Delivery::new(Channel::Email, message)
            .via(Provider::Aws)
            .to(to);
        info!(id = %delivery.id, "{delivery}");
        Ok(delivery)
    }
}

pub struct AwsSmsSender;

impl SmsSender for AwsSmsSender {
    fn send(&self, to: &str, message: &str) -> PatternResult<Delivery> {
        validator::validate_recipient(to)?;
        let delivery = Delivery::new(Channel::Sms, message)
            .via(Provider::Aws)
            .to(to);
        info!(id = %delivery.id, "{delivery}");
        Ok(delivery)
    }
}

pub struct AwsFactory;

impl ProviderFactory for AwsFactory {
    fn provider(&self) -> Provider {
        Provider::Aws
    }

    fn create_email_sender(&self) -> Box<dyn EmailSender> {
        Box::new(AwsEmailSender)
    }

    fn create_sms_sender(&self) -> Box<dyn SmsSender> {
        Box::new(AwsSmsSender)
    }
}
