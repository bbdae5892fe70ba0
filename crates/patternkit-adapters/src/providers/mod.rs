//! Abstract Factory: provider families.
//!
//! Each family hands out an email sender and an SMS sender that belong
//! together. Nothing is actually delivered; senders log and return a
//! [`Delivery`](patternkit_core::domain::Delivery) receipt.

mod aws;
mod twilio;

use patternkit_core::{application::ports::ProviderFactory, domain::Provider};

pub use aws::{AwsEmailSender, AwsFactory, AwsSmsSender};
pub use twilio::{TwilioEmailSender, TwilioFactory, TwilioSmsSender};

/// Select the factory for `provider`.
pub fn factory_for(provider: Provider) -> Box<dyn ProviderFactory> {
    match provider {
        Provider::Aws => Box::new(AwsFactory),
        Provider::Twilio => Box::new(TwilioFactory),
    }
}
