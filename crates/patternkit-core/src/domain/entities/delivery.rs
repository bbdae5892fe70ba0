use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::value_objects::{Channel, Provider};

/// Receipt for a simulated message send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub id: Uuid,
    pub channel: Channel,
    pub provider: Option<Provider>,
    pub recipient: Option<String>,
    pub message: String,
}

impl Delivery {
    pub fn new(channel: Channel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel,
            provider: None,
            recipient: None,
            message: message.into(),
        }
    }

    pub fn via(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.provider, &self.recipient) {
            (Some(provider), Some(to)) => write!(
                f,
                "Sending {} via {} to {}... message: {}",
                self.channel.label(),
                provider.label(),
                to,
                self.message
            ),
            _ => write!(
                f,
                "Sending notification via {}... message: {}",
                self.channel.label(),
                self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_for_plain_notification() {
        let d = Delivery::new(Channel::Sms, "Hello, world!");
        assert_eq!(
            d.to_string(),
            "Sending notification via SMS... message: Hello, world!"
        );
    }

    #[test]
    fn display_for_provider_delivery() {
        let d = Delivery::new(Channel::Email, "hi")
            .via(Provider::Twilio)
            .to("test@test.com");
        assert_eq!(
            d.to_string(),
            "Sending email via Twilio to test@test.com... message: hi"
        );
    }

    #[test]
    fn ids_are_unique() {
        let a = Delivery::new(Channel::Email, "x");
        let b = Delivery::new(Channel::Email, "x");
        assert_ne!(a.id, b.id);
    }
}
