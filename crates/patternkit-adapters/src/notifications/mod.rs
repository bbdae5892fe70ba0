//! Factory Method: one notification product and one creator per channel.
//!
//! Callers pick a creator (usually through [`creator_for`]) and call
//! `send_notification`; the creator decides which product to build.

mod email;
mod sms;
mod whatsapp;

use patternkit_core::{application::ports::NotificationCreator, domain::Channel};

pub use email::{EmailNotification, EmailNotificationCreator};
pub use sms::{SmsNotification, SmsNotificationCreator};
pub use whatsapp::{WhatsappNotification, WhatsappNotificationCreator};

/// Select the creator for `channel`.
pub fn creator_for(channel: Channel) -> Box<dyn NotificationCreator> {
    match channel {
        Channel::Email => Box::new(EmailNotificationCreator),
        Channel::Sms => Box::new(SmsNotificationCreator),
        Channel::Whatsapp => Box::new(WhatsappNotificationCreator),
    }
}

#[cfg(test)]
mod tests {
    use patternkit_core::application::ports::Notification;

    use super::*;

    #[test]
    fn every_channel_gets_a_matching_product() {
        for channel in Channel::ALL {
            let creator = creator_for(channel);
            assert_eq!(creator.create_notification().channel(), channel);

            let delivery = creator.send_notification("Hello, world!").unwrap();
            assert_eq!(delivery.channel, channel);
            assert_eq!(delivery.message, "Hello, world!");
        }
    }

    #[test]
    fn sms_delivery_renders_channel_label() {
        let delivery = creator_for(Channel::Sms)
            .send_notification("Hello, world!")
            .unwrap();
        assert_eq!(
            delivery.to_string(),
            "Sending notification via SMS... message: Hello, world!"
        );
    }

    #[test]
    fn empty_message_is_rejected_before_sending() {
        assert!(creator_for(Channel::Whatsapp).send_notification("").is_err());
    }
}
