use patternkit_core::{
    application::ports::{Notification, NotificationCreator},
    domain::{Channel, Delivery},
    error::PatternResult,
};
use tracing::info;

/// Simulated SMS notification.
pub struct SmsNotification;

impl Notification for SmsNotification {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    fn send(&self, message: &str) -> PatternResult<Delivery> {
        let delivery = Delivery::new(Channel::Sms, message);
        info!(id = %delivery.id, "{delivery}");
        Ok(delivery)
    }
}

pub struct SmsNotificationCreator;

impl NotificationCreator for SmsNotificationCreator {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(SmsNotification)
    }
}
