use patternkit_core::{
    application::ports::{Notification, NotificationCreator},
    domain::{Channel, Delivery},
    error::PatternResult,
};
use tracing::info;

/// Simulated email notification.
pub struct EmailNotification;

impl Notification for EmailNotification {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    fn send(&self, message: &str) -> PatternResult<Delivery> {
        let delivery = Delivery::new(Channel::Email, message);
        info!(id = %delivery.id, "{delivery}");
        Ok(delivery)
    }
}

pub struct EmailNotificationCreator;

impl NotificationCreator for EmailNotificationCreator {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(EmailNotification)
    }
}
