use patternkit_core::{
    application::ports::{Notification, NotificationCreator},
    domain::{Channel, Delivery},
    error::PatternResult,
};
use tracing::info;

/// Simulated WhatsApp notification.
pub struct WhatsappNotification;

impl Notification for WhatsappNotification {
    fn channel(&self) -> Channel {
        Channel::Whatsapp
    }

    fn send(&self, message: &str) -> PatternResult<Delivery> {
        let delivery = Delivery::new(Channel::Whatsapp, message);
        info!(id = %delivery.id, "{delivery}");
        Ok(delivery)
    }
}

pub struct WhatsappNotificationCreator;

impl NotificationCreator for WhatsappNotificationCreator {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(WhatsappNotification)
    }
}
