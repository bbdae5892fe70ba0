//! Infrastructure adapters for Patternkit.
//!
//! This crate implements the ports defined in `patternkit-core::application::ports`.
//! Everything that touches the environment, the filesystem, or a (simulated)
//! third party lives here.

pub mod builtin_templates;
pub mod database;
pub mod notifications;
pub mod payments;
pub mod providers;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use database::{load_database_config, shared_database_config};
pub use notifications::{
    EmailNotificationCreator, SmsNotificationCreator, WhatsappNotificationCreator, creator_for,
};
pub use payments::{DirectPaymentProcessor, ExternalPaymentAdapter, ExternalPaymentSdk};
pub use providers::{AwsFactory, TwilioFactory, factory_for};
pub use template_loader::FilesystemTemplateLoader;
pub use template_store::InMemoryTemplateStore;
