//! Application layer for Patternkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TemplateRegistry, NotificationService, CheckoutService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CheckoutService, DuplicatePolicy, NotificationService, TemplateRegistry};

// Re-export port traits (for adapter implementation)
pub use ports::{
    EmailSender, Notification, NotificationCreator, PaymentProcessor, ProviderFactory, SmsSender,
    TemplateStore,
};

pub use error::ApplicationError;
