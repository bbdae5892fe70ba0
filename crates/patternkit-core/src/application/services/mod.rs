//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "hand out a job template" or "check out a cart".

pub mod checkout_service;
pub mod notification_service;
pub mod template_registry;

pub use checkout_service::CheckoutService;
pub use notification_service::NotificationService;
pub use template_registry::{DuplicatePolicy, TemplateRegistry};
