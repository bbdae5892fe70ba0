//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `patternkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateStore`: Prototype storage with copy-on-read
//!   - `Notification` / `NotificationCreator`: Factory Method products and creators
//!   - `EmailSender` / `SmsSender` / `ProviderFactory`: Abstract Factory families
//!   - `PaymentProcessor`: Target interface for payment adapters
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    EmailSender, Notification, NotificationCreator, PaymentProcessor, ProviderFactory, SmsSender,
    TemplateStore,
};
