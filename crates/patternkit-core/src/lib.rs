//! Patternkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Patternkit, a
//! collection of creational and structural patterns (Prototype, Builder,
//! Factory Method, Abstract Factory, Singleton, Adapter) expressed as small,
//! strongly-typed services.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         patternkit-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (TemplateRegistry, NotificationService, │
//! │            CheckoutService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TemplateStore, ProviderFactory, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   patternkit-adapters (Infrastructure)  │
//! │ (InMemoryTemplateStore, AwsFactory, ...)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (JobConfig, HttpRequest, DatabaseConfig)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use patternkit_core::{application::TemplateRegistry, domain::JobConfig};
//!
//! // `store` is any `TemplateStore<JobConfig>` adapter.
//! let registry = TemplateRegistry::new(store);
//! registry.register("fast", JobConfig::new("fast-job", 1, 5).with_metadata("priority", "high"))?;
//!
//! // Every lookup hands out an independent copy.
//! let mut job = registry.get("fast")?;
//! job.metadata.insert("priority".into(), "critical".into());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CheckoutService, DuplicatePolicy, NotificationService, TemplateRegistry,
        ports::{
            EmailSender, Notification, NotificationCreator, PaymentProcessor, ProviderFactory,
            SmsSender, TemplateStore,
        },
    };
    pub use crate::domain::{
        Channel, CheckoutReceipt, Currency, DatabaseConfig, Delivery, HttpMethod, HttpRequest,
        HttpRequestBuilder, JobConfig, MetadataValue, PaymentOutcome, Prototype, Provider,
        RequestBuilder, RequestDirector, TemplateKey,
    };
    pub use crate::error::{PatternError, PatternResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
