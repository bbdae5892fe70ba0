pub mod database;
pub mod delivery;
pub mod http_request;
pub mod job;
pub mod payment;

pub use crate::domain::DomainError;
pub use database::DatabaseConfig;
pub use delivery::Delivery;
pub use http_request::{HttpRequest, HttpRequestBuilder, RequestBuilder, RequestDirector};
pub use job::{JobConfig, MetadataValue, Prototype};
pub use payment::{CheckoutReceipt, PaymentOutcome};
