// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Patternkit.
//!
//! This module contains pure logic with no I/O. Sending, paying, storing and
//! loading are reached through ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment access
//! - **Owned data**: Entities hold no shared handles, so `Clone` is a deep copy
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    database::DatabaseConfig,
    delivery::Delivery,
    http_request::{HttpRequest, HttpRequestBuilder, RequestBuilder, RequestDirector},
    job::{JobConfig, Metadata, MetadataValue, Prototype},
    payment::{CheckoutReceipt, PaymentOutcome},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Channel, Currency, HttpMethod, Provider, TemplateKey};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // TemplateKey Tests
    // ========================================================================

    #[test]
    fn template_key_keeps_the_exact_string() {
        for raw in ["  nightly-report_v2.1 ", "two words", "slash/key", "tâche", "\t"] {
            assert_eq!(TemplateKey::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn template_key_rejects_only_empty() {
        assert!(matches!(
            TemplateKey::new(""),
            Err(DomainError::InvalidKey { .. })
        ));
        assert!(TemplateKey::new(" ").is_ok());
    }

    #[test]
    fn template_keys_differing_in_whitespace_are_distinct() {
        assert_ne!(
            TemplateKey::new(" fast").unwrap(),
            TemplateKey::new("fast").unwrap()
        );
    }

    #[test]
    fn template_key_orders_lexicographically() {
        let mut keys = vec![
            TemplateKey::new("safe").unwrap(),
            TemplateKey::new("fast").unwrap(),
        ];
        keys.sort();
        assert_eq!(keys[0].as_str(), "fast");
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn http_method_parses_case_insensitively() {
        assert_eq!(HttpMethod::from_str("get").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::from_str(" Put ").unwrap(), HttpMethod::Put);
        assert!(matches!(
            HttpMethod::from_str("fetch"),
            Err(DomainError::UnknownValue { kind: "method", .. })
        ));
        assert!(HttpMethod::Post.has_body());
        assert!(!HttpMethod::Get.has_body());
    }

    #[test]
    fn channel_parses_aliases() {
        assert_eq!(Channel::from_str("EMAIL").unwrap(), Channel::Email);
        assert_eq!(Channel::from_str("wa").unwrap(), Channel::Whatsapp);
        assert!(Channel::from_str("pigeon").is_err());
        assert_eq!(Channel::Sms.label(), "SMS");
    }

    #[test]
    fn provider_round_trips_through_display() {
        for provider in Provider::ALL {
            assert_eq!(Provider::from_str(&provider.to_string()).unwrap(), provider);
        }
    }

    #[test]
    fn currency_normalises_to_uppercase() {
        assert_eq!(Currency::new("usd").unwrap().code(), "USD");
        assert_eq!(Currency::default(), Currency::cop());
        assert!(Currency::new("US").is_err());
        assert!(Currency::new("U$D").is_err());
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_checks_messages() {
        assert!(DomainValidator::validate_message("Hello, world!").is_ok());
        assert!(matches!(
            DomainValidator::validate_message("  "),
            Err(DomainError::InvalidMessage(_))
        ));
    }

    #[test]
    fn validator_checks_email_shape() {
        assert!(DomainValidator::validate_email("test@test.com").is_ok());
        assert!(DomainValidator::validate_email("test.com").is_err());
        assert!(DomainValidator::validate_email("@test.com").is_err());
        assert!(DomainValidator::validate_email("").is_err());
    }

    #[test]
    fn validator_checks_recipients() {
        assert!(DomainValidator::validate_recipient("1234567890").is_ok());
        assert!(DomainValidator::validate_recipient(" ").is_err());
    }

    #[test]
    fn error_categories() {
        assert_eq!(
            DomainError::TemplateNotFound { key: "x".into() }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::DuplicateTemplate { key: "x".into() }.category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            DomainError::InvalidAmount { amount: -1.0 }.category(),
            ErrorCategory::Validation
        );
    }
}
