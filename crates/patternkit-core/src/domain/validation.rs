use crate::domain::{
    entities::{DatabaseConfig, JobConfig, payment},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_job(job: &JobConfig) -> Result<(), DomainError> {
        job.validate()
    }

    pub fn validate_database_config(config: &DatabaseConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_amount(amount: f64) -> Result<(), DomainError> {
        payment::validate_amount(amount)
    }

    pub fn validate_message(message: &str) -> Result<(), DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::InvalidMessage("message cannot be empty".into()));
        }
        Ok(())
    }

    pub fn validate_email(recipient: &str) -> Result<(), DomainError> {
        Self::validate_recipient(recipient)?;
        let (local, domain) = recipient.split_once('@').ok_or_else(|| {
            DomainError::InvalidRecipient {
                recipient: recipient.to_string(),
                reason: "email address must contain '@'".into(),
            }
        })?;
        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::InvalidRecipient {
                recipient: recipient.to_string(),
                reason: "email address needs a local part and a domain".into(),
            });
        }
        Ok(())
    }

    pub fn validate_recipient(recipient: &str) -> Result<(), DomainError> {
        if recipient.trim().is_empty() {
            return Err(DomainError::InvalidRecipient {
                recipient: recipient.to_string(),
                reason: "recipient cannot be empty".into(),
            });
        }
        Ok(())
    }
}
