//! Template Registry - named prototypes with copy-on-read.
//!
//! The registry is an ordinary value: build one at startup and pass it by
//! reference to whoever needs templates. There is no global instance.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{DomainError, DomainValidator as validator, JobConfig, Prototype, TemplateKey},
    error::PatternResult,
};

/// What `register` does when the key is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Silently replace the stored template.
    #[default]
    Replace,
    /// Fail with [`DomainError::DuplicateTemplate`].
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => f.write_str("replace"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" | "overwrite" => Ok(Self::Replace),
            "reject" | "deny" => Ok(Self::Reject),
            _ => Err(DomainError::UnknownValue {
                kind: "duplicate policy",
                value: s.to_string(),
            }),
        }
    }
}

/// Keyed store of prototypes that hands out independent copies.
pub struct TemplateRegistry<T: Prototype> {
    store: Box<dyn TemplateStore<T>>,
    policy: DuplicatePolicy,
}

impl<T: Prototype> TemplateRegistry<T> {
    /// Create a registry over `store` with the default (replace) policy.
    pub fn new(store: Box<dyn TemplateStore<T>>) -> Self {
        Self {
            store,
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Store `template` under `key`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidKey`] if `key` is the empty string.
    /// - [`DomainError::DuplicateTemplate`] if the key is taken and the
    ///   policy is [`DuplicatePolicy::Reject`].
    #[instrument(skip(self, template), fields(policy = %self.policy))]
    pub fn register(&self, key: &str, template: T) -> PatternResult<()> {
        let key = TemplateKey::new(key)?;

        match self.policy {
            DuplicatePolicy::Replace => {
                if self.store.insert(key.clone(), template)?.is_some() {
                    debug!(key = %key, "replaced existing template");
                } else {
                    debug!(key = %key, "registered template");
                }
            }
            DuplicatePolicy::Reject => {
                if !self.store.insert_if_absent(key.clone(), template)? {
                    return Err(DomainError::DuplicateTemplate {
                        key: key.into(),
                    }
                    .into());
                }
                debug!(key = %key, "registered template");
            }
        }

        Ok(())
    }

    /// Get an independent copy of the template registered under `key`.
    ///
    /// # Errors
    ///
    /// [`DomainError::TemplateNotFound`] if nothing is registered under
    /// `key`, including the empty string.
    #[instrument(skip(self))]
    pub fn get(&self, key: &str) -> PatternResult<T> {
        let parsed = TemplateKey::new(key).map_err(|_| DomainError::TemplateNotFound {
            key: key.to_string(),
        })?;
        self.store.get(&parsed)
    }

    pub fn contains(&self, key: &str) -> PatternResult<bool> {
        match TemplateKey::new(key) {
            Ok(parsed) => self.store.contains(&parsed),
            Err(_) => Ok(false),
        }
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> PatternResult<Vec<TemplateKey>> {
        self.store.keys()
    }

    pub fn len(&self) -> PatternResult<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> PatternResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl TemplateRegistry<JobConfig> {
    /// Register every `(key, job)` pair, validating each job first.
    ///
    /// Stops at the first failure; earlier registrations stay in place.
    #[instrument(skip_all)]
    pub fn register_jobs<I, K>(&self, jobs: I) -> PatternResult<usize>
    where
        I: IntoIterator<Item = (K, JobConfig)>,
        K: AsRef<str>,
    {
        let mut count = 0;
        for (key, job) in jobs {
            validator::validate_job(&job)?;
            self.register(key.as_ref(), job)?;
            count += 1;
        }
        info!(count, "job templates registered");
        Ok(count)
    }
}
