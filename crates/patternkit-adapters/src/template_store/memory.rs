//! In-memory template store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use patternkit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainError, JobConfig, Prototype, TemplateKey},
    error::PatternResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory store of prototypes.
///
/// Readers share the lock; `insert` takes it exclusively, so a lookup
/// observes either the old or the new template, never a partial write.
pub struct InMemoryTemplateStore<T> {
    inner: Arc<RwLock<HashMap<TemplateKey, T>>>,
}

impl<T> InMemoryTemplateStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Remove every template.
    pub fn clear(&self) -> PatternResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl InMemoryTemplateStore<JobConfig> {
    /// Create a store preloaded with the built-in job templates.
    pub fn with_builtin_jobs() -> PatternResult<Self> {
        let store = Self::new();
        for (key, job) in builtin_templates::job_templates()? {
            store.insert(key, job)?;
        }
        Ok(store)
    }
}

impl<T> Default for InMemoryTemplateStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Handles share one map.
impl<T> Clone for InMemoryTemplateStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Prototype + Send + Sync> TemplateStore<T> for InMemoryTemplateStore<T> {
    fn get(&self, key: &TemplateKey) -> PatternResult<T> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(key).map(Prototype::clone_prototype).ok_or_else(|| {
            DomainError::TemplateNotFound {
                key: key.to_string(),
            }
            .into()
        })
    }

    fn insert(&self, key: TemplateKey, template: T) -> PatternResult<Option<T>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.insert(key, template))
    }

    fn insert_if_absent(&self, key: TemplateKey, template: T) -> PatternResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.contains_key(&key) {
            return Ok(false);
        }
        inner.insert(key, template);
        Ok(true)
    }

    fn contains(&self, key: &TemplateKey) -> PatternResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.contains_key(key))
    }

    fn keys(&self) -> PatternResult<Vec<TemplateKey>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut keys: Vec<TemplateKey> = inner.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn len(&self) -> PatternResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.len())
    }
}
