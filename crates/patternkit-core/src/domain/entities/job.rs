//! Job templates: the prototypes handed out by the template registry.
//!
//! ## Copy-on-read
//!
//! A registry must never let two callers observe each other's edits. The
//! [`Prototype`] trait is the seam that guarantees it: `clone_prototype`
//! returns a value sharing no mutable state with `self`.
//!
//! Each template type writes its copy out field by field. [`MetadataValue`]
//! recurses into lists and maps, rebuilding every container on the way down,
//! so a copy of a [`JobConfig`] owns all of its metadata at every depth.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A value that can be used as a template for further values.
pub trait Prototype: Sized {
    /// Produce a deep copy with no shared mutable state.
    fn clone_prototype(&self) -> Self;
}

/// Free-form metadata attached to a job.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A metadata value. Nesting is unbounded and fully owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<MetadataValue>),
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<MetadataValue>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<String, MetadataValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Prototype for MetadataValue {
    fn clone_prototype(&self) -> Self {
        match self {
            Self::Bool(b) => Self::Bool(*b),
            Self::Integer(i) => Self::Integer(*i),
            Self::Float(x) => Self::Float(*x),
            Self::String(s) => Self::String(s.as_str().to_owned()),
            Self::List(items) => Self::List(items.iter().map(Prototype::clone_prototype).collect()),
            Self::Map(map) => Self::Map(copy_map(map)),
        }
    }
}

/// Rebuild `map` with fresh keys and deep-copied values.
fn copy_map(map: &BTreeMap<String, MetadataValue>) -> BTreeMap<String, MetadataValue> {
    map.iter()
        .map(|(k, v)| (k.as_str().to_owned(), v.clone_prototype()))
        .collect()
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => write_map(f, map),
        }
    }
}

fn write_map(f: &mut fmt::Formatter<'_>, map: &BTreeMap<String, MetadataValue>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (k, v)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{k:?}: {v}")?;
    }
    f.write_str("}")
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<MetadataValue>> for MetadataValue {
    fn from(value: Vec<MetadataValue>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, MetadataValue>> for MetadataValue {
    fn from(value: BTreeMap<String, MetadataValue>) -> Self {
        Self::Map(value)
    }
}

/// Configuration for a background job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub retries: u32,
    /// Timeout in seconds.
    pub timeout: u64,
    #[serde(default)]
    pub metadata: Metadata,
}

impl JobConfig {
    pub fn new(name: impl Into<String>, retries: u32, timeout: u64) -> Self {
        Self {
            name: name.into(),
            retries,
            timeout,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if self.timeout == 0 {
            return Err(DomainError::InvalidTemplate(format!(
                "job '{}' must have a timeout greater than zero",
                self.name
            )));
        }
        Ok(())
    }
}

impl Prototype for JobConfig {
    fn clone_prototype(&self) -> Self {
        Self {
            name: self.name.as_str().to_owned(),
            retries: self.retries,
            timeout: self.timeout,
            metadata: copy_map(&self.metadata),
        }
    }
}

impl fmt::Display for JobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JobConfig(name={:?}, retries={}, timeout={}, metadata=",
            self.name, self.retries, self.timeout
        )?;
        write_map(f, &self.metadata)?;
        f.write_str(")")
    }
}
