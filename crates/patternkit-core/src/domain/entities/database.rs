//! PostgreSQL connection settings.
//!
//! The process-wide instance lives in the adapters crate
//! (`patternkit_adapters::database::shared_database_config`); this module only
//! knows how to describe and validate a configuration.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "postgres";
pub const DEFAULT_DATABASE: &str = "mydatabase";

const PASSWORD_MASK: &str = "****";

/// Connection descriptor for a PostgreSQL database.
///
/// `Debug` and `Display` never print the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.into(),
            password: DEFAULT_PASSWORD.into(),
            database: DEFAULT_DATABASE.into(),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.host.trim().is_empty() {
            return Err(DomainError::InvalidDatabaseConfig {
                field: "host",
                reason: "cannot be empty".into(),
            });
        }
        if self.port == 0 {
            return Err(DomainError::InvalidDatabaseConfig {
                field: "port",
                reason: "must be between 1 and 65535".into(),
            });
        }
        if self.database.trim().is_empty() {
            return Err(DomainError::InvalidDatabaseConfig {
                field: "name",
                reason: "cannot be empty".into(),
            });
        }
        Ok(())
    }

    /// PostgreSQL URI; the password is masked unless `hide_password` is false.
    pub fn connection_string(&self, hide_password: bool) -> String {
        let password = if hide_password {
            PASSWORD_MASK
        } else {
            self.password.as_str()
        };
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user, password, self.host, self.port, self.database
        )
    }

    /// Connection parameters as an ordered map, password included.
    pub fn connection_params(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("host", self.host.clone()),
            ("port", self.port.to_string()),
            ("user", self.user.clone()),
            ("password", self.password.clone()),
            ("database", self.database.clone()),
        ])
    }
}

impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DatabaseConfig(host={}, port={}, database={})",
            self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &PASSWORD_MASK)
            .field("database", &self.database)
            .finish()
    }
}
