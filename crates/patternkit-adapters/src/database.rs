//! Process-wide database configuration.
//!
//! [`shared_database_config`] is the one place the application gets its
//! [`DatabaseConfig`]. The first call reads `DB_HOST`, `DB_PORT`, `DB_USER`,
//! `DB_PASSWORD` and `DB_NAME` over the defaults; every later call returns
//! the same `&'static` value. The value is never mutated afterwards.

use std::sync::OnceLock;

use config::{Config, Environment};
use serde::Deserialize;
use tracing::{debug, instrument};

use patternkit_core::{
    domain::{
        DatabaseConfig, DomainValidator as validator,
        entities::database::{
            DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USER,
        },
    },
    error::{PatternError, PatternResult},
};

static INSTANCE: OnceLock<DatabaseConfig> = OnceLock::new();

/// Environment prefix; `DB_HOST` maps to `host` and so on.
const ENV_PREFIX: &str = "DB";

/// Shape of the `DB_*` variables. `DB_NAME` is the database name.
#[derive(Debug, Deserialize)]
struct DbSettings {
    host: String,
    port: u16,
    user: String,
    password: String,
    name: String,
}

impl From<DbSettings> for DatabaseConfig {
    fn from(s: DbSettings) -> Self {
        Self {
            host: s.host,
            port: s.port,
            user: s.user,
            password: s.password,
            database: s.name,
        }
    }
}

/// The shared configuration, loading it on first use.
///
/// # Errors
///
/// Only the first successful call initializes the instance; if loading
/// fails the error is returned and the next call tries again.
pub fn shared_database_config() -> PatternResult<&'static DatabaseConfig> {
    if let Some(config) = INSTANCE.get() {
        return Ok(config);
    }

    let loaded = load_database_config()?;
    // A concurrent initializer may have won; both callers get its value.
    Ok(INSTANCE.get_or_init(|| loaded))
}

/// Read a fresh configuration from the process environment.
pub fn load_database_config() -> PatternResult<DatabaseConfig> {
    load_from(Environment::with_prefix(ENV_PREFIX))
}

#[instrument(skip_all)]
fn load_from(env: Environment) -> PatternResult<DatabaseConfig> {
    let settings: DbSettings = Config::builder()
        .set_default("host", DEFAULT_HOST)
        .and_then(|b| b.set_default("port", i64::from(DEFAULT_PORT)))
        .and_then(|b| b.set_default("user", DEFAULT_USER))
        .and_then(|b| b.set_default("password", DEFAULT_PASSWORD))
        .and_then(|b| b.set_default("name", DEFAULT_DATABASE))
        .map_err(config_error)?
        .add_source(env)
        .build()
        .and_then(Config::try_deserialize)
        .map_err(config_error)?;

    let config = DatabaseConfig::from(settings);
    validator::validate_database_config(&config)?;

    debug!(%config, "database configuration loaded");
    Ok(config)
}

fn config_error(e: config::ConfigError) -> PatternError {
    PatternError::Configuration {
        message: format!("invalid database configuration: {e}"),
    }
}
