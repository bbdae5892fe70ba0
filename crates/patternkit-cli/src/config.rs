//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PATTERNKIT__<SECTION>__<KEY>`,
//!    e.g. `PATTERNKIT__CHECKOUT__CURRENCY=USD`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`] if present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use patternkit_core::{application::DuplicatePolicy, domain::Currency};

const ENV_PREFIX: &str = "PATTERNKIT";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Template registry settings.
    pub registry: RegistryConfig,
    /// Checkout settings.
    pub checkout: CheckoutConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// Directory of `*.toml` job templates layered over the built-ins.
    pub templates_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// ISO 4217 code used when `--currency` is not given.
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig {
                duplicate_policy: DuplicatePolicy::Replace,
                templates_dir: None,
            },
            checkout: CheckoutConfig {
                currency: Currency::default().code().to_string(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "loading configuration");

        let config: Self = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("invalid built-in defaults")?)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("configuration has an unexpected shape")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        Currency::new(&self.checkout.currency).context("checkout.currency")?;
        Ok(())
    }

    /// The configured checkout currency.
    pub fn currency(&self) -> anyhow::Result<Currency> {
        Currency::new(&self.checkout.currency).context("checkout.currency")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.patternkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "patternkit", "patternkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".patternkit.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    fn missing_file() -> PathBuf {
        PathBuf::from("/nonexistent/patternkit/config.toml")
    }

    #[test]
    fn default_currency_is_cop() {
        assert_eq!(AppConfig::default().checkout.currency, "COP");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load_from(&missing_file(), false, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        assert!(AppConfig::load_from(&missing_file(), true, env(&[])).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[registry]\nduplicate_policy = \"reject\"\n\n[checkout]\ncurrency = \"USD\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, env(&[])).unwrap();
        assert_eq!(cfg.registry.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(cfg.checkout.currency, "USD");
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[checkout]\ncurrency = \"USD\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &path,
            true,
            env(&[
                ("PATTERNKIT__CHECKOUT__CURRENCY", "EUR"),
                ("PATTERNKIT__OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.checkout.currency, "EUR");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn invalid_currency_is_rejected() {
        let result = AppConfig::load_from(
            &missing_file(),
            false,
            env(&[("PATTERNKIT__CHECKOUT__CURRENCY", "PESOS")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
