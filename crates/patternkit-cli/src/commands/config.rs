//! `patternkit config` — inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "registry.duplicate_policy" => Ok(config.registry.duplicate_policy.to_string()),
        "registry.templates_dir" => Ok(config
            .registry
            .templates_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "checkout.currency" => Ok(config.checkout.currency.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "checkout.currency").unwrap(), "COP");
        assert_eq!(
            get_config_value(&cfg, "registry.duplicate_policy").unwrap(),
            "replace"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn unset_templates_dir_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "registry.templates_dir").unwrap(), "");
    }
}
