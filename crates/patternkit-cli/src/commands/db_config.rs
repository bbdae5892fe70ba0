//! `patternkit db-config` — the shared database configuration.

use serde::Serialize;

use patternkit_adapters::shared_database_config;

use crate::{cli::DbConfigArgs, error::CliResult, output::OutputManager};

#[derive(Serialize)]
struct DbConfigView<'a> {
    host: &'a str,
    port: u16,
    user: &'a str,
    database: &'a str,
    connection_string: String,
    shared_instance: bool,
}

pub fn execute(args: DbConfigArgs, output: &OutputManager) -> CliResult<()> {
    let config = shared_database_config()?;
    let again = shared_database_config()?;
    let shared_instance = std::ptr::eq(config, again);
    let connection_string = config.connection_string(!args.show_password);

    if output.is_json() {
        return output.json(&DbConfigView {
            host: &config.host,
            port: config.port,
            user: &config.user,
            database: &config.database,
            connection_string,
            shared_instance,
        });
    }

    output.header(&config.to_string())?;
    output.print(&format!("Connection string: {connection_string}"))?;
    for (name, value) in config.connection_params() {
        let value = if name == "password" && !args.show_password {
            "****".to_string()
        } else {
            value
        };
        output.print(&format!("  {name:<9} {value}"))?;
    }
    output.info(&format!("Same instance on every call: {shared_instance}"))?;
    Ok(())
}
