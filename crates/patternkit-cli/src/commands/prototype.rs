//! `patternkit prototype` — the job template registry.

use serde::Serialize;
use tracing::debug;

use patternkit_adapters::{InMemoryTemplateStore, builtin_templates};
use patternkit_core::prelude::*;

use crate::{
    cli::{PrototypeCommands, RegistryArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: PrototypeCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        PrototypeCommands::List(registry) => list(&build_registry(&registry, config)?, output),
        PrototypeCommands::Get { key, set, registry } => {
            get(&build_registry(&registry, config)?, &key, set, output)
        }
        PrototypeCommands::Demo(registry) => demo(&build_registry(&registry, config)?, output),
    }
}

/// Registry seeded with the built-ins plus any configured templates directory.
pub fn build_registry(
    args: &RegistryArgs,
    config: &AppConfig,
) -> CliResult<TemplateRegistry<JobConfig>> {
    let policy = args.policy.unwrap_or(config.registry.duplicate_policy);
    let dir = args
        .templates_dir
        .clone()
        .or_else(|| config.registry.templates_dir.clone());

    let registry =
        TemplateRegistry::new(Box::new(InMemoryTemplateStore::new())).with_policy(policy);
    let count = registry.register_jobs(builtin_templates::all_job_templates(dir)?)?;
    debug!(count, %policy, "registry ready");

    Ok(registry)
}

#[derive(Serialize)]
struct TemplateEntry<'a> {
    key: &'a str,
    #[serde(flatten)]
    job: &'a JobConfig,
}

fn list(registry: &TemplateRegistry<JobConfig>, output: &OutputManager) -> CliResult<()> {
    let keys = registry.keys()?;
    let jobs = keys
        .iter()
        .map(|key| registry.get(key.as_str()))
        .collect::<PatternResult<Vec<_>>>()?;

    if output.is_json() {
        let entries: Vec<_> = keys
            .iter()
            .zip(&jobs)
            .map(|(key, job)| TemplateEntry {
                key: key.as_str(),
                job,
            })
            .collect();
        return output.json(&entries);
    }

    output.header("Registered Templates:")?;
    for (key, job) in keys.iter().zip(&jobs) {
        output.print(&format!(
            "  {:<12} {} (retries={}, timeout={}s)",
            key.as_str(),
            job.name,
            job.retries,
            job.timeout
        ))?;
    }
    Ok(())
}

fn get(
    registry: &TemplateRegistry<JobConfig>,
    key: &str,
    edits: Vec<(String, String)>,
    output: &OutputManager,
) -> CliResult<()> {
    let mut job = registry.get(key)?;
    let edited = !edits.is_empty();
    for (name, value) in edits {
        job.metadata.insert(name, MetadataValue::from(value));
    }

    if output.is_json() {
        return output.json(&TemplateEntry { key, job: &job });
    }

    output.print(&job.to_string())?;
    if edited {
        output.info(&format!(
            "Edited a copy; the registered '{key}' template is unchanged"
        ))?;
    }
    Ok(())
}

/// Take two copies, edit one, and show the registry kept its original.
fn demo(registry: &TemplateRegistry<JobConfig>, output: &OutputManager) -> CliResult<()> {
    let mut job1 = registry.get("fast")?;
    let job2 = registry.get("safe")?;
    job1.metadata
        .insert("priority".into(), MetadataValue::from("critical"));
    let fresh = registry.get("fast")?;

    if output.is_json() {
        return output.json(&serde_json::json!({
            "edited_copy": job1,
            "other_template": job2,
            "fresh_copy": fresh,
        }));
    }

    output.header("Prototype registry")?;
    output.print(&format!("job1 (edited copy of 'fast'): {job1}"))?;
    output.print(&format!("job2 (copy of 'safe'):        {job2}"))?;
    output.print(&format!("fresh copy of 'fast':         {fresh}"))?;
    output.success("Edits to a copy never reach the registry")?;
    Ok(())
}
