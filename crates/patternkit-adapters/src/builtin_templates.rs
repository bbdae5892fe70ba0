//! Job templates that ship with Patternkit.
//!
//! # Template resolution
//!
//! [`all_job_templates`] starts from the two built-ins and then layers on
//! anything found in a templates directory, so a file can override `fast`
//! or `safe` by reusing the key. The caller picks the directory (the CLI
//! reads `registry.templates_dir`); without one only the built-ins are
//! returned.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use patternkit_core::{
    domain::{DomainError, JobConfig, TemplateKey},
    error::PatternResult,
};

use crate::template_loader::FilesystemTemplateLoader;

/// Quick, low-effort job: one retry, short timeout.
pub fn fast_job() -> JobConfig {
    JobConfig::new("fast-job", 1, 5).with_metadata("priority", "high")
}

/// Patient job: more retries, long timeout.
pub fn safe_job() -> JobConfig {
    JobConfig::new("safe-job", 5, 30).with_metadata("priority", "low")
}

/// The built-in `(key, template)` pairs.
pub fn job_templates() -> Result<Vec<(TemplateKey, JobConfig)>, DomainError> {
    Ok(vec![
        (TemplateKey::new("fast")?, fast_job()),
        (TemplateKey::new("safe")?, safe_job()),
    ])
}

/// Built-ins followed by every template found in the templates directory.
///
/// Later entries win when keys repeat.
///
/// # Errors
///
/// Fails if a directory was given and it does not exist.
#[instrument]
pub fn all_job_templates(
    templates_dir: Option<PathBuf>,
) -> PatternResult<Vec<(TemplateKey, JobConfig)>> {
    let mut templates = job_templates()?;

    match templates_dir {
        Some(dir) => {
            let loaded = FilesystemTemplateLoader::new(&dir).load_all()?;
            info!(dir = %dir.display(), count = loaded.len(), "loaded templates from directory");
            templates.extend(loaded);
        }
        None => debug!("no templates directory configured; using built-ins only"),
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use patternkit_core::domain::MetadataValue;

    use super::*;

    #[test]
    fn builtins_match_documented_values() {
        let templates = job_templates().unwrap();
        assert_eq!(templates.len(), 2);

        let (key, fast) = &templates[0];
        assert_eq!(key.as_str(), "fast");
        assert_eq!((fast.name.as_str(), fast.retries, fast.timeout), ("fast-job", 1, 5));
        assert_eq!(
            fast.metadata.get("priority").and_then(MetadataValue::as_str),
            Some("high")
        );

        let (key, safe) = &templates[1];
        assert_eq!(key.as_str(), "safe");
        assert_eq!((safe.name.as_str(), safe.retries, safe.timeout), ("safe-job", 5, 30));
    }

    #[test]
    fn builtins_are_valid() {
        for (_, job) in job_templates().unwrap() {
            job.validate().unwrap();
        }
    }

    #[test]
    fn explicit_directory_is_layered_after_builtins() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("jobs.toml"),
            "[templates.fast]\nname = \"override\"\nretries = 0\ntimeout = 1\n",
        )
        .unwrap();

        let templates = all_job_templates(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(templates.len(), 3);
        assert_eq!(templates[2].1.name, "override");
    }

    #[test]
    fn without_directory_only_builtins_are_returned() {
        let keys: Vec<String> = all_job_templates(None)
            .unwrap()
            .into_iter()
            .map(|(key, _)| key.into())
            .collect();
        assert_eq!(keys, ["fast", "safe"]);
    }

    #[test]
    fn missing_explicit_directory_is_an_error() {
        assert!(all_job_templates(Some(PathBuf::from("/definitely/not/here"))).is_err());
    }
}
