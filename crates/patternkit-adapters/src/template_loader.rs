//! Filesystem-based job template loader.
//!
//! Reads every `*.toml` file under a directory (recursively) and turns its
//! `[templates.<key>]` tables into `(TemplateKey, JobConfig)` pairs.
//!
//! # File format
//!
//! ```toml
//! [templates.nightly]
//! name    = "nightly-report"
//! retries = 3
//! timeout = 120
//!
//! [templates.nightly.metadata]
//! priority = "low"
//! owners   = ["data", "ops"]
//! ```
//!
//! Keys in template files are restricted to ASCII letters, digits, `-`, `_`
//! and `.`, so every file key is also a bare TOML table name and a plain
//! command-line argument. The registry itself accepts any non-empty string.
//!
//! A file is loaded as a unit: if it fails to parse, or any key or job in it
//! is invalid, the whole file is skipped with a `WARN` log and the rest of
//! the directory still loads.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use patternkit_core::domain::{DomainError, DomainValidator as validator, JobConfig, TemplateKey};

/// Deserialised representation of one template file.
#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(default)]
    templates: BTreeMap<String, JobConfig>,
}

/// Loads job templates from a directory tree of TOML files.
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    ///
    /// The directory does not need to exist yet; [`load_all`](Self::load_all)
    /// reports it.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Load every valid template under the directory.
    ///
    /// Files are visited in path order, so when two files define the same
    /// key the later path wins once registered.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidTemplate`] if the directory is missing or
    /// cannot be walked.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<(TemplateKey, JobConfig)>, DomainError> {
        if !self.templates_dir.is_dir() {
            return Err(DomainError::InvalidTemplate(format!(
                "templates directory not found: {}",
                self.templates_dir.display()
            )));
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .map_err(|e| DomainError::InvalidTemplate(format!("directory walk error: {e}")))?;
            let path = entry.path();

            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }

            match self.load_file(path) {
                Ok(loaded) => {
                    debug!(file = %path.display(), count = loaded.len(), "loaded template file");
                    templates.extend(loaded);
                }
                Err(e) => {
                    warn!(
                        file  = %path.display(),
                        error = %e,
                        "skipping template file due to load error"
                    );
                }
            }
        }

        debug!(count = templates.len(), "finished loading templates");
        Ok(templates)
    }

    fn load_file(&self, path: &Path) -> Result<Vec<(TemplateKey, JobConfig)>, DomainError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidTemplate(format!("failed to read '{}': {e}", path.display()))
        })?;

        let file: TemplateFile = toml::from_str(&raw).map_err(|e| {
            DomainError::InvalidTemplate(format!("failed to parse '{}': {e}", path.display()))
        })?;

        file.templates
            .into_iter()
            .map(|(key, job)| {
                let key = file_key(key)?;
                validator::validate_job(&job)?;
                Ok((key, job))
            })
            .collect()
    }
}

fn file_key(key: String) -> Result<TemplateKey, DomainError> {
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(DomainError::InvalidKey {
            reason: format!("character '{bad}' is not allowed in a template file key"),
            key,
        });
    }
    TemplateKey::new(key)
}

#[cfg(test)]
mod tests {
    use patternkit_core::domain::MetadataValue;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    const NIGHTLY: &str = r#"
[templates.nightly]
name = "nightly-report"
retries = 3
timeout = 120

[templates.nightly.metadata]
priority = "low"
owners = ["data", "ops"]
limits = { cpu = 2, memory = "4Gi" }
"#;

    #[test]
    fn load_all_returns_error_for_missing_dir() {
        let loader = FilesystemTemplateLoader::new("/no/such/dir");
        assert!(matches!(
            loader.load_all(),
            Err(DomainError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn loads_templates_with_nested_metadata() {
        let root = TempDir::new().unwrap();
        write(root.path(), "nightly.toml", NIGHTLY);

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();
        assert_eq!(templates.len(), 1);

        let (key, job) = &templates[0];
        assert_eq!(key.as_str(), "nightly");
        assert_eq!(job.retries, 3);
        assert_eq!(
            job.metadata.get("priority").and_then(MetadataValue::as_str),
            Some("low")
        );
        assert!(matches!(job.metadata.get("owners"), Some(MetadataValue::List(v)) if v.len() == 2));
        assert!(matches!(job.metadata.get("limits"), Some(MetadataValue::Map(_))));
    }

    #[test]
    fn walks_subdirectories_and_ignores_other_files() {
        let root = TempDir::new().unwrap();
        write(root.path(), "team/a.toml", NIGHTLY);
        write(root.path(), "README.md", "# not a template");

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();
        assert_eq!(templates.len(), 1);
    }

    #[test]
    fn bad_file_is_skipped_but_others_load() {
        let root = TempDir::new().unwrap();
        write(root.path(), "a_broken.toml", "[templates.x\nname = ");
        write(root.path(), "b_invalid_job.toml", "[templates.y]\nname = \"\"\nretries = 1\ntimeout = 5\n");
        write(root.path(), "c_good.toml", NIGHTLY);

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();
        let keys: Vec<&str> = templates.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["nightly"]);
    }

    #[test]
    fn invalid_key_skips_file() {
        let root = TempDir::new().unwrap();
        write(
            root.path(),
            "spaces.toml",
            "[templates.\"two words\"]\nname = \"x\"\nretries = 1\ntimeout = 5\n",
        );

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();
        assert!(templates.is_empty());
    }

    #[test]
    fn file_keys_are_bare_table_names() {
        assert_eq!(file_key("nightly-report_v2.1".into()).unwrap().as_str(), "nightly-report_v2.1");
        for bad in [" fast", "tâche", "jobs/daily", ""] {
            assert!(
                matches!(file_key(bad.into()), Err(DomainError::InvalidKey { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn files_load_in_path_order() {
        let root = TempDir::new().unwrap();
        write(root.path(), "b.toml", "[templates.k]\nname = \"from-b\"\nretries = 1\ntimeout = 5\n");
        write(root.path(), "a.toml", "[templates.k]\nname = \"from-a\"\nretries = 1\ntimeout = 5\n");

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();
        let names: Vec<&str> = templates.iter().map(|(_, j)| j.name.as_str()).collect();
        assert_eq!(names, ["from-a", "from-b"]);
    }
}
