//! Registry behaviour over the real in-memory store.

use std::{sync::Arc, thread};

use patternkit_adapters::{
    InMemoryTemplateStore, builtin_templates, template_loader::FilesystemTemplateLoader,
};
use patternkit_core::prelude::*;

fn builtin_registry() -> TemplateRegistry<JobConfig> {
    let registry = TemplateRegistry::new(Box::new(InMemoryTemplateStore::new()));
    registry
        .register_jobs(builtin_templates::job_templates().unwrap())
        .unwrap();
    registry
}

fn priority(job: &JobConfig) -> Option<&str> {
    job.metadata.get("priority").and_then(MetadataValue::as_str)
}

#[test]
fn fast_and_safe_templates_are_independent_copies() {
    let registry = builtin_registry();

    let mut job1 = registry.get("fast").unwrap();
    let job2 = registry.get("safe").unwrap();
    job1.metadata
        .insert("priority".into(), MetadataValue::from("critical"));

    assert_eq!(priority(&job1), Some("critical"));
    assert_eq!(priority(&job2), Some("low"));
    assert_eq!(priority(&registry.get("fast").unwrap()), Some("high"));
}

#[test]
fn nested_metadata_is_deep_copied() {
    let registry = TemplateRegistry::new(Box::new(InMemoryTemplateStore::new()));
    let template = JobConfig::new("batch", 2, 60).with_metadata(
        "tags",
        MetadataValue::List(vec![MetadataValue::from("batch")]),
    );
    registry.register("batch", template.clone()).unwrap();

    let mut copy = registry.get("batch").unwrap();
    if let Some(tags) = copy.metadata.get_mut("tags").and_then(MetadataValue::as_list_mut) {
        tags.push(MetadataValue::from("urgent"));
    }

    assert_eq!(registry.get("batch").unwrap(), template);
}

#[test]
fn unknown_key_reports_the_key() {
    let registry = builtin_registry();
    let err = registry.get("missing").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Domain error: Template with key 'missing' not found"
    );
}

#[test]
fn keys_are_stored_exactly_as_given() {
    let registry = TemplateRegistry::new(Box::new(InMemoryTemplateStore::new()));
    let keys = [" fast", "fast ", "nightly report", "tâche", "jobs/daily", "FAST"];
    for key in keys {
        registry
            .register(key, JobConfig::new(format!("job for {key:?}"), 1, 5))
            .unwrap();
    }
    registry.register("fast", JobConfig::new("plain", 1, 5)).unwrap();

    assert_eq!(registry.len().unwrap(), keys.len() + 1);
    for key in keys {
        assert_eq!(registry.get(key).unwrap().name, format!("job for {key:?}"));
    }
    assert_eq!(registry.get("fast").unwrap().name, "plain");

    let mut listed: Vec<String> = registry.keys().unwrap().into_iter().map(String::from).collect();
    let mut expected: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    expected.push("fast".into());
    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);
}

#[test]
fn reject_policy_over_real_store() {
    let registry = builtin_registry().with_policy(DuplicatePolicy::Reject);
    let err = registry
        .register("fast", JobConfig::new("other", 0, 1))
        .unwrap_err();

    assert!(matches!(
        err,
        PatternError::Domain(patternkit_core::domain::DomainError::DuplicateTemplate { .. })
    ));
    assert_eq!(registry.get("fast").unwrap().name, "fast-job");
}

#[test]
fn concurrent_gets_and_registers() {
    let registry = Arc::new(builtin_registry());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                if i % 4 == 0 {
                    registry
                        .register(&format!("job-{i}"), JobConfig::new(format!("job-{i}"), 1, 5))
                        .unwrap();
                }
                let mut job = registry.get("fast").unwrap();
                job.retries += i;
                assert_eq!(registry.get("fast").unwrap().retries, 1);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.len().unwrap(), 2 + 4);
}

#[test]
fn loaded_templates_register_like_builtins() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("reports.toml"),
        r#"
[templates.nightly]
name = "nightly-report"
retries = 3
timeout = 120

[templates.nightly.metadata]
priority = "low"
"#,
    )
    .unwrap();

    let registry = builtin_registry();
    let loaded = FilesystemTemplateLoader::new(dir.path()).load_all().unwrap();
    registry.register_jobs(loaded).unwrap();

    let keys: Vec<String> = registry.keys().unwrap().into_iter().map(String::from).collect();
    assert_eq!(keys, ["fast", "nightly", "safe"]);
}
