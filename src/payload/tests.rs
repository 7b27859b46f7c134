//! Tests for payload parsing, validation, and discovery.

use super::*;
use crate::error::PrompterError;
use crate::test_support::Fixture;
use serde_yaml::Value;
use std::path::Path;

fn load(fixture: &Fixture) -> crate::error::Result<PayloadRegistry> {
    PayloadRegistry::load(
        fixture.payloads_dir(),
        &DiscoveryOptions::default(),
        &PayloadDefaults::default(),
    )
}

// ============================================================================
// RawPayload
// ============================================================================

#[test]
fn test_parse_mapping() {
    let raw = RawPayload::parse("p1", "p1.yaml", "prompt: a cat\nsteps: 30\n").unwrap();

    assert_eq!(raw.name(), "p1");
    assert_eq!(raw.path(), Path::new("p1.yaml"));
    assert_eq!(raw.fields().get("steps"), Some(&Value::from(30)));
}

#[test]
fn test_parse_empty_file_is_empty_mapping() {
    let raw = RawPayload::parse("p1", "p1.yaml", "").unwrap();
    assert!(raw.fields().is_empty());
}

#[test]
fn test_parse_invalid_yaml_is_parse_error() {
    let err = RawPayload::parse("p1", "p1.yaml", "prompt: [unclosed").unwrap_err();
    match err {
        PrompterError::ParseError { path, .. } => assert_eq!(path, Path::new("p1.yaml")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_non_mapping_is_validation_error() {
    let err = RawPayload::parse("p1", "p1.yaml", "- a\n- b\n").unwrap_err();
    assert!(matches!(err, PrompterError::ValidationError { .. }));
    assert!(err.to_string().contains("expected a mapping, found a sequence"));
}

#[test]
fn test_missing_prompt_fails_whatever_else_is_present() {
    for yaml in [
        "",
        "steps: 20",
        "neg_prompt: blurry\nseed: 5\nwidth: 768\nheight: 768\nsampler: Euler a",
        "Prompt: wrong case",
    ] {
        let raw = RawPayload::parse("p1", "payloads/p1.yaml", yaml).unwrap();
        let err = raw.validate().unwrap_err();
        match &err {
            PrompterError::ValidationError { path, reason } => {
                assert_eq!(path, Path::new("payloads/p1.yaml"));
                assert!(reason.contains("prompt"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

#[test]
fn test_non_string_prompt_fails() {
    let raw = RawPayload::parse("p1", "p1.yaml", "prompt: 42").unwrap();
    let err = raw.validate().unwrap_err();
    assert!(err.to_string().contains("must be a string, found a number"));
}

#[test]
fn test_empty_prompt_fails() {
    let raw = RawPayload::parse("p1", "p1.yaml", "prompt: ''").unwrap();
    let err = raw.validate().unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn test_normalize_fills_defaults_without_touching_raw() {
    let raw = RawPayload::parse("p1", "p1.yaml", "prompt: a cat\nwidth: 768\n").unwrap();
    let payload = raw.normalize(&PayloadDefaults::default()).unwrap();

    assert_eq!(payload.name(), "p1");
    assert_eq!(payload.prompt(), "a cat");
    assert_eq!(payload.get("width"), Some(&Value::from(768)));
    assert_eq!(payload.get("height"), Some(&Value::from(512)));
    assert_eq!(raw.fields().len(), 2);
}

#[test]
fn test_payload_has_no_path_key() {
    let raw = RawPayload::parse("p1", "p1.yaml", "prompt: a cat").unwrap();
    let payload = raw.normalize(&PayloadDefaults::default()).unwrap();

    assert!(payload.get("path").is_none());
    assert_eq!(payload.path(), Path::new("p1.yaml"));
}

#[test]
fn test_user_path_key_is_passed_through() {
    // A user-authored `path` key is payload data, not bookkeeping.
    let raw = RawPayload::parse("p1", "p1.yaml", "prompt: a cat\npath: /tmp/out").unwrap();
    let payload = raw.normalize(&PayloadDefaults::default()).unwrap();

    assert_eq!(payload.get("path"), Some(&Value::from("/tmp/out")));
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_missing_payloads_dir_is_configuration_error() {
    let fixture = Fixture::without_dirs();
    let err = load(&fixture).unwrap_err();

    assert!(matches!(err, PrompterError::ConfigurationError(_)));
    assert!(err.to_string().contains("payloads directory"));
}

#[test]
fn test_payloads_dir_that_is_a_file_is_configuration_error() {
    let fixture = Fixture::without_dirs();
    std::fs::write(fixture.payloads_dir(), "not a dir").unwrap();

    let err = load(&fixture).unwrap_err();
    assert!(matches!(err, PrompterError::ConfigurationError(_)));
}

#[test]
fn test_empty_payloads_dir_gives_empty_registry() {
    let fixture = Fixture::new();
    let registry = load(&fixture).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_templates_and_other_files_are_skipped() {
    let fixture = Fixture::new();
    fixture.write_payload("p1.yaml", "prompt: one");
    fixture.write_payload("p2.yml", "prompt: two");
    fixture.write_payload("base.tmpl.yaml", "steps: 20");
    fixture.write_payload("notes.md", "prompt: nope");

    let files =
        discover_payload_files(fixture.payloads_dir(), &DiscoveryOptions::default()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["p1.yaml", "p2.yml"]);

    let registry = load(&fixture).unwrap();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["p1", "p2"]);
}

#[test]
fn test_template_without_prompt_does_not_fail_load() {
    let fixture = Fixture::new();
    fixture.write_payload("p1.yaml", "prompt: one");
    fixture.write_payload("skeleton.tmpl.yaml", "neg_prompt: only");

    assert_eq!(load(&fixture).unwrap().len(), 1);
}

#[test]
fn test_same_stem_in_two_files_is_configuration_error() {
    let fixture = Fixture::new();
    let yaml = fixture.write_payload("p1.yaml", "prompt: from yaml");
    let yml = fixture.write_payload("p1.yml", "prompt: from yml");

    let err = load(&fixture).unwrap_err();
    assert!(matches!(err, PrompterError::ConfigurationError(_)));

    let message = err.to_string();
    assert!(message.contains("'p1'"), "{}", message);
    assert!(message.contains(&yaml.display().to_string()), "{}", message);
    assert!(message.contains(&yml.display().to_string()), "{}", message);
}

#[test]
fn test_distinct_stems_across_extensions_all_load() {
    let fixture = Fixture::new();
    fixture.write_payload("p1.yaml", "prompt: one");
    fixture.write_payload("p2.yml", "prompt: two");

    let registry = load(&fixture).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_registry_is_ordered_by_name() {
    let fixture = Fixture::new();
    fixture.write_payload("zebra.yaml", "prompt: z");
    fixture.write_payload("apple.yaml", "prompt: a");
    fixture.write_payload("mango.yaml", "prompt: m");

    let registry = load(&fixture).unwrap();
    let prompts: Vec<_> = registry.iter().map(|p| p.prompt()).collect();
    assert_eq!(prompts, vec!["a", "m", "z"]);
}

#[test]
fn test_invalid_payload_aborts_load_and_names_file() {
    let fixture = Fixture::new();
    fixture.write_payload("good.yaml", "prompt: fine");
    let bad = fixture.write_payload("bad.yaml", "steps: 20");

    let err = load(&fixture).unwrap_err();
    match err {
        PrompterError::ValidationError { path, .. } => assert_eq!(path, bad),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_registry_payloads_are_defaulted() {
    let fixture = Fixture::new();
    fixture.write_payload("p1.yaml", "prompt: a cat\nsteps: 40\n");

    let registry = PayloadRegistry::load(
        fixture.payloads_dir(),
        &DiscoveryOptions::default(),
        &PayloadDefaults::with_batch_size(Some(3)),
    )
    .unwrap();

    let payload = registry.get("p1").unwrap();
    assert_eq!(payload.get("steps"), Some(&Value::from(40)));
    assert_eq!(payload.get("batch_size"), Some(&Value::from(3)));
    assert_eq!(payload.get("sampler"), Some(&Value::from("Euler")));
}

#[test]
fn test_names_filter_loads_only_selected() {
    let fixture = Fixture::new();
    fixture.write_payload("p1.yaml", "prompt: one");
    fixture.write_payload("p2.yaml", "prompt: two");
    // Unselected files are never parsed.
    fixture.write_payload("broken.yaml", "prompt: [unclosed");

    let options = DiscoveryOptions {
        names: Some(vec!["p2".to_string()]),
        ..DiscoveryOptions::default()
    };
    let registry =
        PayloadRegistry::load(fixture.payloads_dir(), &options, &PayloadDefaults::default())
            .unwrap();

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["p2"]);
}

#[test]
fn test_names_filter_unknown_name_is_configuration_error() {
    let fixture = Fixture::new();
    fixture.write_payload("p1.yaml", "prompt: one");

    let options = DiscoveryOptions {
        names: Some(vec!["p1".to_string(), "ghost".to_string()]),
        ..DiscoveryOptions::default()
    };
    let err = PayloadRegistry::load(fixture.payloads_dir(), &options, &PayloadDefaults::default())
        .unwrap_err();

    assert!(matches!(err, PrompterError::ConfigurationError(_)));
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn test_custom_template_globs() {
    let fixture = Fixture::new();
    fixture.write_payload("p1.yaml", "prompt: one");
    fixture.write_payload("draft-p2.yaml", "prompt: two");

    let options = DiscoveryOptions {
        template_globs: vec!["draft-*".to_string()],
        ..DiscoveryOptions::default()
    };
    let registry =
        PayloadRegistry::load(fixture.payloads_dir(), &options, &PayloadDefaults::default())
            .unwrap();

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["p1"]);
}

// ============================================================================
// RenderedPayload
// ============================================================================

#[test]
fn test_rendered_payload_serializes_as_bare_mapping() {
    let fields: serde_yaml::Mapping = serde_yaml::from_str("prompt: a red cat\nsteps: 20\n").unwrap();
    let rendered = RenderedPayload::new("p1", fields);

    let json = serde_json::to_value(&rendered).unwrap();
    assert_eq!(json, serde_json::json!({"prompt": "a red cat", "steps": 20}));
    assert_eq!(rendered.name(), "p1");
    assert_eq!(rendered.prompt(), "a red cat");
}
