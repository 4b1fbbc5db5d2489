#![cfg(feature = "json-config")]

use lintrc::{Environment, PolicyBuilder};
use serde_json::json;

#[test]
fn document_shape_matches_the_engine_contract() {
    let policy = PolicyBuilder::new()
        .rule("no-console", |r| r.env_default())
        .rule("curly", |r| r.env_default().arg("all"))
        .rule("max-len", |r| r.off())
        .scope(["*.spec.js"], |s| s.rule("no-console", |r| r.off()))
        .resolve(Environment::Production)
        .unwrap();

    assert_eq!(
        policy.to_json(),
        json!({
            "rules": {
                "no-console": 2,
                "curly": [2, "all"],
                "max-len": 0,
            },
            "overrides": [{
                "files": ["*.spec.js"],
                "rules": { "no-console": 0 },
            }],
        })
    );
}

#[test]
fn preset_renders_with_registry_order_and_numeric_severities() {
    let policy = lintrc::preset::policy()
        .resolve(Environment::Development)
        .unwrap();
    let doc = policy.to_json();

    let rules = doc["rules"].as_object().unwrap();
    assert_eq!(rules.len(), policy.rules().len());

    let registry_order: Vec<&str> = policy.rules().names().collect();
    let json_order: Vec<&str> = rules.keys().map(String::as_str).collect();
    assert_eq!(registry_order, json_order);

    // Severities render as their numeric codes.
    assert_eq!(doc["rules"]["no-console"], json!(1));
    assert_eq!(doc["rules"]["no-void"], json!(2));
    assert_eq!(doc["rules"]["max-len"], json!(0));
    assert_eq!(doc["overrides"].as_array().unwrap().len(), 4);
}

#[test]
fn rendering_is_deterministic() {
    let render = || {
        lintrc::preset::policy()
            .resolve(Environment::Production)
            .unwrap()
            .to_json()
            .to_string()
    };
    assert_eq!(render(), render());
}
