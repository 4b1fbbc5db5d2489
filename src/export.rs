//! JSON rendering of a resolved policy.
//!
//! Produces the flat configuration shape consumed by ESLint-style engines:
//!
//! ```text
//! {
//!   "rules": { "<name>": <severity> | [<severity>, ...options], ... },
//!   "overrides": [ { "files": [...], "rules": { ... } }, ... ]
//! }
//! ```
//!
//! Severities are emitted as their numeric codes (0/1/2). Key order
//! follows registry order, so the same policy always renders to the same
//! document.

use serde_json::{Map, Value as Json};

use crate::types::{OptionValue, Policy, RuleConfig, RuleRegistry};

/// Render a [`Policy`] as a JSON configuration document.
#[must_use]
pub(crate) fn to_json(policy: &Policy) -> Json {
    let mut root = Map::new();
    root.insert("rules".to_owned(), rules_json(policy.rules()));
    root.insert(
        "overrides".to_owned(),
        Json::Array(
            policy
                .overrides()
                .iter()
                .map(|scope| {
                    let mut entry = Map::new();
                    entry.insert(
                        "files".to_owned(),
                        Json::Array(
                            scope
                                .files()
                                .iter()
                                .map(|pattern| Json::String(pattern.clone()))
                                .collect(),
                        ),
                    );
                    entry.insert("rules".to_owned(), rules_json(scope.rules()));
                    Json::Object(entry)
                })
                .collect(),
        ),
    );
    Json::Object(root)
}

fn rules_json(registry: &RuleRegistry) -> Json {
    let mut rules = Map::new();
    for (name, config) in registry.iter() {
        rules.insert(name.to_owned(), rule_entry(config));
    }
    Json::Object(rules)
}

fn rule_entry(config: &RuleConfig) -> Json {
    let severity = Json::from(config.severity().code());
    if config.options().is_empty() {
        return severity;
    }
    let mut entry = Vec::with_capacity(config.options().len() + 1);
    entry.push(severity);
    entry.extend(config.options().iter().map(option_json));
    Json::Array(entry)
}

fn option_json(value: &OptionValue) -> Json {
    match value {
        OptionValue::Int(v) => Json::from(*v),
        // Non-finite floats have no JSON form; render as null.
        OptionValue::Float(v) => serde_json::Number::from_f64(*v).map_or(Json::Null, Json::Number),
        OptionValue::Bool(v) => Json::Bool(*v),
        OptionValue::String(v) => Json::String(v.clone()),
        OptionValue::List(items) => Json::Array(items.iter().map(option_json).collect()),
        OptionValue::Record(fields) => Json::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), option_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{record, Environment, PolicyBuilder, Severity};

    #[test]
    fn bare_rule_renders_as_number() {
        let policy = PolicyBuilder::new()
            .rule("no-void", |r| r.error())
            .resolve(Environment::Development)
            .unwrap();

        assert_eq!(policy.to_json()["rules"]["no-void"], json!(2));
    }

    #[test]
    fn rule_with_options_renders_as_array() {
        let policy = PolicyBuilder::new()
            .rule("curly", |r| r.env_default().arg("all"))
            .rule("comma-spacing", |r| {
                r.warn().arg(record([("before", false), ("after", true)]))
            })
            .resolve(Environment::Production)
            .unwrap();

        let rules = &policy.to_json()["rules"];
        assert_eq!(rules["curly"], json!([2, "all"]));
        assert_eq!(
            rules["comma-spacing"],
            json!([1, { "before": false, "after": true }])
        );
    }

    #[test]
    fn rule_keys_follow_registry_order() {
        let policy = PolicyBuilder::new()
            .rule("semi", |r| r.warn())
            .rule("camelcase", |r| r.warn())
            .rule("indent", |r| r.warn())
            .resolve(Environment::Development)
            .unwrap();

        let rules = policy.to_json()["rules"].as_object().unwrap().clone();
        let keys: Vec<&String> = rules.keys().collect();
        assert_eq!(keys, ["semi", "camelcase", "indent"]);
    }

    #[test]
    fn overrides_render_files_and_partial_rules() {
        let policy = PolicyBuilder::new()
            .rule("no-magic-numbers", |r| r.warn())
            .scope(["*.spec.js", "tests/**/*.js"], |s| {
                s.rule("no-magic-numbers", |r| r.severity(Severity::Off))
            })
            .resolve(Environment::Development)
            .unwrap();

        assert_eq!(
            policy.to_json()["overrides"],
            json!([{
                "files": ["*.spec.js", "tests/**/*.js"],
                "rules": { "no-magic-numbers": 0 }
            }])
        );
    }
}
