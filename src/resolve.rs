use std::sync::Arc;

use crate::derive::derive;
use crate::types::{
    Environment, OverrideScope, Policy, PolicyBuilder, ResolveError, RuleConfig, RuleDef,
    RuleRegistry, Severity,
};

/// Resolve a declared policy table for one environment.
///
/// Steps run in a fixed sequence: severity default, primary registry,
/// override scopes, namespace derivations, merge. Any fatal error aborts
/// the whole resolution; no partial policy escapes.
pub(crate) fn resolve(
    builder: PolicyBuilder,
    environment: Environment,
) -> Result<Policy, ResolveError> {
    // Computed once; every environment-sensitive rule in this resolution
    // sees the same level.
    let default_severity = environment.default_severity();

    let mut rules = build_registry(builder.rules, default_severity)?;
    let overrides = build_overrides(builder.scopes, default_severity)?;

    for spec in &builder.derivations {
        for (name, config) in derive(spec, &rules) {
            // Derived entries win over hand-authored ones under the same
            // name; the apply loop runs after the main table is built.
            rules.upsert(name, config);
        }
    }

    Ok(Policy {
        environment,
        default_severity,
        rules,
        overrides,
    })
}

fn build_registry(
    definitions: Vec<RuleDef>,
    default_severity: Severity,
) -> Result<RuleRegistry, ResolveError> {
    let mut registry = RuleRegistry::new();
    for def in definitions {
        let config = Arc::new(RuleConfig::new(
            def.severity.resolve(default_severity),
            def.options,
        ));
        if !registry.insert(def.name.clone(), config) {
            return Err(ResolveError::DuplicateRule { name: def.name });
        }
    }
    Ok(registry)
}

fn build_overrides(
    scopes: Vec<(Vec<String>, Vec<RuleDef>)>,
    default_severity: Severity,
) -> Result<Vec<OverrideScope>, ResolveError> {
    let mut overrides = Vec::with_capacity(scopes.len());
    for (index, (files, definitions)) in scopes.into_iter().enumerate() {
        if files.is_empty() {
            return Err(ResolveError::EmptyOverrideScope { index });
        }
        let rules = build_registry(definitions, default_severity)?;
        overrides.push(OverrideScope::new(files, rules));
    }
    Ok(overrides)
}
