//! Namespace derivation: mirror resolved rules from one namespace into
//! another.
//!
//! A derivation walks a list of rule-name stems and, for each stem present
//! under the source prefix, emits the same configuration under the target
//! prefix. Stems absent from the source are skipped rather than rejected:
//! the derived namespace is expected to be a strict subset of its source,
//! and a rule only appears there once its stem is added to the list.

use std::sync::Arc;

use crate::types::{RuleConfig, RuleRegistry};

/// Which stems to mirror from a source namespace into a target namespace.
///
/// Prefixes join with stems as `prefix/stem`; an empty prefix means the
/// bare stem (the base, unprefixed namespace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationSpec {
    pub source_prefix: String,
    pub target_prefix: String,
    pub stems: Vec<String>,
}

impl DerivationSpec {
    pub fn new<I, S>(source_prefix: &str, target_prefix: &str, stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source_prefix: source_prefix.to_owned(),
            target_prefix: target_prefix.to_owned(),
            stems: stems.into_iter().map(Into::into).collect(),
        }
    }
}

fn qualified(prefix: &str, stem: &str) -> String {
    if prefix.is_empty() {
        stem.to_owned()
    } else {
        format!("{prefix}/{stem}")
    }
}

/// Mirror each present stem from `source` into the target namespace.
///
/// Output follows stem order, not source registry order. Configs are
/// aliased, not cloned; they are immutable, so sharing is safe. Running
/// the same derivation twice yields an identical result.
#[must_use]
pub fn derive(spec: &DerivationSpec, source: &RuleRegistry) -> Vec<(String, Arc<RuleConfig>)> {
    let mut derived = Vec::with_capacity(spec.stems.len());
    for stem in &spec.stems {
        let source_name = qualified(&spec.source_prefix, stem);
        match source.get_shared(&source_name) {
            Some(config) => {
                derived.push((qualified(&spec.target_prefix, stem), Arc::clone(config)));
            }
            None => {
                tracing::debug!(
                    stem = %stem,
                    source = %source_name,
                    "derivation stem not in source namespace, skipped"
                );
            }
        }
    }
    derived
}
