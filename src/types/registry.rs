use std::collections::HashMap;
use std::sync::Arc;

use super::rule::RuleConfig;

/// Insertion-ordered mapping from rule name to resolved configuration.
///
/// Keys are unique; iteration follows insertion order so consumers see a
/// deterministic rule sequence. The order carries no semantic meaning to
/// the lint engine.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    entries: Vec<(String, Arc<RuleConfig>)>,
    index: HashMap<String, usize>,
}

impl RuleRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry. Returns `false` (leaving the registry
    /// unchanged) if the name is already present.
    pub(crate) fn insert(&mut self, name: String, config: Arc<RuleConfig>) -> bool {
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, config));
        true
    }

    /// Insert or replace. Replacing keeps the entry at its original
    /// position, matching assignment semantics on an ordered table.
    pub(crate) fn upsert(&mut self, name: String, config: Arc<RuleConfig>) {
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = config,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, config));
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleConfig> {
        self.get_shared(name).map(|config| config.as_ref())
    }

    pub(crate) fn get_shared(&self, name: &str) -> Option<&Arc<RuleConfig>> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleConfig)> {
        self.entries
            .iter()
            .map(|(name, config)| (name.as_str(), config.as_ref()))
    }

    /// Rule names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for RuleRegistry {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from the entries; comparing entries compares
        // both key order and config values.
        self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    fn config(severity: Severity) -> Arc<RuleConfig> {
        Arc::new(RuleConfig::new(severity, Vec::new()))
    }

    #[test]
    fn insert_preserves_order() {
        let mut registry = RuleRegistry::new();
        assert!(registry.insert("b".into(), config(Severity::Warn)));
        assert!(registry.insert("a".into(), config(Severity::Error)));
        assert!(registry.insert("c".into(), config(Severity::Off)));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn insert_rejects_duplicate() {
        let mut registry = RuleRegistry::new();
        assert!(registry.insert("no-console".into(), config(Severity::Warn)));
        assert!(!registry.insert("no-console".into(), config(Severity::Error)));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("no-console").map(RuleConfig::severity),
            Some(Severity::Warn)
        );
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut registry = RuleRegistry::new();
        registry.insert("first".into(), config(Severity::Warn));
        registry.insert("second".into(), config(Severity::Warn));
        registry.upsert("first".into(), config(Severity::Error));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(
            registry.get("first").map(RuleConfig::severity),
            Some(Severity::Error)
        );
    }

    #[test]
    fn upsert_appends_new_entry() {
        let mut registry = RuleRegistry::new();
        registry.insert("first".into(), config(Severity::Warn));
        registry.upsert("second".into(), config(Severity::Off));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn value_equality_ignores_index_layout() {
        let mut a = RuleRegistry::new();
        a.insert("x".into(), config(Severity::Warn));
        let mut b = RuleRegistry::new();
        b.insert("x".into(), config(Severity::Warn));
        assert_eq!(a, b);

        b.upsert("x".into(), config(Severity::Error));
        assert_ne!(a, b);
    }
}
