use super::registry::RuleRegistry;

/// A file-pattern-scoped partial rule table.
///
/// For files matching `files`, the consuming engine replaces the listed
/// rules' configuration. Pattern matching and precedence between scopes are
/// the engine's job; this crate only guarantees that scopes come out in
/// declaration order and that no scope is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideScope {
    files: Vec<String>,
    rules: RuleRegistry,
}

impl OverrideScope {
    pub(crate) fn new(files: Vec<String>, rules: RuleRegistry) -> Self {
        Self { files, rules }
    }

    /// Glob-like path patterns, in declaration order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// The partial rule table applied to matching files.
    #[must_use]
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }
}
