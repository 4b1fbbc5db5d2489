use super::options::OptionValue;
use super::severity::{Severity, SeveritySpec};

/// A single rule declaration in a literal policy table.
///
/// Declarations are created via [`PolicyBuilder`](super::PolicyBuilder) and
/// hold the severity as written (literal or environment-default sentinel);
/// the sentinel is substituted when the table is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDef {
    pub name: String,
    pub severity: SeveritySpec,
    pub options: Vec<OptionValue>,
}

/// Resolved configuration for one rule: a concrete severity plus the
/// opaque option payload.
///
/// Configs are immutable once built and shared by reference between the
/// primary registry and derived namespaces.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfig {
    severity: Severity,
    options: Vec<OptionValue>,
}

impl RuleConfig {
    pub(crate) fn new(severity: Severity, options: Vec<OptionValue>) -> Self {
        Self { severity, options }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Option payload in declaration order. Empty for bare-severity rules.
    #[must_use]
    pub fn options(&self) -> &[OptionValue] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn bare_config_has_no_options() {
        let config = RuleConfig::new(Severity::Warn, Vec::new());
        assert_eq!(config.severity(), Severity::Warn);
        assert!(config.options().is_empty());
    }

    #[test]
    fn config_keeps_option_order() {
        let config = RuleConfig::new(
            Severity::Error,
            vec!["always".into(), list(["first", "second"])],
        );
        assert_eq!(config.options().len(), 2);
        assert_eq!(config.options()[0], "always".into());
    }
}
