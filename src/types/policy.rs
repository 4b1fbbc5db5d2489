use std::fmt;

use super::error::ResolveError;
use super::options::OptionValue;
use super::overrides::OverrideScope;
use super::registry::RuleRegistry;
use super::rule::{RuleConfig, RuleDef};
use super::severity::{Environment, Severity, SeveritySpec};
use crate::derive::DerivationSpec;

/// Builder for a declarative lint policy table.
///
/// Rules, override scopes, and namespace derivations are declared in order
/// and resolved into an immutable [`Policy`] for one environment.
///
/// # Example
///
/// ```
/// use lintrc::{Environment, PolicyBuilder, Severity};
///
/// let policy = PolicyBuilder::new()
///     .rule("no-console", |r| r.env_default())
///     .rule("no-eq-null", |r| r.severity(Severity::Warn))
///     .scope(["*.spec.js"], |s| {
///         s.rule("no-magic-numbers", |r| r.severity(Severity::Off))
///     })
///     .resolve(Environment::Production)
///     .unwrap();
///
/// assert_eq!(policy.rule("no-console").unwrap().severity(), Severity::Error);
/// ```
#[derive(Debug, Default)]
pub struct PolicyBuilder {
    pub(crate) rules: Vec<RuleDef>,
    pub(crate) scopes: Vec<(Vec<String>, Vec<RuleDef>)>,
    pub(crate) derivations: Vec<DerivationSpec>,
}

/// Intermediate builder passed to the rule definition closure.
///
/// A rule starts on the environment-default severity; call
/// [`severity()`](Self::severity) (or a shorthand) to pin a literal level
/// and [`arg()`](Self::arg) to append option payload.
#[derive(Debug)]
pub struct RuleBuilder {
    severity: SeveritySpec,
    options: Vec<OptionValue>,
}

/// Intermediate builder for the partial rule table of one override scope.
#[derive(Debug, Default)]
pub struct ScopeBuilder {
    rules: Vec<RuleDef>,
}

impl PolicyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule. Declaration order becomes registry order.
    #[must_use]
    pub fn rule(mut self, name: &str, f: impl FnOnce(RuleBuilder) -> RuleBuilder) -> Self {
        let builder = f(RuleBuilder {
            severity: SeveritySpec::EnvironmentDefault,
            options: Vec::new(),
        });
        self.rules.push(RuleDef {
            name: name.to_owned(),
            severity: builder.severity,
            options: builder.options,
        });
        self
    }

    /// Declare an override scope: a partial rule table applied to files
    /// matching the given patterns. Scope order is preserved verbatim.
    #[must_use]
    pub fn scope<I, S>(mut self, files: I, f: impl FnOnce(ScopeBuilder) -> ScopeBuilder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let builder = f(ScopeBuilder::default());
        self.scopes.push((
            files.into_iter().map(Into::into).collect(),
            builder.rules,
        ));
        self
    }

    /// Mirror the listed stems from a source namespace into a target
    /// namespace after the primary table is built. Stems missing from the
    /// source are skipped; derived entries overwrite same-named primary
    /// entries.
    #[must_use]
    pub fn derive_namespace<I, S>(
        mut self,
        source_prefix: &str,
        target_prefix: &str,
        stems: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derivations
            .push(DerivationSpec::new(source_prefix, target_prefix, stems));
        self
    }

    /// Resolve the declared table into an immutable [`Policy`] for the
    /// given environment.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if a table declares a duplicate rule name
    /// or an override scope has no file patterns.
    pub fn resolve(self, environment: Environment) -> Result<Policy, ResolveError> {
        crate::resolve::resolve(self, environment)
    }
}

impl RuleBuilder {
    /// Pin a literal severity level.
    #[must_use]
    pub fn severity(mut self, level: Severity) -> Self {
        self.severity = SeveritySpec::Fixed(level);
        self
    }

    /// Use the resolver's environment default (warn in development, error
    /// in production). This is the initial state; calling it after a
    /// literal severity reverts to the sentinel.
    #[must_use]
    pub fn env_default(mut self) -> Self {
        self.severity = SeveritySpec::EnvironmentDefault;
        self
    }

    /// Shorthand for `severity(Severity::Off)`.
    #[must_use]
    pub fn off(self) -> Self {
        self.severity(Severity::Off)
    }

    /// Shorthand for `severity(Severity::Warn)`.
    #[must_use]
    pub fn warn(self) -> Self {
        self.severity(Severity::Warn)
    }

    /// Shorthand for `severity(Severity::Error)`.
    #[must_use]
    pub fn error(self) -> Self {
        self.severity(Severity::Error)
    }

    /// Append an opaque option value to the rule's payload.
    #[must_use]
    pub fn arg(mut self, value: impl Into<OptionValue>) -> Self {
        self.options.push(value.into());
        self
    }
}

impl ScopeBuilder {
    /// Declare a rule inside this scope's partial table.
    #[must_use]
    pub fn rule(mut self, name: &str, f: impl FnOnce(RuleBuilder) -> RuleBuilder) -> Self {
        let builder = f(RuleBuilder {
            severity: SeveritySpec::EnvironmentDefault,
            options: Vec::new(),
        });
        self.rules.push(RuleDef {
            name: name.to_owned(),
            severity: builder.severity,
            options: builder.options,
        });
        self
    }
}

/// A resolved, immutable lint policy.
///
/// Holds the merged primary registry (hand-authored plus derived entries)
/// and the ordered override scopes. A `Policy` is a value: once resolved it
/// is never mutated, and resolving the same table for the same environment
/// yields a value-equal result.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub(crate) environment: Environment,
    pub(crate) default_severity: Severity,
    pub(crate) rules: RuleRegistry,
    pub(crate) overrides: Vec<OverrideScope>,
}

impl Policy {
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The severity substituted for environment-default rules in this
    /// resolution.
    #[must_use]
    pub fn default_severity(&self) -> Severity {
        self.default_severity
    }

    /// The merged primary rule registry.
    #[must_use]
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Look up one rule's resolved configuration.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    /// Override scopes in declaration order.
    #[must_use]
    pub fn overrides(&self) -> &[OverrideScope] {
        &self.overrides
    }

    fn environment_label(&self) -> &'static str {
        match self.environment {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[cfg(feature = "json-config")]
impl Policy {
    /// Render this policy as the flat JSON configuration shape consumed
    /// by ESLint-style engines.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        crate::export::to_json(self)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Policy({}, {} rules, {} overrides)",
            self.environment_label(),
            self.rules.len(),
            self.overrides.len(),
        )
    }
}
