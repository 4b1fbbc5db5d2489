mod derive;
#[cfg(feature = "json-config")]
mod export;
mod resolve;
mod types;

pub mod preset;

pub use derive::{derive, DerivationSpec};
pub use types::{
    list, record, Environment, OptionValue, OverrideScope, Policy, PolicyBuilder, ResolveError,
    RuleBuilder, RuleConfig, RuleDef, RuleRegistry, ScopeBuilder, Severity, SeveritySpec,
};
