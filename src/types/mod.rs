mod error;
mod options;
mod overrides;
mod policy;
mod registry;
mod rule;
mod severity;

pub use error::ResolveError;
pub use options::{list, record, OptionValue};
pub use overrides::OverrideScope;
pub use policy::{Policy, PolicyBuilder, RuleBuilder, ScopeBuilder};
pub use registry::RuleRegistry;
pub use rule::{RuleConfig, RuleDef};
pub use severity::{Environment, Severity, SeveritySpec};
