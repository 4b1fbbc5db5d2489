use thiserror::Error;

/// Fatal configuration errors detected while resolving a policy.
///
/// All inputs are literal tables, so every variant is an authoring mistake
/// meant to surface immediately; nothing here is transient or retryable.
/// A failed resolution yields no partial policy.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("duplicate rule name '{name}'")]
    DuplicateRule { name: String },

    #[error("override scope {index} declares no file patterns")]
    EmptyOverrideScope { index: usize },
}
