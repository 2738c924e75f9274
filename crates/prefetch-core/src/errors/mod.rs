mod graph_error;

pub use graph_error::GraphError;

/// Crate-wide result alias.
pub type PrefetchResult<T> = Result<T, PrefetchError>;

/// Top-level error for every prefetching operation.
#[derive(Debug, thiserror::Error)]
pub enum PrefetchError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl PrefetchError {
    /// Shorthand for an unknown activity.
    pub fn activity_not_found(key: impl ToString) -> Self {
        Self::NotFound {
            kind: "activity",
            key: key.to_string(),
        }
    }

    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
