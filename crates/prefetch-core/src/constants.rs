/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable read by the tracing subscriber for filtering.
pub const LOG_ENV_VAR: &str = "PREFETCH_LOG";

/// Hard ceiling for `strategy.max_candidates`, regardless of config.
pub const MAX_CANDIDATES_CEILING: usize = 1_000_000;
