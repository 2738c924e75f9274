//! Span definitions per operation: ranking and the authority pass.

/// Create a ranking span.
#[macro_export]
macro_rules! ranking_span {
    ($start:expr, $threshold:expr) => {
        tracing::debug_span!("prefetch.ranking", start = %$start, threshold = $threshold)
    };
}

/// Create a HITS span.
#[macro_export]
macro_rules! hits_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("prefetch.hits", nodes = $nodes, edges = $edges)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RANKING: &str = "prefetch.ranking";
    pub const HITS: &str = "prefetch.hits";
}
