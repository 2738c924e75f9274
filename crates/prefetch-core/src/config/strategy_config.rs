use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking strategy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Fraction of the candidate set to keep, in (0, 1].
    pub threshold: f64,
    /// Stop discovering candidates once this many are collected.
    pub max_candidates: usize,
    /// Maximum hops from the start node. `None` = unbounded.
    pub max_depth: Option<usize>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_THRESHOLD,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            max_depth: None,
        }
    }
}
