use serde::{Deserialize, Serialize};

use super::defaults;

/// HITS authority pass configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HitsConfig {
    /// Maximum number of power iterations.
    pub iterations: usize,
    /// Early-exit threshold on the largest per-node score change.
    pub tolerance: f64,
    /// Weight edges by transition count instead of 1.
    pub weighted: bool,
}

impl Default for HitsConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::DEFAULT_HITS_ITERATIONS,
            tolerance: defaults::DEFAULT_HITS_TOLERANCE,
            weighted: defaults::DEFAULT_HITS_WEIGHTED,
        }
    }
}
