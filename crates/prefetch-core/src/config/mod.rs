pub mod defaults;
mod graph_config;
mod hits_config;
mod observability_config;
mod strategy_config;

pub use graph_config::GraphConfig;
pub use hits_config::HitsConfig;
pub use observability_config::ObservabilityConfig;
pub use strategy_config::StrategyConfig;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CANDIDATES_CEILING;
use crate::errors::{PrefetchError, PrefetchResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefetchConfig {
    pub strategy: StrategyConfig,
    pub graph: GraphConfig,
    pub hits: HitsConfig,
    pub observability: ObservabilityConfig,
}

impl PrefetchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> PrefetchResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| PrefetchError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PrefetchResult<()> {
        validate_threshold(self.strategy.threshold)
            .map_err(|reason| PrefetchError::ConfigError(format!("strategy.threshold: {reason}")))?;

        if self.strategy.max_candidates == 0 || self.strategy.max_candidates > MAX_CANDIDATES_CEILING {
            return Err(PrefetchError::ConfigError(format!(
                "strategy.max_candidates must be in 1..={MAX_CANDIDATES_CEILING}, got {}",
                self.strategy.max_candidates
            )));
        }
        if self.strategy.max_depth == Some(0) {
            return Err(PrefetchError::ConfigError(
                "strategy.max_depth must be greater than 0".to_string(),
            ));
        }
        if self.graph.last_n_sessions == Some(0) {
            return Err(PrefetchError::ConfigError(
                "graph.last_n_sessions must be greater than 0".to_string(),
            ));
        }
        if self.hits.iterations == 0 {
            return Err(PrefetchError::ConfigError(
                "hits.iterations must be greater than 0".to_string(),
            ));
        }
        if self.hits.tolerance.is_nan() || self.hits.tolerance < 0.0 {
            return Err(PrefetchError::ConfigError(format!(
                "hits.tolerance must be a non-negative number, got {}",
                self.hits.tolerance
            )));
        }
        Ok(())
    }
}

/// Check that a selection threshold lies in (0, 1].
///
/// Returns the human-readable reason on failure so callers can wrap it in
/// whichever error variant fits their context.
pub fn validate_threshold(threshold: f64) -> Result<(), String> {
    if threshold.is_finite() && threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(format!("must be in (0, 1], got {threshold}"))
    }
}
