//! Tracing subscriber setup for prefetch services.

pub mod spans;

use prefetch_core::config::ObservabilityConfig;
use prefetch_core::constants::LOG_ENV_VAR;
use prefetch_core::errors::{PrefetchError, PrefetchResult};
use tracing_subscriber::EnvFilter;

/// Install the default subscriber: `PREFETCH_LOG`, else `info`, as JSON.
pub fn init_tracing() -> PrefetchResult<()> {
    try_init_from_config(&ObservabilityConfig::default())
}

/// Install a subscriber with an explicit filter, ignoring `PREFETCH_LOG`
/// (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> PrefetchResult<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| PrefetchError::ConfigError(format!("log filter {filter:?}: {e}")))?;
    install(filter, json)
}

/// Install a subscriber from config. `PREFETCH_LOG` still wins over
/// `log_level` when set. Fails instead of panicking if a global subscriber
/// is already installed.
pub fn try_init_from_config(config: &ObservabilityConfig) -> PrefetchResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| PrefetchError::ConfigError(format!("observability.log_level: {e}")))?;
    install(filter, config.json)
}

fn install(filter: EnvFilter, json: bool) -> PrefetchResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| PrefetchError::ConfigError(format!("tracing subscriber: {e}")))
}
