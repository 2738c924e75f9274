// Single source of truth for all default values.

// --- Strategy ---
pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MAX_CANDIDATES: usize = 10_000;

// --- HITS ---
pub const DEFAULT_HITS_ITERATIONS: usize = 10;
pub const DEFAULT_HITS_TOLERANCE: f64 = 1e-8;
pub const DEFAULT_HITS_WEIGHTED: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
