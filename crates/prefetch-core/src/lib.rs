//! # prefetch-core
//!
//! Foundation crate for navigation-aware prefetching.
//! Defines the activity graph types, collaborator traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PrefetchConfig;
pub use errors::{PrefetchError, PrefetchResult};
pub use models::{ActivityId, ActivityKey, ActivityNode, ResourceId, SuccessorAggregate};
pub use traits::{IActivityGraph, IResourceSelector};
