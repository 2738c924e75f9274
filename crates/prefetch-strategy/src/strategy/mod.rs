//! Prefetching strategies.

pub mod budget;
pub mod expansion;
mod hits_strategy;

pub use expansion::{ExpansionBounds, RankedCandidate};
pub use hits_strategy::HitsStrategy;

use prefetch_core::errors::PrefetchResult;
use prefetch_core::models::{ActivityKey, ResourceId};
use prefetch_core::traits::{IActivityGraph, IResourceSelector};

/// A policy that turns the current screen into a list of resources to fetch.
pub trait PrefetchStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Resources to prefetch while the user is on `start`, using the
    /// strategy's configured parameters.
    fn top_urls_for(
        &self,
        graph: &dyn IActivityGraph,
        selector: &dyn IResourceSelector,
        start: ActivityKey<'_>,
    ) -> PrefetchResult<Vec<ResourceId>>;
}
