//! PrefetchEngine: owns the graph, the ranking strategy, and the resource
//! selector, and runs every query against one consistent graph snapshot.

use prefetch_core::config::{HitsConfig, PrefetchConfig};
use prefetch_core::errors::PrefetchResult;
use prefetch_core::models::{
    ActivityId, ActivityKey, ActivityRecord, ResourceId, TransitionRecord,
};
use prefetch_core::traits::IResourceSelector;
use prefetch_graph::{aggregation, GraphManager, HitsReport};

use crate::strategy::{HitsStrategy, PrefetchStrategy};

/// The main prefetching engine.
pub struct PrefetchEngine {
    /// Thread-safe graph manager.
    graph: GraphManager,
    /// Ranking strategy.
    strategy: HitsStrategy,
    /// Authority pass settings.
    hits: HitsConfig,
    /// Expands a selected navigation into resources.
    selector: Box<dyn IResourceSelector>,
}

impl PrefetchEngine {
    /// Create an engine over an empty graph.
    pub fn new(config: &PrefetchConfig, selector: Box<dyn IResourceSelector>) -> Self {
        Self::with_graph(config, GraphManager::new(), selector)
    }

    /// Create an engine over an existing (possibly shared) graph.
    pub fn with_graph(
        config: &PrefetchConfig,
        graph: GraphManager,
        selector: Box<dyn IResourceSelector>,
    ) -> Self {
        Self {
            graph,
            strategy: HitsStrategy::new(config.strategy.clone()),
            hits: config.hits.clone(),
            selector,
        }
    }

    /// Build the graph from persisted history and compute authorities once.
    pub fn from_history(
        config: &PrefetchConfig,
        activities: &[ActivityRecord],
        transitions: &[TransitionRecord],
        selector: Box<dyn IResourceSelector>,
    ) -> PrefetchResult<Self> {
        config.validate()?;
        let graph =
            aggregation::build_graph(activities, transitions, config.graph.session_window())?;
        let engine = Self::with_graph(config, GraphManager::from_graph(graph), selector);
        engine.recompute_authorities()?;
        Ok(engine)
    }

    /// Get a reference to the graph manager.
    pub fn graph(&self) -> &GraphManager {
        &self.graph
    }

    pub fn strategy(&self) -> &HitsStrategy {
        &self.strategy
    }

    /// Resources to prefetch for `start` with the configured threshold.
    pub fn top_urls_for<'k>(
        &self,
        start: impl Into<ActivityKey<'k>>,
    ) -> PrefetchResult<Vec<ResourceId>> {
        let start = start.into();
        self.graph
            .read(|graph| self.strategy.top_urls_for(graph, self.selector.as_ref(), start))?
    }

    /// Resources to prefetch for `start` with an explicit threshold.
    pub fn select_top_candidates<'k>(
        &self,
        start: impl Into<ActivityKey<'k>>,
        threshold: f64,
    ) -> PrefetchResult<Vec<ResourceId>> {
        let start = start.into();
        self.graph.read(|graph| {
            self.strategy
                .select_top_candidates(graph, self.selector.as_ref(), start, threshold)
        })?
    }

    /// Record one navigation observed at runtime.
    pub fn record_navigation(&self, source: &str, destination: &str) -> PrefetchResult<()> {
        self.graph.record_navigation(source, destination)
    }

    /// Add `count` observations of an already registered transition.
    pub fn record_transition(
        &self,
        source: ActivityId,
        destination: ActivityId,
        count: u64,
    ) -> PrefetchResult<()> {
        self.graph.record_transition(source, destination, count)
    }

    /// Rerun the HITS pass and publish the new scores atomically.
    pub fn recompute_authorities(&self) -> PrefetchResult<HitsReport> {
        self.graph.recompute_authorities(&self.hits)
    }

    /// (node count, edge count).
    pub fn stats(&self) -> PrefetchResult<(usize, usize)> {
        self.graph.read(|g| (g.node_count(), g.edge_count()))
    }
}
