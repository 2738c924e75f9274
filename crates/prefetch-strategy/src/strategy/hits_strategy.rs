//! HITS strategy: rank every reachable screen by authority and prefetch the
//! resources of the top fraction.

use std::cmp::Ordering;
use std::time::Instant;

use prefetch_core::config::{validate_threshold, StrategyConfig};
use prefetch_core::errors::{PrefetchError, PrefetchResult};
use prefetch_core::models::{ActivityKey, ActivityNode, ResourceId};
use prefetch_core::traits::{IActivityGraph, IResourceSelector};
use prefetch_observability::ranking_span;
use tracing::debug;

use super::budget::selection_size;
use super::expansion::{self, ExpansionBounds, RankedCandidate};
use super::PrefetchStrategy;

/// Authority-ranked selection over the reachable successor set.
#[derive(Debug, Clone, Default)]
pub struct HitsStrategy {
    config: StrategyConfig,
}

impl HitsStrategy {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    /// Same bounds as the default config, different default threshold.
    pub fn with_threshold(threshold: f64) -> PrefetchResult<Self> {
        check_threshold(threshold)?;
        Ok(Self {
            config: StrategyConfig {
                threshold,
                ..StrategyConfig::default()
            },
        })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Discover and sort candidates (descending authority, stable on ties).
    pub fn rank_candidates<'g>(
        &self,
        graph: &'g dyn IActivityGraph,
        start: ActivityKey<'_>,
    ) -> PrefetchResult<Vec<RankedCandidate<'g>>> {
        let start = resolve(graph, start)?;
        Ok(self.rank_from(graph, start))
    }

    /// The top `selection_size(n, threshold)` candidates, best first.
    pub fn select_top_nodes<'g>(
        &self,
        graph: &'g dyn IActivityGraph,
        start: ActivityKey<'_>,
        threshold: f64,
    ) -> PrefetchResult<Vec<&'g ActivityNode>> {
        check_threshold(threshold)?;
        let start = resolve(graph, start)?;
        let ranked = self.rank_from(graph, start);
        let k = selection_size(ranked.len(), threshold);
        Ok(ranked.into_iter().take(k).map(|c| c.node).collect())
    }

    /// Resources for the best-ranked successors of `start`.
    ///
    /// Fails with `InvalidArgument` when `threshold` is outside (0, 1] and
    /// with `NotFound` when `start` is not in the graph; both are checked
    /// before any traversal. Duplicate resources across candidates are kept.
    pub fn select_top_candidates<'k>(
        &self,
        graph: &dyn IActivityGraph,
        selector: &dyn IResourceSelector,
        start: impl Into<ActivityKey<'k>>,
        threshold: f64,
    ) -> PrefetchResult<Vec<ResourceId>> {
        let start = start.into();
        let _span = ranking_span!(start, threshold).entered();
        let started = Instant::now();

        check_threshold(threshold)?;
        let start_node = resolve(graph, start)?;

        let ranked = self.rank_from(graph, start_node);
        let discovered = ranked.len();
        let k = selection_size(discovered, threshold);

        let mut resources = Vec::new();
        for candidate in ranked.into_iter().take(k) {
            debug!(
                activity = %candidate.node.name,
                authority = candidate.node.authority,
                "candidate selected"
            );
            resources.extend(selector.resources_for(start_node, candidate.node));
        }

        debug!(
            start = %start_node.name,
            discovered,
            selected = k,
            resources = resources.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prefetch selection finished"
        );
        Ok(resources)
    }

    fn rank_from<'g>(
        &self,
        graph: &'g dyn IActivityGraph,
        start: &ActivityNode,
    ) -> Vec<RankedCandidate<'g>> {
        let bounds = ExpansionBounds::from(&self.config);
        let mut candidates = expansion::discover(graph, start, bounds);
        // Vec::sort_by is stable: equal authorities keep discovery order.
        candidates.sort_by(|a, b| {
            b.node
                .authority
                .partial_cmp(&a.node.authority)
                .unwrap_or(Ordering::Equal)
        });
        candidates
    }
}

impl PrefetchStrategy for HitsStrategy {
    fn name(&self) -> &'static str {
        "hits"
    }

    fn top_urls_for(
        &self,
        graph: &dyn IActivityGraph,
        selector: &dyn IResourceSelector,
        start: ActivityKey<'_>,
    ) -> PrefetchResult<Vec<ResourceId>> {
        self.select_top_candidates(graph, selector, start, self.config.threshold)
    }
}

fn check_threshold(threshold: f64) -> PrefetchResult<()> {
    validate_threshold(threshold)
        .map_err(|reason| PrefetchError::invalid_argument("threshold", reason))
}

fn resolve<'g>(
    graph: &'g dyn IActivityGraph,
    key: ActivityKey<'_>,
) -> PrefetchResult<&'g ActivityNode> {
    graph
        .node(key)
        .ok_or_else(|| PrefetchError::activity_not_found(key))
}
