//! Thread-safe ownership of the activity graph.

pub mod indexed_graph;

use std::sync::{Arc, RwLock};

use prefetch_core::config::HitsConfig;
use prefetch_core::errors::{PrefetchError, PrefetchResult};
use prefetch_core::models::ActivityId;
use tracing::{debug, info};

use crate::hits::{self, HitsReport, HitsScores};
use indexed_graph::IndexedGraph;

/// Shares one [`IndexedGraph`] between concurrent readers and serialised
/// writers.
///
/// Readers hold the read lock for the whole of a query, writers take the
/// write lock for the whole of an update, so a traversal never observes a
/// half-applied authority pass.
#[derive(Debug, Clone, Default)]
pub struct GraphManager {
    graph: Arc<RwLock<IndexedGraph>>,
}

impl GraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_graph(graph: IndexedGraph) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
        }
    }

    /// Handle to the underlying lock.
    pub fn shared(&self) -> Arc<RwLock<IndexedGraph>> {
        Arc::clone(&self.graph)
    }

    /// Run `f` against a consistent snapshot.
    pub fn read<R>(&self, f: impl FnOnce(&IndexedGraph) -> R) -> PrefetchResult<R> {
        let guard = self
            .graph
            .read()
            .map_err(|e| PrefetchError::ConcurrencyError(e.to_string()))?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut IndexedGraph) -> R) -> PrefetchResult<R> {
        let mut guard = self
            .graph
            .write()
            .map_err(|e| PrefetchError::ConcurrencyError(e.to_string()))?;
        Ok(f(&mut guard))
    }

    /// Swap in a freshly built graph, e.g. after reloading persisted history.
    pub fn replace(&self, graph: IndexedGraph) -> PrefetchResult<()> {
        self.write(|current| *current = graph)
    }

    pub fn ensure_activity(&self, name: &str) -> PrefetchResult<ActivityId> {
        self.write(|graph| graph.ensure_activity(name))?
    }

    /// Record one navigation between two named screens, registering unseen
    /// names on the fly.
    pub fn record_navigation(&self, source: &str, destination: &str) -> PrefetchResult<()> {
        self.write(|graph| {
            let src = graph.ensure_activity(source)?;
            let dst = graph.ensure_activity(destination)?;
            graph.record_transition(src, dst, 1)
        })??;
        debug!(source, destination, "navigation recorded");
        Ok(())
    }

    pub fn record_transition(
        &self,
        source: ActivityId,
        destination: ActivityId,
        count: u64,
    ) -> PrefetchResult<()> {
        self.write(|graph| graph.record_transition(source, destination, count))?
    }

    /// Recompute HITS scores and publish them in one exclusive step.
    ///
    /// The power iteration runs under the read lock. If the graph changed
    /// structurally before the write lock was taken, the scores are stale and
    /// the pass is redone under the write lock, so the published scores
    /// always describe the graph they are published into.
    pub fn recompute_authorities(&self, config: &HitsConfig) -> PrefetchResult<HitsReport> {
        let (generation, scores) =
            self.read(|graph| (graph.generation(), hits::compute(graph, config)))?;
        let report = self.write(|graph| publish(graph, generation, scores, config))?;

        info!(
            nodes = report.nodes,
            iterations = report.iterations,
            converged = report.converged,
            "authority scores updated"
        );
        Ok(report)
    }

    pub fn node_count(&self) -> PrefetchResult<usize> {
        self.read(|g| g.node_count())
    }

    pub fn edge_count(&self) -> PrefetchResult<usize> {
        self.read(|g| g.edge_count())
    }
}

/// Apply `scores` computed at `generation`, recomputing first if the graph
/// has moved on since.
fn publish(
    graph: &mut IndexedGraph,
    generation: u64,
    scores: HitsScores,
    config: &HitsConfig,
) -> HitsReport {
    let scores = if graph.generation() == generation {
        scores
    } else {
        debug!(
            computed_at = generation,
            current = graph.generation(),
            "graph changed during authority pass, recomputing"
        );
        hits::compute(graph, config)
    };
    hits::apply(graph, &scores);
    scores.report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefetch_core::traits::IActivityGraph;

    fn authority(graph: &IndexedGraph, name: &str) -> f64 {
        graph.node_by_name(name).unwrap().authority
    }

    #[test]
    fn scores_from_an_older_generation_are_not_published() {
        let config = HitsConfig::default();
        let mut graph = IndexedGraph::new();
        let home = graph.ensure_activity("Home").unwrap();
        let list = graph.ensure_activity("List").unwrap();
        graph.record_transition(home, list, 1).unwrap();

        let generation = graph.generation();
        let stale = hits::compute(&graph, &config);

        // A navigation lands between the read and the write.
        let detail = graph.ensure_activity("Detail").unwrap();
        graph.record_transition(home, detail, 1).unwrap();

        let report = publish(&mut graph, generation, stale, &config);
        assert_eq!(report.nodes, 3);
        assert!(authority(&graph, "Detail") > 0.0);
        assert!((authority(&graph, "Detail") - authority(&graph, "List")).abs() < 1e-9);
    }

    #[test]
    fn current_scores_are_published_as_is() {
        let config = HitsConfig::default();
        let mut graph = IndexedGraph::new();
        let home = graph.ensure_activity("Home").unwrap();
        let list = graph.ensure_activity("List").unwrap();
        graph.record_transition(home, list, 1).unwrap();

        let scores = hits::compute(&graph, &config);
        let expected = scores.authority_of(list);
        let generation = graph.generation();
        publish(&mut graph, generation, scores, &config);
        assert_eq!(authority(&graph, "List"), expected);
    }

    #[test]
    fn record_navigation_surfaces_id_exhaustion() {
        let manager = GraphManager::new();
        manager
            .write(|graph| graph.insert_activity(ActivityId(u64::MAX), "Top").map(|_| ()))
            .unwrap()
            .unwrap();

        let err = manager.record_navigation("Top", "Fresh").unwrap_err();
        assert!(matches!(
            err,
            PrefetchError::GraphError(prefetch_core::errors::GraphError::IdSpaceExhausted { .. })
        ));
        assert_eq!(manager.edge_count().unwrap(), 0);
    }
}
