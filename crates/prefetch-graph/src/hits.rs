//! HITS (hyperlink-induced topic search) over the transition graph.
//!
//! Screens that many good hubs lead to become authorities; screens that lead
//! to many good authorities become hubs. Both vectors are L2-normalised after
//! every half-step, starting from all ones:
//!
//! ```text
//! auth(p) = Σ hub(q) · w(q → p)
//! hub(p)  = Σ auth(r) · w(p → r)
//! ```
//!
//! `w` is 1 for every observed edge, or the traversal count when the pass is
//! configured as weighted.

use std::collections::HashMap;

use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use prefetch_core::config::HitsConfig;
use prefetch_core::models::ActivityId;
use prefetch_observability::hits_span;
use tracing::debug;

use crate::graph::indexed_graph::IndexedGraph;

/// Scores produced by one HITS run.
#[derive(Debug, Clone, Default)]
pub struct HitsScores {
    pub authority: HashMap<ActivityId, f64>,
    pub hub: HashMap<ActivityId, f64>,
    /// Number of rounds actually executed.
    pub iterations: usize,
    /// Whether the run stopped on the tolerance rather than the round limit.
    pub converged: bool,
}

impl HitsScores {
    pub fn authority_of(&self, id: ActivityId) -> f64 {
        self.authority.get(&id).copied().unwrap_or(0.0)
    }

    pub fn hub_of(&self, id: ActivityId) -> f64 {
        self.hub.get(&id).copied().unwrap_or(0.0)
    }

    pub fn report(&self) -> HitsReport {
        HitsReport {
            nodes: self.authority.len(),
            iterations: self.iterations,
            converged: self.converged,
        }
    }
}

/// Summary of an authority pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitsReport {
    pub nodes: usize,
    pub iterations: usize,
    pub converged: bool,
}

/// Run the power iteration. Pure: the graph is not modified.
pub fn compute(graph: &IndexedGraph, config: &HitsConfig) -> HitsScores {
    let _span = hits_span!(graph.node_count(), graph.edge_count()).entered();

    let inner = graph.graph();
    let nodes: Vec<_> = inner.node_indices().collect();
    let n = nodes.len();
    if n == 0 {
        return HitsScores {
            converged: true,
            ..HitsScores::default()
        };
    }

    let position: HashMap<_, _> = nodes.iter().enumerate().map(|(i, &idx)| (idx, i)).collect();
    let edges: Vec<(usize, usize, f64)> = inner
        .edge_references()
        .map(|e| {
            let w = if config.weighted {
                e.weight().count as f64
            } else {
                1.0
            };
            (position[&e.source()], position[&e.target()], w)
        })
        .collect();

    let mut authority = vec![1.0_f64; n];
    let mut hub = vec![1.0_f64; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.iterations {
        iterations += 1;

        let mut next_authority = vec![0.0_f64; n];
        for &(src, dst, w) in &edges {
            next_authority[dst] += hub[src] * w;
        }
        normalize(&mut next_authority);

        let mut next_hub = vec![0.0_f64; n];
        for &(src, dst, w) in &edges {
            next_hub[src] += next_authority[dst] * w;
        }
        normalize(&mut next_hub);

        let delta = max_change(&authority, &next_authority).max(max_change(&hub, &next_hub));
        authority = next_authority;
        hub = next_hub;

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    debug!(iterations, converged, "hits pass finished");

    let mut scores = HitsScores {
        iterations,
        converged,
        ..HitsScores::default()
    };
    for (i, &idx) in nodes.iter().enumerate() {
        let id = inner[idx].id;
        scores.authority.insert(id, authority[i]);
        scores.hub.insert(id, hub[i]);
    }
    scores
}

/// Write scores into the graph. Activities missing from `scores` keep their
/// previous values.
pub fn apply(graph: &mut IndexedGraph, scores: &HitsScores) {
    for (&id, &authority) in &scores.authority {
        graph.set_scores(id, authority, scores.hub_of(id));
    }
}

fn normalize(values: &mut [f64]) {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in values.iter_mut() {
            *v /= norm;
        }
    }
}

fn max_change(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
