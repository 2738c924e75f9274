//! petgraph::StableGraph wrapper with ActivityNode and TransitionWeight types.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use prefetch_core::errors::{GraphError, PrefetchError, PrefetchResult};
use prefetch_core::models::{ActivityId, ActivityNode, SuccessorAggregate};
use prefetch_core::traits::IActivityGraph;

/// Weight on a transition edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionWeight {
    /// Cumulative number of observed traversals.
    pub count: u64,
}

/// The underlying directed graph type.
pub type ActivityStableGraph = StableGraph<ActivityNode, TransitionWeight, Directed>;

/// Activity graph with precomputed name and id indices.
#[derive(Debug, Clone)]
pub struct IndexedGraph {
    graph: ActivityStableGraph,
    name_index: HashMap<String, NodeIndex>,
    id_index: HashMap<ActivityId, NodeIndex>,
    /// Next id for `ensure_activity`. `None` once `u64::MAX` is taken.
    next_id: Option<u64>,
    /// Bumped on every node or edge change, never on score updates.
    generation: u64,
}

impl IndexedGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            name_index: HashMap::new(),
            id_index: HashMap::new(),
            next_id: Some(1),
            generation: 0,
        }
    }

    /// Read access to the petgraph structure.
    pub fn graph(&self) -> &ActivityStableGraph {
        &self.graph
    }

    /// Register an activity with a known id.
    ///
    /// Re-registering the same (id, name) pair is a no-op. A name or id that
    /// is already bound to something else is rejected.
    pub fn insert_activity(&mut self, id: ActivityId, name: &str) -> PrefetchResult<NodeIndex> {
        match (self.name_index.get(name), self.id_index.get(&id)) {
            (Some(&a), Some(&b)) if a == b => return Ok(a),
            (None, None) => {}
            _ => {
                return Err(GraphError::DuplicateActivity {
                    name: name.to_string(),
                    id: id.get(),
                }
                .into())
            }
        }

        let idx = self.graph.add_node(ActivityNode::new(id, name));
        self.name_index.insert(name.to_string(), idx);
        self.id_index.insert(id, idx);
        self.next_id = match (self.next_id, id.get().checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        self.generation += 1;
        Ok(idx)
    }

    /// Get or assign an id for the named activity.
    ///
    /// Fails with `IdSpaceExhausted` when a new name arrives after id
    /// `u64::MAX` has been registered.
    pub fn ensure_activity(&mut self, name: &str) -> PrefetchResult<ActivityId> {
        if let Some(&idx) = self.name_index.get(name) {
            return Ok(self.graph[idx].id);
        }
        let Some(next) = self.next_id else {
            return Err(GraphError::IdSpaceExhausted {
                name: name.to_string(),
            }
            .into());
        };
        let id = ActivityId(next);
        // Fresh name and an id above every registered one: cannot conflict.
        let idx = self.graph.add_node(ActivityNode::new(id, name));
        self.name_index.insert(name.to_string(), idx);
        self.id_index.insert(id, idx);
        self.next_id = next.checked_add(1);
        self.generation += 1;
        Ok(id)
    }

    /// Add `count` traversals to the (source → destination) edge.
    pub fn record_transition(
        &mut self,
        source: ActivityId,
        destination: ActivityId,
        count: u64,
    ) -> PrefetchResult<()> {
        if count == 0 {
            return Err(GraphError::InvalidTransition {
                reason: format!("{source} -> {destination}: count must be positive"),
            }
            .into());
        }
        let src = self
            .index_of(source)
            .ok_or_else(|| PrefetchError::activity_not_found(source))?;
        let dst = self
            .index_of(destination)
            .ok_or_else(|| PrefetchError::activity_not_found(destination))?;

        match self.graph.find_edge(src, dst) {
            Some(edge) => {
                let weight = &mut self.graph[edge];
                weight.count = weight.count.saturating_add(count);
            }
            None => {
                self.graph.add_edge(src, dst, TransitionWeight { count });
            }
        }
        self.generation += 1;
        Ok(())
    }

    /// Traversal count of the (source → destination) edge, if observed.
    pub fn transition_count(&self, source: ActivityId, destination: ActivityId) -> Option<u64> {
        let src = self.index_of(source)?;
        let dst = self.index_of(destination)?;
        self.graph.find_edge(src, dst).map(|e| self.graph[e].count)
    }

    /// Overwrite the HITS scores of one activity. Negative inputs clamp to 0.
    pub fn set_scores(&mut self, id: ActivityId, authority: f64, hub: f64) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                let node = &mut self.graph[idx];
                node.authority = authority.max(0.0);
                node.hub = hub.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Look up a node index by activity id.
    pub fn index_of(&self, id: ActivityId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Look up a node index by activity name.
    pub fn index_of_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_index.get(name).copied()
    }

    /// All activities, in registration order.
    pub fn activities(&self) -> impl Iterator<Item = &ActivityNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Structural version: changes whenever an activity or transition is
    /// recorded. Score updates leave it alone.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl IActivityGraph for IndexedGraph {
    fn node_by_name(&self, name: &str) -> Option<&ActivityNode> {
        self.index_of_name(name).map(|idx| &self.graph[idx])
    }

    fn node_by_id(&self, id: ActivityId) -> Option<&ActivityNode> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    fn successors(&self, id: ActivityId) -> Vec<SuccessorAggregate> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };

        // petgraph yields the newest edge first; edges are never removed, so
        // sorting by edge index restores first-observation order.
        let mut edges: Vec<_> = self.graph.edges_directed(idx, Direction::Outgoing).collect();
        edges.sort_by_key(|e| e.id().index());

        edges
            .into_iter()
            .map(|e| {
                let dest = &self.graph[e.target()];
                SuccessorAggregate {
                    destination_id: dest.id,
                    destination_name: dest.name.clone(),
                    count: e.weight().count,
                }
            })
            .collect()
    }
}
