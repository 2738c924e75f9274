//! Serializable graph snapshot: activities with their scores plus raw
//! transition rows. Used for fixtures and for handing a materialized graph
//! across process boundaries.

use serde::{Deserialize, Serialize};

use prefetch_core::errors::PrefetchResult;
use prefetch_core::models::{ActivityNode, ActivityRecord, SessionWindow, TransitionRecord};

use crate::aggregation;
use crate::graph::indexed_graph::IndexedGraph;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub activities: Vec<ActivityNode>,
    #[serde(default)]
    pub transitions: Vec<TransitionRecord>,
}

impl GraphSnapshot {
    /// Build the graph and carry over the stored authority/hub scores.
    pub fn to_graph(&self, window: SessionWindow) -> PrefetchResult<IndexedGraph> {
        let registry: Vec<ActivityRecord> = self
            .activities
            .iter()
            .map(|a| ActivityRecord::new(a.id, a.name.clone()))
            .collect();
        let mut graph = aggregation::build_graph(&registry, &self.transitions, window)?;
        for activity in &self.activities {
            graph.set_scores(activity.id, activity.authority, activity.hub);
        }
        Ok(graph)
    }

    /// Capture a graph. Each aggregated edge becomes one row in session 0.
    pub fn from_graph(graph: &IndexedGraph) -> Self {
        use petgraph::visit::{EdgeRef, IntoEdgeReferences};

        let inner = graph.graph();
        let transitions = inner
            .edge_references()
            .map(|e| TransitionRecord {
                session_id: 0,
                source_id: inner[e.source()].id,
                destination_id: inner[e.target()].id,
                count: e.weight().count,
            })
            .collect();
        Self {
            activities: graph.activities().cloned().collect(),
            transitions,
        }
    }
}
