//! Build an activity graph from persisted per-session transition rows.
//!
//! Rows are summed per (source, destination). With a session window, only
//! rows whose session id is among the newest N (relative to the highest
//! session id present in the rows) contribute.

use prefetch_core::errors::{PrefetchError, PrefetchResult};
use prefetch_core::models::{ActivityRecord, SessionWindow, TransitionRecord};
use tracing::debug;

use crate::graph::indexed_graph::IndexedGraph;

/// Build a graph from the activity registry and raw transition rows.
///
/// Zero-count rows are ignored. Rows referencing an activity missing from
/// `activities` fail the whole build.
pub fn build_graph(
    activities: &[ActivityRecord],
    transitions: &[TransitionRecord],
    window: SessionWindow,
) -> PrefetchResult<IndexedGraph> {
    let mut graph = IndexedGraph::new();
    for activity in activities {
        graph.insert_activity(activity.id, &activity.name)?;
    }

    let newest = transitions.iter().map(|t| t.session_id).max().unwrap_or(0);
    let mut counted = 0usize;

    for row in transitions {
        if graph.index_of(row.source_id).is_none() {
            return Err(PrefetchError::activity_not_found(row.source_id));
        }
        if graph.index_of(row.destination_id).is_none() {
            return Err(PrefetchError::activity_not_found(row.destination_id));
        }
        if row.count == 0 || !window.includes(row.session_id, newest) {
            continue;
        }
        graph.record_transition(row.source_id, row.destination_id, row.count)?;
        counted += 1;
    }

    debug!(
        activities = graph.node_count(),
        edges = graph.edge_count(),
        rows = transitions.len(),
        counted,
        "activity graph built"
    );
    Ok(graph)
}
