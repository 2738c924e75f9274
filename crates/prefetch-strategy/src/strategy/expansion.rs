//! Candidate discovery: every screen reachable from the start screen.
//!
//! Depth-first pre-order over each node's successor records, driven by an
//! explicit stack of frames instead of recursion. A node joins the candidate
//! set the first time it is reached; later edges into it are ignored, which
//! is what makes cyclic navigation (back and forth between screens)
//! terminate. The start node is not pre-marked, so it becomes a candidate
//! when a cycle leads back to it.

use std::collections::HashSet;

use prefetch_core::config::StrategyConfig;
use prefetch_core::models::{ActivityId, ActivityNode, SuccessorAggregate};
use prefetch_core::traits::IActivityGraph;
use tracing::warn;

/// Safety limits for a single expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionBounds {
    /// Stop once this many candidates have been discovered.
    pub max_candidates: usize,
    /// Do not expand nodes this many hops away. `None` = unbounded.
    pub max_depth: Option<usize>,
}

impl ExpansionBounds {
    pub fn unbounded() -> Self {
        Self {
            max_candidates: usize::MAX,
            max_depth: None,
        }
    }
}

impl From<&StrategyConfig> for ExpansionBounds {
    fn from(config: &StrategyConfig) -> Self {
        Self {
            max_candidates: config.max_candidates,
            max_depth: config.max_depth,
        }
    }
}

/// A discovered candidate, borrowed from the graph snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'g> {
    pub node: &'g ActivityNode,
    /// Hops from the start node along the path that discovered it.
    pub depth: usize,
    /// Position in discovery order; ties in authority keep this order.
    pub discovery_index: usize,
}

struct Frame {
    successors: Vec<SuccessorAggregate>,
    next: usize,
    depth: usize,
}

/// Discover candidates reachable from `start`, in discovery order.
pub fn discover<'g>(
    graph: &'g dyn IActivityGraph,
    start: &ActivityNode,
    bounds: ExpansionBounds,
) -> Vec<RankedCandidate<'g>> {
    let mut candidates = Vec::new();
    if bounds.max_candidates == 0 {
        return candidates;
    }

    let mut visited: HashSet<ActivityId> = HashSet::new();
    let mut stack = vec![Frame {
        successors: graph.successors(start.id),
        next: 0,
        depth: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let next = frame.successors.get(frame.next).map(|s| s.destination_id);
        frame.next += 1;
        let depth = frame.depth + 1;

        let Some(dest) = next else {
            stack.pop();
            continue;
        };
        if visited.contains(&dest) {
            continue;
        }
        let Some(node) = graph.node_by_id(dest) else {
            warn!(destination = %dest, "successor record points at unknown activity, skipping");
            continue;
        };

        visited.insert(dest);
        candidates.push(RankedCandidate {
            node,
            depth,
            discovery_index: candidates.len(),
        });
        if candidates.len() >= bounds.max_candidates {
            warn!(
                start = %start.name,
                max_candidates = bounds.max_candidates,
                "candidate cap reached, stopping expansion"
            );
            break;
        }

        if bounds.max_depth.map_or(true, |max| depth < max) {
            stack.push(Frame {
                successors: graph.successors(dest),
                next: 0,
                depth,
            });
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefetch_graph::IndexedGraph;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn discover_logged(
        graph: &IndexedGraph,
        from: &str,
        bounds: ExpansionBounds,
    ) -> (Vec<String>, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let found = tracing::subscriber::with_default(subscriber, || {
            names(&discover(graph, start(graph, from), bounds))
        });
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        (found, logs)
    }

    fn names(candidates: &[RankedCandidate<'_>]) -> Vec<String> {
        candidates.iter().map(|c| c.node.name.clone()).collect()
    }

    fn graph_from(edges: &[(&str, &str)]) -> IndexedGraph {
        let mut graph = IndexedGraph::new();
        for &(src, dst) in edges {
            let s = graph.ensure_activity(src).unwrap();
            let d = graph.ensure_activity(dst).unwrap();
            graph.record_transition(s, d, 1).unwrap();
        }
        graph
    }

    fn start<'g>(graph: &'g IndexedGraph, name: &str) -> &'g ActivityNode {
        graph.node_by_name(name).unwrap()
    }

    #[test]
    fn discovers_in_depth_first_pre_order() {
        let graph = graph_from(&[("A", "B"), ("A", "C"), ("B", "D")]);
        let found = discover(&graph, start(&graph, "A"), ExpansionBounds::unbounded());
        assert_eq!(names(&found), vec!["B", "D", "C"]);
        let depths: Vec<_> = found.iter().map(|c| c.depth).collect();
        assert_eq!(depths, vec![1, 2, 1]);
    }

    #[test]
    fn cycles_terminate_and_include_start_once() {
        let graph = graph_from(&[("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")]);
        let found = discover(&graph, start(&graph, "A"), ExpansionBounds::unbounded());
        assert_eq!(names(&found), vec!["B", "A", "C"]);
    }

    #[test]
    fn self_loop_on_start_is_a_candidate() {
        let graph = graph_from(&[("A", "A")]);
        let found = discover(&graph, start(&graph, "A"), ExpansionBounds::unbounded());
        assert_eq!(names(&found), vec!["A"]);
    }

    #[test]
    fn leaf_start_has_no_candidates() {
        let graph = graph_from(&[("A", "B")]);
        let found = discover(&graph, start(&graph, "B"), ExpansionBounds::unbounded());
        assert!(found.is_empty());
    }

    #[test]
    fn max_depth_stops_expansion() {
        let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let bounds = ExpansionBounds {
            max_candidates: usize::MAX,
            max_depth: Some(2),
        };
        let found = discover(&graph, start(&graph, "A"), bounds);
        assert_eq!(names(&found), vec!["B", "C"]);
    }

    #[test]
    fn max_candidates_caps_discovery() {
        let graph = graph_from(&[("A", "B"), ("A", "C"), ("A", "D")]);
        let bounds = ExpansionBounds {
            max_candidates: 2,
            max_depth: None,
        };
        let found = discover(&graph, start(&graph, "A"), bounds);
        assert_eq!(names(&found), vec!["B", "C"]);
    }

    #[test]
    fn hitting_the_candidate_cap_is_logged() {
        let graph = graph_from(&[("A", "B"), ("A", "C"), ("A", "D")]);
        let bounds = ExpansionBounds {
            max_candidates: 2,
            max_depth: None,
        };
        let (found, logs) = discover_logged(&graph, "A", bounds);
        assert_eq!(found, vec!["B", "C"]);
        assert!(logs.contains("candidate cap reached"), "logs: {logs}");
        assert!(logs.contains("max_candidates=2"), "logs: {logs}");
        assert!(logs.contains("start=A"), "logs: {logs}");
    }

    #[test]
    fn uncapped_expansion_logs_nothing() {
        let graph = graph_from(&[("A", "B"), ("B", "C")]);
        let (found, logs) = discover_logged(&graph, "A", ExpansionBounds::unbounded());
        assert_eq!(found, vec!["B", "C"]);
        assert!(!logs.contains("candidate cap reached"), "logs: {logs}");
    }

    #[test]
    fn discovery_index_matches_position() {
        let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "D")]);
        let found = discover(&graph, start(&graph, "A"), ExpansionBounds::unbounded());
        for (i, c) in found.iter().enumerate() {
            assert_eq!(c.discovery_index, i);
        }
    }
}
