//! Property tests for the HITS pass.

use proptest::prelude::*;

use prefetch_core::config::HitsConfig;
use prefetch_graph::{hits, IndexedGraph};

fn build(n: usize, edges: &[(usize, usize, u64)]) -> IndexedGraph {
    let mut graph = IndexedGraph::new();
    let ids: Vec<_> = (0..n).map(|i| graph.ensure_activity(&format!("n{i}")).unwrap()).collect();
    for &(src, dst, count) in edges {
        graph.record_transition(ids[src % n], ids[dst % n], count).unwrap();
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, u64)>> {
    prop::collection::vec((0..n, 0..n, 1_u64..20), 0..n * 3)
}

proptest! {
    #[test]
    fn scores_are_non_negative_and_normalised(
        edges in edge_strategy(12),
        weighted in any::<bool>(),
    ) {
        let graph = build(12, &edges);
        let config = HitsConfig { weighted, ..HitsConfig::default() };
        let scores = hits::compute(&graph, &config);

        prop_assert_eq!(scores.authority.len(), 12);
        prop_assert!(scores.authority.values().all(|&a| a >= 0.0 && a.is_finite()));
        prop_assert!(scores.hub.values().all(|&h| h >= 0.0 && h.is_finite()));

        let norm: f64 = scores.authority.values().map(|a| a * a).sum::<f64>().sqrt();
        if edges.is_empty() {
            prop_assert_eq!(norm, 0.0);
        } else {
            prop_assert!((norm - 1.0).abs() < 1e-9, "norm = {}", norm);
        }
    }

    #[test]
    fn nodes_without_incoming_edges_have_no_authority(edges in edge_strategy(10)) {
        let graph = build(10, &edges);
        let scores = hits::compute(&graph, &HitsConfig::default());
        for i in 0..10 {
            let has_incoming = edges.iter().any(|&(_, dst, _)| dst % 10 == i);
            if !has_incoming {
                let id = graph.index_of_name(&format!("n{i}"))
                    .map(|idx| graph.graph()[idx].id)
                    .unwrap();
                prop_assert_eq!(scores.authority_of(id), 0.0);
            }
        }
    }

    #[test]
    fn compute_is_deterministic(edges in edge_strategy(8)) {
        let graph = build(8, &edges);
        let first = hits::compute(&graph, &HitsConfig::default());
        let second = hits::compute(&graph, &HitsConfig::default());
        prop_assert_eq!(first.authority, second.authority);
        prop_assert_eq!(first.iterations, second.iterations);
    }
}
