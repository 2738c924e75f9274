//! # prefetch-graph
//!
//! The activity graph store. Holds screens and aggregated transitions in a
//! `petgraph` stable graph behind a read/write lock, builds it from persisted
//! per-session transition rows, and runs the HITS pass that produces the
//! authority scores the ranking strategy reads.

pub mod aggregation;
pub mod graph;
pub mod hits;
pub mod snapshot;

pub use aggregation::build_graph;
pub use graph::indexed_graph::{IndexedGraph, TransitionWeight};
pub use graph::GraphManager;
pub use hits::{HitsReport, HitsScores};
pub use snapshot::GraphSnapshot;
