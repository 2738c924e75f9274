//! # prefetch-strategy
//!
//! Decides what to prefetch when the user lands on a screen: discover every
//! screen reachable from it, rank them by HITS authority, keep the top
//! fraction, and expand each kept screen into the resources it will need.

pub mod engine;
pub mod selector;
pub mod strategy;

pub use engine::PrefetchEngine;
pub use selector::UrlCatalog;
pub use strategy::{HitsStrategy, PrefetchStrategy, RankedCandidate};
