use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric activity identifier, unique within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub u64);

impl ActivityId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ActivityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A screen in the navigation graph.
///
/// Authority and hub scores are written by the HITS pass and only read by
/// the ranking strategy. Successor aggregates are served by the graph store
/// rather than stored on the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityNode {
    pub id: ActivityId,
    pub name: String,
    /// HITS authority score, always >= 0.
    #[serde(default)]
    pub authority: f64,
    /// HITS hub score, always >= 0.
    #[serde(default)]
    pub hub: f64,
}

impl ActivityNode {
    pub fn new(id: ActivityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            authority: 0.0,
            hub: 0.0,
        }
    }

    /// Builder-style authority override, mostly for tests and fixtures.
    pub fn with_authority(mut self, authority: f64) -> Self {
        self.authority = authority.max(0.0);
        self
    }
}

/// A persisted activity row: the id → name registry the graph is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: ActivityId,
    pub name: String,
}

impl ActivityRecord {
    pub fn new(id: impl Into<ActivityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Addresses an activity either by name or by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKey<'a> {
    Name(&'a str),
    Id(ActivityId),
}

impl<'a> From<&'a str> for ActivityKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for ActivityKey<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl From<ActivityId> for ActivityKey<'_> {
    fn from(id: ActivityId) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for ActivityKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}
