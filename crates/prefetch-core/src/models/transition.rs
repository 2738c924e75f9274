use serde::{Deserialize, Serialize};

use super::ActivityId;

/// Aggregated (source → destination) transition class, as served by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessorAggregate {
    pub destination_id: ActivityId,
    pub destination_name: String,
    /// Cumulative number of observed traversals of this edge.
    pub count: u64,
}

/// One persisted per-session transition row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub session_id: u64,
    pub source_id: ActivityId,
    pub destination_id: ActivityId,
    pub count: u64,
}

impl TransitionRecord {
    pub fn new(
        session_id: u64,
        source_id: impl Into<ActivityId>,
        destination_id: impl Into<ActivityId>,
        count: u64,
    ) -> Self {
        Self {
            session_id,
            source_id: source_id.into(),
            destination_id: destination_id.into(),
            count,
        }
    }
}

/// Which sessions contribute to successor aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionWindow {
    #[default]
    AllSessions,
    /// Only the newest `n` session ids, relative to the highest id in the data.
    LastSessions(u64),
}

impl SessionWindow {
    /// Whether a row from `session_id` counts, given the newest id seen.
    pub fn includes(self, session_id: u64, newest_session_id: u64) -> bool {
        match self {
            Self::AllSessions => true,
            Self::LastSessions(n) => session_id > newest_session_id.saturating_sub(n),
        }
    }
}
