use crate::models::{ActivityId, ActivityKey, ActivityNode, SuccessorAggregate};

/// Read-only view over a materialized activity graph snapshot.
pub trait IActivityGraph: Send + Sync {
    fn node_by_name(&self, name: &str) -> Option<&ActivityNode>;
    fn node_by_id(&self, id: ActivityId) -> Option<&ActivityNode>;

    /// Aggregated successor records of `id`, in insertion order.
    /// Unknown ids yield an empty list.
    fn successors(&self, id: ActivityId) -> Vec<SuccessorAggregate>;

    /// Resolve a name-or-id key.
    fn node(&self, key: ActivityKey<'_>) -> Option<&ActivityNode> {
        match key {
            ActivityKey::Name(name) => self.node_by_name(name),
            ActivityKey::Id(id) => self.node_by_id(id),
        }
    }
}
