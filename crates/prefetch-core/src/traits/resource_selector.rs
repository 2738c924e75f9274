use crate::models::{ActivityNode, ResourceId};

/// Maps a predicted navigation onto concrete resources to prefetch.
pub trait IResourceSelector: Send + Sync {
    /// Resources needed when the user moves from `source` to `destination`.
    fn resources_for(&self, source: &ActivityNode, destination: &ActivityNode) -> Vec<ResourceId>;
}

impl<F> IResourceSelector for F
where
    F: Fn(&ActivityNode, &ActivityNode) -> Vec<ResourceId> + Send + Sync,
{
    fn resources_for(&self, source: &ActivityNode, destination: &ActivityNode) -> Vec<ResourceId> {
        self(source, destination)
    }
}
