mod activity_graph;
mod resource_selector;

pub use activity_graph::IActivityGraph;
pub use resource_selector::IResourceSelector;
