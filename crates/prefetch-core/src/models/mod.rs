mod activity;
mod resource;
mod transition;

pub use activity::{ActivityId, ActivityKey, ActivityNode, ActivityRecord};
pub use resource::ResourceId;
pub use transition::{SessionWindow, SuccessorAggregate, TransitionRecord};
