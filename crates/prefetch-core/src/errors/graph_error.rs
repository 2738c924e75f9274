/// Activity graph construction errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate activity: name {name:?} or id {id} already registered")]
    DuplicateActivity { name: String, id: u64 },

    #[error("invalid transition: {reason}")]
    InvalidTransition { reason: String },

    #[error("no activity id left to assign to {name:?}")]
    IdSpaceExhausted { name: String },
}
