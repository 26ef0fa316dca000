//! Library error type.
//!
//! Every failure the core can produce is caller-visible and final: nothing
//! in this subsystem is transient, so there is no retry or recovery path.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorError {
    /// A construction or configuration argument was unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Render was invoked with an id no registered surface answers to.
    #[error("no surface registered with id {0:?}")]
    SurfaceNotFound(String),

    /// A rotation selector did not resolve to any dancer on the floor.
    #[error("no dancer matching {0:?} on this floor")]
    UnknownDancer(String),

    /// The dancer was never placed on a floor.
    #[error("dancer has not been placed on a floor")]
    NotPlaced,

    /// The floor has not yet been rendered, so no surface id exists to
    /// build identifiers from.
    #[error("floor has not been rendered to a surface yet")]
    NotRendered,
}
