//! Error types for the feedback engine.
//!
//! None of these halt the engine; each is terminal only to the request
//! that produced it.

use crate::control::FeedbackPrimitive;

/// Errors raised while handling a single feedback request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    /// The model does not define the requested control.
    #[error("control is not defined on this surface model")]
    UnknownControl,

    /// The control exists but does not take color draws.
    #[error("control {id} does not accept draw requests")]
    NotDrawable {
        /// The control id.
        id: &'static str,
    },

    /// No output variable with this name is bound on the model.
    #[error("unknown variable")]
    UnknownVariable,

    /// A numeric variable value could not be parsed.
    #[error("value is not a number")]
    InvalidNumber,

    /// The pending buffer has no room for another control.
    #[error("pending buffer is full, dropped draw for {id}")]
    BufferFull {
        /// The control id that could not be staged.
        id: &'static str,
    },

    /// A feedback value variant does not fit the control.
    #[error("feedback value for {id} does not match its {primitive:?} primitive")]
    PrimitiveMismatch {
        /// The control id.
        id: &'static str,
        /// The primitive the control accepts.
        primitive: FeedbackPrimitive,
    },
}
