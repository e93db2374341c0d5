//! Device write dispatch
//!
//! Hands encoded states to the transport. Failures are logged with the
//! context of the write and then dropped: the next flush carries fresher
//! data, so nothing is retried.

use core::fmt;

use heapless::Vec;
use log::{error, trace};

use crate::SurfaceTransport;
use crate::error::FeedbackError;
use crate::model::SurfaceModel;
use crate::pending::MAX_PENDING;
use crate::quantize::ControlState;

/// Origin of a device write, used for log context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteContext {
    /// Coalesced draw batch
    Flush { entries: usize },
    /// Bar pattern driven by a variable
    Bar { id: &'static str },
    /// Lock code progress
    Progress { count: usize },
    /// Panel clear
    Blank,
}

impl fmt::Display for WriteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flush { entries } => write!(f, "flush of {} controls", entries),
            Self::Bar { id } => write!(f, "bar {}", id),
            Self::Progress { count } => write!(f, "lock progress {}", count),
            Self::Blank => f.write_str("blank"),
        }
    }
}

/// Best-effort writer in front of a [`SurfaceTransport`]
pub struct Dispatcher<T: SurfaceTransport> {
    transport: T,
    model: SurfaceModel,
}

impl<T: SurfaceTransport> Dispatcher<T> {
    pub const fn new(transport: T, model: SurfaceModel) -> Self {
        Self { transport, model }
    }

    /// Write a batch of control states
    ///
    /// No-op entries are left out and an empty batch is not written at all.
    /// A batch holding a value that does not fit its control is rejected
    /// as a whole.
    pub fn dispatch_states(&mut self, context: WriteContext, states: &[ControlState]) {
        if let Err(err) = self.check_states(states) {
            error!("{}: rejected: {}", context, err);
            return;
        }

        let mut batch: Vec<ControlState, MAX_PENDING> = Vec::new();
        for state in states.iter().filter(|state| !state.value.is_none()) {
            if batch.push(*state).is_err() {
                error!("{}: batch exceeds {} controls, truncated", context, batch.capacity());
                break;
            }
        }
        if batch.is_empty() {
            trace!("{}: nothing to write", context);
            return;
        }

        if let Err(err) = self.transport.set_control_states(&batch) {
            error!("{}: write failed: {}", context, err);
        }
    }

    /// Write a bar pattern
    pub fn dispatch_bar(&mut self, id: &'static str, leds: &[bool]) {
        if let Err(err) = self.transport.set_bar_leds(id, leds) {
            error!("{}: write failed: {}", WriteContext::Bar { id }, err);
        }
    }

    /// Turn every light on the panel off
    pub fn clear_panel(&mut self) {
        if let Err(err) = self.transport.clear_panel() {
            error!("{}: write failed: {}", WriteContext::Blank, err);
        }
    }

    fn check_states(&self, states: &[ControlState]) -> Result<(), FeedbackError> {
        for state in states {
            let control = self.model.find(state.id).ok_or(FeedbackError::UnknownControl)?;
            if !state.value.matches(control.feedback) {
                return Err(FeedbackError::PrimitiveMismatch {
                    id: control.id,
                    primitive: control.feedback,
                });
            }
        }
        Ok(())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back, e.g. to close it
    pub fn into_transport(self) -> T {
        self.transport
    }
}
