#![no_std]

pub mod color;
pub mod control;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod flush_scheduler;
pub mod input;
pub mod model;
pub mod pattern;
pub mod pending;
pub mod quantize;

pub use control::{ControlDescriptor, ControlKind, FeedbackPrimitive, Position};
pub use dispatcher::{Dispatcher, WriteContext};
pub use engine::{EngineConfig, FeedbackEngine};
pub use error::FeedbackError;
pub use flush_scheduler::{FlushScheduler, FlushTimings};
pub use input::{HostEvent, SurfaceEvent};
pub use model::{PincodeMap, SurfaceModel, TransferVariable, VariableDirection};
pub use pattern::{encode_bar, encode_progress, fill_bar};
pub use pending::PendingBuffer;
pub use quantize::{ControlState, FeedbackValue, QUANTIZE_THRESHOLD, quantize};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract surface transport trait
///
/// Implement this trait to connect the engine to a physical device.
/// Writes should be queued and return without waiting for the device;
/// an `Err` reports that the write could not be delivered.
pub trait SurfaceTransport {
    /// Transport failure, logged by the engine
    type Error: core::fmt::Display;

    /// Set the lights of a batch of controls
    fn set_control_states(&mut self, states: &[ControlState]) -> Result<(), Self::Error>;

    /// Set the LED segments of a bar, low end first
    fn set_bar_leds(&mut self, id: &'static str, leds: &[bool]) -> Result<(), Self::Error>;

    /// Turn every light off
    fn clear_panel(&mut self) -> Result<(), Self::Error>;
}
