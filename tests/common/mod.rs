#![allow(dead_code)]

use std::fmt;

use panel_feedback::{ControlState, SurfaceTransport};

/// A write observed by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    States(Vec<ControlState>),
    Bar(&'static str, Vec<bool>),
    Clear,
}

#[derive(Debug)]
pub struct TransportDown;

impl fmt::Display for TransportDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("transport down")
    }
}

/// Mock transport that records every attempted write
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub writes: Vec<Write>,
    pub failing: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            failing: true,
        }
    }

    pub fn state_writes(&self) -> Vec<&Vec<ControlState>> {
        self.writes
            .iter()
            .filter_map(|write| match write {
                Write::States(states) => Some(states),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, write: Write) -> Result<(), TransportDown> {
        self.writes.push(write);
        if self.failing { Err(TransportDown) } else { Ok(()) }
    }
}

impl SurfaceTransport for RecordingTransport {
    type Error = TransportDown;

    fn set_control_states(&mut self, states: &[ControlState]) -> Result<(), Self::Error> {
        self.record(Write::States(states.to_vec()))
    }

    fn set_bar_leds(&mut self, id: &'static str, leds: &[bool]) -> Result<(), Self::Error> {
        self.record(Write::Bar(id, leds.to_vec()))
    }

    fn clear_panel(&mut self) -> Result<(), Self::Error> {
        self.record(Write::Clear)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
