//! Input event intake
//!
//! Translates typed events coming up from the transport into notifications
//! for the host. The engine never polls the surface.

use crate::model::TBAR_VALUE_VARIABLE;

/// Event reported by the transport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent<'a> {
    ButtonDown(&'a str),
    ButtonUp(&'a str),
    /// T-bar moved, level in 0..=1
    TBar { id: &'a str, level: f32 },
    Jog { id: &'a str, delta: i32 },
    BatteryLevel(u8),
    /// The transport lost the device
    Error,
}

/// Notification for the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent<'a> {
    KeyDown(&'a str),
    KeyUp(&'a str),
    /// New value for an input transfer variable
    VariableValue { name: &'static str, value: f32 },
    /// Surface must be torn down
    Disconnect,
}

/// Map a surface event to the host notification it causes, if any
pub fn translate_event(event: SurfaceEvent<'_>) -> Option<HostEvent<'_>> {
    match event {
        SurfaceEvent::ButtonDown(id) => Some(HostEvent::KeyDown(id)),
        SurfaceEvent::ButtonUp(id) => Some(HostEvent::KeyUp(id)),
        SurfaceEvent::TBar { level, .. } => Some(HostEvent::VariableValue {
            name: TBAR_VALUE_VARIABLE,
            value: level,
        }),
        // Not forwarded to the host yet
        SurfaceEvent::Jog { .. } | SurfaceEvent::BatteryLevel(_) => None,
        SurfaceEvent::Error => Some(HostEvent::Disconnect),
    }
}
