//! Control descriptors
//!
//! Static description of a single addressable element on a surface.
//! Descriptors are built as `const` tables per model and never mutated.

/// Feedback capability of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackPrimitive {
    /// Control has no light
    None,
    /// Single on/off light
    OnOff,
    /// Independent red, green and blue bits
    Rgb,
}

/// Physical kind of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    /// Fader or T-bar with a segmented LED strip alongside it
    Bar { led_segments: usize },
    Rotary,
}

/// Grid position of a control in the surface layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u8,
    pub column: u8,
}

/// Immutable description of one control on a surface model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub id: &'static str,
    pub position: Position,
    pub kind: ControlKind,
    pub feedback: FeedbackPrimitive,
}

impl ControlDescriptor {
    /// Describe a button
    pub const fn button(
        id: &'static str,
        row: u8,
        column: u8,
        feedback: FeedbackPrimitive,
    ) -> Self {
        Self {
            id,
            position: Position { row, column },
            kind: ControlKind::Button,
            feedback,
        }
    }

    /// Describe a bar with `led_segments` on/off segments
    pub const fn bar(id: &'static str, row: u8, column: u8, led_segments: usize) -> Self {
        Self {
            id,
            position: Position { row, column },
            kind: ControlKind::Bar { led_segments },
            feedback: FeedbackPrimitive::OnOff,
        }
    }

    /// Describe a rotary encoder or jog wheel
    pub const fn rotary(id: &'static str, row: u8, column: u8) -> Self {
        Self {
            id,
            position: Position { row, column },
            kind: ControlKind::Rotary,
            feedback: FeedbackPrimitive::None,
        }
    }

    /// Returns if the control accepts color draw requests
    pub const fn is_drawable(&self) -> bool {
        matches!(self.kind, ControlKind::Button)
    }

    /// Number of LED segments, if the control is a bar
    pub const fn led_segments(&self) -> Option<usize> {
        match self.kind {
            ControlKind::Bar { led_segments } => Some(led_segments),
            ControlKind::Button | ControlKind::Rotary => None,
        }
    }
}
