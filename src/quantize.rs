//! Color quantization
//!
//! Converts a continuous 8-bit color into the discrete feedback value a
//! control can actually display. The hardware has no dimming, so every
//! channel collapses to a single bit.

use crate::color::{BLACK, Rgb};
use crate::control::FeedbackPrimitive;

/// Channel level at or above which a bit is considered lit.
///
/// Sits below the midpoint so dim colors still light the LED.
pub const QUANTIZE_THRESHOLD: u8 = 100;

/// Discrete state written to a single control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackValue {
    /// Nothing to write
    None,
    OnOff(bool),
    Rgb { red: bool, green: bool, blue: bool },
}

impl FeedbackValue {
    /// Fully lit value for the given primitive
    pub const fn lit(primitive: FeedbackPrimitive) -> Self {
        match primitive {
            FeedbackPrimitive::None => Self::None,
            FeedbackPrimitive::OnOff => Self::OnOff(true),
            FeedbackPrimitive::Rgb => Self::Rgb {
                red: true,
                green: true,
                blue: true,
            },
        }
    }

    /// Returns if this value is the variant `primitive` accepts
    pub const fn matches(self, primitive: FeedbackPrimitive) -> bool {
        matches!(
            (self, primitive),
            (Self::None, FeedbackPrimitive::None)
                | (Self::OnOff(_), FeedbackPrimitive::OnOff)
                | (Self::Rgb { .. }, FeedbackPrimitive::Rgb)
        )
    }

    /// Returns if writing this value is a no-op
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Addressed feedback value, one entry of a device write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub id: &'static str,
    pub value: FeedbackValue,
}

impl ControlState {
    pub const fn new(id: &'static str, value: FeedbackValue) -> Self {
        Self { id, value }
    }
}

/// Quantize a color with the default threshold
///
/// A missing color is treated as black.
pub fn quantize(color: Option<Rgb>, primitive: FeedbackPrimitive) -> FeedbackValue {
    quantize_with_threshold(color, primitive, QUANTIZE_THRESHOLD)
}

/// Quantize a color against a custom channel threshold
pub fn quantize_with_threshold(
    color: Option<Rgb>,
    primitive: FeedbackPrimitive,
    threshold: u8,
) -> FeedbackValue {
    let color = color.unwrap_or(BLACK);
    let red = color.r >= threshold;
    let green = color.g >= threshold;
    let blue = color.b >= threshold;

    match primitive {
        FeedbackPrimitive::None => FeedbackValue::None,
        FeedbackPrimitive::OnOff => FeedbackValue::OnOff(red || green || blue),
        FeedbackPrimitive::Rgb => FeedbackValue::Rgb { red, green, blue },
    }
}
