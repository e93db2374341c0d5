//! Bidirectional bar pattern
//!
//! Positive values fill from the high end of the bar, negative values from
//! the low end.

use heapless::Vec;

use crate::error::FeedbackError;

/// Maximum number of segments a bar can have.
pub const MAX_BAR_SEGMENTS: usize = 32;

/// One boolean per bar segment, low end first.
pub type BarPattern = Vec<bool, MAX_BAR_SEGMENTS>;

/// Fill `leds` for a signed segment count
///
/// Every segment is cleared first, so the result only depends on `fill`
/// and the slice length.
pub fn fill_bar(leds: &mut [bool], fill: i32) {
    leds.fill(false);

    let count = (fill.unsigned_abs() as usize).min(leds.len());
    if fill > 0 {
        let start = leds.len() - count;
        leds[start..].fill(true);
    } else if fill < 0 {
        leds[..count].fill(true);
    }
}

/// Encode a signed segment count into a pattern of `segments` length
///
/// `segments` is capped at [`MAX_BAR_SEGMENTS`].
pub fn encode_bar(fill: i32, segments: usize) -> BarPattern {
    let mut leds = BarPattern::new();
    // Cannot fail: the length is capped to the capacity
    let _ = leds.resize(segments.min(MAX_BAR_SEGMENTS), false);
    fill_bar(&mut leds, fill);
    leds
}

/// Parse a variable value into a segment count
///
/// Fractions are truncated toward zero and out-of-range values saturate.
/// An empty value counts as zero.
pub fn parse_fill(value: &str) -> Result<i32, FeedbackError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    if let Ok(fill) = value.parse::<i32>() {
        return Ok(fill);
    }

    let fill = value
        .parse::<f64>()
        .map_err(|_| FeedbackError::InvalidNumber)?;
    if fill.is_nan() {
        return Err(FeedbackError::InvalidNumber);
    }
    // Saturates at the i32 bounds
    #[allow(clippy::cast_possible_truncation)]
    let fill = fill as i32;
    Ok(fill)
}
