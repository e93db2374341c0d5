//! Ordered progress indicator
//!
//! Lights the first `count` controls of a fixed list. Only reports what
//! should be lit; clearing earlier state is up to the caller.

use heapless::Vec;

use crate::model::SurfaceModel;
use crate::quantize::{ControlState, FeedbackValue};

/// Maximum length of a progress identity list.
pub const MAX_PROGRESS_SLOTS: usize = 16;

/// Lit controls, in list order.
pub type ProgressVector = Vec<ControlState, MAX_PROGRESS_SLOTS>;

/// Encode `count` as fully lit states for the leading ids of `ids`
///
/// Ids the model does not define are skipped. Controls without a light
/// still get an entry, holding [`FeedbackValue::None`].
pub fn encode_progress(count: usize, ids: &[&'static str], model: SurfaceModel) -> ProgressVector {
    ids.iter()
        .take(count.min(MAX_PROGRESS_SLOTS))
        .filter_map(|id| model.find(id))
        .map(|control| ControlState::new(control.id, FeedbackValue::lit(control.feedback)))
        .collect()
}
