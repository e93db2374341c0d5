//! DaVinci Resolve Replay Editor

use super::TransferVariable;
use crate::control::ControlDescriptor;
use crate::control::FeedbackPrimitive::{None as Unlit, OnOff};

pub(super) const CONTROLS: &[ControlDescriptor] = &[
    ControlDescriptor::button("cam1", 0, 0, OnOff),
    ControlDescriptor::button("cam2", 0, 1, OnOff),
    ControlDescriptor::button("cam3", 0, 2, OnOff),
    ControlDescriptor::button("cam4", 0, 3, OnOff),
    ControlDescriptor::button("cam5", 1, 0, OnOff),
    ControlDescriptor::button("cam6", 1, 1, OnOff),
    ControlDescriptor::button("cam7", 1, 2, OnOff),
    ControlDescriptor::button("cam8", 1, 3, OnOff),
    ControlDescriptor::button("bank", 2, 0, OnOff),
    ControlDescriptor::button("live", 2, 1, OnOff),
    ControlDescriptor::button("cut", 2, 2, OnOff),
    ControlDescriptor::button("mark-in", 3, 0, Unlit),
    ControlDescriptor::button("mark-out", 3, 1, Unlit),
    ControlDescriptor::button("clip-prev", 3, 2, Unlit),
    ControlDescriptor::button("clip-next", 3, 3, Unlit),
    ControlDescriptor::button("speed-25", 4, 0, OnOff),
    ControlDescriptor::button("speed-50", 4, 1, OnOff),
    ControlDescriptor::button("speed-75", 4, 2, OnOff),
    ControlDescriptor::button("speed-100", 4, 3, OnOff),
    ControlDescriptor::button("shtl", 5, 0, OnOff),
    ControlDescriptor::button("jog", 5, 1, OnOff),
    ControlDescriptor::button("stop-play", 5, 3, Unlit),
    ControlDescriptor::rotary("jog-wheel", 6, 1),
];

pub(super) const TRANSFER_VARIABLES: &[TransferVariable] = &[];
