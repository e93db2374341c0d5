//! DaVinci Resolve Speed Editor
//!
//! Single color key lights only; the edit keys on the left are unlit.

use super::TransferVariable;
use crate::control::ControlDescriptor;
use crate::control::FeedbackPrimitive::{None as Unlit, OnOff};

pub(super) const CONTROLS: &[ControlDescriptor] = &[
    ControlDescriptor::button("smart-insrt", 0, 0, Unlit),
    ControlDescriptor::button("appnd", 0, 1, Unlit),
    ControlDescriptor::button("ripl-owr", 0, 2, Unlit),
    ControlDescriptor::button("close-up", 1, 0, OnOff),
    ControlDescriptor::button("place-on-top", 1, 1, Unlit),
    ControlDescriptor::button("src-owr", 1, 2, Unlit),
    ControlDescriptor::button("in", 2, 0, Unlit),
    ControlDescriptor::button("out", 2, 1, Unlit),
    ControlDescriptor::button("trim-in", 3, 0, Unlit),
    ControlDescriptor::button("trim-out", 3, 1, Unlit),
    ControlDescriptor::button("roll", 3, 2, Unlit),
    ControlDescriptor::button("slip-src", 4, 0, Unlit),
    ControlDescriptor::button("slip-dest", 4, 1, Unlit),
    ControlDescriptor::button("trans-dur", 4, 2, Unlit),
    ControlDescriptor::button("cut", 5, 0, OnOff),
    ControlDescriptor::button("dis", 5, 1, OnOff),
    ControlDescriptor::button("smth-cut", 5, 2, OnOff),
    ControlDescriptor::button("source", 0, 4, Unlit),
    ControlDescriptor::button("timeline", 0, 5, Unlit),
    ControlDescriptor::button("shtl", 1, 4, OnOff),
    ControlDescriptor::button("jog", 1, 5, OnOff),
    ControlDescriptor::button("scrl", 1, 6, OnOff),
    ControlDescriptor::rotary("jog-wheel", 2, 5),
    ControlDescriptor::button("esc", 0, 7, Unlit),
    ControlDescriptor::button("sync-bin", 0, 8, Unlit),
    ControlDescriptor::button("audio-level", 1, 7, Unlit),
    ControlDescriptor::button("full-view", 1, 8, Unlit),
    ControlDescriptor::button("trans", 2, 7, OnOff),
    ControlDescriptor::button("split", 2, 8, Unlit),
    ControlDescriptor::button("snap", 3, 7, OnOff),
    ControlDescriptor::button("ripl-del", 3, 8, Unlit),
    ControlDescriptor::button("cam1", 4, 7, OnOff),
    ControlDescriptor::button("cam2", 4, 8, OnOff),
    ControlDescriptor::button("cam3", 4, 9, OnOff),
    ControlDescriptor::button("cam4", 5, 7, OnOff),
    ControlDescriptor::button("cam5", 5, 8, OnOff),
    ControlDescriptor::button("cam6", 5, 9, OnOff),
    ControlDescriptor::button("cam7", 6, 7, OnOff),
    ControlDescriptor::button("cam8", 6, 8, OnOff),
    ControlDescriptor::button("cam9", 6, 9, OnOff),
    ControlDescriptor::button("live-owr", 7, 7, OnOff),
    ControlDescriptor::button("video-only", 7, 8, OnOff),
    ControlDescriptor::button("audio-only", 7, 9, OnOff),
    ControlDescriptor::button("stop-play", 8, 8, Unlit),
];

pub(super) const PINCODE_KEYS: [&str; 10] = [
    "stop-play",
    "cam1",
    "cam2",
    "cam3",
    "cam4",
    "cam5",
    "cam6",
    "cam7",
    "cam8",
    "cam9",
];

pub(super) const TRANSFER_VARIABLES: &[TransferVariable] = &[];
