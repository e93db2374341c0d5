//! ATEM Micro Panel
//!
//! Two rows of ten RGB source keys, transition keys on the right and a
//! T-bar with a 16 segment LED strip.

use super::{TBAR_LEDS_VARIABLE, TBAR_VALUE_VARIABLE, TransferVariable, VariableDirection};
use crate::control::ControlDescriptor;
use crate::control::FeedbackPrimitive::{OnOff, Rgb};

const TBAR_ID: &str = "tbar";
const TBAR_SEGMENTS: usize = 16;

pub(super) const CONTROLS: &[ControlDescriptor] = &[
    ControlDescriptor::button("program1", 0, 0, Rgb),
    ControlDescriptor::button("program2", 0, 1, Rgb),
    ControlDescriptor::button("program3", 0, 2, Rgb),
    ControlDescriptor::button("program4", 0, 3, Rgb),
    ControlDescriptor::button("program5", 0, 4, Rgb),
    ControlDescriptor::button("program6", 0, 5, Rgb),
    ControlDescriptor::button("program7", 0, 6, Rgb),
    ControlDescriptor::button("program8", 0, 7, Rgb),
    ControlDescriptor::button("program9", 0, 8, Rgb),
    ControlDescriptor::button("program10", 0, 9, Rgb),
    ControlDescriptor::button("preview1", 1, 0, Rgb),
    ControlDescriptor::button("preview2", 1, 1, Rgb),
    ControlDescriptor::button("preview3", 1, 2, Rgb),
    ControlDescriptor::button("preview4", 1, 3, Rgb),
    ControlDescriptor::button("preview5", 1, 4, Rgb),
    ControlDescriptor::button("preview6", 1, 5, Rgb),
    ControlDescriptor::button("preview7", 1, 6, Rgb),
    ControlDescriptor::button("preview8", 1, 7, Rgb),
    ControlDescriptor::button("preview9", 1, 8, Rgb),
    ControlDescriptor::button("preview10", 1, 9, Rgb),
    ControlDescriptor::button("shift", 2, 0, OnOff),
    ControlDescriptor::button("bkgd", 2, 2, Rgb),
    ControlDescriptor::button("key1", 2, 3, Rgb),
    ControlDescriptor::button("dsk1-tie", 2, 5, Rgb),
    ControlDescriptor::button("dsk1-on-air", 2, 6, Rgb),
    ControlDescriptor::button("ftb", 2, 8, Rgb),
    ControlDescriptor::button("cut", 0, 11, Rgb),
    ControlDescriptor::button("auto", 1, 11, Rgb),
    ControlDescriptor::bar(TBAR_ID, 0, 12, TBAR_SEGMENTS),
];

// In order of the value they represent
pub(super) const LOCK_PROGRESS: &[&str] = &[
    "program1",
    "program2",
    "program3",
    "program4",
    "program5",
    "program6",
    "program7",
    "program8",
    "program9",
    "program10",
];

pub(super) const PINCODE_KEYS: [&str; 10] = [
    "preview10",
    "preview1",
    "preview2",
    "preview3",
    "preview4",
    "preview5",
    "preview6",
    "preview7",
    "preview8",
    "preview9",
];

pub(super) const TRANSFER_VARIABLES: &[TransferVariable] = &[
    TransferVariable {
        id: TBAR_VALUE_VARIABLE,
        direction: VariableDirection::Input,
        name: "Variable to store T-bar value to",
        description: "This produces a value between 0 and 1. You can use an expression to convert it into a different range.",
    },
    TransferVariable {
        id: TBAR_LEDS_VARIABLE,
        direction: VariableDirection::Output { bar: TBAR_ID },
        name: "T-bar LED pattern",
        description: "Set the pattern of LEDs on the T-bar. Use numbers -16 to 16, positive numbers light up from the bottom, negative from the top.",
    },
];
