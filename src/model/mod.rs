//! Surface model registry
//!
//! Every supported model is described by static tables: its controls, its
//! transfer variables, the controls used for lock progress and the pincode
//! keypad. Nothing here is mutable after connection.

mod atem_micro_panel;
mod replay_editor;
mod speed_editor;

use crate::control::ControlDescriptor;

const MODEL_NAME_ATEM_MICRO_PANEL: &str = "atem-micro-panel";
const MODEL_NAME_SPEED_EDITOR: &str = "speed-editor";
const MODEL_NAME_REPLAY_EDITOR: &str = "replay-editor";

/// Name of the input variable that receives the T-bar position.
pub const TBAR_VALUE_VARIABLE: &str = "tbarValueVariable";

/// Name of the output variable that drives the T-bar LEDs.
pub const TBAR_LEDS_VARIABLE: &str = "tbarLeds";

/// Known surface models
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceModel {
    AtemMicroPanel,
    SpeedEditor,
    ReplayEditor,
}

/// Data flow direction of a transfer variable, seen from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableDirection {
    /// Surface writes the variable
    Input,
    /// Host writes the variable and the surface displays it on a bar
    Output { bar: &'static str },
}

/// Variable exchanged between the host and the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferVariable {
    pub id: &'static str,
    pub direction: VariableDirection,
    pub name: &'static str,
    pub description: &'static str,
}

/// How the host may use the surface for pincode entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PincodeMap {
    /// Digits 0-9 map onto these controls
    SinglePage([&'static str; 10]),
    /// No on-surface entry, the host decides
    Custom,
}

impl SurfaceModel {
    pub const ALL: [Self; 3] = [Self::AtemMicroPanel, Self::SpeedEditor, Self::ReplayEditor];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AtemMicroPanel => MODEL_NAME_ATEM_MICRO_PANEL,
            Self::SpeedEditor => MODEL_NAME_SPEED_EDITOR,
            Self::ReplayEditor => MODEL_NAME_REPLAY_EDITOR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODEL_NAME_ATEM_MICRO_PANEL => Some(Self::AtemMicroPanel),
            MODEL_NAME_SPEED_EDITOR => Some(Self::SpeedEditor),
            MODEL_NAME_REPLAY_EDITOR => Some(Self::ReplayEditor),
            _ => None,
        }
    }

    /// Product name shown to users
    pub const fn product_name(self) -> &'static str {
        match self {
            Self::AtemMicroPanel => "ATEM Micro Panel",
            Self::SpeedEditor => "DaVinci Resolve Speed Editor",
            Self::ReplayEditor => "DaVinci Resolve Replay Editor",
        }
    }

    /// Ordered control layout of the model
    pub const fn controls(self) -> &'static [ControlDescriptor] {
        match self {
            Self::AtemMicroPanel => atem_micro_panel::CONTROLS,
            Self::SpeedEditor => speed_editor::CONTROLS,
            Self::ReplayEditor => replay_editor::CONTROLS,
        }
    }

    /// Look up a control by id
    ///
    /// Returns `None` for ids this model does not define.
    pub fn find(self, id: &str) -> Option<&'static ControlDescriptor> {
        self.controls().iter().find(|control| control.id == id)
    }

    /// Controls lit in order to show lock code progress
    pub const fn progress_indicator(self) -> Option<&'static [&'static str]> {
        match self {
            Self::AtemMicroPanel => Some(atem_micro_panel::LOCK_PROGRESS),
            Self::SpeedEditor | Self::ReplayEditor => None,
        }
    }

    pub const fn transfer_variables(self) -> &'static [TransferVariable] {
        match self {
            Self::AtemMicroPanel => atem_micro_panel::TRANSFER_VARIABLES,
            Self::SpeedEditor => speed_editor::TRANSFER_VARIABLES,
            Self::ReplayEditor => replay_editor::TRANSFER_VARIABLES,
        }
    }

    /// Names of the numeric variables the engine reacts to
    pub fn supported_transfer_variable_names(self) -> impl Iterator<Item = &'static str> {
        self.transfer_variables()
            .iter()
            .filter(|variable| matches!(variable.direction, VariableDirection::Output { .. }))
            .map(|variable| variable.id)
    }

    /// Bar control bound to an output variable
    pub fn output_bar(self, variable: &str) -> Option<&'static ControlDescriptor> {
        self.transfer_variables()
            .iter()
            .find(|candidate| candidate.id == variable)
            .and_then(|candidate| match candidate.direction {
                VariableDirection::Output { bar } => self.find(bar),
                VariableDirection::Input => None,
            })
    }

    pub const fn pincode_map(self) -> PincodeMap {
        match self {
            Self::AtemMicroPanel => PincodeMap::SinglePage(atem_micro_panel::PINCODE_KEYS),
            Self::SpeedEditor => PincodeMap::SinglePage(speed_editor::PINCODE_KEYS),
            Self::ReplayEditor => PincodeMap::Custom,
        }
    }
}
