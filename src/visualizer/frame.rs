//! Frame: everything a renderer needs for one circuit state.

use crate::circuit::CircuitState;
use crate::controls::ViewMode;
use crate::layout::{BatteryLayout, DisplayScale, FlowPlan, FontSizes, MotionPath, ResistorLayout};

/// Text readouts next to the sliders and in the equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// Volts, one decimal
    pub voltage: String,
    /// Ohms, no decimals
    pub resistance: String,
    /// Milliamps, one decimal
    pub current_ma: String,
}

impl Readout {
    pub fn from_state(state: &CircuitState) -> Self {
        Self {
            voltage: format!("{:.1}", state.voltage()),
            resistance: format!("{:.0}", state.resistance()),
            current_ma: format!("{:.1}", state.current_milliamps()),
        }
    }
}

/// Immutable snapshot of every layout output.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub state: CircuitState,
    pub view: ViewMode,
    pub scale: DisplayScale,
    /// Font sizes for `view`
    pub fonts: FontSizes,
    pub battery: BatteryLayout,
    pub resistor: ResistorLayout,
    /// `None` when the current is too small to animate
    pub flow: Option<FlowPlan>,
    /// Directed path the arrows follow
    pub path: MotionPath,
    pub readout: Readout,
}

impl Frame {
    /// Label for the view toggle button.
    pub fn toggle_label(&self) -> &'static str {
        self.view.toggle_label()
    }
}
