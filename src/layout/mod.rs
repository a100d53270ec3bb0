//! Layout builders.
//!
//! Each builder turns one circuit quantity into an immutable description of
//! what to draw. Nothing here touches a drawing surface:
//!
//! - [`scale`] - V, I, R to [0, 1] intensities and font sizes
//! - [`battery`] - voltage to a row of cells
//! - [`resistor`] - resistance to a random dot scatter
//! - [`flow`] - current to an arrow animation plan

pub mod battery;
pub mod flow;
pub mod geometry;
pub mod resistor;
pub mod scale;

pub use battery::{
    BatteryLayout, BatteryLayoutBuilder, BatteryShape, BatteryStyle, CellGeometry, LeadSegment,
    StubGeometry, StubStyle,
};
pub use flow::{
    ArrowPhase, ArrowPose, FlowAnimationPlanner, FlowDirection, FlowPlan, FlowStyle, MotionPath,
    MIN_FLOW_CURRENT,
};
pub use geometry::Point;
pub use resistor::{rendered_resistance, ResistorLayout, ResistorLayoutBuilder, ResistorStyle};
pub use scale::{
    DisplayScale, FontConfig, FontRange, FontSizes, ScaleConfig, ScaleMapping, ScaleMode,
    CURRENT_LOG_FLOOR,
};
