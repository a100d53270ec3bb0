//! Widget state and frame assembly.
//!
//! [`Visualizer`] replaces the loose module-level variables of a typical
//! widget script with one struct: the circuit state, the active view, both
//! sliders and the dot scatter cache. Each input event mutates it through a
//! setter; [`Visualizer::frame`] then yields a [`Frame`] for the renderer.

mod engine;
mod frame;

pub use engine::Visualizer;
pub use frame::{Frame, Readout};
