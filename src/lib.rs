//! # Ohm Viz
//!
//! Layout core for an interactive Ohm's Law (V = I·R) visualization.
//!
//! A user drags a voltage and a resistance slider. This library computes the
//! current and everything needed to draw the circuit:
//! - Font sizes of the V, I and R letters in the equation (or triangle) view
//! - A battery pack of up to six 1.5 V cells that grows with voltage
//! - A resistor filled with dots whose density follows resistance
//! - Arrows circling the loop at a speed that follows current
//!
//! Drawing is left to a renderer: the library only emits immutable layout
//! descriptions.
//!
//! ## Architecture
//!
//! - [`circuit`] - Circuit state and Ohm's Law
//! - [`controls`] - Slider quantization and the view toggle
//! - [`layout`] - Scale mapping and the battery, resistor and flow builders
//! - [`visualizer`] - Widget state and frame assembly
//! - [`config`] - Visual constants and style presets
//! - [`report`] - Plain-text frame report (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ohmviz --voltage 5 --resistance 220 --variant refined
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmOhmViz } from 'ohm_viz';
//!
//! const viz = new WasmOhmViz("classic");
//! viz.drag_voltage(0.75);
//! const cells = viz.battery_cells();
//! ```
//!
//! ## Update cycle
//!
//! 1. A slider fraction is clamped and snapped to the slider step
//! 2. The circuit state clamps the value and derives I = V / R
//! 3. Each builder recomputes its layout from the new state
//! 4. [`visualizer::Visualizer::frame`] hands the result to the renderer

pub mod circuit;
pub mod config;
pub mod controls;
pub mod error;
pub mod layout;
pub mod visualizer;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use circuit::CircuitState;
pub use config::{Variant, VisualConfig};
pub use error::{OhmVizError, Result};
pub use visualizer::{Frame, Visualizer};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmOhmViz;

/// Volts represented by one battery cell
pub const CELL_VOLTAGE: f64 = 1.5;
