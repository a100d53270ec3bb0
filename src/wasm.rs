//! WASM bindings for Ohm Viz.
//!
//! This module provides JavaScript-friendly bindings for a browser renderer
//! that draws the circuit into SVG or a canvas.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmOhmViz } from 'ohm_viz';
//!
//! await init();
//!
//! const viz = new WasmOhmViz("refined");
//!
//! // In the slider's pointermove handler:
//! const rect = track.getBoundingClientRect();
//! viz.drag_voltage((rect.bottom - event.clientY) / rect.height);
//!
//! voltageLabel.style.fontSize = `${viz.voltage_font}px`;
//! const cells = viz.battery_cells(); // [x, body, terminal, band, fraction, ...]
//! ```

use wasm_bindgen::prelude::*;

use crate::config::{Variant, VisualConfig};
use crate::error::OhmVizError;
use crate::layout::BatteryShape;
use crate::visualizer::{Frame, Visualizer};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: OhmVizError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible visualizer handle.
///
/// Wraps the native [`Visualizer`] and caches the latest [`Frame`] so the
/// getters below are cheap to call from a render loop.
#[wasm_bindgen]
pub struct WasmOhmViz {
    visualizer: Visualizer,
    frame: Frame,
}

impl WasmOhmViz {
    fn wrap(visualizer: Visualizer) -> Self {
        let frame = visualizer.frame();
        Self { visualizer, frame }
    }

    fn refresh(&mut self) {
        self.frame = self.visualizer.frame();
    }
}

#[wasm_bindgen]
impl WasmOhmViz {
    /// Create a visualizer for a style preset ("classic" or "refined").
    ///
    /// # Example
    /// ```javascript
    /// const viz = new WasmOhmViz("classic");
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str) -> Result<WasmOhmViz, JsValue> {
        let variant: Variant = variant.parse().map_err(to_js)?;
        let visualizer = Visualizer::new(VisualConfig::for_variant(variant)).map_err(to_js)?;
        Ok(Self::wrap(visualizer))
    }

    /// Create a visualizer with a reproducible dot scatter.
    ///
    /// The seed arrives as a JS number and is truncated to an integer.
    #[wasm_bindgen]
    pub fn with_seed(variant: &str, seed: f64) -> Result<WasmOhmViz, JsValue> {
        let variant: Variant = variant.parse().map_err(to_js)?;
        let visualizer = Visualizer::with_seed(VisualConfig::for_variant(variant), seed as u64)
            .map_err(to_js)?;
        Ok(Self::wrap(visualizer))
    }

    /// Set the voltage and return the applied (quantized) value.
    #[wasm_bindgen]
    pub fn set_voltage(&mut self, voltage: f64) -> f64 {
        let v = self.visualizer.set_voltage(voltage);
        self.refresh();
        v
    }

    /// Set the resistance and return the applied (quantized) value.
    #[wasm_bindgen]
    pub fn set_resistance(&mut self, resistance: f64) -> f64 {
        let r = self.visualizer.set_resistance(resistance);
        self.refresh();
        r
    }

    /// Drag the voltage slider to a track fraction (0 bottom, 1 top).
    #[wasm_bindgen]
    pub fn drag_voltage(&mut self, fraction: f64) -> f64 {
        let v = self.visualizer.drag_voltage(fraction);
        self.refresh();
        v
    }

    /// Drag the resistance slider to a track fraction (0 bottom, 1 top).
    #[wasm_bindgen]
    pub fn drag_resistance(&mut self, fraction: f64) -> f64 {
        let r = self.visualizer.drag_resistance(fraction);
        self.refresh();
        r
    }

    /// Toggle the view; returns true when the triangle view is now active.
    #[wasm_bindgen]
    pub fn toggle_view(&mut self) -> bool {
        let view = self.visualizer.toggle_view();
        self.refresh();
        view.is_triangle()
    }

    #[wasm_bindgen(getter)]
    pub fn is_triangle_view(&self) -> bool {
        self.frame.view.is_triangle()
    }

    #[wasm_bindgen(getter)]
    pub fn toggle_label(&self) -> String {
        self.frame.toggle_label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn voltage(&self) -> f64 {
        self.frame.state.voltage()
    }

    #[wasm_bindgen(getter)]
    pub fn resistance(&self) -> f64 {
        self.frame.state.resistance()
    }

    /// Current in amps.
    #[wasm_bindgen(getter)]
    pub fn current(&self) -> f64 {
        self.frame.state.current()
    }

    /// Voltage slider thumb position (0 to 1).
    #[wasm_bindgen(getter)]
    pub fn voltage_position(&self) -> f64 {
        self.visualizer.voltage_position()
    }

    /// Resistance slider thumb position (0 to 1).
    #[wasm_bindgen(getter)]
    pub fn resistance_position(&self) -> f64 {
        self.visualizer.resistance_position()
    }

    #[wasm_bindgen(getter)]
    pub fn voltage_text(&self) -> String {
        self.frame.readout.voltage.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn resistance_text(&self) -> String {
        self.frame.readout.resistance.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn current_ma_text(&self) -> String {
        self.frame.readout.current_ma.clone()
    }

    /// Font size of V in the active view (px).
    #[wasm_bindgen(getter)]
    pub fn voltage_font(&self) -> f64 {
        self.frame.fonts.voltage
    }

    /// Font size of I in the active view (px).
    #[wasm_bindgen(getter)]
    pub fn current_font(&self) -> f64 {
        self.frame.fonts.current
    }

    /// Font size of R in the active view (px).
    #[wasm_bindgen(getter)]
    pub fn resistance_font(&self) -> f64 {
        self.frame.fonts.resistance
    }

    /// True when the battery slot shows the zero-voltage stub.
    #[wasm_bindgen(getter)]
    pub fn battery_is_stub(&self) -> bool {
        self.frame.battery.is_stub()
    }

    /// Battery cells flattened as `[x, body, terminal, band, fraction]` per cell.
    ///
    /// For the stub this is a single `[x, width, height, corner_radius]` entry.
    #[wasm_bindgen]
    pub fn battery_cells(&self) -> Vec<f64> {
        match &self.frame.battery.shape {
            BatteryShape::Stub(s) => vec![s.x, s.width, s.height, s.corner_radius],
            BatteryShape::Pack(cells) => cells
                .iter()
                .flat_map(|c| [c.x, c.body_width, c.terminal_width, c.band_width, c.fraction])
                .collect(),
        }
    }

    /// Battery leads as `[left_from, left_to, right_from, right_to]`.
    #[wasm_bindgen]
    pub fn battery_leads(&self) -> Vec<f64> {
        let b = &self.frame.battery;
        vec![b.left_lead.from_x, b.left_lead.to_x, b.right_lead.from_x, b.right_lead.to_x]
    }

    /// Resistor dots flattened as `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen]
    pub fn resistor_dots(&self) -> Vec<f64> {
        self.frame
            .resistor
            .dots
            .iter()
            .flat_map(|d| [d.x, d.y])
            .collect()
    }

    /// Loop duration in seconds, or 0 when no arrows are shown.
    #[wasm_bindgen(getter)]
    pub fn flow_duration(&self) -> f64 {
        self.frame.flow.as_ref().map_or(0.0, |p| p.duration)
    }

    /// Arrow start offsets in seconds; empty when no arrows are shown.
    ///
    /// Use as `begin="-{offset}s"` on each arrow's `animateMotion`.
    #[wasm_bindgen]
    pub fn arrow_offsets(&self) -> Vec<f64> {
        self.frame
            .flow
            .as_ref()
            .map(|p| p.arrows.iter().map(|a| a.start_offset).collect())
            .unwrap_or_default()
    }

    /// Arrow poses after `elapsed` seconds as `[x, y, heading_degrees, ...]`.
    #[wasm_bindgen]
    pub fn arrow_poses(&self, elapsed: f64) -> Vec<f64> {
        self.frame
            .flow
            .as_ref()
            .map(|p| {
                p.arrow_positions(&self.frame.path, elapsed)
                    .iter()
                    .flat_map(|a| [a.position.x, a.position.y, a.heading_degrees])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Path data of the arrow loop, for an SVG `<path d="...">`.
    #[wasm_bindgen(getter)]
    pub fn motion_path(&self) -> String {
        self.frame.path.to_path_data()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
