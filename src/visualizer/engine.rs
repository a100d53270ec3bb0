//! The visualizer state machine.

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::circuit::{CircuitLimits, CircuitState};
use crate::config::VisualConfig;
use crate::controls::{Slider, SliderValueMapper, ViewMode};
use crate::error::Result;
use crate::layout::{
    rendered_resistance, BatteryLayoutBuilder, DisplayScale, FlowAnimationPlanner, FontSizes,
    ResistorLayout, ResistorLayoutBuilder,
};

use super::frame::{Frame, Readout};

/// Holds the widget state and produces [`Frame`]s.
///
/// All updates are synchronous: each setter recomputes what depends on it
/// before returning, so [`Visualizer::frame`] is always consistent.
pub struct Visualizer {
    config: VisualConfig,
    limits: CircuitLimits,
    state: CircuitState,
    view: ViewMode,
    voltage_slider: Slider,
    resistance_slider: Slider,
    battery: BatteryLayoutBuilder,
    resistor: ResistorLayoutBuilder,
    flow: FlowAnimationPlanner,
    /// Current dot scatter
    dots: ResistorLayout,
    /// Rendered resistance the dot scatter was drawn for
    last_rendered_resistance: Option<f64>,
    rng: StdRng,
}

impl Visualizer {
    /// Create a visualizer seeded from system entropy.
    pub fn new(config: VisualConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a visualizer with a reproducible dot scatter.
    pub fn with_seed(config: VisualConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: VisualConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;

        let vs = &config.voltage_slider;
        let voltage_slider = Slider::new(
            SliderValueMapper::new(vs.range.min, vs.range.max, vs.step)?,
            vs.initial,
        );
        let rs = &config.resistance_slider;
        let resistance_slider = Slider::new(
            SliderValueMapper::new(rs.range.min, rs.range.max, rs.step)?,
            rs.initial,
        );

        let limits = config.limits();
        let state = CircuitState::with_limits(
            voltage_slider.value(),
            resistance_slider.value(),
            &limits,
        );

        let battery = BatteryLayoutBuilder::new(config.battery.clone());
        let resistor = ResistorLayoutBuilder::new(config.resistor.clone());
        let flow = FlowAnimationPlanner::new(config.flow.clone());
        let dots = resistor.build(state.resistance(), &mut rng);

        debug!(
            "visualizer ready: {:.1} V, {:.0} ohms, {} arrows, {} ohms/dot",
            state.voltage(),
            state.resistance(),
            config.flow.arrow_count,
            config.resistor.dot_density
        );

        Ok(Self {
            last_rendered_resistance: Some(rendered_resistance(state.resistance())),
            config,
            limits,
            state,
            view: ViewMode::default(),
            voltage_slider,
            resistance_slider,
            battery,
            resistor,
            flow,
            dots,
            rng,
        })
    }

    pub fn config(&self) -> &VisualConfig {
        &self.config
    }

    pub fn state(&self) -> &CircuitState {
        &self.state
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Voltage slider thumb position as a track fraction.
    pub fn voltage_position(&self) -> f64 {
        self.voltage_slider.position()
    }

    /// Resistance slider thumb position as a track fraction.
    pub fn resistance_position(&self) -> f64 {
        self.resistance_slider.position()
    }

    /// Set the voltage. Returns the quantized value actually applied.
    ///
    /// Non-finite input is ignored and the previous voltage kept.
    pub fn set_voltage(&mut self, voltage: f64) -> f64 {
        if !voltage.is_finite() {
            warn!("ignoring non-finite voltage {}", voltage);
            return self.state.voltage();
        }
        let v = self.voltage_slider.set_value(voltage);
        self.apply_voltage(v)
    }

    /// Set the resistance. Returns the quantized value actually applied.
    ///
    /// Non-finite input is ignored and the previous resistance kept.
    pub fn set_resistance(&mut self, resistance: f64) -> f64 {
        if !resistance.is_finite() {
            warn!("ignoring non-finite resistance {}", resistance);
            return self.state.resistance();
        }
        let r = self.resistance_slider.set_value(resistance);
        self.apply_resistance(r)
    }

    /// Drag the voltage slider to a track fraction (0 bottom, 1 top).
    pub fn drag_voltage(&mut self, fraction: f64) -> f64 {
        if !fraction.is_finite() {
            warn!("ignoring non-finite voltage slider position {}", fraction);
            return self.state.voltage();
        }
        let v = self.voltage_slider.set_position(fraction);
        self.apply_voltage(v)
    }

    /// Drag the resistance slider to a track fraction (0 bottom, 1 top).
    pub fn drag_resistance(&mut self, fraction: f64) -> f64 {
        if !fraction.is_finite() {
            warn!("ignoring non-finite resistance slider position {}", fraction);
            return self.state.resistance();
        }
        let r = self.resistance_slider.set_position(fraction);
        self.apply_resistance(r)
    }

    /// Switch between the equation and triangle views.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.view.toggle();
        debug!("view switched to {:?}", self.view);
        self.view
    }

    /// Select a view explicitly.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    fn apply_voltage(&mut self, voltage: f64) -> f64 {
        self.state.set_voltage(voltage, &self.limits);
        debug!(
            "voltage {:.1} V -> current {:.4} A",
            self.state.voltage(),
            self.state.current()
        );
        self.refresh_dots();
        self.state.voltage()
    }

    fn apply_resistance(&mut self, resistance: f64) -> f64 {
        self.state.set_resistance(resistance, &self.limits);
        debug!(
            "resistance {:.0} ohms -> current {:.4} A",
            self.state.resistance(),
            self.state.current()
        );
        self.refresh_dots();
        self.state.resistance()
    }

    /// Redraw the dot scatter, unless caching is on and the rendered
    /// resistance has not changed.
    fn refresh_dots(&mut self) {
        let rendered = rendered_resistance(self.state.resistance());
        if self.config.cache_dot_scatter && self.last_rendered_resistance == Some(rendered) {
            trace!("dot scatter unchanged at {} ohms", rendered);
            return;
        }
        self.dots = self.resistor.build(self.state.resistance(), &mut self.rng);
        self.last_rendered_resistance = Some(rendered);
    }

    /// The current dot scatter.
    pub fn resistor_layout(&self) -> &ResistorLayout {
        &self.dots
    }

    /// Snapshot every layout output for the current state.
    pub fn frame(&self) -> Frame {
        let scale = DisplayScale::from_state(&self.state, &self.config.scale);
        Frame {
            state: self.state,
            view: self.view,
            scale,
            fonts: FontSizes::for_view(&scale, &self.config.fonts, self.view),
            battery: self.battery.build(self.state.voltage()),
            resistor: self.dots.clone(),
            flow: self.flow.plan(self.state.current()),
            path: self.config.flow.motion_path(),
            readout: Readout::from_state(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn classic() -> Visualizer {
        Visualizer::with_seed(VisualConfig::classic(), 7).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let viz = classic();
        assert_eq!(viz.state().voltage(), 4.5);
        assert_eq!(viz.state().resistance(), 500.0);
        assert_eq!(viz.view(), ViewMode::Equation);
        assert_abs_diff_eq!(viz.voltage_position(), 0.5, epsilon = 1e-12);

        let frame = viz.frame();
        assert_eq!(frame.readout.current_ma, "9.0");
        assert_eq!(frame.battery.cell_count(), 3);
        assert_eq!(frame.resistor.dot_count(), 50);
        assert!(frame.flow.is_some());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = VisualConfig::classic().with_dot_density(0.0);
        assert!(Visualizer::with_seed(config, 1).is_err());
    }

    #[test]
    fn test_setters_quantize_and_clamp() {
        let mut viz = classic();
        assert_abs_diff_eq!(viz.set_voltage(3.14159), 3.1, epsilon = 1e-12);
        assert_eq!(viz.set_voltage(50.0), 9.0);
        assert_eq!(viz.set_resistance(0.0), 10.0);
        assert_eq!(viz.set_resistance(432.6), 433.0);
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut viz = classic();
        viz.set_voltage(2.0);
        assert_eq!(viz.set_voltage(f64::NAN), 2.0);
        assert_eq!(viz.set_resistance(f64::INFINITY), 500.0);
        assert_eq!(viz.drag_voltage(f64::NAN), 2.0);
    }

    #[test]
    fn test_drag_updates_current() {
        let mut viz = classic();
        viz.drag_voltage(1.0);
        viz.drag_resistance(0.0);
        assert_abs_diff_eq!(viz.state().current(), 0.9, epsilon = 1e-12);
        assert_eq!(viz.resistance_position(), 0.0);
    }

    #[test]
    fn test_toggle_changes_fonts_only() {
        let mut viz = classic();
        let eq = viz.frame();
        viz.toggle_view();
        let tri = viz.frame();

        assert_eq!(tri.view, ViewMode::Triangle);
        assert_eq!(tri.toggle_label(), "Switch to V=IR View");
        assert!(tri.fonts.voltage < eq.fonts.voltage);
        assert_eq!(tri.scale, eq.scale);
        assert_eq!(tri.resistor, eq.resistor);
    }

    #[test]
    fn test_classic_redraws_dots_on_every_update() {
        let mut viz = classic();
        let before = viz.resistor_layout().clone();
        viz.set_voltage(6.0);
        assert_ne!(viz.resistor_layout().dots, before.dots);
        assert_eq!(viz.resistor_layout().dot_count(), before.dot_count());
    }

    #[test]
    fn test_refined_caches_dots() {
        let mut viz = Visualizer::with_seed(VisualConfig::refined(), 7).unwrap();
        let before = viz.resistor_layout().clone();

        viz.set_voltage(6.0);
        assert_eq!(viz.resistor_layout(), &before);

        viz.set_resistance(500.0);
        assert_eq!(viz.resistor_layout(), &before);

        viz.set_resistance(600.0);
        assert_ne!(viz.resistor_layout().dots, before.dots);
        assert_eq!(viz.resistor_layout().dot_count(), 24);
    }

    #[test]
    fn test_zero_voltage_frame() {
        let mut viz = classic();
        viz.set_voltage(0.0);
        let frame = viz.frame();
        assert!(frame.battery.is_stub());
        assert!(frame.flow.is_none());
        assert_eq!(frame.scale.voltage, 0.0);
        assert_eq!(frame.scale.current, 0.0);
        assert_eq!(frame.readout.current_ma, "0.0");
    }
}
