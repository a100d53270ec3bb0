//! Visual configuration.
//!
//! Every constant that shapes the drawing lives in [`VisualConfig`]. The two
//! presets capture the differences between the classic and refined widget
//! styles; everything else is shared.

use std::fmt;
use std::str::FromStr;

use crate::circuit::{Bounds, CircuitLimits};
use crate::error::{OhmVizError, Result};
use crate::layout::{BatteryStyle, FlowDirection, FlowStyle, FontConfig, ResistorStyle, ScaleConfig};

/// Starting voltage of the voltage slider.
pub const DEFAULT_VOLTAGE: f64 = 4.5;

/// Starting resistance of the resistance slider.
pub const DEFAULT_RESISTANCE: f64 = 500.0;

/// Named style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// 10 Ω per dot, 20 arrows, conventional current, dots redrawn on every update
    #[default]
    Classic,
    /// 25 Ω per dot, 28 arrows, electron flow, dots cached per rendered resistance
    Refined,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Refined => "refined",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = OhmVizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "refined" => Ok(Variant::Refined),
            _ => Err(OhmVizError::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}

/// Range, step and starting value of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub range: Bounds,
    pub step: f64,
    pub initial: f64,
}

/// Configuration for the visualizer.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub scale: ScaleConfig,
    pub fonts: FontConfig,
    pub battery: BatteryStyle,
    pub resistor: ResistorStyle,
    pub flow: FlowStyle,
    pub voltage_slider: SliderSpec,
    pub resistance_slider: SliderSpec,
    /// Keep the dot scatter while the rendered resistance is unchanged.
    pub cache_dot_scatter: bool,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl VisualConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic preset.
    pub fn classic() -> Self {
        Self {
            scale: ScaleConfig::default(),
            fonts: FontConfig::default(),
            battery: BatteryStyle::default(),
            resistor: ResistorStyle::default(),
            flow: FlowStyle::default(),
            voltage_slider: SliderSpec {
                range: Bounds::new(0.0, 9.0),
                step: 0.1,
                initial: DEFAULT_VOLTAGE,
            },
            resistance_slider: SliderSpec {
                range: Bounds::new(10.0, 1000.0),
                step: 1.0,
                initial: DEFAULT_RESISTANCE,
            },
            cache_dot_scatter: false,
        }
    }

    /// The refined preset.
    pub fn refined() -> Self {
        Self::classic()
            .with_dot_density(25.0)
            .with_arrow_count(28)
            .with_flow_direction(FlowDirection::Electron)
            .with_dot_cache(true)
    }

    /// The preset for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Refined => Self::refined(),
        }
    }

    /// Set the ohms represented by one resistor dot.
    pub fn with_dot_density(mut self, ohms_per_dot: f64) -> Self {
        self.resistor.dot_density = ohms_per_dot;
        self
    }

    /// Set the number of flow arrows.
    pub fn with_arrow_count(mut self, arrow_count: usize) -> Self {
        self.flow.arrow_count = arrow_count;
        self
    }

    /// Set the flow direction.
    pub fn with_flow_direction(mut self, direction: FlowDirection) -> Self {
        self.flow.direction = direction;
        self
    }

    /// Enable or disable dot scatter caching.
    pub fn with_dot_cache(mut self, enabled: bool) -> Self {
        self.cache_dot_scatter = enabled;
        self
    }

    /// Set the loop duration bounds (seconds).
    ///
    /// - `min`: loop time at the reference current (0.9 A)
    /// - `max`: cap for small currents, so arrows never stall entirely
    pub fn with_flow_durations(mut self, min: f64, max: f64) -> Self {
        self.flow.min_duration = min;
        self.flow.max_duration = max;
        self
    }

    /// Ranges circuit inputs are clamped into, taken from the sliders.
    pub fn limits(&self) -> CircuitLimits {
        CircuitLimits {
            voltage: self.voltage_slider.range,
            resistance: self.resistance_slider.range,
        }
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        crate::circuit::validate_config(self)
    }
}
