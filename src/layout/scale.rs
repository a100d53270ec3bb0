//! Display scaling: raw quantities to [0, 1] intensities to font sizes.
//!
//! Voltage and resistance scale linearly over their slider ranges. Current
//! spans four decades (0.1 mA to 0.9 A) so it scales on `log10`, floored at
//! 0.1 mA so the logarithm is always defined.

use crate::circuit::{Bounds, CircuitState, Quantity};
use crate::controls::ViewMode;

use super::geometry::lerp;

/// Floor applied to current before taking its logarithm (amps).
pub const CURRENT_LOG_FLOOR: f64 = 1e-4;

/// Interpolation mode of a [`ScaleMapping`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleMode {
    Linear,
    /// Interpolate on `log10(max(x, floor))`
    Logarithmic { floor: f64 },
}

/// Normalizes a quantity into a display intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapping {
    pub domain: Bounds,
    pub mode: ScaleMode,
}

impl ScaleMapping {
    /// Linear mapping over `[min, max]`.
    pub const fn linear(min: f64, max: f64) -> Self {
        Self {
            domain: Bounds::new(min, max),
            mode: ScaleMode::Linear,
        }
    }

    /// Logarithmic mapping over `[min, max]`, flooring inputs at `min`.
    pub const fn logarithmic(min: f64, max: f64) -> Self {
        Self {
            domain: Bounds::new(min, max),
            mode: ScaleMode::Logarithmic { floor: min },
        }
    }

    /// Intensity of `x` in `[0, 1]`. Monotonic, saturating at the domain edges.
    pub fn intensity(&self, x: f64) -> f64 {
        let t = match self.mode {
            ScaleMode::Linear => (x - self.domain.min) / self.domain.span(),
            ScaleMode::Logarithmic { floor } => {
                let lo = self.domain.min.log10();
                let hi = self.domain.max.log10();
                (x.max(floor).log10() - lo) / (hi - lo)
            }
        };
        t.max(0.0).min(1.0)
    }
}

/// Reference ranges for the three quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    pub voltage: ScaleMapping,
    pub current: ScaleMapping,
    pub resistance: ScaleMapping,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            voltage: ScaleMapping::linear(0.1, 9.0),
            current: ScaleMapping::logarithmic(CURRENT_LOG_FLOOR, 1.0),
            resistance: ScaleMapping::linear(10.0, 1000.0),
        }
    }
}

/// Display intensities of V, I and R for one circuit state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
}

impl DisplayScale {
    /// Compute the intensities for a state.
    pub fn from_state(state: &CircuitState, config: &ScaleConfig) -> Self {
        Self {
            voltage: config.voltage.intensity(state.voltage()),
            current: config.current.intensity(state.current()),
            resistance: config.resistance.intensity(state.resistance()),
        }
    }

    /// Intensity of a single quantity.
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Voltage => self.voltage,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
        }
    }
}

/// Font size range in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRange {
    pub min_px: f64,
    pub max_px: f64,
}

impl FontRange {
    pub const fn new(min_px: f64, max_px: f64) -> Self {
        Self { min_px, max_px }
    }

    /// Font size for an intensity.
    pub fn size_for(&self, intensity: f64) -> f64 {
        lerp(self.min_px, self.max_px, intensity)
    }
}

/// Font ranges of the two equation views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontConfig {
    pub equation: FontRange,
    /// Triangle view has less room, so its range is tighter
    pub triangle: FontRange,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            equation: FontRange::new(20.0, 120.0),
            triangle: FontRange::new(14.0, 48.0),
        }
    }
}

impl FontConfig {
    /// The range used by a view.
    pub fn range_for(&self, view: ViewMode) -> &FontRange {
        match view {
            ViewMode::Equation => &self.equation,
            ViewMode::Triangle => &self.triangle,
        }
    }
}

/// Font sizes of the V, I and R letters in the active view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
}

impl FontSizes {
    /// Compute font sizes for a view.
    pub fn for_view(scale: &DisplayScale, fonts: &FontConfig, view: ViewMode) -> Self {
        let range = fonts.range_for(view);
        Self {
            voltage: range.size_for(scale.voltage),
            current: range.size_for(scale.current),
            resistance: range.size_for(scale.resistance),
        }
    }

    /// Font size of a single quantity.
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Voltage => self.voltage,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_saturates() {
        let m = ScaleMapping::linear(10.0, 1000.0);
        assert_eq!(m.intensity(10.0), 0.0);
        assert_eq!(m.intensity(1000.0), 1.0);
        assert_eq!(m.intensity(-50.0), 0.0);
        assert_eq!(m.intensity(5000.0), 1.0);
        assert_abs_diff_eq!(m.intensity(505.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_is_monotonic() {
        let m = ScaleMapping::linear(0.1, 9.0);
        let mut prev = m.intensity(-1.0);
        for i in 0..=200 {
            let t = m.intensity(i as f64 * 0.05);
            assert!(t >= prev);
            assert!((0.0..=1.0).contains(&t));
            prev = t;
        }
    }

    #[test]
    fn test_voltage_below_reference_floor() {
        // 0 V sits below the 0.1 V reference minimum
        let m = ScaleConfig::default().voltage;
        assert_eq!(m.intensity(0.0), 0.0);
    }

    #[test]
    fn test_log_current() {
        let m = ScaleConfig::default().current;
        assert_eq!(m.intensity(0.0), 0.0);
        assert_eq!(m.intensity(1e-6), 0.0);
        assert_abs_diff_eq!(m.intensity(1e-4), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.intensity(1e-2), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(m.intensity(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(m.intensity(10.0), 1.0);
    }

    #[test]
    fn test_log_is_monotonic() {
        let m = ScaleConfig::default().current;
        let mut prev = 0.0;
        let mut i = 1e-5;
        while i < 2.0 {
            let t = m.intensity(i);
            assert!(t >= prev);
            prev = t;
            i *= 1.3;
        }
    }

    #[test]
    fn test_nan_maps_to_zero() {
        assert_eq!(ScaleMapping::linear(0.0, 1.0).intensity(f64::NAN), 0.0);
    }

    #[test]
    fn test_font_sizes_per_view() {
        let state = CircuitState::new(9.0, 10.0);
        let scale = DisplayScale::from_state(&state, &ScaleConfig::default());
        assert_eq!(scale.voltage, 1.0);
        assert_eq!(scale.resistance, 0.0);

        let fonts = FontConfig::default();
        let eq = FontSizes::for_view(&scale, &fonts, ViewMode::Equation);
        assert_abs_diff_eq!(eq.voltage, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.resistance, 20.0, epsilon = 1e-9);

        let tri = FontSizes::for_view(&scale, &fonts, ViewMode::Triangle);
        assert_abs_diff_eq!(tri.voltage, 48.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tri.resistance, 14.0, epsilon = 1e-9);
        assert!(tri.current > 14.0 && tri.current < 48.0);
    }
}
