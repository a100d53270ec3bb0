//! The single-loop circuit: one battery driving one resistor.

use super::types::Bounds;

/// Smallest resistance ever divided by.
pub const RESISTANCE_FLOOR: f64 = 1e-12;

/// Legal voltage range in volts.
pub const VOLTAGE_LIMITS: Bounds = Bounds::new(0.0, 9.0);

/// Legal resistance range in ohms.
pub const RESISTANCE_LIMITS: Bounds = Bounds::new(10.0, 1000.0);

/// Apply Ohm's Law: I = V / R.
///
/// Resistance is floored at [`RESISTANCE_FLOOR`] so the result is always finite.
pub fn recompute(voltage: f64, resistance: f64) -> f64 {
    voltage / resistance.max(RESISTANCE_FLOOR)
}

/// Ranges the circuit inputs are clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitLimits {
    pub voltage: Bounds,
    pub resistance: Bounds,
}

impl Default for CircuitLimits {
    fn default() -> Self {
        Self {
            voltage: VOLTAGE_LIMITS,
            resistance: RESISTANCE_LIMITS,
        }
    }
}

/// Voltage and resistance of the circuit. Current is derived on demand and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitState {
    voltage: f64,
    resistance: f64,
}

impl CircuitState {
    /// Create a state, clamping both inputs to the default legal ranges.
    pub fn new(voltage: f64, resistance: f64) -> Self {
        Self::with_limits(voltage, resistance, &CircuitLimits::default())
    }

    /// Create a state, clamping both inputs to the given ranges.
    pub fn with_limits(voltage: f64, resistance: f64, limits: &CircuitLimits) -> Self {
        Self {
            voltage: limits.voltage.clamp(voltage),
            resistance: limits.resistance.clamp(resistance),
        }
    }

    /// Voltage in volts.
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Current in amps.
    pub fn current(&self) -> f64 {
        recompute(self.voltage, self.resistance)
    }

    /// Current in milliamps.
    pub fn current_milliamps(&self) -> f64 {
        self.current() * 1000.0
    }

    /// Set the voltage, clamped to the given range.
    pub fn set_voltage(&mut self, voltage: f64, limits: &CircuitLimits) {
        self.voltage = limits.voltage.clamp(voltage);
    }

    /// Set the resistance, clamped to the given range.
    pub fn set_resistance(&mut self, resistance: f64, limits: &CircuitLimits) {
        self.resistance = limits.resistance.clamp(resistance);
    }
}

impl Default for CircuitState {
    /// The widget's starting point: 4.5 V across 500 Ω.
    fn default() -> Self {
        Self::new(4.5, 500.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ohms_law() {
        let state = CircuitState::new(9.0, 10.0);
        assert!((state.current() - 0.9).abs() < 1e-12);
        assert!((state.current_milliamps() - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_current_tracks_updates() {
        let limits = CircuitLimits::default();
        let mut state = CircuitState::default();
        assert!((state.current() - 0.009).abs() < 1e-12);

        state.set_resistance(100.0, &limits);
        assert!((state.current() - 0.045).abs() < 1e-12);

        state.set_voltage(0.0, &limits);
        assert_eq!(state.current(), 0.0);
    }

    #[test]
    fn test_inputs_are_clamped() {
        let state = CircuitState::new(-3.0, 0.0);
        assert_eq!(state.voltage(), 0.0);
        assert_eq!(state.resistance(), 10.0);

        let state = CircuitState::new(12.0, 5000.0);
        assert_eq!(state.voltage(), 9.0);
        assert_eq!(state.resistance(), 1000.0);
    }

    #[test]
    fn test_exact_division_over_grid() {
        for vi in 0..=90 {
            let v = vi as f64 * 0.1;
            for r in (10..=1000).step_by(55) {
                let state = CircuitState::new(v, r as f64);
                assert_eq!(state.current(), state.voltage() / state.resistance());
                assert!(state.current() >= 0.0);
            }
        }
    }

    #[test]
    fn test_recompute_guards_zero_resistance() {
        assert!(recompute(1.0, 0.0).is_finite());
    }
}
