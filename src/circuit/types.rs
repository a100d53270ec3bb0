//! Core types for circuit quantities.

use std::fmt;

/// A closed interval `[min, max]` used for legal input ranges and
/// normalization domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Create a new interval.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into the interval. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Check whether a value lies inside the interval (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check that the interval is finite and non-empty.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// One of the three quantities in V = I·R.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Voltage,
    Current,
    Resistance,
}

impl Quantity {
    /// All quantities in equation order (V, I, R).
    pub const ALL: [Quantity; 3] = [Quantity::Voltage, Quantity::Current, Quantity::Resistance];

    /// The letter used in the equation and triangle views.
    pub fn symbol(&self) -> char {
        match self {
            Quantity::Voltage => 'V',
            Quantity::Current => 'I',
            Quantity::Resistance => 'R',
        }
    }

    /// Display unit of the readout for this quantity.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Voltage => "V",
            Quantity::Current => "mA",
            Quantity::Resistance => "Ω",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Voltage => "voltage",
            Quantity::Current => "current",
            Quantity::Resistance => "resistance",
        };
        write!(f, "{}", name)
    }
}
