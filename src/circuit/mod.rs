//! Circuit model and configuration validation.
//!
//! The visualized circuit is a single loop: a battery pack of up to six
//! 1.5 V cells driving one resistor. [`CircuitState`] holds the two inputs
//! and derives the current from Ohm's Law on every read.

mod model;
mod types;
mod validate;

pub use model::{
    recompute, CircuitLimits, CircuitState, RESISTANCE_FLOOR, RESISTANCE_LIMITS, VOLTAGE_LIMITS,
};
pub use types::*;
pub use validate::validate_config;
