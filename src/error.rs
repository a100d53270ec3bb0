//! Error types for the Ohm's Law visualizer core.
//!
//! The layout math itself never fails: out-of-range inputs are clamped
//! silently. [`OhmVizError`] covers the surfaces around it, namely
//! configuration validation, slider construction, variant lookup, and
//! CLI output.

use thiserror::Error;

/// Result type alias using [`OhmVizError`].
pub type Result<T> = std::result::Result<T, OhmVizError>;

/// Unified error type for all Ohm Viz operations.
#[derive(Error, Debug)]
pub enum OhmVizError {
    // ============ Configuration Errors ============
    /// A configuration field holds an unusable value
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    /// Slider bounds or step are unusable
    #[error("Invalid slider range [{min}, {max}] with step {step}")]
    InvalidSliderRange { min: f64, max: f64, step: f64 },

    /// Unknown visual variant name
    #[error("Unknown variant '{name}' (expected 'classic' or 'refined')")]
    UnknownVariant { name: String },

    // ============ I/O Errors ============
    /// Error writing the frame report
    #[error("Report output error: {message}")]
    OutputError { message: String },
}

impl OhmVizError {
    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::OutputError {
            message: message.into(),
        }
    }
}
