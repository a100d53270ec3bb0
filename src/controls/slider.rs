//! Vertical value sliders.
//!
//! Pointer math (turning a client coordinate into a fraction of the track)
//! belongs to the renderer. This module takes that fraction, with 0.0 at the
//! bottom of the track and 1.0 at the top, and turns it into a clamped,
//! step-quantized value.

use crate::circuit::Bounds;
use crate::error::{OhmVizError, Result};

/// Maps track positions to quantized values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderValueMapper {
    range: Bounds,
    step: f64,
}

impl SliderValueMapper {
    /// Create a mapper over `[min, max]` with the given step.
    ///
    /// Fails if the range is empty or not finite, or the step is not positive.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let range = Bounds::new(min, max);
        if !range.is_valid() || !step.is_finite() || step <= 0.0 {
            return Err(OhmVizError::InvalidSliderRange { min, max, step });
        }
        Ok(Self { range, step })
    }

    /// The value range.
    pub fn range(&self) -> Bounds {
        self.range
    }

    /// The quantization step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Map a track fraction to a value.
    pub fn map(&self, fraction: f64) -> f64 {
        self.snap(self.range.min + fraction * self.range.span())
    }

    /// Clamp and quantize a value.
    ///
    /// Clamped before and after snapping, since rounding up the last step can
    /// overshoot `max` when the span is not a multiple of the step.
    pub fn snap(&self, value: f64) -> f64 {
        let min = self.range.min;
        let clamped = self.range.clamp(value);
        let snapped = ((clamped - min) / self.step).round() * self.step + min;
        self.range.clamp(snapped)
    }

    /// Track fraction at which the given value sits.
    pub fn position_of(&self, value: f64) -> f64 {
        (self.range.clamp(value) - self.range.min) / self.range.span()
    }
}

/// A slider holding its current value.
#[derive(Debug, Clone)]
pub struct Slider {
    mapper: SliderValueMapper,
    value: f64,
}

impl Slider {
    /// Create a slider starting at `initial` (snapped into range).
    pub fn new(mapper: SliderValueMapper, initial: f64) -> Self {
        Self {
            value: mapper.snap(initial),
            mapper,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current thumb position as a track fraction.
    pub fn position(&self) -> f64 {
        self.mapper.position_of(self.value)
    }

    /// The underlying mapper.
    pub fn mapper(&self) -> &SliderValueMapper {
        &self.mapper
    }

    /// Move the thumb to a track fraction and return the new value.
    pub fn set_position(&mut self, fraction: f64) -> f64 {
        self.value = self.mapper.map(fraction);
        self.value
    }

    /// Set the value directly and return it after quantization.
    pub fn set_value(&mut self, value: f64) -> f64 {
        self.value = self.mapper.snap(value);
        self.value
    }
}
