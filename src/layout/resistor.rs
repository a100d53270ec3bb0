//! Resistor dot scatter.
//!
//! The resistor body is filled with dots whose density is proportional to
//! resistance: one dot per `dot_density` ohms, placed uniformly at random.

use log::trace;
use rand::Rng;

use crate::circuit::Bounds;

use super::geometry::Point;

/// Dot scatter constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorStyle {
    /// Ohms per dot
    pub dot_density: f64,
    /// Horizontal extent of the scatter, inside the 150 wide body
    pub x_bounds: Bounds,
    /// Vertical extent of the scatter, inside the 40 high body
    pub y_bounds: Bounds,
    pub dot_radius: f64,
}

impl Default for ResistorStyle {
    fn default() -> Self {
        Self {
            dot_density: 10.0,
            x_bounds: Bounds::new(-70.0, 70.0),
            y_bounds: Bounds::new(-15.0, 15.0),
            dot_radius: 1.5,
        }
    }
}

/// A scatter of dots for one resistance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorLayout {
    /// Resistance the scatter was drawn for
    pub resistance: f64,
    pub dots: Vec<Point>,
    pub dot_radius: f64,
}

impl ResistorLayout {
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }
}

/// The resistance as the readout shows it (whole ohms).
///
/// Two resistances with the same rendered value share a dot scatter.
pub fn rendered_resistance(resistance: f64) -> f64 {
    resistance.round()
}

/// Builds [`ResistorLayout`]s from resistances.
#[derive(Debug, Clone)]
pub struct ResistorLayoutBuilder {
    style: ResistorStyle,
}

impl ResistorLayoutBuilder {
    pub fn new(style: ResistorStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ResistorStyle {
        &self.style
    }

    /// Number of dots for a resistance. Deterministic.
    pub fn dot_count(&self, resistance: f64) -> usize {
        (resistance.max(0.0) / self.style.dot_density).floor() as usize
    }

    /// Scatter fresh dots for a resistance.
    pub fn build<R: Rng + ?Sized>(&self, resistance: f64, rng: &mut R) -> ResistorLayout {
        let count = self.dot_count(resistance);
        let (xb, yb) = (self.style.x_bounds, self.style.y_bounds);
        let dots = (0..count)
            .map(|_| Point::new(rng.gen_range(xb.min..xb.max), rng.gen_range(yb.min..yb.max)))
            .collect();
        trace!("resistor: {} dots for {} ohms", count, resistance);

        ResistorLayout {
            resistance,
            dots,
            dot_radius: self.style.dot_radius,
        }
    }
}

impl Default for ResistorLayoutBuilder {
    fn default() -> Self {
        Self::new(ResistorStyle::default())
    }
}
