//! Configuration validation.

use crate::config::{SliderSpec, VisualConfig};
use crate::error::{OhmVizError, Result};
use crate::layout::{FontRange, ScaleMapping, ScaleMode};

use super::Bounds;

/// Validate a visual configuration.
///
/// Checks:
/// - Slider ranges are non-empty, steps positive, initial values in range
/// - The resistance range excludes zero
/// - Scale domains are non-empty; logarithmic domains are positive
/// - Interpolated widths and font ranges are ordered
/// - Dot density, arrow count and durations are positive
pub fn validate_config(config: &VisualConfig) -> Result<()> {
    check_slider("voltage_slider", &config.voltage_slider)?;
    check_slider("resistance_slider", &config.resistance_slider)?;
    if config.resistance_slider.range.min <= 0.0 {
        return Err(OhmVizError::invalid_config(
            "resistance_slider.range",
            "resistance must stay above zero",
        ));
    }

    check_scale("scale.voltage", &config.scale.voltage)?;
    check_scale("scale.current", &config.scale.current)?;
    check_scale("scale.resistance", &config.scale.resistance)?;
    check_font("fonts.equation", &config.fonts.equation)?;
    check_font("fonts.triangle", &config.fonts.triangle)?;

    let b = &config.battery;
    if !(b.cell_capacity > 0.0) {
        return Err(OhmVizError::invalid_config("battery.cell_capacity", "must be positive"));
    }
    if b.max_cells == 0 {
        return Err(OhmVizError::invalid_config("battery.max_cells", "must be at least 1"));
    }
    check_ordered("battery.cell_width", b.min_cell_width, b.full_cell_width)?;
    check_ordered("battery.terminal_width", b.min_terminal_width, b.full_terminal_width)?;

    let r = &config.resistor;
    if !(r.dot_density > 0.0) {
        return Err(OhmVizError::invalid_config("resistor.dot_density", "must be positive"));
    }
    check_bounds("resistor.x_bounds", &r.x_bounds)?;
    check_bounds("resistor.y_bounds", &r.y_bounds)?;

    let f = &config.flow;
    if f.arrow_count == 0 {
        return Err(OhmVizError::invalid_config("flow.arrow_count", "must be at least 1"));
    }
    if !(f.min_current > 0.0) || !(f.reference_current > 0.0) {
        return Err(OhmVizError::invalid_config("flow.current", "currents must be positive"));
    }
    if !(f.min_duration > 0.0) {
        return Err(OhmVizError::invalid_config("flow.min_duration", "must be positive"));
    }
    check_ordered("flow.duration", f.min_duration, f.max_duration)?;
    if f.path.waypoints().len() < 2 || !(f.path.length() > 0.0) {
        return Err(OhmVizError::invalid_config(
            "flow.path",
            "needs at least two distinct waypoints",
        ));
    }

    Ok(())
}

fn check_slider(field: &str, spec: &SliderSpec) -> Result<()> {
    if !spec.range.is_valid() || !(spec.step > 0.0) {
        return Err(OhmVizError::InvalidSliderRange {
            min: spec.range.min,
            max: spec.range.max,
            step: spec.step,
        });
    }
    if !spec.range.contains(spec.initial) {
        return Err(OhmVizError::invalid_config(
            format!("{}.initial", field),
            format!("{} is outside {}", spec.initial, spec.range),
        ));
    }
    Ok(())
}

fn check_bounds(field: &str, bounds: &Bounds) -> Result<()> {
    if !bounds.is_valid() {
        return Err(OhmVizError::invalid_config(
            field,
            format!("{} is empty or not finite", bounds),
        ));
    }
    Ok(())
}

fn check_scale(field: &str, mapping: &ScaleMapping) -> Result<()> {
    check_bounds(field, &mapping.domain)?;
    if let ScaleMode::Logarithmic { floor } = mapping.mode {
        if !(mapping.domain.min > 0.0) || !(floor > 0.0) {
            return Err(OhmVizError::invalid_config(
                field,
                "logarithmic domain and floor must be positive",
            ));
        }
    }
    Ok(())
}

fn check_font(field: &str, range: &FontRange) -> Result<()> {
    if !(range.min_px > 0.0) {
        return Err(OhmVizError::invalid_config(field, "font sizes must be positive"));
    }
    check_ordered(field, range.min_px, range.max_px)
}

fn check_ordered(field: &str, min: f64, max: f64) -> Result<()> {
    if !(min.is_finite() && max.is_finite() && min <= max) {
        return Err(OhmVizError::invalid_config(
            field,
            format!("minimum {} exceeds maximum {}", min, max),
        ));
    }
    Ok(())
}
