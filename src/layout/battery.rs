//! Battery pack layout.
//!
//! The pack is drawn as up to six 1.5 V cells laid out left to right from a
//! fixed anchor. Each cell's width interpolates between a narrow and a full
//! size by how much of its 1.5 V is "filled", so dragging the voltage slider
//! grows the pack smoothly instead of popping whole cells in and out:
//!
//! ```text
//!   wire -75 ... anchor -150
//!   [####|+] [####|+] [##|+]        4.0 V = 1.0, 1.0, 0.67
//! ```
//!
//! The pack is not squeezed into the wire gap; the leads stretch to meet it.

use log::trace;

use super::geometry::lerp;

/// Tolerance when deciding whether a voltage sits on a cell boundary.
///
/// Step-quantized slider values such as `60.0 * 0.1` land a hair above the
/// boundary and must not open an extra empty cell.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Placeholder terminal dimensions, drawn when the voltage is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubStyle {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

/// Battery geometry constants.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryStyle {
    /// Volts represented by one full cell
    pub cell_capacity: f64,
    pub max_cells: usize,
    pub max_voltage: f64,
    /// Left edge of the first cell
    pub anchor_x: f64,
    /// End of the left circuit wire
    pub wire_left_x: f64,
    /// End of the right circuit wire
    pub wire_right_x: f64,
    pub full_cell_width: f64,
    pub min_cell_width: f64,
    pub full_terminal_width: f64,
    pub min_terminal_width: f64,
    pub cell_height: f64,
    pub terminal_height: f64,
    pub cell_spacing: f64,
    pub corner_radius: f64,
    /// Positive band width as a share of the body width
    pub band_ratio: f64,
    /// Band never gets narrower than this, so it stays visible on small cells
    pub min_band_width: f64,
    pub stub: StubStyle,
}

impl Default for BatteryStyle {
    fn default() -> Self {
        Self {
            cell_capacity: crate::CELL_VOLTAGE,
            max_cells: 6,
            max_voltage: 9.0,
            anchor_x: -150.0,
            wire_left_x: -75.0,
            wire_right_x: 75.0,
            full_cell_width: 40.0,
            min_cell_width: 12.0,
            full_terminal_width: 6.0,
            min_terminal_width: 3.0,
            cell_height: 26.0,
            terminal_height: 10.0,
            cell_spacing: 5.0,
            corner_radius: 3.0,
            band_ratio: 0.2,
            min_band_width: 3.0,
            stub: StubStyle {
                width: 12.0,
                height: 16.0,
                corner_radius: 2.0,
            },
        }
    }
}

/// One cell of the pack, in pack coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// Left edge of the body
    pub x: f64,
    /// Fill level in `[0, 1]`
    pub fraction: f64,
    pub body_width: f64,
    pub terminal_width: f64,
    /// Width of the positive band at the right end of the body
    pub band_width: f64,
    /// Volts this cell stands for
    pub voltage: f64,
}

impl CellGeometry {
    /// Body plus terminal.
    pub fn width(&self) -> f64 {
        self.body_width + self.terminal_width
    }

    /// Left edge of the positive band.
    pub fn band_x(&self) -> f64 {
        self.x + self.body_width - self.band_width
    }

    /// Left edge of the positive terminal.
    pub fn terminal_x(&self) -> f64 {
        self.x + self.body_width
    }

    /// Label such as `1.5V`.
    pub fn voltage_label(&self) -> String {
        format!("{:.1}V", self.voltage)
    }
}

/// Placeholder shown at zero voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubGeometry {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

/// A horizontal wire segment on the battery's center line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadSegment {
    pub from_x: f64,
    pub to_x: f64,
}

/// What the battery slot contains.
#[derive(Debug, Clone, PartialEq)]
pub enum BatteryShape {
    Stub(StubGeometry),
    Pack(Vec<CellGeometry>),
}

/// Complete battery drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryLayout {
    pub shape: BatteryShape,
    /// Width from the anchor to the right edge of the last terminal
    pub total_width: f64,
    pub left_lead: LeadSegment,
    pub right_lead: LeadSegment,
    pub cell_height: f64,
    pub terminal_height: f64,
    pub corner_radius: f64,
}

impl BatteryLayout {
    /// Cells left to right; empty for the stub.
    pub fn cells(&self) -> &[CellGeometry] {
        match &self.shape {
            BatteryShape::Stub(_) => &[],
            BatteryShape::Pack(cells) => cells,
        }
    }

    /// Check if this is the zero-voltage placeholder.
    pub fn is_stub(&self) -> bool {
        matches!(self.shape, BatteryShape::Stub(_))
    }

    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }
}

/// Builds [`BatteryLayout`]s from voltages.
#[derive(Debug, Clone)]
pub struct BatteryLayoutBuilder {
    style: BatteryStyle,
}

impl BatteryLayoutBuilder {
    pub fn new(style: BatteryStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &BatteryStyle {
        &self.style
    }

    fn clamp_voltage(&self, voltage: f64) -> f64 {
        voltage.max(0.0).min(self.style.max_voltage)
    }

    /// Number of cells drawn for a voltage; zero means the stub.
    pub fn cell_count(&self, voltage: f64) -> usize {
        let v = self.clamp_voltage(voltage);
        if v <= 0.0 {
            return 0;
        }
        let cells = (v / self.style.cell_capacity - BOUNDARY_EPSILON).ceil().max(1.0) as usize;
        cells.min(self.style.max_cells)
    }

    /// Fill level of cell `index` at a voltage.
    pub fn cell_fraction(&self, voltage: f64, index: usize) -> f64 {
        let v = self.clamp_voltage(voltage);
        let cap = self.style.cell_capacity;
        ((v - index as f64 * cap) / cap).max(0.0).min(1.0)
    }

    /// Lay out the pack for a voltage.
    pub fn build(&self, voltage: f64) -> BatteryLayout {
        let s = &self.style;
        let count = self.cell_count(voltage);

        if count == 0 {
            let stub = StubGeometry {
                x: s.anchor_x,
                width: s.stub.width,
                height: s.stub.height,
                corner_radius: s.stub.corner_radius,
            };
            trace!("battery: stub at x={}", stub.x);
            return BatteryLayout {
                shape: BatteryShape::Stub(stub),
                total_width: stub.width,
                left_lead: LeadSegment {
                    from_x: s.wire_left_x,
                    to_x: s.anchor_x,
                },
                right_lead: LeadSegment {
                    from_x: s.anchor_x + stub.width,
                    to_x: s.wire_right_x,
                },
                cell_height: stub.height,
                terminal_height: stub.height,
                corner_radius: stub.corner_radius,
            };
        }

        let mut cells = Vec::with_capacity(count);
        let mut x = s.anchor_x;
        for i in 0..count {
            let fraction = self.cell_fraction(voltage, i);
            let body_width = lerp(s.min_cell_width, s.full_cell_width, fraction);
            let terminal_width = lerp(s.min_terminal_width, s.full_terminal_width, fraction);
            let band_width = body_width.min((body_width * s.band_ratio).max(s.min_band_width));
            cells.push(CellGeometry {
                x,
                fraction,
                body_width,
                terminal_width,
                band_width,
                voltage: fraction * s.cell_capacity,
            });
            x += body_width + terminal_width + s.cell_spacing;
        }

        let total_width = cells.iter().map(CellGeometry::width).sum::<f64>()
            + (count - 1) as f64 * s.cell_spacing;
        trace!("battery: {} cells, width {:.1}", count, total_width);

        BatteryLayout {
            shape: BatteryShape::Pack(cells),
            total_width,
            left_lead: LeadSegment {
                from_x: s.wire_left_x,
                to_x: s.anchor_x,
            },
            right_lead: LeadSegment {
                from_x: s.anchor_x + total_width,
                to_x: s.wire_right_x,
            },
            cell_height: s.cell_height,
            terminal_height: s.terminal_height,
            corner_radius: s.corner_radius,
        }
    }
}

impl Default for BatteryLayoutBuilder {
    fn default() -> Self {
        Self::new(BatteryStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fractions(layout: &BatteryLayout) -> Vec<f64> {
        layout.cells().iter().map(|c| c.fraction).collect()
    }

    #[test]
    fn test_zero_voltage_is_stub() {
        let b = BatteryLayoutBuilder::default();
        let layout = b.build(0.0);
        assert!(layout.is_stub());
        assert_eq!(layout.cell_count(), 0);
        assert_eq!(layout.total_width, 12.0);
        assert_eq!(layout.right_lead.from_x, -138.0);

        assert!(b.build(-2.0).is_stub());
    }

    #[test]
    fn test_cell_count_formula() {
        let b = BatteryLayoutBuilder::default();
        for i in 1..=90 {
            let v = i as f64 / 10.0;
            let expected = ((v / 1.5).ceil() as usize).min(6);
            assert_eq!(b.cell_count(v), expected, "voltage {}", v);
        }
        assert_eq!(b.cell_count(12.0), 6);
    }

    #[test]
    fn test_exact_boundary_has_full_last_cell() {
        let b = BatteryLayoutBuilder::default();
        let layout = b.build(4.5);
        assert_eq!(fractions(&layout), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_partial_last_cell() {
        let b = BatteryLayoutBuilder::default();
        let layout = b.build(5.0);
        let f = fractions(&layout);
        assert_eq!(f.len(), 4);
        assert_eq!(&f[..3], &[1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(f[3], 1.0 / 3.0, epsilon = 1e-12);

        let last = layout.cells()[3];
        assert!(last.body_width < layout.cells()[0].body_width);
        assert_eq!(last.voltage_label(), "0.5V");
    }

    #[test]
    fn test_last_fraction_matches_remainder() {
        let b = BatteryLayoutBuilder::default();
        for i in 1..=90 {
            let v = i as f64 / 10.0;
            let layout = b.build(v);
            let last = layout.cells().last().unwrap().fraction;
            let rem = v / 1.5 - (v / 1.5).floor();
            let expected = if rem.abs() < 1e-9 { 1.0 } else { rem };
            assert_abs_diff_eq!(last, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_step_accumulation_does_not_open_empty_cell() {
        let b = BatteryLayoutBuilder::default();
        let v = 60.0 * 0.1;
        assert_eq!(b.cell_count(v), 4);
        assert_eq!(b.build(v).cells().last().unwrap().fraction, 1.0);
    }

    #[test]
    fn test_full_pack_geometry() {
        let b = BatteryLayoutBuilder::default();
        let layout = b.build(9.0);
        assert_eq!(layout.cell_count(), 6);
        for cell in layout.cells() {
            assert_eq!(cell.body_width, 40.0);
            assert_eq!(cell.terminal_width, 6.0);
            assert_eq!(cell.band_width, 8.0);
            assert_eq!(cell.voltage_label(), "1.5V");
        }
        // 6 * 46 + 5 * 5
        assert_eq!(layout.total_width, 301.0);
        assert_eq!(layout.cells()[1].x, -150.0 + 46.0 + 5.0);
        assert_eq!(layout.right_lead.from_x, 151.0);
        assert!(layout.total_width > layout.right_lead.to_x - layout.left_lead.from_x);
    }

    #[test]
    fn test_small_cell_band_floor() {
        let b = BatteryLayoutBuilder::default();
        let layout = b.build(0.1);
        let cell = layout.cells()[0];
        assert!(cell.body_width < 14.0);
        assert_eq!(cell.band_width, 3.0);
    }

    #[test]
    fn test_cells_are_contiguous() {
        let b = BatteryLayoutBuilder::default();
        let layout = b.build(7.3);
        for pair in layout.cells().windows(2) {
            assert_abs_diff_eq!(pair[1].x, pair[0].x + pair[0].width() + 5.0, epsilon = 1e-12);
        }
        let last = layout.cells().last().unwrap();
        assert_abs_diff_eq!(
            last.x + last.width(),
            -150.0 + layout.total_width,
            epsilon = 1e-9
        );
    }
}
