//! Text report for the CLI frontend.
//!
//! Writes a [`Frame`] as a plain-text description: readouts, intensities,
//! font sizes, battery cells, dot scatter and flow timing.

use std::io::Write;

use crate::circuit::Quantity;
use crate::error::{OhmVizError, Result};
use crate::layout::BatteryShape;
use crate::visualizer::Frame;

/// What to include beyond the summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// List every dot position
    pub show_dots: bool,
    /// Also list arrow poses at this elapsed time (seconds)
    pub arrows_at: Option<f64>,
}

fn io_err(e: std::io::Error) -> OhmVizError {
    OhmVizError::output(e.to_string())
}

/// Write a frame report.
pub fn write_report<W: Write>(frame: &Frame, options: &ReportOptions, out: &mut W) -> Result<()> {
    let r = &frame.readout;
    writeln!(out, "V = I x R  ({:?} view)", frame.view).map_err(io_err)?;

    for q in Quantity::ALL {
        let value = match q {
            Quantity::Voltage => &r.voltage,
            Quantity::Current => &r.current_ma,
            Quantity::Resistance => &r.resistance,
        };
        writeln!(
            out,
            "  {} = {:>6} {:<2}  intensity {:.3}  font {:.1}px",
            q.symbol(),
            value,
            q.unit(),
            frame.scale.get(q),
            frame.fonts.get(q)
        )
        .map_err(io_err)?;
    }

    let battery = &frame.battery;
    match &battery.shape {
        BatteryShape::Stub(stub) => {
            writeln!(out, "battery: stub at x={} ({}x{})", stub.x, stub.width, stub.height)
                .map_err(io_err)?;
        }
        BatteryShape::Pack(cells) => {
            writeln!(
                out,
                "battery: {} cells, width {:.1}, leads {:.1}..{:.1} / {:.1}..{:.1}",
                cells.len(),
                battery.total_width,
                battery.left_lead.from_x,
                battery.left_lead.to_x,
                battery.right_lead.from_x,
                battery.right_lead.to_x
            )
            .map_err(io_err)?;
            for (i, cell) in cells.iter().enumerate() {
                writeln!(
                    out,
                    "  cell {}: x={:.1} body={:.1} terminal={:.1} band={:.1} {}",
                    i,
                    cell.x,
                    cell.body_width,
                    cell.terminal_width,
                    cell.band_width,
                    cell.voltage_label()
                )
                .map_err(io_err)?;
            }
        }
    }

    writeln!(
        out,
        "resistor: {} dots (radius {})",
        frame.resistor.dot_count(),
        frame.resistor.dot_radius
    )
    .map_err(io_err)?;
    if options.show_dots {
        for dot in &frame.resistor.dots {
            writeln!(out, "  ({:.2}, {:.2})", dot.x, dot.y).map_err(io_err)?;
        }
    }

    match &frame.flow {
        None => writeln!(out, "flow: none").map_err(io_err)?,
        Some(plan) => {
            writeln!(
                out,
                "flow: {} arrows, {:.2}s loop, {:.3}s apart",
                plan.arrow_count(),
                plan.duration,
                plan.spacing()
            )
            .map_err(io_err)?;
            writeln!(out, "  path: {}", frame.path.to_path_data()).map_err(io_err)?;
            if let Some(t) = options.arrows_at {
                for (i, pose) in plan.arrow_positions(&frame.path, t).iter().enumerate() {
                    writeln!(
                        out,
                        "  arrow {}: ({:.1}, {:.1}) heading {:.0}",
                        i, pose.position.x, pose.position.y, pose.heading_degrees
                    )
                    .map_err(io_err)?;
                }
            }
        }
    }

    writeln!(out, "toggle: {}", frame.toggle_label()).map_err(io_err)?;
    Ok(())
}

/// Write a frame report to stdout.
pub fn print_report(frame: &Frame, options: &ReportOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_report(frame, options, &mut lock)?;
    lock.flush().map_err(io_err)
}
