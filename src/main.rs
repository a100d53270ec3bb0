//! Ohm Viz - Ohm's Law circuit layout inspector
//!
//! Computes one frame of the visualization and prints it as text.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug ohmviz --voltage 5 --resistance 220 --triangle --arrows-at 0.5
//! ```

use clap::Parser;
use ohm_viz::{
    config::Variant,
    controls::ViewMode,
    error::Result,
    report::{print_report, ReportOptions},
    Visualizer, VisualConfig,
};

/// Ohm's Law circuit layout inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Battery voltage in volts (0 to 9)
    #[arg(short, long)]
    voltage: Option<f64>,

    /// Resistance in ohms (10 to 1000)
    #[arg(short, long)]
    resistance: Option<f64>,

    /// Show the triangle view instead of the equation
    #[arg(short, long)]
    triangle: bool,

    /// Style preset: classic or refined
    #[arg(long, default_value_t = Variant::Classic)]
    variant: Variant,

    /// Seed for the resistor dot scatter
    #[arg(long)]
    seed: Option<u64>,

    /// List every resistor dot
    #[arg(long)]
    dots: bool,

    /// List arrow positions after this many seconds
    #[arg(long, value_name = "SECONDS")]
    arrows_at: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = VisualConfig::for_variant(args.variant);
    let mut viz = match args.seed {
        Some(seed) => Visualizer::with_seed(config, seed)?,
        None => Visualizer::new(config)?,
    };

    if let Some(v) = args.voltage {
        viz.set_voltage(v);
    }
    if let Some(r) = args.resistance {
        viz.set_resistance(r);
    }
    if args.triangle {
        viz.set_view(ViewMode::Triangle);
    }

    let options = ReportOptions {
        show_dots: args.dots,
        arrows_at: args.arrows_at,
    };
    print_report(&viz.frame(), &options)?;

    Ok(())
}
