//! End-to-end tests: slider input through to a complete frame.

use approx::assert_abs_diff_eq;
use ohm_viz::controls::ViewMode;
use ohm_viz::layout::FlowDirection;
use ohm_viz::{Visualizer, VisualConfig};

/// Helper: visualizer at a given state with a fixed seed
fn viz_at(config: VisualConfig, voltage: f64, resistance: f64) -> Visualizer {
    let mut viz = Visualizer::with_seed(config, 11).expect("valid config");
    viz.set_voltage(voltage);
    viz.set_resistance(resistance);
    viz
}

// ── Extremes ──────────────────────────────────────────────────────

#[test]
fn test_max_current() {
    let frame = viz_at(VisualConfig::classic(), 9.0, 10.0).frame();

    assert_abs_diff_eq!(frame.state.current(), 0.9, epsilon = 1e-12);
    assert_eq!(frame.readout.current_ma, "900.0");

    let plan = frame.flow.expect("arrows at 0.9 A");
    assert_abs_diff_eq!(plan.duration, 1.5, epsilon = 1e-9);

    assert_eq!(frame.resistor.dot_count(), 1);

    assert_eq!(frame.battery.cell_count(), 6);
    assert!(frame.battery.cells().iter().all(|c| c.fraction == 1.0));

    assert_eq!(frame.scale.voltage, 1.0);
    assert_eq!(frame.scale.resistance, 0.0);
}

#[test]
fn test_min_current() {
    let frame = viz_at(VisualConfig::classic(), 0.1, 1000.0).frame();

    assert_abs_diff_eq!(frame.state.current(), 1e-4, epsilon = 1e-15);
    assert!(frame.flow.is_none());
    assert_eq!(frame.resistor.dot_count(), 100);
    assert_eq!(frame.battery.cell_count(), 1);
    assert_abs_diff_eq!(frame.scale.current, 0.0, epsilon = 1e-9);
    assert_eq!(frame.scale.resistance, 1.0);
}

// ── Slider drags ─────────────────────────────────────────────────

#[test]
fn test_drag_sweep_keeps_invariants() {
    let mut viz = Visualizer::with_seed(VisualConfig::classic(), 5).unwrap();
    viz.drag_resistance(0.3);

    for i in 0..=100 {
        let v = viz.drag_voltage(i as f64 / 100.0);
        let frame = viz.frame();

        assert_eq!(frame.state.current(), v / frame.state.resistance());
        assert!(frame.battery.cell_count() <= 6);
        if v > 0.0 {
            let expected = ((v / 1.5) - 1e-9).ceil().max(1.0) as usize;
            assert_eq!(frame.battery.cell_count(), expected.min(6));
        } else {
            assert!(frame.battery.is_stub());
        }
        if let Some(plan) = &frame.flow {
            assert!(plan.duration >= 1.5 && plan.duration <= 60.0);
        }
    }
}

#[test]
fn test_higher_current_means_faster_loop() {
    let slow = viz_at(VisualConfig::classic(), 9.0, 200.0).frame();
    let fast = viz_at(VisualConfig::classic(), 9.0, 20.0).frame();
    assert!(fast.flow.unwrap().duration < slow.flow.unwrap().duration);
}

// ── Views and variants ───────────────────────────────────────────

#[test]
fn test_triangle_view_fonts() {
    let mut viz = viz_at(VisualConfig::classic(), 9.0, 1000.0);
    viz.toggle_view();
    let frame = viz.frame();

    assert_eq!(frame.view, ViewMode::Triangle);
    assert_abs_diff_eq!(frame.fonts.voltage, 48.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.fonts.resistance, 48.0, epsilon = 1e-9);
}

#[test]
fn test_refined_variant() {
    let frame = viz_at(VisualConfig::refined(), 9.0, 10.0).frame();

    assert_eq!(frame.resistor.dot_count(), 0);
    let plan = frame.flow.unwrap();
    assert_eq!(plan.arrow_count(), 28);

    // Electron flow leaves the battery's negative side first
    assert_eq!(frame.path.waypoints()[1].x, 225.0);
    assert_eq!(
        VisualConfig::refined().flow.direction,
        FlowDirection::Electron
    );
}
