//! Current-flow animation planning.
//!
//! A fixed number of arrows travel around the circuit loop. Their speed
//! stands for the current: the loop duration scales inversely with current,
//! clamped so a tiny current still visibly crawls and a large one does not
//! blur. Arrows are phase-staggered by `i / N` of the loop so they stay
//! evenly spaced at all times.
//!
//! The plan is declarative. A renderer with native animation support (SVG
//! `animateMotion`) starts arrow `i` at `-start_offset` seconds; one without
//! can call [`FlowPlan::arrow_positions`] every frame.

use log::trace;

use super::geometry::Point;

/// Below this current (amps) no arrows are drawn.
pub const MIN_FLOW_CURRENT: f64 = 0.001;

/// Divisor floor when turning current into duration.
const CURRENT_EPSILON: f64 = 1e-12;

/// Which way arrows travel around the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowDirection {
    /// Out of the positive terminal, through the resistor, back to negative
    #[default]
    Conventional,
    /// Electron flow, the reverse of conventional current
    Electron,
}

/// Position and heading of one arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPose {
    pub position: Point,
    /// Rotation in degrees, 0 pointing along +x, clockwise positive (y down)
    pub heading_degrees: f64,
}

/// A closed polyline the arrows follow.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionPath {
    waypoints: Vec<Point>,
}

impl MotionPath {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self { waypoints }
    }

    /// The circuit loop: from the battery's positive side, right, up the
    /// right wire, left through the resistor, down the left wire, and back
    /// through the battery.
    pub fn circuit_loop() -> Self {
        Self::new(vec![
            Point::new(375.0, 350.0),
            Point::new(550.0, 350.0),
            Point::new(550.0, 50.0),
            Point::new(50.0, 50.0),
            Point::new(50.0, 350.0),
            Point::new(225.0, 350.0),
            Point::new(375.0, 350.0),
        ])
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// The same loop traversed backwards.
    pub fn reversed(&self) -> Self {
        let mut waypoints = self.waypoints.clone();
        waypoints.reverse();
        Self { waypoints }
    }

    /// Total length of all segments.
    pub fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }

    /// Pose at a fraction of the total length; wraps outside `[0, 1)`.
    pub fn point_at(&self, fraction: f64) -> ArrowPose {
        let Some(&first) = self.waypoints.first() else {
            return ArrowPose {
                position: Point::default(),
                heading_degrees: 0.0,
            };
        };

        let total = self.length();
        let mut remaining = fraction.rem_euclid(1.0) * total;
        let mut fallback = ArrowPose {
            position: first,
            heading_degrees: 0.0,
        };

        for w in self.waypoints.windows(2) {
            let seg = w[0].distance_to(w[1]);
            if seg <= 0.0 {
                continue;
            }
            let heading_degrees = (w[1].y - w[0].y).atan2(w[1].x - w[0].x).to_degrees();
            if remaining <= seg {
                return ArrowPose {
                    position: w[0].lerp(w[1], remaining / seg),
                    heading_degrees,
                };
            }
            remaining -= seg;
            fallback = ArrowPose {
                position: w[1],
                heading_degrees,
            };
        }

        fallback
    }

    /// Path data text, e.g. `M 375 350 L 550 350 ...`.
    pub fn to_path_data(&self) -> String {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{} {} {}", if i == 0 { 'M' } else { 'L' }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Flow animation constants.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowStyle {
    pub arrow_count: usize,
    /// No animation below this current (amps)
    pub min_current: f64,
    /// Current at which the loop takes `min_duration` (amps)
    pub reference_current: f64,
    /// Fastest loop (seconds)
    pub min_duration: f64,
    /// Slowest loop (seconds)
    pub max_duration: f64,
    pub direction: FlowDirection,
    /// Loop geometry in conventional direction
    pub path: MotionPath,
}

impl Default for FlowStyle {
    fn default() -> Self {
        Self {
            arrow_count: 20,
            min_current: MIN_FLOW_CURRENT,
            reference_current: 0.9,
            min_duration: 1.5,
            max_duration: 60.0,
            direction: FlowDirection::Conventional,
            path: MotionPath::circuit_loop(),
        }
    }
}

impl FlowStyle {
    /// The path arrows actually travel, honoring direction.
    pub fn motion_path(&self) -> MotionPath {
        match self.direction {
            FlowDirection::Conventional => self.path.clone(),
            FlowDirection::Electron => self.path.reversed(),
        }
    }
}

/// Start phase of one arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPhase {
    pub index: usize,
    /// Seconds before now at which this arrow started its loop
    pub start_offset: f64,
}

/// Timing of the arrow loop for one current.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPlan {
    /// Seconds per full loop
    pub duration: f64,
    pub arrows: Vec<ArrowPhase>,
}

impl FlowPlan {
    pub fn arrow_count(&self) -> usize {
        self.arrows.len()
    }

    /// Time between consecutive arrows.
    pub fn spacing(&self) -> f64 {
        self.duration / self.arrows.len() as f64
    }

    /// Where every arrow sits on `path` after `elapsed` seconds.
    pub fn arrow_positions(&self, path: &MotionPath, elapsed: f64) -> Vec<ArrowPose> {
        self.arrows
            .iter()
            .map(|a| path.point_at((elapsed + a.start_offset) / self.duration))
            .collect()
    }
}

/// Turns currents into [`FlowPlan`]s.
#[derive(Debug, Clone)]
pub struct FlowAnimationPlanner {
    style: FlowStyle,
}

impl FlowAnimationPlanner {
    pub fn new(style: FlowStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &FlowStyle {
        &self.style
    }

    /// Loop duration for a current, or `None` when too small to animate.
    pub fn duration_for(&self, current: f64) -> Option<f64> {
        let s = &self.style;
        // Also rejects NaN
        if !(current >= s.min_current) {
            return None;
        }
        let raw = s.reference_current / current.max(CURRENT_EPSILON) * s.min_duration;
        Some(raw.max(s.min_duration).min(s.max_duration))
    }

    /// Plan the arrow loop for a current.
    pub fn plan(&self, current: f64) -> Option<FlowPlan> {
        let duration = self.duration_for(current)?;
        let n = self.style.arrow_count;
        let arrows = (0..n)
            .map(|index| ArrowPhase {
                index,
                start_offset: index as f64 / n as f64 * duration,
            })
            .collect();
        trace!("flow: {} arrows, {:.2}s loop", n, duration);
        Some(FlowPlan { duration, arrows })
    }
}

impl Default for FlowAnimationPlanner {
    fn default() -> Self {
        Self::new(FlowStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_no_plan_below_threshold() {
        let p = FlowAnimationPlanner::default();
        assert!(p.plan(0.0005).is_none());
        assert!(p.plan(0.0).is_none());
        assert!(p.plan(f64::NAN).is_none());
        assert!(p.plan(0.001).is_some());
    }

    #[test]
    fn test_duration_bounds() {
        let p = FlowAnimationPlanner::default();
        assert_abs_diff_eq!(p.duration_for(0.9).unwrap(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.duration_for(0.045).unwrap(), 30.0, epsilon = 1e-9);
        assert_eq!(p.duration_for(0.002).unwrap(), 60.0);
        assert_eq!(p.duration_for(5.0).unwrap(), 1.5);
    }

    #[test]
    fn test_duration_decreases_with_current() {
        let p = FlowAnimationPlanner::default();
        let mut prev = f64::INFINITY;
        let mut i = 0.001;
        while i <= 0.9 {
            let d = p.duration_for(i).unwrap();
            assert!(d <= prev);
            assert!((1.5..=60.0).contains(&d));
            prev = d;
            i *= 1.1;
        }
        // Strictly decreasing between the clamps
        assert!(p.duration_for(0.1).unwrap() > p.duration_for(0.2).unwrap());
    }

    #[test]
    fn test_offsets_evenly_spaced() {
        let p = FlowAnimationPlanner::default();
        let plan = p.plan(0.05).unwrap();
        assert_eq!(plan.arrow_count(), 20);
        assert_eq!(plan.arrows[0].start_offset, 0.0);
        for pair in plan.arrows.windows(2) {
            assert_abs_diff_eq!(
                pair[1].start_offset - pair[0].start_offset,
                plan.duration / 20.0,
                epsilon = 1e-9
            );
        }
        assert!(plan.arrows.last().unwrap().start_offset < plan.duration);
    }

    #[test]
    fn test_path_length_and_data() {
        let path = MotionPath::circuit_loop();
        // 175 + 300 + 500 + 300 + 175 + 150
        assert_eq!(path.length(), 1600.0);
        assert_eq!(
            path.to_path_data(),
            "M 375 350 L 550 350 L 550 50 L 50 50 L 50 350 L 225 350 L 375 350"
        );
    }

    #[test]
    fn test_point_at() {
        let path = MotionPath::circuit_loop();
        let start = path.point_at(0.0);
        assert_eq!(start.position, Point::new(375.0, 350.0));
        assert_eq!(start.heading_degrees, 0.0);

        // 175 along the bottom, then 225 up the right wire
        let p = path.point_at(400.0 / 1600.0);
        assert_abs_diff_eq!(p.position.x, 550.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.position.y, 125.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.heading_degrees, -90.0, epsilon = 1e-9);

        let wrapped = path.point_at(1.0 + 400.0 / 1600.0);
        assert_abs_diff_eq!(wrapped.position.y, 125.0, epsilon = 1e-9);
    }

    #[test]
    fn test_electron_flow_reverses_path() {
        let style = FlowStyle {
            direction: FlowDirection::Electron,
            ..FlowStyle::default()
        };
        let path = style.motion_path();
        assert_eq!(path.waypoints()[1], Point::new(225.0, 350.0));
        assert_eq!(path.length(), 1600.0);
    }

    #[test]
    fn test_arrow_positions_keep_spacing() {
        let p = FlowAnimationPlanner::default();
        let plan = p.plan(0.9).unwrap();
        let path = MotionPath::circuit_loop();
        let poses = plan.arrow_positions(&path, 0.0);
        assert_eq!(poses.len(), 20);
        // Arrow 1 is 1/20 of the loop (80 units) ahead of arrow 0
        assert_abs_diff_eq!(poses[1].position.x, 455.0, epsilon = 1e-9);

        // After a full loop every arrow is back where it started
        let later = plan.arrow_positions(&path, plan.duration);
        for (a, b) in poses.iter().zip(&later) {
            assert_abs_diff_eq!(a.position.x, b.position.x, epsilon = 1e-6);
            assert_abs_diff_eq!(a.position.y, b.position.y, epsilon = 1e-6);
        }
    }
}
