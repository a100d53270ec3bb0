//! Plain 2D geometry shared by the layout builders.

/// A point in schematic coordinates (SVG user units, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation towards `other` by `t`.
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Interpolate between `min` and `max` by `t`.
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_helpers() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(1.5, 2.0));
        assert_eq!(lerp(12.0, 40.0, 0.5), 26.0);
    }
}
