// mcl_core/src/types.rs

use nalgebra::Point2;
use std::f64::consts::PI;

// --- Core Value Types ---
// A particle filter works on hypotheses over these two types: the pose we are
// trying to estimate, and the landmarks we measure against.

/// A 2D rigid-body pose: position on the map plus heading in radians.
///
/// Poses are plain values. Every update produces a new `Pose`; nothing in the
/// core mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, counter-clockwise from the +x axis.
    pub heading: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// The position component as a point, for distance math.
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Wraps the pose back onto a square toroidal map of side `map_size` and
    /// the heading into `[0, 2π)`.
    ///
    /// Each component is wrapped AT MOST ONCE: a value above its upper bound
    /// has the bound subtracted, a value below zero has the bound added. This
    /// is a single conditional wrap, not a modulo. Callers must not push a
    /// coordinate more than one map-width (or the heading more than one full
    /// turn) out of range in a single update, otherwise the result is still
    /// out of bounds. That is a documented limitation of the motion model,
    /// not something this function papers over.
    #[must_use]
    pub fn normalize(self, map_size: f64) -> Pose {
        Pose {
            x: wrap_once(self.x, map_size),
            y: wrap_once(self.y, map_size),
            heading: wrap_once(self.heading, 2.0 * PI),
        }
    }
}

// Single conditional wrap shared by both axes and the heading.
fn wrap_once(value: f64, bound: f64) -> f64 {
    if value > bound {
        value - bound
    } else if value < 0.0 {
        value + bound
    } else {
        value
    }
}

/// A fixed, known point on the map that range measurements are taken against.
///
/// Landmarks are supplied by the driver and assumed to be accurate ground
/// truth; the core never validates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MAP_SIZE: f64 = 100.0;
    const EPSILON: f64 = 1e-12;

    #[test]
    fn normalize_is_identity_for_in_range_pose() {
        let pose = Pose::new(12.5, 99.0, 1.25);
        let normalized = pose.normalize(MAP_SIZE);
        assert_eq!(pose, normalized);
    }

    #[test]
    fn normalize_wraps_x_above_map_size() {
        let pose = Pose::new(MAP_SIZE + 5.0, 0.0, 0.0).normalize(MAP_SIZE);
        assert_abs_diff_eq!(pose.x, 5.0, epsilon = EPSILON);
    }

    #[test]
    fn normalize_wraps_negative_x() {
        let pose = Pose::new(-5.0, 0.0, 0.0).normalize(MAP_SIZE);
        assert_abs_diff_eq!(pose.x, 95.0, epsilon = EPSILON);
    }

    #[test]
    fn normalize_wraps_y_on_both_sides() {
        let above = Pose::new(0.0, MAP_SIZE + 20.0, 0.0).normalize(MAP_SIZE);
        let below = Pose::new(0.0, -20.0, 0.0).normalize(MAP_SIZE);
        assert_abs_diff_eq!(above.y, 20.0, epsilon = EPSILON);
        assert_abs_diff_eq!(below.y, 80.0, epsilon = EPSILON);
    }

    #[test]
    fn normalize_wraps_heading_into_full_turn() {
        let over = Pose::new(0.0, 0.0, 2.0 * PI + 0.1).normalize(MAP_SIZE);
        let under = Pose::new(0.0, 0.0, -0.1).normalize(MAP_SIZE);
        assert_abs_diff_eq!(over.heading, 0.1, epsilon = EPSILON);
        assert_abs_diff_eq!(under.heading, 2.0 * PI - 0.1, epsilon = EPSILON);
    }

    #[test]
    fn normalize_wraps_only_once() {
        // More than one map-width out of range stays out of range; the wrap
        // is a single subtraction, never a modulo.
        let pose = Pose::new(2.0 * MAP_SIZE + 5.0, 0.0, 0.0).normalize(MAP_SIZE);
        assert_abs_diff_eq!(pose.x, MAP_SIZE + 5.0, epsilon = EPSILON);
    }

    #[test]
    fn landmark_distance_via_positions() {
        let pose = Pose::default();
        let mark = Landmark::new(3.0, 4.0);
        let dist = nalgebra::distance(&pose.position(), &mark.position());
        assert_abs_diff_eq!(dist, 5.0, epsilon = EPSILON);
    }
}
