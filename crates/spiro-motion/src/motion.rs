use std::f64::consts::PI;

use rayon::prelude::*;
use tracing::{debug, warn};

use spiro_core::{Result, SpiroError, Tolerance};
use spiro_geometry::{Circle, Shape};
use spiro_math::{linspace, Point2};

/// Upper bound on the closure search; rotation counts at or beyond this are
/// never tried.
pub const MAX_ROTATIONS: u32 = 500;

/// Rotation count used when the closure search does not converge. The curve
/// is still drawn, just possibly not perfectly closed.
pub const FALLBACK_ROTATIONS: u32 = 50;

/// Points per rolling-circle outline frame.
pub const OUTLINE_POINTS: usize = 10;

/// A circle rolling along an orbit, carrying a pen.
///
/// The full pen trajectory and the parallel series of circle centers are
/// computed eagerly at construction and cached; a motion is immutable
/// afterwards. The orbit is borrowed read-only and may back any number of
/// motions at once.
#[derive(Debug, Clone)]
pub struct Motion<'a> {
    orbit: &'a Shape,
    circle: Circle,
    distance_to_border: f64,
    direction: f64,
    circle_speed: f64,
    quality: usize,
    rotations: u32,
    x_range: f64,
    y_range: f64,
    points: Vec<Point2>,
    centers: Vec<Point2>,
}

impl<'a> Motion<'a> {
    /// Build a motion and compute its full trajectory.
    ///
    /// `distance_to_border` is the distance from the pen to the rolling
    /// circle's border: `0` puts the pen on the rim, `radius` at the
    /// center. `outer` selects rolling outside the orbit instead of inside.
    pub fn new(
        orbit: &'a Shape,
        circle: Circle,
        distance_to_border: f64,
        outer: bool,
        quality: usize,
    ) -> Result<Self> {
        if quality < 2 {
            return Err(SpiroError::Motion(format!(
                "quality must be at least 2, got {}",
                quality
            )));
        }
        if !(0.0..=circle.radius()).contains(&distance_to_border) {
            return Err(SpiroError::Motion(format!(
                "distance to border must lie in [0, {}], got {}",
                circle.radius(),
                distance_to_border
            )));
        }

        let direction = if outer { 1.0 } else { -1.0 };
        // No-slip ratio: the circle's own angular speed matches arc length
        // against the orbit's circumference at the circle-center offset.
        let circle_speed = direction * orbit.circumference(direction * circle.radius())
            / circle.circumference(0.0);

        let x_range = orbit.x_range() + 2.0 * circle.x_range();
        let y_range = orbit.y_range() + 2.0 * circle.y_range();

        let mut motion = Self {
            orbit,
            circle,
            distance_to_border,
            direction,
            circle_speed,
            quality,
            rotations: 0,
            x_range,
            y_range,
            points: Vec::new(),
            centers: Vec::new(),
        };

        motion.rotations = motion.closure_rotations();

        let thetas = linspace(0.0, f64::from(motion.rotations) * 2.0 * PI, quality);
        for &t in &thetas {
            let (pen, center) = motion.trajectory_at(t, motion.distance_to_border);
            motion.points.push(pen);
            motion.centers.push(center);
        }

        Ok(motion)
    }

    /// Pen point and rolling-circle center at parameter `t`, for a pen
    /// sitting `distance_to_border` inside the circle's border.
    pub fn trajectory_at(&self, t: f64, distance_to_border: f64) -> (Point2, Point2) {
        let center = self
            .orbit
            .point_at(t, 1.0, self.direction * self.circle.radius());
        let pen = center + self.circle.point_at(t, self.circle_speed, -distance_to_border);
        (pen, center)
    }

    /// Smallest rotation count that returns the pen to its start point.
    ///
    /// Candidates `1..MAX_ROTATIONS` are compared against the `t = 0`
    /// baseline componentwise under relative+absolute tolerance. When none
    /// closes the curve, [`FALLBACK_ROTATIONS`] is used.
    fn closure_rotations(&self) -> u32 {
        let tol = Tolerance::default();
        let (start, _) = self.trajectory_at(0.0, self.distance_to_border);

        for n in 1..MAX_ROTATIONS {
            let t = f64::from(n) * 2.0 * PI;
            let (p, _) = self.trajectory_at(t, self.distance_to_border);
            if tol.close(p.x, start.x) && tol.close(p.y, start.y) {
                debug!(rotations = n, "trajectory closes");
                return n;
            }
        }

        warn!(
            fallback = FALLBACK_ROTATIONS,
            "closure search did not converge, drawing a truncated curve"
        );
        FALLBACK_ROTATIONS
    }

    /// Rolling-circle outline for one cached sample, anchored so that the
    /// pen's angular position is the first outline point.
    fn outline_at(&self, pen: Point2, center: Point2) -> Vec<Point2> {
        let start_angle = (pen.y - center.y).atan2(pen.x - center.x);
        linspace(start_angle, start_angle + 2.0 * PI, OUTLINE_POINTS)
            .iter()
            .map(|&angle| {
                center
                    + self
                        .circle
                        .point_at(angle, 1.0, -self.distance_to_border)
            })
            .collect()
    }

    /// One outline per cached trajectory sample: the per-frame circle
    /// geometry driving the animation. Frames are independent and are
    /// generated in parallel.
    pub fn outlines(&self) -> Vec<Vec<Point2>> {
        self.points
            .par_iter()
            .zip(self.centers.par_iter())
            .map(|(&pen, &center)| self.outline_at(pen, center))
            .collect()
    }

    /// Cached pen trajectory, `quality` samples long.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Cached circle-center trajectory, parallel to [`Motion::points`].
    pub fn centers(&self) -> &[Point2] {
        &self.centers
    }

    pub fn rotations(&self) -> u32 {
        self.rotations
    }

    pub fn quality(&self) -> usize {
        self.quality
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Half-extent of the drawing along x: orbit extent plus the rolling
    /// circle's diameter.
    pub fn x_range(&self) -> f64 {
        self.x_range
    }

    /// Half-extent of the drawing along y.
    pub fn y_range(&self) -> f64 {
        self.y_range
    }
}
