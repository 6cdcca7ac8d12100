//! Read-side aggregation of computed motions into one renderable scene.

use spiro_geometry::{Shape, DEFAULT_BORDER_QUALITY};
use spiro_math::split_xy;
use spiro_motion::Motion;

use crate::bundle::SceneBundle;
use crate::params::Settings;

/// N independent motions plus their shared orbit, ready to be flattened
/// into a [`SceneBundle`].
///
/// Purely a combinator over already-computed state; constructing or
/// querying a scene never recomputes a trajectory.
pub struct Scene<'a> {
    orbit: &'a Shape,
    motions: Vec<Motion<'a>>,
    show_borders: bool,
    animate: bool,
    speed: u32,
}

impl<'a> Scene<'a> {
    pub fn new(orbit: &'a Shape, motions: Vec<Motion<'a>>, settings: &Settings) -> Self {
        Self {
            orbit,
            motions,
            show_borders: settings.show_borders,
            animate: settings.animate,
            speed: settings.speed,
        }
    }

    /// Orbit outline as parallel coordinate arrays when border display is
    /// requested; empty arrays otherwise.
    pub fn borders(&self) -> (Vec<f64>, Vec<f64>) {
        if self.show_borders {
            split_xy(&self.orbit.borders(DEFAULT_BORDER_QUALITY))
        } else {
            (Vec::new(), Vec::new())
        }
    }

    /// Per-motion outline frame series: one polygon per time sample per
    /// circle.
    pub fn circles_animations(&self) -> (Vec<Vec<Vec<f64>>>, Vec<Vec<Vec<f64>>>) {
        let mut xs = Vec::with_capacity(self.motions.len());
        let mut ys = Vec::with_capacity(self.motions.len());
        for motion in &self.motions {
            let (frame_xs, frame_ys): (Vec<_>, Vec<_>) = motion
                .outlines()
                .iter()
                .map(|outline| split_xy(outline))
                .unzip();
            xs.push(frame_xs);
            ys.push(frame_ys);
        }
        (xs, ys)
    }

    /// Per-motion cached pen trajectories.
    pub fn point_movements(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let mut xs = Vec::with_capacity(self.motions.len());
        let mut ys = Vec::with_capacity(self.motions.len());
        for motion in &self.motions {
            let (px, py) = split_xy(motion.points());
            xs.push(px);
            ys.push(py);
        }
        (xs, ys)
    }

    /// Rolling-circle color codes, one per motion.
    pub fn colors(&self) -> Vec<u32> {
        self.motions
            .iter()
            .map(|m| m.circle().color().rgb())
            .collect()
    }

    /// Symmetric plot bounds `[-max, max]` covering every motion, so all
    /// circles share one scale.
    pub fn ranges(&self) -> ([f64; 2], [f64; 2]) {
        let mut x_range = 0.0_f64;
        let mut y_range = 0.0_f64;
        for motion in &self.motions {
            x_range = x_range.max(motion.x_range());
            y_range = y_range.max(motion.y_range());
        }
        ([-x_range, x_range], [-y_range, y_range])
    }

    /// Flatten everything into the serializable renderer bundle.
    pub fn bundle(&self) -> SceneBundle {
        let (border_x, border_y) = self.borders();
        let (circles_x, circles_y) = self.circles_animations();
        let (points_x, points_y) = self.point_movements();
        let (x_range, y_range) = self.ranges();

        SceneBundle {
            show_borders: self.show_borders,
            animate: self.animate,
            speed: self.speed,
            orbit_color: self.orbit.color().rgb(),
            x_range,
            y_range,
            colors: self.colors(),
            border_x,
            border_y,
            circles_x,
            circles_y,
            points_x,
            points_y,
        }
    }
}
