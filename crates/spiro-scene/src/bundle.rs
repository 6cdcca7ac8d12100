//! The renderer-ready output: plain numbers and flags only.

use serde::{Deserialize, Serialize};

/// Everything the rendering surface needs to draw and animate one
/// submission.
///
/// Coordinates are parallel x/y arrays (per circle, and per frame for the
/// animations); colors are 24-bit RGB codes. No shape or motion identity
/// crosses this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneBundle {
    pub show_borders: bool,
    pub animate: bool,
    pub speed: u32,
    pub orbit_color: u32,
    /// Symmetric plot bounds, `[-max, max]`.
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    /// Rolling-circle color codes, one per circle.
    pub colors: Vec<u32>,
    /// Orbit outline; empty when border display is off.
    pub border_x: Vec<f64>,
    pub border_y: Vec<f64>,
    /// Circle outline frames: per circle, per time sample, outline points.
    pub circles_x: Vec<Vec<Vec<f64>>>,
    pub circles_y: Vec<Vec<Vec<f64>>>,
    /// Pen trajectories: per circle, one point per time sample.
    pub points_x: Vec<Vec<f64>>,
    pub points_y: Vec<Vec<f64>>,
}

impl SceneBundle {
    /// Number of rolling circles in the bundle.
    pub fn circle_count(&self) -> usize {
        self.points_x.len()
    }
}
