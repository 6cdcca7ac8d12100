//! Shape variants and their shared capability set.

mod circle;
mod ellipse;

use serde::{Deserialize, Serialize};
use spiro_core::Color;
use spiro_math::{linspace, Point2};
use std::f64::consts::PI;

pub use circle::Circle;
pub use ellipse::Ellipse;

/// Number of border points sampled when no explicit quality is given.
pub const DEFAULT_BORDER_QUALITY: usize = 100;

/// A closed planar curve, parameterized over `[0, 2*PI]`.
///
/// Exactly two variants exist and the engine dispatches statically; there
/// is no open extension point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
}

impl Shape {
    /// Evaluate the parametric equation at `t`.
    ///
    /// `speed` scales the angular parameter, `offset` grows (or shrinks,
    /// when negative) the shape's extents uniformly.
    pub fn point_at(&self, t: f64, speed: f64, offset: f64) -> Point2 {
        match self {
            Shape::Circle(c) => c.point_at(t, speed, offset),
            Shape::Ellipse(e) => e.point_at(t, speed, offset),
        }
    }

    /// Vectorized form of [`Shape::point_at`]: one output point per
    /// parameter value, in order.
    pub fn sample(&self, ts: &[f64], speed: f64, offset: f64) -> Vec<Point2> {
        ts.iter().map(|&t| self.point_at(t, speed, offset)).collect()
    }

    /// Arc length of the shape offset by `offset`.
    pub fn circumference(&self, offset: f64) -> f64 {
        match self {
            Shape::Circle(c) => c.circumference(offset),
            Shape::Ellipse(e) => e.circumference(offset),
        }
    }

    /// `quality` evenly spaced boundary points over one full turn, at zero
    /// offset and unit speed.
    pub fn borders(&self, quality: usize) -> Vec<Point2> {
        self.sample(&linspace(0.0, 2.0 * PI, quality), 1.0, 0.0)
    }

    /// Half-extent along x.
    pub fn x_range(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.x_range(),
            Shape::Ellipse(e) => e.x_range(),
        }
    }

    /// Half-extent along y.
    pub fn y_range(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.y_range(),
            Shape::Ellipse(e) => e.y_range(),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Circle(c) => c.color(),
            Shape::Ellipse(e) => e.color(),
        }
    }
}
