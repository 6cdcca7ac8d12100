//! Circle shape.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use spiro_core::{Color, Result, SpiroError};
use spiro_math::Point2;

/// A circle centered on the origin.
///
/// Serves both as an orbit and as the rolling circle itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
    color: Color,
}

impl Circle {
    /// Construct a circle, rejecting non-positive or non-finite radii.
    pub fn new(radius: f64, color: Color) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SpiroError::Shape(format!(
                "circle radius must be positive, got {}",
                radius
            )));
        }
        Ok(Self { radius, color })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Parametric position at `t`, radially offset by `offset`.
    pub fn point_at(&self, t: f64, speed: f64, offset: f64) -> Point2 {
        let r = self.radius + offset;
        let angle = speed * t;
        Point2::new(r * angle.cos(), r * angle.sin())
    }

    /// Circumference of the circle offset by `offset`.
    pub fn circumference(&self, offset: f64) -> f64 {
        2.0 * PI * (self.radius + offset)
    }

    pub fn x_range(&self) -> f64 {
        self.radius
    }

    pub fn y_range(&self) -> f64 {
        self.radius
    }
}
