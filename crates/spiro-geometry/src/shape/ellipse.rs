//! Ellipse shape.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use spiro_core::{Color, Result, SpiroError};
use spiro_math::Point2;

/// An axis-aligned ellipse centered on the origin, with semi-axes `a`
/// (along x) and `b` (along y).
///
/// Offsets are applied to both semi-axes uniformly. For `offset != 0` the
/// result is not a true parallel curve; the rolling model depends on this
/// exact form, so it is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    a: f64,
    b: f64,
    color: Color,
}

impl Ellipse {
    /// Construct an ellipse, rejecting non-positive or non-finite semi-axes.
    pub fn new(a: f64, b: f64, color: Color) -> Result<Self> {
        if !a.is_finite() || a <= 0.0 || !b.is_finite() || b <= 0.0 {
            return Err(SpiroError::Shape(format!(
                "ellipse semi-axes must be positive, got a={}, b={}",
                a, b
            )));
        }
        Ok(Self { a, b, color })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Parametric position at `t`, both semi-axes offset by `offset`.
    pub fn point_at(&self, t: f64, speed: f64, offset: f64) -> Point2 {
        let angle = speed * t;
        Point2::new(
            (self.a + offset) * angle.cos(),
            (self.b + offset) * angle.sin(),
        )
    }

    /// Ramanujan's approximation for the circumference of the ellipse with
    /// both semi-axes offset by `offset`.
    pub fn circumference(&self, offset: f64) -> f64 {
        let a = self.a + offset;
        let b = self.b + offset;
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }

    pub fn x_range(&self) -> f64 {
        self.a
    }

    pub fn y_range(&self) -> f64 {
        self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Circle;
    use approx::assert_relative_eq;

    #[test]
    fn test_degenerate_ellipse_matches_circle() {
        let ellipse = Ellipse::new(48.0, 48.0, Color::Blue).unwrap();
        let circle = Circle::new(48.0, Color::Blue).unwrap();
        // Ramanujan's formula is exact for equal axes.
        assert_relative_eq!(
            ellipse.circumference(0.0),
            circle.circumference(0.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ellipse.circumference(-7.0),
            circle.circumference(-7.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_points_satisfy_ellipse_equation() {
        let ellipse = Ellipse::new(4.0, 2.0, Color::Green).unwrap();
        assert_eq!(ellipse.a(), 4.0);
        assert_eq!(ellipse.b(), 2.0);
        for i in 0..16 {
            let t = i as f64 * PI / 8.0;
            let p = ellipse.point_at(t, 1.0, 0.0);
            let residual = (p.x / 4.0).powi(2) + (p.y / 2.0).powi(2);
            assert_relative_eq!(residual, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_periodicity() {
        let ellipse = Ellipse::new(4.0, 2.0, Color::Green).unwrap();
        let p0 = ellipse.point_at(0.0, 1.0, 0.5);
        let p1 = ellipse.point_at(2.0 * PI, 1.0, 0.5);
        assert_relative_eq!(p0.x, p1.x, epsilon = 1e-10);
        assert_relative_eq!(p0.y, p1.y, epsilon = 1e-10);
    }

    #[test]
    fn test_circumference_between_axis_bounds() {
        let ellipse = Ellipse::new(5.0, 3.0, Color::Green).unwrap();
        let c = ellipse.circumference(0.0);
        // Bracketed by the inscribed and circumscribed circles.
        assert!(c > 2.0 * PI * 3.0);
        assert!(c < 2.0 * PI * 5.0);
    }

    #[test]
    fn test_rejects_degenerate_axes() {
        assert!(Ellipse::new(0.0, 1.0, Color::Blue).is_err());
        assert!(Ellipse::new(1.0, -2.0, Color::Blue).is_err());
        assert!(Ellipse::new(f64::INFINITY, 1.0, Color::Blue).is_err());
    }
}
