//! Drawing parameters as submitted at the boundary, with the validation
//! the input widgets otherwise enforce.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use spiro_core::{Color, Result, SpiroError};
use spiro_geometry::{Circle, Ellipse, Shape};
use spiro_motion::Motion;

use crate::bundle::SceneBundle;
use crate::scene::Scene;

/// Orbit extent limits (circle radius, ellipse width/height).
pub const MIN_ORBIT_EXTENT: f64 = 5.0;
pub const MAX_ORBIT_EXTENT: f64 = 200.0;

/// Animation speed limits.
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 200;

/// Most rolling circles a single drawing accepts.
pub const MAX_CIRCLES: usize = 5;

/// Default number of trajectory samples per motion.
pub const DEFAULT_QUALITY: usize = 5000;

/// Orbit selection: a kind tag plus the dimensions that kind needs.
///
/// The tag-to-constructor mapping below is the entire orbit registry;
/// adding an orbit kind means adding a variant and its `build` arm.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OrbitSpec {
    Circle { radius: f64 },
    /// Full width and height; halved into semi-axes when built.
    Ellipse { width: f64, height: f64 },
}

impl OrbitSpec {
    /// Largest admissible rolling-circle radius for this orbit.
    pub fn max_radius(&self) -> f64 {
        match *self {
            OrbitSpec::Circle { radius } => radius,
            OrbitSpec::Ellipse { width, height } => width.min(height) / 2.0,
        }
    }

    /// Validate the dimensions and construct the orbit shape.
    pub fn build(&self, color: Color) -> Result<Shape> {
        match *self {
            OrbitSpec::Circle { radius } => {
                check_extent("orbit radius", radius)?;
                Ok(Shape::Circle(Circle::new(radius, color)?))
            }
            OrbitSpec::Ellipse { width, height } => {
                check_extent("orbit width", width)?;
                check_extent("orbit height", height)?;
                Ok(Shape::Ellipse(Ellipse::new(
                    width / 2.0,
                    height / 2.0,
                    color,
                )?))
            }
        }
    }
}

fn check_extent(name: &str, value: f64) -> Result<()> {
    if !(MIN_ORBIT_EXTENT..=MAX_ORBIT_EXTENT).contains(&value) {
        return Err(SpiroError::Parameter(format!(
            "{} must lie in [{}, {}], got {}",
            name, MIN_ORBIT_EXTENT, MAX_ORBIT_EXTENT, value
        )));
    }
    Ok(())
}

/// One rolling circle as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleSpec {
    pub radius: u32,
    pub color: Color,
    /// Pen distance from the circle's center, `0..=radius`.
    pub pen_distance: f64,
    /// Roll outside the orbit instead of inside.
    #[serde(default)]
    pub outer: bool,
}

impl CircleSpec {
    fn validate(&self, max_radius: f64) -> Result<()> {
        let radius = f64::from(self.radius);
        if self.radius < 1 || radius > max_radius - 1.0 {
            return Err(SpiroError::Parameter(format!(
                "circle radius must lie in [1, {}], got {}",
                max_radius - 1.0,
                self.radius
            )));
        }
        if !(0.0..=radius).contains(&self.pen_distance) {
            return Err(SpiroError::Parameter(format!(
                "pen distance must lie in [0, {}], got {}",
                radius, self.pen_distance
            )));
        }
        Ok(())
    }

    /// The engine-facing pen offset: distance from the pen to the border.
    fn distance_to_border(&self) -> f64 {
        f64::from(self.radius) - self.pen_distance
    }
}

/// Global drawing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub show_borders: bool,
    #[serde(default)]
    pub animate: bool,
    pub speed: u32,
    #[serde(default = "default_quality")]
    pub quality: usize,
}

fn default_quality() -> usize {
    DEFAULT_QUALITY
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_borders: false,
            animate: false,
            speed: 2,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// A complete drawing submission: orbit, rolling circles, settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRequest {
    pub orbit: OrbitSpec,
    pub orbit_color: Color,
    #[serde(default)]
    pub circles: Vec<CircleSpec>,
    pub settings: Settings,
}

impl DrawRequest {
    /// Reject out-of-range parameters before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if self.circles.len() > MAX_CIRCLES {
            return Err(SpiroError::Parameter(format!(
                "at most {} circles per drawing, got {}",
                MAX_CIRCLES,
                self.circles.len()
            )));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.settings.speed) {
            return Err(SpiroError::Parameter(format!(
                "speed must lie in [{}, {}], got {}",
                MIN_SPEED, MAX_SPEED, self.settings.speed
            )));
        }
        if self.settings.quality < 2 {
            return Err(SpiroError::Parameter(format!(
                "quality must be at least 2, got {}",
                self.settings.quality
            )));
        }
        let max_radius = self.orbit.max_radius();
        for circle in &self.circles {
            circle.validate(max_radius)?;
        }
        Ok(())
    }

    /// Validate, compute every motion, and assemble the renderer bundle.
    ///
    /// Motions are independent and are computed in parallel.
    pub fn render(&self) -> Result<SceneBundle> {
        self.validate()?;

        let orbit = self.orbit.build(self.orbit_color)?;
        let motions = self
            .circles
            .par_iter()
            .map(|spec| {
                let circle = Circle::new(f64::from(spec.radius), spec.color)?;
                Motion::new(
                    &orbit,
                    circle,
                    spec.distance_to_border(),
                    spec.outer,
                    self.settings.quality,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            circles = motions.len(),
            quality = self.settings.quality,
            "drawing computed"
        );

        Ok(Scene::new(&orbit, motions, &self.settings).bundle())
    }
}
