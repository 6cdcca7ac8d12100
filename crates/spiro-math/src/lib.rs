pub mod sample;

pub use glam::DVec2;
pub use sample::{linspace, split_xy};

pub type Point2 = DVec2;
