pub mod color;
pub mod error;
pub mod tolerance;

pub use color::Color;
pub use error::{Result, SpiroError};
pub use tolerance::Tolerance;
