//! Rolling-circle motion: trajectory composition and closure detection.

pub mod motion;

pub use motion::{Motion, FALLBACK_ROTATIONS, MAX_ROTATIONS, OUTLINE_POINTS};
