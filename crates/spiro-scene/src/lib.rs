//! Scene assembly: validated drawing parameters in, renderer-ready
//! coordinate bundles out.

pub mod bundle;
pub mod params;
pub mod scene;

pub use bundle::SceneBundle;
pub use params::{CircleSpec, DrawRequest, OrbitSpec, Settings};
pub use scene::Scene;
