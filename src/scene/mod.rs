//! Cameras and the scene model.

mod camera;
mod model;

pub use camera::Camera;
pub use model::{Model, ProjectedTriangle};
