pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;

pub use error::{GeokernError, GeometryError, MatrixError, ModelError, Result};
pub use geometry::{
    Color, Line2D, Line3D, Orientation, Plane3D, Polygon2D, Polygon3D, Triangle2D, Triangle3D,
};
pub use math::{round, round_to, Matrix, MatrixVector, Vector2D, Vector3D};
pub use operations::query::Aabb;
pub use operations::shaping::Extrude;
pub use scene::{Camera, Model, ProjectedTriangle};
