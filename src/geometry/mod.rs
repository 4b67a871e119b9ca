pub mod color;
pub mod curve;
pub mod polygon;
pub mod surface;

pub use color::Color;
pub use curve::{Line2D, Line3D};
pub use polygon::{Orientation, Polygon2D, Polygon3D, Triangle2D, Triangle3D};
pub use surface::Plane3D;
