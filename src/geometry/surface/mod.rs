mod plane;

pub use plane::Plane3D;
