mod line_2d;
mod line_3d;

pub use line_2d::Line2D;
pub use line_3d::Line3D;
