mod cut;
mod intersect;
mod split;

pub use cut::{cut_by_line, cut_by_plane, cut_triangles};
pub use intersect::{intersect_polygons, intersect_triangle_sets, intersect_triangles};
pub use split::{split_by_lines, split_triangle};
