use std::sync::OnceLock;

use crate::error::{GeometryError, Result};
use crate::geometry::color::Color;
use crate::geometry::surface::Plane3D;
use crate::math::{round, MatrixVector, Vector3D};
use crate::operations::query::Aabb;
use crate::tessellation::{clip_ears, EarSpace};

use super::{normalize_ring, same_ring, Orientation, Triangle3D};

/// A planar, colored polygon in space.
///
/// Vertices are normalized like [`Polygon2D`](super::Polygon2D) vertices and
/// must lie in one plane. The triangulation is computed on first use and
/// cached; every triangle carries the polygon's color.
#[derive(Debug, Clone)]
pub struct Polygon3D {
    points: Vec<Vector3D>,
    color: Color,
    normal: Vector3D,
    triangles: OnceLock<Vec<Triangle3D>>,
}

impl Polygon3D {
    /// Creates a polygon from its vertex ring.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if fewer than three vertices
    /// survive normalization, and [`GeometryError::NonPlanar`] if the
    /// vertices do not lie in one plane.
    pub fn new(points: Vec<Vector3D>, color: Color) -> Result<Self> {
        let points = normalize_ring(points, |a, b, c| (*b - *a).collinear(&(*c - *b)))?;

        if points.len() > 3 {
            let origin = points[0];
            let offsets: Vec<Vector3D> = points[1..].iter().map(|p| *p - origin).collect();
            let rank = Vector3D::stack_columns(&offsets)?.rank();
            if rank > 2 {
                return Err(GeometryError::NonPlanar { rank }.into());
            }
        }

        let normal = area_vector(&points);
        if normal == Vector3D::ZERO {
            return Err(GeometryError::Degenerate("polygon encloses no area".into()).into());
        }

        Ok(Self {
            points,
            color,
            normal,
            triangles: OnceLock::new(),
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a polygon keeps at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the vertex ring.
    #[must_use]
    pub fn points(&self) -> &[Vector3D] {
        &self.points
    }

    /// Vertex `i`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `i >= len()`.
    pub fn point(&self, i: usize) -> Result<Vector3D> {
        self.points.get(i).copied().ok_or_else(|| {
            GeometryError::IndexOutOfRange {
                index: i,
                len: self.len(),
            }
            .into()
        })
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Center of the bounding box of the vertices.
    #[must_use]
    pub fn center(&self) -> Vector3D {
        Aabb::from_points(&self.points).map_or(Vector3D::ORIGIN, |bounds| bounds.center())
    }

    /// Normal following the vertex winding, with length twice the area.
    #[must_use]
    pub fn normal(&self) -> Vector3D {
        self.normal
    }

    /// Returns the plane through the first vertex with the polygon normal.
    #[must_use]
    pub fn plane(&self) -> Plane3D {
        Plane3D::from_parts(self.points[0], self.normal)
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        round(self.normal.norm() / 2.0)
    }

    /// Ear-clipped triangulation in the polygon's own plane.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle3D] {
        self.triangles.get_or_init(|| {
            let space = OrientedPlane {
                normal: self.normal,
                color: self.color,
            };
            clip_ears(&space, &self.points, Orientation::CounterClockwise)
        })
    }

    /// All triangles of all polygons, in polygon order.
    #[must_use]
    pub fn triangles_of(polygons: &[Self]) -> Vec<Triangle3D> {
        polygons
            .iter()
            .flat_map(|polygon| polygon.triangles().iter().copied())
            .collect()
    }
}

impl PartialEq for Polygon3D {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && same_ring(&self.points, &other.points)
    }
}

/// Sum of `(p[i] - p[0]) x (p[i + 1] - p[0])`, twice the vector area.
fn area_vector(points: &[Vector3D]) -> Vector3D {
    let origin = points[0];
    points
        .windows(2)
        .skip(1)
        .map(|pair| (pair[0] - origin).cross(&(pair[1] - origin)))
        .fold(Vector3D::ZERO, |acc, n| acc + n)
}

/// A polygon's plane seen from the side its normal points to.
struct OrientedPlane {
    normal: Vector3D,
    color: Color,
}

impl EarSpace for OrientedPlane {
    type Point = Vector3D;
    type Triangle = Triangle3D;

    fn orientation(&self, a: &Vector3D, b: &Vector3D, c: &Vector3D) -> Orientation {
        Orientation::of((*b - *a).cross(&(*c - *a)).dot(&self.normal))
    }

    fn triangle(&self, a: Vector3D, b: Vector3D, c: Vector3D) -> Option<Triangle3D> {
        Triangle3D::new(a, b, c, self.color).ok()
    }

    fn covers(&self, triangle: &Triangle3D, p: &Vector3D) -> bool {
        triangle.contains_projected(p)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D::new(x, y, z).unwrap()
    }

    fn red() -> Color {
        Color::new(255, 0, 0)
    }

    /// An L-shaped wall in the plane `x = 1`.
    fn wall() -> Polygon3D {
        Polygon3D::new(
            vec![
                p(1.0, 0.0, 0.0),
                p(1.0, 2.0, 0.0),
                p(1.0, 2.0, 1.0),
                p(1.0, 1.0, 1.0),
                p(1.0, 1.0, 2.0),
                p(1.0, 0.0, 2.0),
            ],
            red(),
        )
        .unwrap()
    }

    #[test]
    fn non_planar_vertices_are_rejected() {
        let err = Polygon3D::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(1.0, 1.0, 0.0),
                p(0.0, 1.0, 1.0),
            ],
            red(),
        );
        assert!(matches!(
            err,
            Err(crate::GeokernError::Geometry(GeometryError::NonPlanar { rank: 3 }))
        ));
    }

    #[test]
    fn collinear_vertices_are_dropped() {
        let square = Polygon3D::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(0.5, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(1.0, 1.0, 0.0),
                p(0.0, 1.0, 0.0),
            ],
            red(),
        )
        .unwrap();
        assert_eq!(square.len(), 4);
        assert!(Polygon3D::new(vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)], red()).is_err());
    }

    #[test]
    fn normal_area_and_center() {
        let w = wall();
        assert!(w.normal().collinear(&Vector3D::I));
        assert!(w.normal().x() > 0.0);
        assert_eq!(w.area(), 3.0);
        assert_eq!(w.center(), p(1.0, 1.0, 1.0));
        assert!(w.plane().contains_point(&p(1.0, 17.0, -3.0)));
    }

    #[test]
    fn triangulation_covers_area_and_keeps_color() {
        let w = wall();
        let triangles = w.triangles();
        assert_eq!(triangles.len(), 4);
        let total: f64 = triangles.iter().map(Triangle3D::area).sum();
        assert_relative_eq!(total, 3.0, epsilon = 1e-9);
        assert!(triangles.iter().all(|t| t.color() == red()));
        assert!(triangles.iter().all(|t| t.normal().dot(&w.normal()) > 0.0));
    }

    #[test]
    fn bulk_triangulation() {
        let square = Polygon3D::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(1.0, 1.0, 0.0),
                p(0.0, 1.0, 0.0),
            ],
            red(),
        )
        .unwrap();
        assert_eq!(Polygon3D::triangles_of(&[wall(), square]).len(), 6);
    }
}
