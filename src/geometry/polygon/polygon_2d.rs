use std::sync::OnceLock;

use crate::error::{GeometryError, Result};
use crate::math::{round, Vector2D};
use crate::operations::boolean;
use crate::tessellation::{clip_ears, EarSpace};

use super::triangle_2d::segment_distance;
use super::{normalize_ring, same_ring, Orientation, Triangle2D};

/// A simple polygon in the plane.
///
/// Vertices are normalized on construction (see [`Polygon2D::new`]). The
/// triangulation is computed on first use and cached.
#[derive(Debug, Clone)]
pub struct Polygon2D {
    points: Vec<Vector2D>,
    triangles: OnceLock<Vec<Triangle2D>>,
}

impl Polygon2D {
    /// Creates a polygon from its vertex ring.
    ///
    /// Consecutive duplicate vertices and vertices collinear with their
    /// neighbours are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if fewer than three vertices
    /// survive normalization.
    pub fn new(points: Vec<Vector2D>) -> Result<Self> {
        let points = normalize_ring(points, |a, b, c| (*b - *a).collinear(&(*c - *b)))?;
        Ok(Self {
            points,
            triangles: OnceLock::new(),
        })
    }

    /// The polygon covering exactly one triangle.
    #[must_use]
    pub fn from_triangle(triangle: Triangle2D) -> Self {
        Self {
            points: triangle.vertices().to_vec(),
            triangles: OnceLock::from(vec![triangle]),
        }
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
    pub fn points(&self) -> &[Vector2D] {
        &self.points
    }

    /// Vertex `i`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `i >= len()`.
    pub fn point(&self, i: usize) -> Result<Vector2D> {
        self.points.get(i).copied().ok_or_else(|| {
            GeometryError::IndexOutOfRange {
                index: i,
                len: self.len(),
            }
            .into()
        })
    }

    /// Mean of the vertices.
    #[must_use]
    pub fn center(&self) -> Vector2D {
        Vector2D::average(&self.points).unwrap_or(Vector2D::ORIGIN)
    }

    /// Edge vector from vertex `i` to vertex `i + 1` (wrapping).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `i >= len()`.
    pub fn edge(&self, i: usize) -> Result<Vector2D> {
        let from = self.point(i)?;
        Ok(self.points[(i + 1) % self.len()] - from)
    }

    /// Returns every edge vector in ring order.
    #[must_use]
    pub fn edges(&self) -> Vec<Vector2D> {
        let n = self.len();
        (0..n)
            .map(|i| self.points[(i + 1) % n] - self.points[i])
            .collect()
    }

    /// Interior angle at vertex `i`, in degrees; reflex corners exceed 180.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `i >= len()`.
    pub fn angle(&self, i: usize) -> Result<f64> {
        let n = self.len();
        let here = self.point(i)?;
        let prev = self.points[(i + n - 1) % n];
        let next = self.points[(i + 1) % n];
        let inner = (prev - here).angle(&(next - here)).unwrap_or_default();
        let turn = Orientation::of((here - prev).cross(&(next - here)));
        if turn == self.orientation() {
            Ok(inner)
        } else {
            Ok(round(360.0 - inner))
        }
    }

    /// Returns every interior angle in ring order.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        (0..self.len())
            .filter_map(|i| self.angle(i).ok())
            .collect()
    }

    /// Shoelace area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.len();
        let twice: f64 = (0..n)
            .map(|i| self.points[i].cross(&self.points[(i + 1) % n]))
            .sum();
        round(twice / 2.0)
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding of the vertex ring.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.signed_area())
    }

    /// Ear-clipped triangulation, `len() - 2` triangles for a simple polygon.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle2D] {
        self.triangles
            .get_or_init(|| clip_ears(&PlanarSpace, &self.points, self.orientation()))
    }

    /// `true` if any triangle of the triangulation contains `p`.
    #[must_use]
    pub fn contains(&self, p: &Vector2D) -> bool {
        self.triangles().iter().any(|t| t.contains(p))
    }

    /// Distance from `p` to the closest point of the polygon, zero inside.
    #[must_use]
    pub fn distance(&self, p: &Vector2D) -> f64 {
        if self.contains(p) {
            return 0.0;
        }
        let n = self.len();
        (0..n)
            .map(|i| segment_distance(p, self.points[i], self.points[(i + 1) % n]))
            .fold(f64::INFINITY, f64::min)
    }

    /// Triangulated overlap of two polygons.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Vec<Triangle2D> {
        boolean::intersect_polygons(self, other)
    }
}

impl PartialEq for Polygon2D {
    fn eq(&self, other: &Self) -> bool {
        same_ring(&self.points, &other.points)
    }
}

struct PlanarSpace;

impl EarSpace for PlanarSpace {
    type Point = Vector2D;
    type Triangle = Triangle2D;

    fn orientation(&self, a: &Vector2D, b: &Vector2D, c: &Vector2D) -> Orientation {
        Orientation::of((*b - *a).cross(&(*c - *a)))
    }

    fn triangle(&self, a: Vector2D, b: Vector2D, c: Vector2D) -> Option<Triangle2D> {
        Triangle2D::new(a, b, c).ok()
    }

    fn covers(&self, triangle: &Triangle2D, p: &Vector2D) -> bool {
        triangle.contains(p)
    }
}
