use crate::error::{GeometryError, Result};
use crate::geometry::curve::Line2D;
use crate::math::{round, round_to, MatrixVector, Vector2D, CONTAINMENT_PRECISION};
use crate::operations::boolean;

use super::Orientation;

/// A non-degenerate triangle in the plane.
///
/// Equality ignores vertex order: two triangles are equal when they have the
/// same three corners.
#[derive(Debug, Clone, Copy)]
pub struct Triangle2D {
    a: Vector2D,
    b: Vector2D,
    c: Vector2D,
}

impl Triangle2D {
    /// Creates a triangle from three corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if two corners coincide or all
    /// three are collinear.
    pub fn new(a: Vector2D, b: Vector2D, c: Vector2D) -> Result<Self> {
        if a == b || b == c || a == c {
            return Err(GeometryError::Degenerate("coincident triangle vertices".into()).into());
        }
        if (b - a).collinear(&(c - a)) {
            return Err(GeometryError::Degenerate("collinear triangle vertices".into()).into());
        }
        Ok(Self { a, b, c })
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn a(&self) -> Vector2D {
        self.a
    }

    /// Returns the second vertex.
    #[must_use]
    pub fn b(&self) -> Vector2D {
        self.b
    }

    /// Returns the third vertex.
    #[must_use]
    pub fn c(&self) -> Vector2D {
        self.c
    }

    /// Returns `[a, b, c]`.
    #[must_use]
    pub fn vertices(&self) -> [Vector2D; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns `b - a`.
    #[must_use]
    pub fn ab(&self) -> Vector2D {
        self.b - self.a
    }

    /// Returns `c - a`.
    #[must_use]
    pub fn ac(&self) -> Vector2D {
        self.c - self.a
    }

    /// Returns `c - b`.
    #[must_use]
    pub fn bc(&self) -> Vector2D {
        self.c - self.b
    }

    /// Lines through the edges `ab`, `bc` and `ca`, in that order.
    #[must_use]
    pub fn edge_lines(&self) -> [Line2D; 3] {
        [
            Line2D::between(self.a, self.b),
            Line2D::between(self.b, self.c),
            Line2D::between(self.c, self.a),
        ]
    }

    /// Centroid.
    #[must_use]
    pub fn center(&self) -> Vector2D {
        Vector2D::rounded(
            (self.a.x() + self.b.x() + self.c.x()) / 3.0,
            (self.a.y() + self.b.y() + self.c.y()) / 3.0,
        )
    }

    /// Interior angle at `a`, in degrees.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.ab().angle(&self.ac()).unwrap_or_default()
    }

    /// Interior angle at `b`, in degrees.
    #[must_use]
    pub fn beta(&self) -> f64 {
        (-self.ab()).angle(&self.bc()).unwrap_or_default()
    }

    /// Interior angle at `c`, in degrees.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        (-self.ac()).angle(&(-self.bc())).unwrap_or_default()
    }

    /// Half the absolute cross product of `ab` and `ac`.
    #[must_use]
    pub fn area(&self) -> f64 {
        round(0.5 * self.ab().cross(&self.ac())).abs()
    }

    /// Winding of `a -> b -> c`.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.ab().cross(&self.ac()))
    }

    /// `true` if `p` lies inside the triangle or on its boundary.
    ///
    /// The point is written as `a + t1 * ab + t2 * ac`; the coefficients are
    /// rounded to [`CONTAINMENT_PRECISION`] digits before the simplex test.
    #[must_use]
    pub fn contains(&self, p: &Vector2D) -> bool {
        let Some((t1, t2)) = self.coefficients(p) else {
            return false;
        };
        let t1 = round_to(t1, CONTAINMENT_PRECISION);
        let t2 = round_to(t2, CONTAINMENT_PRECISION);
        t1 >= 0.0 && t2 >= 0.0 && round_to(t1 + t2, CONTAINMENT_PRECISION) <= 1.0
    }

    fn coefficients(&self, p: &Vector2D) -> Option<(f64, f64)> {
        let inverse = Vector2D::stack_columns(&[self.ab(), self.ac()])
            .ok()?
            .inverse()?;
        let t = (*p - self.a).transform(&inverse).ok()?;
        Some((t.x(), t.y()))
    }

    /// Distance from `p` to the closest point of the triangle, zero inside.
    #[must_use]
    pub fn distance(&self, p: &Vector2D) -> f64 {
        if self.contains(p) {
            return 0.0;
        }
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
            .into_iter()
            .map(|(s, e)| segment_distance(p, s, e))
            .fold(f64::INFINITY, f64::min)
    }

    /// Pieces of this triangle on either side of `line`.
    ///
    /// Returns the triangle itself when the line misses it.
    #[must_use]
    pub fn split(&self, line: &Line2D) -> Vec<Self> {
        boolean::split_triangle(self, line)
    }

    /// Triangulated overlap of two triangles.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Vec<Self> {
        boolean::intersect_triangles(self, other)
    }
}

impl PartialEq for Triangle2D {
    fn eq(&self, other: &Self) -> bool {
        let theirs = other.vertices();
        self.vertices().iter().all(|v| theirs.contains(v))
    }
}

pub(crate) fn segment_distance(p: &Vector2D, start: Vector2D, end: Vector2D) -> f64 {
    let line = Line2D::between(start, end);
    let t = line.parameter(p).clamp(0.0, 1.0);
    p.distance(&line.at(t))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn v(x: f64, y: f64) -> Vector2D {
        Vector2D::new(x, y).unwrap()
    }

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle2D {
        Triangle2D::new(v(a.0, a.1), v(b.0, b.1), v(c.0, c.1)).unwrap()
    }

    #[test]
    fn degenerate_triangles_are_rejected() {
        assert!(Triangle2D::new(v(0.0, 0.0), v(0.0, 0.0), v(1.0, 1.0)).is_err());
        assert!(Triangle2D::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)).is_err());
    }

    #[test]
    fn area_and_orientation() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        assert_eq!(t.area(), 8.0);
        assert_eq!(t.orientation(), Orientation::CounterClockwise);
        assert_eq!(t.orientation().sign(), 1);
        let reversed = tri((0.0, 0.0), (0.0, 4.0), (4.0, 0.0));
        assert_eq!(reversed.area(), 8.0);
        assert_eq!(reversed.orientation().sign(), -1);
    }

    #[test]
    fn angles_sum_to_half_turn() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        assert_relative_eq!(t.alpha(), 90.0);
        assert_relative_eq!(t.beta(), 45.0, epsilon = 1e-9);
        assert_relative_eq!(t.gamma(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn containment() {
        let t = tri((0.0, 0.0), (3.0, 0.0), (0.0, 3.0));
        for corner in t.vertices() {
            assert!(t.contains(&corner));
        }
        assert!(t.contains(&t.center()));
        assert!(t.contains(&v(1.5, 1.5)));
        assert!(!t.contains(&v(2.0, 2.0)));
        assert!(!t.contains(&v(-0.1, 1.0)));
        assert!(!t.contains(&v(100.0, 100.0)));
    }

    #[test]
    fn distance_to_point() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        assert_eq!(t.distance(&v(1.0, 1.0)), 0.0);
        assert_eq!(t.distance(&v(2.0, -3.0)), 3.0);
        assert_eq!(t.distance(&v(-3.0, -4.0)), 5.0);
    }

    #[test]
    fn equality_ignores_vertex_order() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        assert_eq!(t, tri((4.0, 0.0), (0.0, 4.0), (0.0, 0.0)));
        assert_eq!(t, tri((0.0, 4.0), (4.0, 0.0), (0.0, 0.0)));
        assert_ne!(t, tri((0.0, 0.0), (4.0, 0.0), (0.0, 5.0)));
    }
}
