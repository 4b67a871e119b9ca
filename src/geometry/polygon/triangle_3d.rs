use crate::error::{GeometryError, Result};
use crate::geometry::color::Color;
use crate::geometry::curve::Line3D;
use crate::geometry::surface::Plane3D;
use crate::math::{round, round_to, MatrixVector, Vector3D, CONTAINMENT_PRECISION};
use crate::operations::boolean;

/// A non-degenerate, colored triangle in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3D {
    a: Vector3D,
    b: Vector3D,
    c: Vector3D,
    color: Color,
}

impl Triangle3D {
    /// Creates a triangle from three corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if two corners coincide or all
    /// three are collinear.
    pub fn new(a: Vector3D, b: Vector3D, c: Vector3D, color: Color) -> Result<Self> {
        if a == b || b == c || a == c {
            return Err(GeometryError::Degenerate("coincident triangle vertices".into()).into());
        }
        if (b - a).collinear(&(c - a)) {
            return Err(GeometryError::Degenerate("collinear triangle vertices".into()).into());
        }
        Ok(Self { a, b, c, color })
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn a(&self) -> Vector3D {
        self.a
    }

    /// Returns the second vertex.
    #[must_use]
    pub fn b(&self) -> Vector3D {
        self.b
    }

    /// Returns the third vertex.
    #[must_use]
    pub fn c(&self) -> Vector3D {
        self.c
    }

    /// Returns `[a, b, c]`.
    #[must_use]
    pub fn vertices(&self) -> [Vector3D; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the centroid.
    #[must_use]
    pub fn center(&self) -> Vector3D {
        Vector3D::rounded(
            (self.a.x() + self.b.x() + self.c.x()) / 3.0,
            (self.a.y() + self.b.y() + self.c.y()) / 3.0,
            (self.a.z() + self.b.z() + self.c.z()) / 3.0,
        )
    }

    /// `(b - a) x (c - a)`, following the vertex winding.
    #[must_use]
    pub fn normal(&self) -> Vector3D {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Returns the plane through `a` with the triangle normal.
    #[must_use]
    pub fn plane(&self) -> Plane3D {
        Plane3D::from_parts(self.a, self.normal())
    }

    /// Half the length of the normal.
    #[must_use]
    pub fn area(&self) -> f64 {
        round(0.5 * self.normal().norm())
    }

    /// `true` if `p` lies in the triangle's plane, inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Vector3D) -> bool {
        (*p - self.a).orthogonal(&self.normal()) && self.contains_projected(p)
    }

    /// Simplex test on the projection of `p` along the normal.
    pub(crate) fn contains_projected(&self, p: &Vector3D) -> bool {
        let Some((t1, t2)) = self.coefficients(p) else {
            return false;
        };
        let t1 = round_to(t1, CONTAINMENT_PRECISION);
        let t2 = round_to(t2, CONTAINMENT_PRECISION);
        t1 >= 0.0 && t2 >= 0.0 && round_to(t1 + t2, CONTAINMENT_PRECISION) <= 1.0
    }

    fn coefficients(&self, p: &Vector3D) -> Option<(f64, f64)> {
        let inverse = Vector3D::stack_columns(&[self.b - self.a, self.c - self.a, self.normal()])
            .ok()?
            .inverse()?;
        let t = (*p - self.a).transform(&inverse).ok()?;
        Some((t.x(), t.y()))
    }

    /// Pieces of this triangle on either side of a line in its plane.
    #[must_use]
    pub fn cut_by_line(&self, line: &Line3D) -> Vec<Self> {
        boolean::cut_by_line(self, line)
    }

    /// Pieces of this triangle on either side of `plane`.
    #[must_use]
    pub fn cut_by_plane(&self, plane: &Plane3D) -> Vec<Self> {
        boolean::cut_by_plane(self, plane)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D::new(x, y, z).unwrap()
    }

    fn floor() -> Triangle3D {
        Triangle3D::new(
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(0.0, 4.0, 0.0),
            Color::new(10, 20, 30),
        )
        .unwrap()
    }

    #[test]
    fn degenerate_triangles_are_rejected() {
        let c = Color::default();
        assert!(Triangle3D::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), c).is_err());
        assert!(Triangle3D::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(3.0, 3.0, 3.0), c).is_err());
    }

    #[test]
    fn derived_quantities() {
        let t = floor();
        assert_eq!(t.normal(), p(0.0, 0.0, 16.0));
        assert_eq!(t.area(), 8.0);
        assert!(t.plane().contains_point(&p(9.0, -3.0, 0.0)));
        assert_eq!(t.color(), Color::new(10, 20, 30));
    }

    #[test]
    fn containment() {
        let t = floor();
        for corner in t.vertices() {
            assert!(t.contains(&corner));
        }
        assert!(t.contains(&t.center()));
        assert!(!t.contains(&p(1.0, 1.0, 0.5)));
        assert!(!t.contains(&p(3.0, 3.0, 0.0)));
        assert!(t.contains_projected(&p(1.0, 1.0, 0.5)));
    }
}
