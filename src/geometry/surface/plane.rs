use crate::error::{GeometryError, Result};
use crate::geometry::curve::Line3D;
use crate::math::{round, MatrixVector, Vector3D};

/// An infinite plane in 3D space.
///
/// Defined by an anchor point and a normal vector. Points in the plane are
/// parametrized as `P(t1, t2) = anchor + t1 * s1 + t2 * s2`, where `s1` and
/// `s2` are the spanning vectors derived from the normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3D {
    anchor: Vector3D,
    normal: Vector3D,
}

impl Plane3D {
    /// Creates a plane from an anchor point and a normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the normal has zero length.
    pub fn new(anchor: Vector3D, normal: Vector3D) -> Result<Self> {
        if normal == Vector3D::ZERO {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { anchor, normal })
    }

    /// Creates the plane through three points, with normal `(b - a) x (c - a)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear.
    pub fn from_points(a: Vector3D, b: Vector3D, c: Vector3D) -> Result<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal == Vector3D::ZERO {
            return Err(GeometryError::Degenerate("collinear plane points".into()).into());
        }
        Ok(Self { anchor: a, normal })
    }

    /// Plane from a normal already known to be nonzero.
    pub(crate) fn from_parts(anchor: Vector3D, normal: Vector3D) -> Self {
        Self { anchor, normal }
    }

    /// Returns the point the plane was built from.
    #[must_use]
    pub fn anchor(&self) -> Vector3D {
        self.anchor
    }

    /// Returns the normal vector.
    #[must_use]
    pub fn normal(&self) -> Vector3D {
        self.normal
    }

    /// First spanning vector: `normal x i`, or `normal x j` when the normal
    /// is parallel to the x axis.
    #[must_use]
    pub fn s1(&self) -> Vector3D {
        let s = self.normal.cross(&Vector3D::I);
        if s == Vector3D::ZERO {
            self.normal.cross(&Vector3D::J)
        } else {
            s
        }
    }

    /// Second spanning vector: `normal x s1`.
    #[must_use]
    pub fn s2(&self) -> Vector3D {
        self.normal.cross(&self.s1())
    }

    /// Returns `anchor + t1 * s1 + t2 * s2`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotANumber`] if either parameter is NaN.
    pub fn point_at(&self, t1: f64, t2: f64) -> Result<Vector3D> {
        Ok(self.anchor + self.s1().scale(t1)? + self.s2().scale(t2)?)
    }

    pub(crate) fn at(&self, t1: f64, t2: f64) -> Vector3D {
        self.anchor + self.s1().scaled(t1) + self.s2().scaled(t2)
    }

    /// `true` if `p` lies in the plane.
    #[must_use]
    pub fn contains_point(&self, p: &Vector3D) -> bool {
        (*p - self.anchor).orthogonal(&self.normal)
    }

    /// `true` if every point of `line` lies in the plane.
    #[must_use]
    pub fn contains_line(&self, line: &Line3D) -> bool {
        self.contains_point(&line.anchor()) && line.direction().orthogonal(&self.normal)
    }

    /// `(t1, t2)` of the projection of `p` onto the plane.
    ///
    /// # Errors
    ///
    /// Propagates matrix errors from solving the coordinate system.
    pub fn parameters(&self, p: &Vector3D) -> Result<(f64, f64)> {
        let system =
            Vector3D::stack_columns(&[self.s1(), self.s2(), self.normal, *p - self.anchor])?
                .reduced_row_echelon_form();
        Ok((system.entry(0, 3)?, system.entry(1, 3)?))
    }

    /// Foot of the perpendicular from `p`.
    #[must_use]
    pub fn projection(&self, p: &Vector3D) -> Vector3D {
        let offset = (*p - self.anchor)
            .projection(&self.normal)
            .unwrap_or(Vector3D::ZERO);
        *p - offset
    }

    /// Distance from the plane, positive on the side the normal points to.
    #[must_use]
    pub fn signed_distance(&self, p: &Vector3D) -> f64 {
        round((*p - self.anchor).dot(&self.normal) / self.normal.norm())
    }

    /// Unsigned distance from the plane.
    #[must_use]
    pub fn distance(&self, p: &Vector3D) -> f64 {
        self.signed_distance(p).abs()
    }

    /// `true` if the normals are collinear.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.normal.collinear(&other.normal)
    }

    /// `true` if the normals are orthogonal.
    #[must_use]
    pub fn is_orthogonal(&self, other: &Self) -> bool {
        self.normal.orthogonal(&other.normal)
    }

    /// `true` if both planes describe the same point set.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_parallel(other) && self.contains_point(&other.anchor)
    }

    /// Parameter on `line` of the point where it crosses the plane.
    ///
    /// Returns `None` if the line is parallel to the plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Coincident`] if the plane contains the line.
    pub fn line_intersection_parameter(&self, line: &Line3D) -> Result<Option<f64>> {
        if self.contains_line(line) {
            return Err(GeometryError::Coincident("line and plane").into());
        }
        if line.direction().orthogonal(&self.normal) {
            return Ok(None);
        }
        let system = Vector3D::stack_columns(&[
            line.direction(),
            -self.s1(),
            -self.s2(),
            self.anchor - line.anchor(),
        ])?
        .reduced_row_echelon_form();
        Ok(Some(system.entry(0, 3)?))
    }

    /// Point where `line` crosses the plane, `None` if it runs parallel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Coincident`] if the plane contains the line.
    pub fn line_intersection(&self, line: &Line3D) -> Result<Option<Vector3D>> {
        Ok(self
            .line_intersection_parameter(line)?
            .map(|t| line.at(t)))
    }

    /// Line shared by two planes, `None` if they are parallel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Coincident`] if the planes are equal.
    pub fn plane_intersection(&self, other: &Self) -> Result<Option<Line3D>> {
        if self.is_equal(other) {
            return Err(GeometryError::Coincident("planes").into());
        }
        if self.is_parallel(other) {
            return Ok(None);
        }
        let direction = self.normal.cross(&other.normal);
        let system = Vector3D::stack_columns(&[
            self.s1(),
            self.s2(),
            -other.s1(),
            -other.s2(),
            other.anchor - self.anchor,
        ])?
        .reduced_row_echelon_form();

        // Row 2 reads f1 * u1 + f2 * u2 = c in the parameters of `other`.
        let f1 = system.entry(2, 2)?;
        let f2 = system.entry(2, 3)?;
        let c = system.entry(2, 4)?;
        let anchor = if f1 != 0.0 {
            other.at(c / f1, 0.0)
        } else if f2 != 0.0 {
            other.at(0.0, c / f2)
        } else {
            return Ok(None);
        };
        Ok(Some(Line3D::new(anchor, direction)?))
    }
}
