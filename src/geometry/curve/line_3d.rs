use crate::error::{GeometryError, Result};
use crate::math::{MatrixVector, Vector3D};

/// An infinite line in space.
///
/// The parametric form is: `P(t) = anchor + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3D {
    anchor: Vector3D,
    direction: Vector3D,
}

impl Line3D {
    /// Creates a line from an anchor point and a direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the direction has zero length.
    pub fn new(anchor: Vector3D, direction: Vector3D) -> Result<Self> {
        if direction == Vector3D::ZERO {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { anchor, direction })
    }

    /// Creates the line through `p` (at `t = 0`) and `q` (at `t = 1`).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the points coincide.
    pub fn through(p: Vector3D, q: Vector3D) -> Result<Self> {
        Self::new(p, q - p)
    }

    /// Line through two points already known to be distinct.
    pub(crate) fn between(p: Vector3D, q: Vector3D) -> Self {
        Self {
            anchor: p,
            direction: q - p,
        }
    }

    /// Returns the point at `t = 0`.
    #[must_use]
    pub fn anchor(&self) -> Vector3D {
        self.anchor
    }

    /// Returns the direction vector, the step from `t = 0` to `t = 1`.
    #[must_use]
    pub fn direction(&self) -> Vector3D {
        self.direction
    }

    /// Returns the point at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotANumber`] if `t` is NaN.
    pub fn point_at(&self, t: f64) -> Result<Vector3D> {
        Ok(self.anchor + self.direction.scale(t)?)
    }

    /// Point at a parameter computed from valid geometry.
    pub(crate) fn at(&self, t: f64) -> Vector3D {
        self.anchor + self.direction.scaled(t)
    }

    /// Parameter of the foot of the perpendicular from `p`.
    #[must_use]
    pub fn parameter(&self, p: &Vector3D) -> f64 {
        (*p - self.anchor)
            .projection_factor(&self.direction)
            .unwrap_or_default()
    }

    /// Foot of the perpendicular from `p`.
    #[must_use]
    pub fn projection(&self, p: &Vector3D) -> Vector3D {
        self.at(self.parameter(p))
    }

    /// `true` if `p` lies on the line.
    #[must_use]
    pub fn contains(&self, p: &Vector3D) -> bool {
        (*p - self.anchor).collinear(&self.direction)
    }

    /// Perpendicular distance from `p` to the line.
    #[must_use]
    pub fn distance(&self, p: &Vector3D) -> f64 {
        p.distance(&self.projection(p))
    }

    /// `true` if the directions are collinear.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.direction.collinear(&other.direction)
    }

    /// `true` if the directions are orthogonal.
    #[must_use]
    pub fn is_orthogonal(&self, other: &Self) -> bool {
        self.direction.orthogonal(&other.direction)
    }

    /// `true` if both lines describe the same point set.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_parallel(other) && self.contains(&other.anchor)
    }

    /// Parameter on `self` of the crossing point with `other`.
    ///
    /// Returns `None` for parallel lines and for skew lines.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Coincident`] if the lines are equal.
    pub fn intersection_parameter(&self, other: &Self) -> Result<Option<f64>> {
        if self.is_equal(other) {
            return Err(GeometryError::Coincident("lines").into());
        }
        if self.is_parallel(other) {
            return Ok(None);
        }
        let system = Vector3D::stack_columns(&[
            self.direction,
            -other.direction,
            other.anchor - self.anchor,
        ])?
        .reduced_row_echelon_form();
        // A pivot in the augmented column means the system is inconsistent.
        if system.entry(2, 2)? == 1.0 {
            return Ok(None);
        }
        Ok(Some(system.entry(0, 2)?))
    }

    /// Crossing point of two lines, `None` if they are parallel or skew.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Coincident`] if the lines are equal.
    pub fn intersection(&self, other: &Self) -> Result<Option<Vector3D>> {
        Ok(self
            .intersection_parameter(other)?
            .map(|t| self.at(t)))
    }
}
