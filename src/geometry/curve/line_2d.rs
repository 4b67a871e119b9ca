use crate::error::{GeometryError, Result};
use crate::math::{Matrix, MatrixVector, Vector2D};

/// An infinite line in the plane.
///
/// The parametric form is: `P(t) = anchor + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    anchor: Vector2D,
    direction: Vector2D,
}

impl Line2D {
    /// Creates a line from an anchor point and a direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the direction has zero length.
    pub fn new(anchor: Vector2D, direction: Vector2D) -> Result<Self> {
        if direction == Vector2D::ZERO {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { anchor, direction })
    }

    /// Creates the line through `p` (at `t = 0`) and `q` (at `t = 1`).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the points coincide.
    pub fn through(p: Vector2D, q: Vector2D) -> Result<Self> {
        Self::new(p, q - p)
    }

    /// Line through two points already known to be distinct.
    pub(crate) fn between(p: Vector2D, q: Vector2D) -> Self {
        Self {
            anchor: p,
            direction: q - p,
        }
    }

    /// Returns the point at `t = 0`.
    #[must_use]
    pub fn anchor(&self) -> Vector2D {
        self.anchor
    }

    /// Returns the direction vector, the step from `t = 0` to `t = 1`.
    #[must_use]
    pub fn direction(&self) -> Vector2D {
        self.direction
    }

    /// Returns the point at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotANumber`] if `t` is NaN.
    pub fn point_at(&self, t: f64) -> Result<Vector2D> {
        Ok(self.anchor + self.direction.scale(t)?)
    }

    /// Point at a parameter computed from valid geometry.
    pub(crate) fn at(&self, t: f64) -> Vector2D {
        self.anchor + self.direction.scaled(t)
    }

    /// Parameter of the foot of the perpendicular from `p`.
    ///
    /// For a point on the line this is the `t` with `point_at(t) == p`.
    #[must_use]
    pub fn parameter(&self, p: &Vector2D) -> f64 {
        (*p - self.anchor)
            .projection_factor(&self.direction)
            .unwrap_or_default()
    }

    /// `true` if `p` lies on the line.
    #[must_use]
    pub fn contains(&self, p: &Vector2D) -> bool {
        (*p - self.anchor).collinear(&self.direction)
    }

    /// Perpendicular distance from `p` to the line.
    #[must_use]
    pub fn distance(&self, p: &Vector2D) -> f64 {
        p.distance(&self.at(self.parameter(p)))
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
    /// # Errors
    ///
    /// Returns [`GeometryError::Parallel`] if the lines are parallel.
    pub fn intersection_parameter(&self, other: &Self) -> Result<f64> {
        if self.is_parallel(other) {
            return Err(GeometryError::Parallel("lines").into());
        }
        let system = Vector2D::stack_columns(&[self.direction, -other.direction])?;
        let inverse = system
            .inverse()
            .ok_or(GeometryError::Parallel("lines"))?;
        let offset = (other.anchor - self.anchor).column_matrix();
        Matrix::multiply(&inverse, &offset)?.entry(0, 0)
    }

    /// Crossing point of two lines.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parallel`] if the lines are parallel,
    /// including when they coincide.
    pub fn intersection(&self, other: &Self) -> Result<Vector2D> {
        Ok(self.at(self.intersection_parameter(other)?))
    }
}
