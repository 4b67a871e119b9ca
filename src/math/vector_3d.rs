use std::ops::{Add, Neg, Sub};

use nalgebra::Vector3;

use super::matrix::{Matrix, MatrixVector};
use super::round;
use crate::error::{GeometryError, MatrixError, Result};

/// An immutable 3D vector (or point) with rounded coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ORIGIN: Self = Self::ZERO;
    pub const I: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const J: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const K: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a vector, rounding every coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotANumber`] if any coordinate is NaN.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        if x.is_nan() || y.is_nan() || z.is_nan() {
            return Err(GeometryError::NotANumber.into());
        }
        Ok(Self::rounded(x, y, z))
    }

    pub(crate) fn rounded(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: round(x),
            y: round(y),
            z: round(z),
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(&self) -> f64 {
        round(Vector3::from(*self).norm())
    }

    /// Unit vector in the same direction, `None` for the zero vector.
    #[must_use]
    pub fn unit(&self) -> Option<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return None;
        }
        Some(Self::rounded(self.x / norm, self.y / norm, self.z / norm))
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        round(Vector3::from(*self).dot(&Vector3::from(*other)))
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Vector3::from(*self).cross(&Vector3::from(*other)).into()
    }

    /// Angle between the two vectors in degrees, `None` if either is zero.
    #[must_use]
    pub fn angle(&self, other: &Self) -> Option<f64> {
        if self.norm() == 0.0 || other.norm() == 0.0 {
            return None;
        }
        let radians = Vector3::from(*self).angle(&Vector3::from(*other));
        Some(round(radians.to_degrees()))
    }

    /// Scalar `t` such that `t * onto` is the projection of `self` onto `onto`.
    #[must_use]
    pub fn projection_factor(&self, onto: &Self) -> Option<f64> {
        let onto = Vector3::from(*onto);
        let norm_squared = onto.norm_squared();
        if norm_squared == 0.0 {
            return None;
        }
        Some(round(Vector3::from(*self).dot(&onto) / norm_squared))
    }

    /// Projection of `self` onto `onto`, `None` if `onto` is zero.
    #[must_use]
    pub fn projection(&self, onto: &Self) -> Option<Self> {
        self.projection_factor(onto).map(|t| onto.scaled(t))
    }

    /// `true` if the cross product vanishes, so either vector may be zero
    /// and opposite directions count as collinear.
    #[must_use]
    pub fn collinear(&self, other: &Self) -> bool {
        self.cross(other) == Self::ZERO
    }

    /// `true` if the dot product vanishes.
    #[must_use]
    pub fn orthogonal(&self, other: &Self) -> bool {
        self.dot(other) == 0.0
    }

    /// Distance between the two points.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).norm()
    }

    /// Sum of all vectors, the zero vector for an empty slice.
    #[must_use]
    pub fn sum(vectors: &[Self]) -> Self {
        vectors.iter().fold(Self::ZERO, |acc, v| acc + *v)
    }

    /// Component-wise mean, `None` for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(vectors: &[Self]) -> Option<Self> {
        if vectors.is_empty() {
            return None;
        }
        let n = vectors.len() as f64;
        let (x, y, z) = vectors.iter().fold((0.0, 0.0, 0.0), |(x, y, z), v| {
            (x + v.x, y + v.y, z + v.z)
        });
        Some(Self::rounded(x / n, y / n, z / n))
    }

    /// Multiplies every coordinate by `k`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotANumber`] if `k` is NaN.
    pub fn scale(&self, k: f64) -> Result<Self> {
        if k.is_nan() {
            return Err(GeometryError::NotANumber.into());
        }
        Ok(self.scaled(k))
    }

    /// Scales by a factor derived from already valid values.
    pub(crate) fn scaled(&self, k: f64) -> Self {
        Self::rounded(self.x * k, self.y * k, self.z * k)
    }

    /// Applies a `3 x 3` matrix to this vector as a column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `matrix` is `3 x 3`.
    pub fn transform(&self, matrix: &Matrix) -> Result<Self> {
        Self::from_column_matrix(&Matrix::multiply(matrix, &self.column_matrix())?)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::rounded(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::rounded(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl From<Vector3D> for Vector3<f64> {
    fn from(v: Vector3D) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f64>> for Vector3D {
    fn from(v: Vector3<f64>) -> Self {
        Self::rounded(v.x, v.y, v.z)
    }
}

impl MatrixVector for Vector3D {
    const DIM: usize = 3;

    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    fn from_components(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y, z] => Self::new(x, y, z),
            _ => Err(MatrixError::DimensionMismatch {
                op: "vector_3d",
                left: (components.len(), 1),
                right: (Self::DIM, 1),
            }
            .into()),
        }
    }
}
