pub mod matrix;
pub mod vector_2d;
pub mod vector_3d;

pub use matrix::{Matrix, MatrixVector};
pub use vector_2d::Vector2D;
pub use vector_3d::Vector3D;

/// Number of decimal digits every stored scalar is rounded to.
pub const PRECISION: i32 = 9;

/// Number of decimal digits used for barycentric containment tests.
///
/// Coefficients obtained through a matrix inverse carry more residual error
/// than plain coordinates, so they are compared at a coarser precision.
pub const CONTAINMENT_PRECISION: i32 = 6;

/// Magnitude above which an `f64` no longer carries fractional digits.
const MAX_EXACT: f64 = 4_503_599_627_370_496.0;

/// Rounds `value` to [`PRECISION`] decimal digits.
#[must_use]
pub fn round(value: f64) -> f64 {
    round_to(value, PRECISION)
}

/// Rounds `value` to `digits` decimal digits.
///
/// Non-finite values, and values too large to hold any digit at that
/// precision, are returned unchanged.
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10.0_f64.powi(digits);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT {
        return value;
    }
    scaled.round() / factor
}
