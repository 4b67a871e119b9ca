use crate::error::{GeometryError, Result};

mod polygon_2d;
mod polygon_3d;
mod triangle_2d;
mod triangle_3d;

pub use polygon_2d::Polygon2D;
pub use polygon_3d::Polygon3D;
pub use triangle_2d::Triangle2D;
pub use triangle_3d::Triangle3D;

/// Winding of a vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Degenerate,
    CounterClockwise,
}

impl Orientation {
    /// Classifies a signed area (or any quantity with its sign).
    #[must_use]
    pub fn of(signed_area: f64) -> Self {
        if signed_area > 0.0 {
            Self::CounterClockwise
        } else if signed_area < 0.0 {
            Self::Clockwise
        } else {
            Self::Degenerate
        }
    }

    /// `1` for counter-clockwise, `-1` for clockwise, `0` for degenerate.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Clockwise => -1,
            Self::Degenerate => 0,
            Self::CounterClockwise => 1,
        }
    }
}

/// Normalizes a closed vertex ring.
///
/// Consecutive duplicates (including a closing vertex equal to the first)
/// are removed, then vertices collinear with their two neighbours are removed
/// until none is left.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewVertices`] if fewer than three vertices
/// remain.
pub(crate) fn normalize_ring<P, F>(mut points: Vec<P>, collinear: F) -> Result<Vec<P>>
where
    P: Copy + PartialEq,
    F: Fn(&P, &P, &P) -> bool,
{
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    while points.len() >= 3 {
        let n = points.len();
        let redundant = (0..n).find(|&i| {
            collinear(&points[(i + n - 1) % n], &points[i], &points[(i + 1) % n])
        });
        match redundant {
            Some(i) => {
                points.remove(i);
            }
            None => break,
        }
    }

    if points.len() < 3 {
        return Err(GeometryError::TooFewVertices {
            count: points.len(),
        }
        .into());
    }
    Ok(points)
}

/// `true` if both rings hold the same vertices up to rotation and reflection.
pub(crate) fn same_ring<P: PartialEq>(p: &[P], q: &[P]) -> bool {
    let n = p.len();
    if n != q.len() {
        return false;
    }
    (0..n).any(|offset| {
        (0..n).all(|k| p[k] == q[(offset + k) % n])
            || (0..n).all(|k| p[k] == q[(offset + n - k) % n])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = (i32, i32);

    fn collinear(a: &P, b: &P, c: &P) -> bool {
        (b.0 - a.0) * (c.1 - b.1) - (b.1 - a.1) * (c.0 - b.0) == 0
    }

    #[test]
    fn orientation_of_signed_area() {
        assert_eq!(Orientation::of(2.0), Orientation::CounterClockwise);
        assert_eq!(Orientation::of(-0.5).sign(), -1);
        assert_eq!(Orientation::of(0.0).sign(), 0);
    }

    #[test]
    fn ring_drops_duplicates_and_closing_vertex() {
        let ring = normalize_ring(vec![1, 1, 5, 3, 3, 1], |_, _, _| false).unwrap();
        assert_eq!(ring, vec![1, 5, 3]);
    }

    #[test]
    fn ring_drops_collinear_vertices() {
        let ring = normalize_ring(
            vec![(0, 0), (1, 0), (2, 0), (2, 2), (0, 2), (0, 1)],
            collinear,
        )
        .unwrap();
        assert_eq!(ring, vec![(0, 0), (2, 0), (2, 2), (0, 2)]);
        assert!(normalize_ring(vec![(0, 0), (1, 1), (2, 2)], collinear).is_err());
        assert!(normalize_ring(vec![4, 4, 4], |_, _, _| false).is_err());
    }

    #[test]
    fn rings_compare_up_to_rotation_and_reflection() {
        assert!(same_ring(&[1, 2, 3, 4], &[3, 4, 1, 2]));
        assert!(same_ring(&[1, 2, 3, 4], &[2, 1, 4, 3]));
        assert!(!same_ring(&[1, 2, 3, 4], &[1, 3, 2, 4]));
        assert!(!same_ring(&[1, 2, 3], &[1, 2, 3, 4]));
    }
}
