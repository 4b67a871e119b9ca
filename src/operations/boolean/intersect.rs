use crate::geometry::polygon::{Polygon2D, Triangle2D};

use super::split::split_by_lines;

/// Triangulated overlap of two triangles.
///
/// `b` is split by the three edge lines of `a`; the pieces whose centroid
/// lies inside `a` make up the overlap. Disjoint triangles give an empty
/// result.
#[must_use]
pub fn intersect_triangles(a: &Triangle2D, b: &Triangle2D) -> Vec<Triangle2D> {
    split_by_lines(vec![*b], &a.edge_lines())
        .into_iter()
        .filter(|piece| a.contains(&piece.center()))
        .collect()
}

/// Overlap of every triangle of `a` with every triangle of `b`.
#[must_use]
pub fn intersect_triangle_sets(a: &[Triangle2D], b: &[Triangle2D]) -> Vec<Triangle2D> {
    a.iter()
        .flat_map(|ta| b.iter().flat_map(move |tb| intersect_triangles(ta, tb)))
        .collect()
}

/// Overlap of two polygons as a set of triangles.
#[must_use]
pub fn intersect_polygons(a: &Polygon2D, b: &Polygon2D) -> Vec<Triangle2D> {
    intersect_triangle_sets(a.triangles(), b.triangles())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector2D;

    fn v(x: f64, y: f64) -> Vector2D {
        Vector2D::new(x, y).unwrap()
    }

    fn total_area(pieces: &[Triangle2D]) -> f64 {
        pieces.iter().map(Triangle2D::area).sum()
    }

    #[test]
    fn shifted_right_triangles_overlap_in_a_triangle() {
        let a = Triangle2D::new(v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)).unwrap();
        let b = Triangle2D::new(v(0.5, 0.0), v(4.5, 0.0), v(0.5, 4.0)).unwrap();
        let overlap = intersect_triangles(&a, &b);
        assert!(!overlap.is_empty());
        assert_relative_eq!(total_area(&overlap), 6.125, epsilon = 1e-6);
    }

    #[test]
    fn nested_triangle_is_its_own_overlap() {
        let outer = Triangle2D::new(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)).unwrap();
        let inner = Triangle2D::new(v(1.0, 1.0), v(3.0, 1.0), v(1.0, 3.0)).unwrap();
        assert_eq!(intersect_triangles(&outer, &inner), vec![inner]);
        assert_relative_eq!(
            total_area(&intersect_triangles(&inner, &outer)),
            inner.area(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn disjoint_triangles_do_not_overlap() {
        let a = Triangle2D::new(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)).unwrap();
        let b = Triangle2D::new(v(5.0, 5.0), v(6.0, 5.0), v(5.0, 6.0)).unwrap();
        assert!(intersect_triangles(&a, &b).is_empty());
        assert!(intersect_triangle_sets(&[a], &[]).is_empty());
    }

    #[test]
    fn overlapping_squares() {
        let a = Polygon2D::new(vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)]).unwrap();
        let b = Polygon2D::new(vec![v(1.0, 1.0), v(3.0, 1.0), v(3.0, 3.0), v(1.0, 3.0)]).unwrap();
        assert_relative_eq!(
            total_area(&intersect_polygons(&a, &b)),
            1.0,
            epsilon = 1e-6
        );
    }
}
