use tracing::trace;

use crate::geometry::curve::Line3D;
use crate::geometry::polygon::Triangle3D;
use crate::geometry::surface::Plane3D;
use crate::math::Vector3D;

/// Cuts a triangle along a line lying in its plane.
///
/// A line through one vertex yields two pieces, a line crossing the interior
/// of two edges yields three. Every piece keeps the triangle's color. A line
/// outside the triangle's plane, along one of its edges, or missing it
/// leaves the triangle unchanged.
#[must_use]
pub fn cut_by_line(triangle: &Triangle3D, line: &Line3D) -> Vec<Triangle3D> {
    if !triangle.plane().contains_line(line) {
        return vec![*triangle];
    }

    let [a, b, c] = triangle.vertices();
    let ab = Line3D::between(a, b);
    let ac = Line3D::between(a, c);
    let bc = Line3D::between(b, c);

    if [&ab, &ac, &bc].into_iter().any(|edge| edge.is_equal(line)) {
        return vec![*triangle];
    }

    let crossing = |edge: &Line3D, inclusive: bool| -> Option<Vector3D> {
        let t = edge.intersection_parameter(line).ok()??;
        let inside = if inclusive {
            (0.0..=1.0).contains(&t)
        } else {
            t > 0.0 && t < 1.0
        };
        inside.then(|| edge.at(t))
    };

    let pieces: Vec<[Vector3D; 3]> = if line.contains(&a) {
        crossing(&bc, true).map_or_else(Vec::new, |px| vec![[a, b, px], [a, px, c]])
    } else if line.contains(&b) {
        crossing(&ac, true).map_or_else(Vec::new, |px| vec![[a, b, px], [b, px, c]])
    } else if line.contains(&c) {
        crossing(&ab, true).map_or_else(Vec::new, |px| vec![[a, px, c], [b, px, c]])
    } else {
        match (
            crossing(&ab, false),
            crossing(&ac, false),
            crossing(&bc, false),
        ) {
            (Some(p1), Some(p2), _) => vec![[a, p1, p2], [p1, p2, b], [p2, b, c]],
            (Some(p1), None, Some(p3)) => vec![[b, p1, p3], [p1, p3, a], [p3, a, c]],
            (None, Some(p2), Some(p3)) => vec![[c, p2, p3], [p2, p3, a], [p3, a, b]],
            _ => Vec::new(),
        }
    };

    let color = triangle.color();
    let result: Vec<Triangle3D> = pieces
        .into_iter()
        .filter_map(|[p, q, r]| Triangle3D::new(p, q, r, color).ok())
        .collect();
    trace!(pieces = result.len(), "cut triangle by line");

    if result.is_empty() {
        vec![*triangle]
    } else {
        result
    }
}

/// Cuts a triangle where `plane` crosses it.
///
/// A plane parallel to (or equal to) the triangle's plane leaves it unchanged.
#[must_use]
pub fn cut_by_plane(triangle: &Triangle3D, plane: &Plane3D) -> Vec<Triangle3D> {
    match triangle.plane().plane_intersection(plane) {
        Ok(Some(line)) => cut_by_line(triangle, &line),
        Ok(None) | Err(_) => vec![*triangle],
    }
}

/// Cuts two triangles along the line where their planes meet.
///
/// Pieces of `a` come first, then pieces of `b`. Triangles in parallel or
/// equal planes are returned unchanged.
#[must_use]
pub fn cut_triangles(a: &Triangle3D, b: &Triangle3D) -> Vec<Triangle3D> {
    match a.plane().plane_intersection(&b.plane()) {
        Ok(Some(line)) => {
            let mut pieces = cut_by_line(a, &line);
            pieces.extend(cut_by_line(b, &line));
            pieces
        }
        Ok(None) | Err(_) => vec![*a, *b],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::color::Color;

    fn p(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D::new(x, y, z).unwrap()
    }

    fn floor() -> Triangle3D {
        Triangle3D::new(
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(0.0, 4.0, 0.0),
            Color::new(200, 0, 0),
        )
        .unwrap()
    }

    fn total_area(pieces: &[Triangle3D]) -> f64 {
        pieces.iter().map(Triangle3D::area).sum()
    }

    #[test]
    fn line_outside_the_plane_is_ignored() {
        let t = floor();
        let line = Line3D::new(p(1.0, 1.0, 1.0), Vector3D::I).unwrap();
        assert_eq!(cut_by_line(&t, &line), vec![t]);
    }

    #[test]
    fn line_through_vertex() {
        let t = floor();
        let line = Line3D::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0)).unwrap();
        let pieces = cut_by_line(&t, &line);
        assert_eq!(pieces.len(), 2);
        assert_relative_eq!(total_area(&pieces), 8.0, epsilon = 1e-9);
        assert!(pieces.iter().all(|piece| piece.color() == t.color()));
    }

    #[test]
    fn line_across_two_edges() {
        let t = floor();
        let line = Line3D::new(p(1.0, 0.0, 0.0), Vector3D::J).unwrap();
        let pieces = cut_by_line(&t, &line);
        assert_eq!(pieces.len(), 3);
        assert_relative_eq!(total_area(&pieces), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn vertical_plane_cuts_floor() {
        let t = floor();
        let wall = Plane3D::new(p(0.0, 1.0, 0.0), Vector3D::J).unwrap();
        let pieces = cut_by_plane(&t, &wall);
        assert_eq!(pieces.len(), 3);
        assert_relative_eq!(total_area(&pieces), 8.0, epsilon = 1e-9);

        let ceiling = Plane3D::new(p(0.0, 0.0, 2.0), Vector3D::K).unwrap();
        assert_eq!(cut_by_plane(&t, &ceiling), vec![t]);
    }

    #[test]
    fn crossing_triangles_cut_each_other() {
        let a = floor();
        let b = Triangle3D::new(
            p(1.0, -1.0, -1.0),
            p(1.0, 3.0, -1.0),
            p(1.0, -1.0, 3.0),
            Color::new(0, 0, 200),
        )
        .unwrap();
        let pieces = cut_triangles(&a, &b);
        let (from_a, from_b): (Vec<&Triangle3D>, Vec<&Triangle3D>) =
            pieces.iter().partition(|piece| piece.color() == a.color());
        assert_eq!(from_a.len(), 3);
        assert_eq!(from_b.len(), 3);

        let parallel = Triangle3D::new(
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(0.0, 1.0, 1.0),
            Color::default(),
        )
        .unwrap();
        assert_eq!(cut_triangles(&a, &parallel), vec![a, parallel]);
    }
}
