use tracing::trace;

use crate::geometry::curve::Line2D;
use crate::geometry::polygon::Triangle2D;
use crate::math::Vector2D;

/// Splits a triangle along a line.
///
/// A line through one vertex cuts the triangle into two pieces at the
/// opposite edge; a line crossing two edges cuts it into three. A line that
/// misses the triangle, only touches it, or runs along one of its edges
/// leaves it unchanged. Pieces that collapse to zero area are dropped.
#[must_use]
pub fn split_triangle(triangle: &Triangle2D, line: &Line2D) -> Vec<Triangle2D> {
    let [a, b, c] = triangle.vertices();
    let ab = Line2D::between(a, b);
    let ac = Line2D::between(a, c);
    let bc = Line2D::between(b, c);

    if [&ab, &ac, &bc].into_iter().any(|edge| edge.is_equal(line)) {
        return vec![*triangle];
    }

    let on_edge = |edge: &Line2D| -> Option<Vector2D> {
        let t = edge.intersection_parameter(line).ok()?;
        (0.0..=1.0).contains(&t).then(|| edge.at(t))
    };

    let pieces: Vec<[Vector2D; 3]> = if line.contains(&a) {
        on_edge(&bc).map_or_else(Vec::new, |p| vec![[a, b, p], [a, p, c]])
    } else if line.contains(&b) {
        on_edge(&ac).map_or_else(Vec::new, |p| vec![[a, b, p], [b, c, p]])
    } else if line.contains(&c) {
        on_edge(&ab).map_or_else(Vec::new, |p| vec![[a, p, c], [b, c, p]])
    } else {
        match (on_edge(&ab), on_edge(&ac), on_edge(&bc)) {
            (Some(p1), Some(p2), _) => vec![[a, p1, p2], [p1, b, c], [p1, c, p2]],
            (Some(p1), None, Some(p3)) => vec![[b, p3, p1], [a, p1, p3], [a, p3, c]],
            (None, Some(p2), Some(p3)) => vec![[c, p2, p3], [a, p3, p2], [a, b, p3]],
            _ => Vec::new(),
        }
    };

    let result: Vec<Triangle2D> = pieces
        .into_iter()
        .filter_map(|[p, q, r]| Triangle2D::new(p, q, r).ok())
        .collect();
    trace!(pieces = result.len(), "split triangle by line");

    if result.is_empty() {
        vec![*triangle]
    } else {
        result
    }
}

/// Splits every triangle by every line in turn.
#[must_use]
pub fn split_by_lines(triangles: Vec<Triangle2D>, lines: &[Line2D]) -> Vec<Triangle2D> {
    lines.iter().fold(triangles, |pieces, line| {
        pieces
            .iter()
            .flat_map(|piece| split_triangle(piece, line))
            .collect()
    })
}
