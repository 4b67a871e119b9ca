use tracing::warn;

use crate::geometry::polygon::Orientation;

/// The plane a polygon is triangulated in.
///
/// Ear clipping only needs to know the winding of a vertex triple, how to
/// build a triangle from it, and whether a triangle covers a point.
pub trait EarSpace {
    type Point: Copy;
    type Triangle;

    /// Winding of `a -> b -> c`.
    fn orientation(&self, a: &Self::Point, b: &Self::Point, c: &Self::Point) -> Orientation;

    /// Triangle `a, b, c`, `None` if it would be degenerate.
    fn triangle(&self, a: Self::Point, b: Self::Point, c: Self::Point) -> Option<Self::Triangle>;

    /// `true` if `p` lies inside `triangle` or on its boundary.
    fn covers(&self, triangle: &Self::Triangle, p: &Self::Point) -> bool;
}

/// Triangulates a simple polygon by repeatedly cutting off ears.
///
/// A vertex triple is an ear when it turns with `winding` and no other
/// remaining vertex lies in its triangle. The middle vertex of the first ear
/// found is removed and the scan restarts. If no clean ear exists (which only
/// happens for self-touching input), the first triple turning with `winding`
/// is cut instead.
pub fn clip_ears<S: EarSpace>(
    space: &S,
    points: &[S::Point],
    winding: Orientation,
) -> Vec<S::Triangle> {
    let mut remaining = points.to_vec();
    let mut triangles = Vec::with_capacity(points.len().saturating_sub(2));

    while remaining.len() > 3 {
        let n = remaining.len();
        let corner = |i: usize| (remaining[i], remaining[(i + 1) % n], remaining[(i + 2) % n]);
        let convex = |i: usize| {
            let (a, b, c) = corner(i);
            if space.orientation(&a, &b, &c) == winding {
                space.triangle(a, b, c)
            } else {
                None
            }
        };

        let ear = (0..n).find_map(|i| {
            let triangle = convex(i)?;
            let blocked = (3..n)
                .map(|k| &remaining[(i + k) % n])
                .any(|p| space.covers(&triangle, p));
            (!blocked).then_some((i, triangle))
        });

        let Some((i, triangle)) = ear.or_else(|| {
            warn!(remaining = n, "no clean ear left, cutting the first convex corner");
            (0..n).find_map(|i| convex(i).map(|t| (i, t)))
        }) else {
            warn!(remaining = n, "no convex corner left, stopping triangulation");
            break;
        };

        triangles.push(triangle);
        remaining.remove((i + 1) % n);
    }

    if let [a, b, c] = remaining[..] {
        if let Some(last) = space.triangle(a, b, c) {
            triangles.push(last);
        }
    }
    triangles
}
