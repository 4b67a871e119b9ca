use crate::geometry::polygon::Polygon3D;
use crate::math::Vector3D;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Vector3D,
    /// Maximum corner of the bounding box.
    pub max: Vector3D,
}

impl Aabb {
    /// Smallest box holding every point, `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vector3D]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = Self {
            min: *first,
            max: *first,
        };
        Some(rest.iter().fold(seed, |bounds, p| bounds.including(p)))
    }

    /// Smallest box holding every vertex of every polygon.
    #[must_use]
    pub fn of_polygons(polygons: &[Polygon3D]) -> Option<Self> {
        polygons
            .iter()
            .filter_map(|polygon| Self::from_points(polygon.points()))
            .reduce(|a, b| a.union(&b))
    }

    /// Smallest box holding `self` and `p`.
    #[must_use]
    pub fn including(&self, p: &Vector3D) -> Self {
        Self {
            min: Vector3D::rounded(
                self.min.x().min(p.x()),
                self.min.y().min(p.y()),
                self.min.z().min(p.z()),
            ),
            max: Vector3D::rounded(
                self.max.x().max(p.x()),
                self.max.y().max(p.y()),
                self.max.z().max(p.z()),
            ),
        }
    }

    /// Smallest box holding both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.including(&other.min).including(&other.max)
    }

    /// Returns the midpoint of `min` and `max`.
    #[must_use]
    pub fn center(&self) -> Vector3D {
        (self.min + self.max).scaled(0.5)
    }

    /// Edge lengths along x, y and z.
    #[must_use]
    pub fn size(&self) -> Vector3D {
        self.max - self.min
    }

    /// `true` if `p` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, p: &Vector3D) -> bool {
        (self.min.x()..=self.max.x()).contains(&p.x())
            && (self.min.y()..=self.max.y()).contains(&p.y())
            && (self.min.z()..=self.max.z()).contains(&p.z())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::color::Color;

    fn p(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D::new(x, y, z).unwrap()
    }

    #[test]
    fn bounds_of_points() {
        assert!(Aabb::from_points(&[]).is_none());
        let bounds =
            Aabb::from_points(&[p(1.0, -2.0, 3.0), p(-1.0, 4.0, 0.0), p(0.0, 0.0, 5.0)]).unwrap();
        assert_eq!(bounds.min, p(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, p(1.0, 4.0, 5.0));
        assert_eq!(bounds.center(), p(0.0, 1.0, 2.5));
        assert_eq!(bounds.size(), p(2.0, 6.0, 5.0));
        assert!(bounds.contains(&p(0.0, 0.0, 0.0)));
        assert!(!bounds.contains(&p(0.0, 0.0, 6.0)));
    }

    #[test]
    fn bounds_of_polygons() {
        let color = Color::default();
        let a = Polygon3D::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)], color)
            .unwrap();
        let b = Polygon3D::new(vec![p(5.0, 5.0, 5.0), p(6.0, 5.0, 5.0), p(5.0, 6.0, 5.0)], color)
            .unwrap();
        let bounds = Aabb::of_polygons(&[a, b]).unwrap();
        assert_eq!(bounds.min, p(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, p(6.0, 6.0, 5.0));
        assert!(Aabb::of_polygons(&[]).is_none());
    }
}
