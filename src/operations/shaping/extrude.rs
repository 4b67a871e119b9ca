use crate::error::{GeometryError, Result};
use crate::geometry::color::Color;
use crate::geometry::polygon::Polygon3D;
use crate::math::Vector3D;

/// Extrudes a planar polygon along a vector into the faces of a prism.
///
/// Side and cap colors default to the base polygon's color.
#[derive(Debug, Clone)]
pub struct Extrude {
    base: Polygon3D,
    direction: Vector3D,
    side_color: Option<Color>,
    cap_color: Option<Color>,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(base: Polygon3D, direction: Vector3D) -> Self {
        Self {
            base,
            direction,
            side_color: None,
            cap_color: None,
        }
    }

    /// Color of the quads joining base and cap.
    #[must_use]
    pub fn with_side_color(mut self, color: Color) -> Self {
        self.side_color = Some(color);
        self
    }

    /// Color of the translated copy of the base.
    #[must_use]
    pub fn with_cap_color(mut self, color: Color) -> Self {
        self.cap_color = Some(color);
        self
    }

    /// Executes the extrusion.
    ///
    /// Returns the bottom face, the top face, then one quad per base edge.
    /// Faces are wound so that their normals point out of the prism.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero direction and
    /// [`GeometryError::Degenerate`] for a direction lying in the base plane.
    pub fn execute(&self) -> Result<Vec<Polygon3D>> {
        if self.direction == Vector3D::ZERO {
            return Err(GeometryError::ZeroVector.into());
        }
        let alignment = self.base.normal().dot(&self.direction);
        if alignment == 0.0 {
            return Err(GeometryError::Degenerate(
                "extrusion direction lies in the base plane".into(),
            )
            .into());
        }

        // Base winding follows the direction, so the bottom face is reversed.
        let base_points: Vec<Vector3D> = if alignment > 0.0 {
            self.base.points().to_vec()
        } else {
            self.base.points().iter().rev().copied().collect()
        };
        let top_points: Vec<Vector3D> = base_points.iter().map(|p| *p + self.direction).collect();

        let base_color = self.base.color();
        let cap_color = self.cap_color.unwrap_or(base_color);
        let side_color = self.side_color.unwrap_or(base_color);

        let n = base_points.len();
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(Polygon3D::new(
            base_points.iter().rev().copied().collect(),
            base_color,
        )?);
        faces.push(Polygon3D::new(top_points.clone(), cap_color)?);

        for i in 0..n {
            let j = (i + 1) % n;
            let quad = vec![base_points[i], base_points[j], top_points[j], top_points[i]];
            faces.push(Polygon3D::new(quad, side_color)?);
        }

        Ok(faces)
    }
}
