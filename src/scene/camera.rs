use crate::error::{GeometryError, Result};
use crate::geometry::curve::Line3D;
use crate::geometry::surface::Plane3D;
use crate::math::{Matrix, Vector2D, Vector3D};

/// A pinhole camera.
///
/// The view plane passes through `center` and is spanned by the horizontal
/// and vertical axes. The eye sits `eye_distance` in front of the plane along
/// the unit normal `h_axis x v_axis`. Projected coordinates are measured
/// along the unit axes and scaled by `zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    center: Vector3D,
    h_axis: Vector3D,
    v_axis: Vector3D,
    eye_distance: f64,
    zoom: f64,
}

impl Camera {
    /// Creates a camera.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotANumber`] if `eye_distance` or `zoom` is
    /// NaN, and [`GeometryError::Degenerate`] if the axes are zero or
    /// collinear.
    pub fn new(
        center: Vector3D,
        h_axis: Vector3D,
        v_axis: Vector3D,
        eye_distance: f64,
        zoom: f64,
    ) -> Result<Self> {
        if eye_distance.is_nan() || zoom.is_nan() {
            return Err(GeometryError::NotANumber.into());
        }
        if h_axis.collinear(&v_axis) {
            return Err(GeometryError::Degenerate("camera axes are collinear".into()).into());
        }
        Ok(Self {
            center,
            h_axis,
            v_axis,
            eye_distance,
            zoom,
        })
    }

    /// Returns the center of the view plane.
    #[must_use]
    pub fn center(&self) -> Vector3D {
        self.center
    }

    /// Returns the horizontal axis of the view plane.
    #[must_use]
    pub fn h_axis(&self) -> Vector3D {
        self.h_axis
    }

    /// Returns the vertical axis of the view plane.
    #[must_use]
    pub fn v_axis(&self) -> Vector3D {
        self.v_axis
    }

    /// Returns the distance from the view plane to the eye.
    #[must_use]
    pub fn eye_distance(&self) -> f64 {
        self.eye_distance
    }

    /// Returns the scale applied to projected coordinates.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// `h_axis x v_axis`.
    #[must_use]
    pub fn normal(&self) -> Vector3D {
        self.h_axis.cross(&self.v_axis)
    }

    /// Returns the eye position, `center + eye_distance * unit(normal)`.
    #[must_use]
    pub fn eye(&self) -> Vector3D {
        let direction = self.normal().unit().unwrap_or(Vector3D::ZERO);
        self.center + direction.scaled(self.eye_distance)
    }

    /// The view plane.
    #[must_use]
    pub fn plane(&self) -> Plane3D {
        Plane3D::from_parts(self.center, self.normal())
    }

    /// Projects `point` onto the view plane through the eye.
    ///
    /// Returns `None` when the ray from the eye runs parallel to the view
    /// plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `point` is the eye itself.
    pub fn project(&self, point: &Vector3D) -> Result<Option<Vector2D>> {
        let ray = Line3D::through(self.eye(), *point)?;
        let Some(hit) = self.plane().line_intersection(&ray)? else {
            return Ok(None);
        };
        let offset = hit - self.center;
        let along = |axis: &Vector3D| {
            axis.unit()
                .and_then(|unit| offset.projection_factor(&unit))
                .unwrap_or_default()
        };
        let x = along(&self.h_axis);
        let y = along(&self.v_axis);
        Ok(Some(Vector2D::new(x * self.zoom, y * self.zoom)?))
    }

    /// The same camera moved by `offset`.
    #[must_use]
    pub fn offset(&self, offset: Vector3D) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }

    /// The camera rotated by `degrees` about the vertical line through
    /// `pivot`.
    ///
    /// Center and both axes turn together; eye distance and zoom are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is NaN.
    pub fn rotate_about_point(&self, pivot: Vector3D, degrees: f64) -> Result<Self> {
        let rotation = Matrix::rotation_3d_z(degrees)?;
        let arm = (self.center - pivot).transform(&rotation)?;
        Ok(Self {
            center: pivot + arm,
            h_axis: self.h_axis.transform(&rotation)?,
            v_axis: self.v_axis.transform(&rotation)?,
            ..*self
        })
    }
}
