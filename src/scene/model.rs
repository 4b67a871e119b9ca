use tracing::debug;

use crate::error::{ModelError, Result};
use crate::geometry::color::Color;
use crate::geometry::curve::Line3D;
use crate::geometry::polygon::{Polygon3D, Triangle3D};
use crate::math::{Vector2D, Vector3D};
use crate::operations::query::Aabb;

use super::camera::Camera;

/// A triangle projected onto a camera's view plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub a: Vector2D,
    pub b: Vector2D,
    pub c: Vector2D,
    pub color: Color,
}

#[derive(Debug, Clone, Default)]
struct SceneCache {
    valid: bool,
    bounds: Option<Aabb>,
    triangles: Vec<Triangle3D>,
}

#[derive(Debug, Clone, Default)]
struct ViewCache {
    valid: bool,
    triangles: Vec<Triangle3D>,
}

/// A scene of colored polygons seen through any number of cameras.
///
/// Derived data is computed lazily. Adding or clearing polygons invalidates
/// every cache; adding a camera only creates an empty cache for it.
#[derive(Debug, Clone, Default)]
pub struct Model {
    polygons: Vec<Polygon3D>,
    cameras: Vec<Camera>,
    scene: SceneCache,
    views: Vec<ViewCache>,
}

impl Model {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of polygons.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Returns every polygon in insertion order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon3D] {
        &self.polygons
    }

    /// # Errors
    ///
    /// Returns [`ModelError::PolygonIndexOutOfRange`] for an unknown index.
    pub fn polygon(&self, index: usize) -> Result<&Polygon3D> {
        self.polygons.get(index).ok_or_else(|| {
            ModelError::PolygonIndexOutOfRange {
                index,
                len: self.polygons.len(),
            }
            .into()
        })
    }

    /// Adds a polygon and invalidates every cache.
    pub fn add_polygon(&mut self, polygon: Polygon3D) {
        self.polygons.push(polygon);
        self.invalidate();
    }

    /// Adds polygons and invalidates every cache.
    pub fn add_polygons(&mut self, polygons: impl IntoIterator<Item = Polygon3D>) {
        self.polygons.extend(polygons);
        self.invalidate();
    }

    /// Removes every polygon and invalidates every cache.
    pub fn clear_polygons(&mut self) {
        self.polygons.clear();
        self.invalidate();
    }

    /// Returns the number of cameras.
    #[must_use]
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Returns every camera in insertion order.
    #[must_use]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// # Errors
    ///
    /// Returns [`ModelError::CameraIndexOutOfRange`] for an unknown index.
    pub fn camera(&self, index: usize) -> Result<&Camera> {
        self.cameras.get(index).ok_or_else(|| {
            ModelError::CameraIndexOutOfRange {
                index,
                len: self.cameras.len(),
            }
            .into()
        })
    }

    /// Adds a camera with an empty cache of its own.
    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
        self.views.push(ViewCache::default());
    }

    /// Adds cameras, each with an empty cache.
    pub fn add_cameras(&mut self, cameras: impl IntoIterator<Item = Camera>) {
        for camera in cameras {
            self.add_camera(camera);
        }
    }

    /// Removes every camera and its cache.
    pub fn clear_cameras(&mut self) {
        self.cameras.clear();
        self.views.clear();
    }

    /// Bounding box of every polygon vertex, a point box at the origin for an
    /// empty scene.
    pub fn bounds(&mut self) -> Aabb {
        self.refresh_scene();
        self.scene.bounds.unwrap_or(Aabb {
            min: Vector3D::ORIGIN,
            max: Vector3D::ORIGIN,
        })
    }

    /// Triangles of every polygon, in polygon order.
    pub fn triangles(&mut self) -> &[Triangle3D] {
        self.refresh_scene();
        &self.scene.triangles
    }

    /// Triangles in front of camera `index`, farthest first.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CameraIndexOutOfRange`] for an unknown index.
    pub fn triangles_for_camera(&mut self, index: usize) -> Result<&[Triangle3D]> {
        self.refresh_view(index)?;
        Ok(&self.views[index].triangles)
    }

    /// Painter-ordered triangles as seen by camera `index`.
    ///
    /// An unknown camera yields nothing. A triangle with any vertex that
    /// cannot be projected is skipped.
    pub fn visible_ordered_triangles(&mut self, index: usize) -> Vec<ProjectedTriangle> {
        if self.refresh_view(index).is_err() {
            return Vec::new();
        }
        let camera = &self.cameras[index];
        self.views[index]
            .triangles
            .iter()
            .filter_map(|triangle| {
                let project = |p: Vector3D| camera.project(&p).ok().flatten();
                Some(ProjectedTriangle {
                    a: project(triangle.a())?,
                    b: project(triangle.b())?,
                    c: project(triangle.c())?,
                    color: triangle.color(),
                })
            })
            .collect()
    }

    fn invalidate(&mut self) {
        self.scene.valid = false;
        for view in &mut self.views {
            view.valid = false;
        }
    }

    fn refresh_scene(&mut self) {
        if self.scene.valid {
            return;
        }
        self.scene = SceneCache {
            valid: true,
            bounds: Aabb::of_polygons(&self.polygons),
            triangles: Polygon3D::triangles_of(&self.polygons),
        };
        debug!(
            polygons = self.polygons.len(),
            triangles = self.scene.triangles.len(),
            "recomputed scene cache"
        );
    }

    fn refresh_view(&mut self, index: usize) -> Result<()> {
        let camera = *self.camera(index)?;
        self.refresh_scene();
        if self.views[index].valid {
            return Ok(());
        }
        let triangles = visible_triangles(&camera, &self.scene.triangles);
        debug!(
            camera = index,
            visible = triangles.len(),
            "recomputed camera cache"
        );
        self.views[index] = ViewCache {
            valid: true,
            triangles,
        };
        Ok(())
    }
}

/// Triangles whose centroid lies beyond the view plane as seen from the eye,
/// ordered back to front.
fn visible_triangles(camera: &Camera, triangles: &[Triangle3D]) -> Vec<Triangle3D> {
    let eye = camera.eye();
    let plane = camera.plane();
    let mut kept: Vec<(Triangle3D, f64)> = triangles
        .iter()
        .filter_map(|triangle| {
            let center = triangle.center();
            let sight = Line3D::through(eye, center).ok()?;
            let t = plane.line_intersection_parameter(&sight).ok()??;
            (t > 0.0 && t <= 1.0).then(|| (*triangle, eye.distance(&center)))
        })
        .collect();
    paint_order(&mut kept);
    kept.into_iter().map(|(triangle, _)| triangle).collect()
}

/// Moves farther items forward with adjacent swaps, stepping back once after
/// every swap.
fn paint_order<T>(items: &mut [(T, f64)]) {
    let mut i = 0;
    while i + 1 < items.len() {
        if items[i + 1].1 > items[i].1 {
            items.swap(i, i + 1);
            if i > 0 {
                i -= 1;
                continue;
            }
        }
        i += 1;
    }
}
