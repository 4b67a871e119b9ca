#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use geokern::{
    Camera, Color, Extrude, Line2D, Matrix, MatrixVector, Model, Orientation, Polygon2D,
    Polygon3D, Triangle2D, Vector2D, Vector3D,
};

fn v(x: f64, y: f64) -> Vector2D {
    Vector2D::new(x, y).unwrap()
}

fn p(x: f64, y: f64, z: f64) -> Vector3D {
    Vector3D::new(x, y, z).unwrap()
}

#[test]
fn right_triangle_area_and_orientation() {
    let t = Triangle2D::new(v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)).unwrap();
    assert_eq!(t.area(), 8.0);
    assert_eq!(t.orientation(), Orientation::CounterClockwise);
    assert_eq!(t.orientation().sign(), 1);
}

#[test]
fn unit_square_triangulates_into_two_halves() {
    let square = Polygon2D::new(vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)]).unwrap();
    let triangles = square.triangles();
    assert_eq!(triangles.len(), 2);
    assert!(triangles.iter().all(|t| t.area() == 0.5));
}

#[test]
fn shifted_triangles_overlap() {
    let a = Triangle2D::new(v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)).unwrap();
    let b = Triangle2D::new(v(0.5, 0.0), v(4.5, 0.0), v(0.5, 4.0)).unwrap();
    let pieces = a.intersection(&b);
    assert!(!pieces.is_empty());
    let area: f64 = pieces.iter().map(Triangle2D::area).sum();
    assert_abs_diff_eq!(area, 6.125, epsilon = 1e-6);
    assert!(pieces.iter().all(|t| a.contains(&t.center()) && b.contains(&t.center())));
}

#[test]
fn parallel_lines_do_not_intersect() {
    let a = Line2D::new(v(0.0, 0.0), v(1.0, 0.0)).unwrap();
    let b = Line2D::new(v(0.0, 1.0), v(1.0, 0.0)).unwrap();
    assert!(a.is_parallel(&b));
    let err = a.intersection(&b).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn camera_projects_origin_to_center() {
    let camera = Camera::new(p(5.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0), 1.0, 100.0)
        .unwrap();
    let projected = camera.project(&Vector3D::ORIGIN).unwrap().unwrap();
    assert_abs_diff_eq!(projected.x(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(projected.y(), 0.0, epsilon = 1e-6);
}

#[test]
fn quarter_turn_maps_i_to_j() {
    let rotation = Matrix::rotation_2d(90.0).unwrap();
    let turned = Matrix::multiply(&rotation, &Vector2D::I.column_matrix()).unwrap();
    let turned = Vector2D::from_column_matrix(&turned).unwrap();
    assert_abs_diff_eq!(turned.x(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(turned.y(), 1.0, epsilon = 1e-9);
}

#[test]
fn polygon_intersection_contract() {
    let a = Polygon2D::new(vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)]).unwrap();
    let b = Polygon2D::new(vec![v(1.0, 1.0), v(3.0, 1.0), v(3.0, 3.0), v(1.0, 3.0)]).unwrap();
    let overlap = a.intersection(&b);
    let area: f64 = overlap.iter().map(Triangle2D::area).sum();
    assert_abs_diff_eq!(area, 1.0, epsilon = 1e-6);
}

#[test]
fn visible_ordered_triangles_contract() {
    let base = Polygon3D::new(
        vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 1.0, 1.0),
            p(0.0, 0.0, 1.0),
        ],
        Color::new(10, 20, 30),
    )
    .unwrap();
    let cube = Extrude::new(base, p(-1.0, 0.0, 0.0)).execute().unwrap();
    assert_eq!(cube.len(), 6);

    let mut model = Model::new();
    model.add_polygons(cube);
    model.add_camera(Camera::new(p(5.0, 0.5, 0.5), Vector3D::J, Vector3D::K, 1.0, 1200.0).unwrap());
    assert_eq!(model.triangles().len(), 12);

    let ordered = model.visible_ordered_triangles(0);
    assert_eq!(ordered.len(), 12);
    assert!(ordered.iter().all(|t| t.color == Color::new(10, 20, 30)));
    assert!(model.visible_ordered_triangles(3).is_empty());

    // The face nearest to the eye is painted last.
    let last = model.triangles_for_camera(0).unwrap()[11];
    assert!(last.vertices().iter().all(|corner| corner.x() == 0.0));
}
