//! Builds an H-shaped prism, looks at it through one camera and prints the
//! painter-ordered projection. Run with `RUST_LOG=debug` to see cache
//! recomputation.

use geokern::{Camera, Color, Extrude, Model, Polygon3D, Triangle2D, Vector2D, Vector3D};
use tracing_subscriber::EnvFilter;

const PROFILE: [(f64, f64); 12] = [
    (0.0, 0.0),
    (0.25, 0.0),
    (0.25, 0.375),
    (0.75, 0.375),
    (0.75, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.75, 1.0),
    (0.75, 0.625),
    (0.25, 0.625),
    (0.25, 1.0),
    (0.0, 1.0),
];

fn h_prism() -> geokern::Result<Vec<Polygon3D>> {
    let points = PROFILE
        .iter()
        .map(|&(y, z)| Vector3D::new(0.0, y, z))
        .collect::<geokern::Result<Vec<_>>>()?;
    let base = Polygon3D::new(points, Color::new(70, 130, 180))?;
    Extrude::new(base, Vector3D::new(-1.0, 0.0, 0.0)?)
        .with_side_color(Color::new(200, 200, 200))
        .with_cap_color(Color::new(180, 60, 60))
        .execute()
}

fn main() -> geokern::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut model = Model::new();
    model.add_polygons(h_prism()?);
    model.add_camera(Camera::new(
        Vector3D::new(5.0, 0.5, 0.5)?,
        Vector3D::J,
        Vector3D::K,
        1.0,
        1200.0,
    )?);

    let bounds = model.bounds();
    println!(
        "{} polygons, {} triangles, bounds {:?}..{:?}",
        model.polygon_count(),
        model.triangles().len(),
        bounds.min,
        bounds.max
    );

    for (i, t) in model.visible_ordered_triangles(0).iter().enumerate() {
        println!(
            "{i:3}: ({:8.2}, {:8.2}) ({:8.2}, {:8.2}) ({:8.2}, {:8.2}) rgb({}, {}, {})",
            t.a.x(),
            t.a.y(),
            t.b.x(),
            t.b.y(),
            t.c.x(),
            t.c.y(),
            t.color.r(),
            t.color.g(),
            t.color.b()
        );
    }

    let a = Triangle2D::new(
        Vector2D::new(300.0, 300.0)?,
        Vector2D::new(400.0, 310.0)?,
        Vector2D::new(305.0, 350.0)?,
    )?;
    let b = Triangle2D::new(
        Vector2D::new(320.0, 290.0)?,
        Vector2D::new(520.0, 310.0)?,
        Vector2D::new(335.0, 440.0)?,
    )?;
    let overlap = a.intersection(&b);
    let area: f64 = overlap.iter().map(Triangle2D::area).sum();
    println!("triangle overlap: {} pieces, area {area:.3}", overlap.len());

    Ok(())
}
