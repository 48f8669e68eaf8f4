use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trigon::prelude::*;

// Largest distance any point may drift over a rotate/unrotate cycle.
const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Largest distance between matching points of two snapshots.
fn max_drift(before: &[Point3], after: &[Point3]) -> f64 {
    before
        .iter()
        .zip(after)
        .map(|(a, b)| a.distance(*b))
        .fold(0.0, f64::max)
}

fn main() -> Result<(), GeometryError> {
    init_logging();

    let mut volume = generate_rectangle(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.5, 1.0))?;
    info!(%volume, "generated test box");

    let offset = Vec3::new(3.0, -1.0, 0.5);
    volume.translate(offset);
    info!(%volume, "translated");
    volume.translate(-offset);

    volume.scale_uniform(2.0);
    info!(%volume, "scaled x2");
    volume.scale_uniform(0.5);

    let original = volume.all_points().to_vec();
    let angle = Angle::from_degrees(30.0, 45.0, 60.0);
    let center = volume.centroid().unwrap_or(Point3::ORIGIN);

    volume.rotate_about(&angle, center)?;
    info!(%angle, %volume, "rotated");
    volume.rotate_inverse_about(&angle, center)?;

    let drift = max_drift(&original, volume.all_points());
    if drift > ROUND_TRIP_TOLERANCE {
        warn!(drift, "rotation round trip drifted");
    } else {
        info!(drift, "rotation round trip restored the box");
    }

    let buffer = volume.to_render_buffer()?;
    let indices = volume.face_indices()?;
    info!(%buffer, triangles = indices.len() / 3, "prepared render data");

    Ok(())
}
