use tracing::debug;

use crate::error::{GeometryError, GeometryResult};
use crate::math::point::Point3;
use crate::triangle::Face;
use crate::volume::Volume;

pub const N_BOX_CORNERS: usize = 8;
pub const N_BOX_FACES: usize = 12;

// Corner `i` takes the high coordinate on X when bit 0 of BOX_CORNER_BITS[i]
// is set, on Y for bit 1 and on Z for bit 2. Corners 0-3 circle the low-Z
// side, corners 4-7 the high-Z side directly above them.
const BOX_CORNER_BITS: [u8; N_BOX_CORNERS] = [
    0b000, 0b001, 0b011, 0b010, //
    0b100, 0b101, 0b111, 0b110,
];

// Two triangles per side, wound counter-clockwise seen from outside.
pub const BOX_FACES: [Face; N_BOX_FACES] = [
    // Bottom face
    Face { a: 0, b: 2, c: 1 },
    Face { a: 0, b: 3, c: 2 },
    // Top face
    Face { a: 4, b: 5, c: 6 },
    Face { a: 4, b: 6, c: 7 },
    // Front face
    Face { a: 0, b: 1, c: 5 },
    Face { a: 0, b: 5, c: 4 },
    // Back face
    Face { a: 3, b: 7, c: 6 },
    Face { a: 3, b: 6, c: 2 },
    // Left face
    Face { a: 0, b: 4, c: 7 },
    Face { a: 0, b: 7, c: 3 },
    // Right face
    Face { a: 1, b: 2, c: 6 },
    Face { a: 1, b: 6, c: 5 },
];

/// Builds the axis-aligned box spanned by two opposite corners.
///
/// `high` must exceed `low` on every axis; a flat or inverted box is
/// rejected with [`GeometryError::InvalidArgument`].
pub fn generate_rectangle(low: Point3, high: Point3) -> GeometryResult<Volume> {
    if !(high.x > low.x && high.y > low.y && high.z > low.z) {
        return Err(GeometryError::invalid_argument(format!(
            "box corner {high} must exceed {low} on every axis"
        )));
    }

    let pick = |bits: u8, mask: u8, lo: f64, hi: f64| if bits & mask != 0 { hi } else { lo };
    let corners = BOX_CORNER_BITS.map(|bits| {
        Point3::new(
            pick(bits, 0b001, low.x, high.x),
            pick(bits, 0b010, low.y, high.y),
            pick(bits, 0b100, low.z, high.z),
        )
    });

    let volume = Volume::from_parts(&corners, &BOX_FACES)?;
    debug!(%low, %high, area = volume.surface_area(), "generated box volume");
    Ok(volume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixture() -> Volume {
        generate_rectangle(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.5, 1.0)).unwrap()
    }

    #[test]
    fn box_has_twelve_faces_and_eight_points() {
        let v = fixture();
        assert_eq!(v.face_count(), 12);
        assert_eq!(v.point_count(), 8);
    }

    #[test]
    fn surface_area_matches_box_formula() {
        assert_relative_eq!(fixture().surface_area(), 13.0, epsilon = 1e-12);
    }

    #[test]
    fn box_is_closed_and_wound_outward() {
        let v = fixture();
        assert!(v.is_closed());
        assert_eq!(v.shared_edges().len(), 18);
        assert_relative_eq!(v.enclosed_volume(), 3.0, epsilon = 1e-12);

        let stats = v.stats().unwrap();
        let middle = Point3::new(1.0, 0.75, 0.5);
        assert_relative_eq!(stats.average, middle);
        for t in v.triangles() {
            let outward = t.centroid() - middle;
            assert!(t.normal().unwrap().dot(outward) > 0.0, "{t} faces inward");
        }
    }

    #[test]
    fn corners_span_the_box() {
        let stats = fixture().stats().unwrap();
        assert_eq!(stats.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(stats.max, Point3::new(2.0, 1.5, 1.0));
    }

    #[test]
    fn flat_or_inverted_box_is_rejected() {
        let low = Point3::new(0.0, 0.0, 0.0);
        for high in [
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 1.0),
            Point3::new(1.0, f64::NAN, 1.0),
        ] {
            assert!(matches!(
                generate_rectangle(low, high),
                Err(GeometryError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn offset_box() {
        let v = generate_rectangle(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0)).unwrap();
        assert_relative_eq!(v.surface_area(), 2.0 * (2.0 * 4.0 + 2.0 * 6.0 + 4.0 * 6.0), epsilon = 1e-12);
        assert_relative_eq!(v.enclosed_volume(), 48.0, epsilon = 1e-12);
    }
}
