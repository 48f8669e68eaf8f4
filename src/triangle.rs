use std::fmt;

use crate::edge::Edge;
use crate::error::{GeometryError, GeometryResult};
use crate::math::point::Point3;
use crate::math::vec3::Vec3;

// This struct represents a triangle defined by three vertices.
// The members a, b, and c are indices into the point arena
// of the volume that owns the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    /// Creates a face over three distinct point indices.
    pub fn new(a: usize, b: usize, c: usize) -> GeometryResult<Self> {
        if a == b || b == c || a == c {
            return Err(GeometryError::invalid_geometry(format!(
                "face corners must be distinct, got ({a}, {b}, {c})"
            )));
        }
        Ok(Self { a, b, c })
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// The three directed edges `a -> b`, `b -> c`, `c -> a`.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::from_distinct(self.a, self.b),
            Edge::from_distinct(self.b, self.c),
            Edge::from_distinct(self.c, self.a),
        ]
    }

    /// Resolves the face against a point arena.
    pub fn resolve(&self, points: &[Point3]) -> GeometryResult<Triangle> {
        let lookup = |i: usize| {
            points.get(i).copied().ok_or_else(|| {
                GeometryError::invalid_geometry(format!(
                    "face references point {i} but only {} exist",
                    points.len()
                ))
            })
        };
        Ok(Triangle::new(lookup(self.a)?, lookup(self.b)?, lookup(self.c)?))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

/// Index triple used by a standalone [`Triangle`] over its own points.
const OWN_CORNERS: Face = Face { a: 0, b: 1, c: 2 };

/// A triangle that owns its three corner points.
///
/// Centroid, area and edges are derived from the current corners on every
/// call, so moving a corner can never leave stale measurements behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    points: [Point3; 3],
}

impl Triangle {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { points: [a, b, c] }
    }

    pub fn points(&self) -> &[Point3; 3] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point3; 3] {
        &mut self.points
    }

    /// Edges over [`Triangle::points`], in `a -> b`, `b -> c`, `c -> a` order.
    pub fn edges(&self) -> [Edge; 3] {
        OWN_CORNERS.edges()
    }

    /// Lengths of the three edges, in [`Triangle::edges`] order.
    pub fn edge_lengths(&self) -> [f64; 3] {
        let [a, b, c] = self.points;
        [a.distance(b), b.distance(c), c.distance(a)]
    }

    pub fn perimeter(&self) -> f64 {
        self.edge_lengths().iter().sum()
    }

    /// Arithmetic mean of the three corners.
    pub fn centroid(&self) -> Point3 {
        let [a, b, c] = self.points;
        Point3::new(
            (a.x + b.x + c.x) / 3.0,
            (a.y + b.y + c.y) / 3.0,
            (a.z + b.z + c.z) / 3.0,
        )
    }

    /// Area by Heron's formula over the three edge lengths.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.edge_lengths();
        let s = (a + b + c) / 2.0;
        // Rounding can push the product slightly negative for collinear corners
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    /// Unit normal following counter-clockwise winding.
    pub fn normal(&self) -> GeometryResult<Vec3> {
        let [a, b, c] = self.points;
        (b - a).cross(c - a).normalize()
    }

    /// Moves every corner by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.points {
            *p = *p + offset;
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.points;
        write!(
            f,
            "Triangle {a} {b} {c} (area {}, centroid {})",
            self.area(),
            self.centroid()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        )
    }

    #[test]
    fn heron_area_and_centroid() {
        let t = right_triangle();
        assert_relative_eq!(t.area(), 6.0);
        assert_relative_eq!(t.centroid(), Point3::new(4.0 / 3.0, 1.0, 0.0));
        assert_relative_eq!(t.perimeter(), 12.0);
    }

    #[test]
    fn edges_match_edge_lengths() {
        let t = right_triangle();
        let lengths = t.edge_lengths();
        for (edge, expected) in t.edges().iter().zip(lengths) {
            assert_relative_eq!(edge.length(t.points()).unwrap(), expected);
        }
        assert_eq!(lengths, [4.0, 5.0, 3.0]);
    }

    #[test]
    fn measurements_follow_moved_corners() {
        let mut t = right_triangle();
        t.points_mut()[1] = Point3::new(8.0, 0.0, 0.0);
        assert_relative_eq!(t.area(), 12.0, epsilon = 1e-12);
        t.translate(Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(t.area(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(t.centroid(), Point3::new(11.0 / 3.0, 2.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn collinear_corners_have_zero_area() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(3.0, 3.0, 3.0),
        );
        assert_relative_eq!(t.area(), 0.0, epsilon = 1e-6);
        assert!(!t.area().is_nan());
        assert!(t.normal().is_err());
    }

    #[test]
    fn normal_follows_winding() {
        let t = right_triangle();
        assert_relative_eq!(t.normal().unwrap(), Vec3::FORWARD);
    }

    #[test]
    fn face_requires_distinct_corners() {
        assert!(Face::new(0, 1, 2).is_ok());
        assert!(matches!(
            Face::new(0, 1, 0),
            Err(GeometryError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn face_resolves_against_arena() {
        let points = [
            Point3::new(0.0, 3.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ];
        let face = Face::new(1, 2, 0).unwrap();
        assert_eq!(face.resolve(&points).unwrap(), right_triangle());
        assert!(Face::new(1, 2, 5).unwrap().resolve(&points).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Face::new(0, 1, 2).unwrap().to_string(), "[0, 1, 2]");
        let text = right_triangle().to_string();
        assert!(text.starts_with("Triangle (0, 0, 0) (4, 0, 0) (0, 3, 0) (area 6, centroid"));
    }

    #[test]
    fn face_edges_cycle() {
        let face = Face::new(3, 7, 5).unwrap();
        let keys: Vec<_> = face.edges().iter().map(|e| (e.start(), e.end())).collect();
        assert_eq!(keys, vec![(3, 7), (7, 5), (5, 3)]);
    }
}
