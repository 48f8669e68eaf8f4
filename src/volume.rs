//! Closed triangulated solid.
//!
//! A [`Volume`] stores one deduplicated arena of points and a list of
//! [`Face`]s indexing into it, so faces that meet at a corner share a single
//! stored position. Centroid, surface area and statistics are computed from
//! the current arena on every call; transforms edit the arena in place.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::{debug, trace};

use crate::buffer::RenderBuffer;
use crate::edge::Edge;
use crate::error::{GeometryError, GeometryResult};
use crate::math::angle::Angle;
use crate::math::point::Point3;
use crate::math::vec3::Vec3;
use crate::transform::Rotation;
use crate::triangle::{Face, Triangle};

/// Hashable identity of a position. `-0.0` and `0.0` map to the same key.
type PointKey = [u64; 3];

fn point_key(p: Point3) -> PointKey {
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

/// Summary statistics over the points of a volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeStats {
    /// Mean of all distinct points.
    pub average: Point3,
    /// Per-axis population variance of the distinct points.
    pub variance: Vec3,
    /// Component-wise minimum.
    pub min: Point3,
    /// Component-wise maximum.
    pub max: Point3,
    pub surface_area: f64,
}

/// An edge fused between exactly two faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharedEdge {
    pub edge: Edge,
    pub faces: [usize; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Volume {
    points: Vec<Point3>,
    faces: Vec<Face>,
    lookup: HashMap<PointKey, usize>,
}

impl Volume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a volume from standalone triangles, merging coincident corners.
    pub fn from_triangles<I>(triangles: I) -> GeometryResult<Self>
    where
        I: IntoIterator<Item = Triangle>,
    {
        let mut volume = Self::new();
        for triangle in triangles {
            volume.push_triangle(triangle)?;
        }
        Ok(volume)
    }

    /// Builds a volume from a point list and faces indexing into it.
    ///
    /// Arena order follows `points`. Repeated positions are merged and the
    /// faces remapped onto the surviving entry.
    pub fn from_parts(points: &[Point3], faces: &[Face]) -> GeometryResult<Self> {
        let mut volume = Self::new();
        let remap: Vec<usize> = points.iter().map(|p| volume.intern(*p)).collect();
        for face in faces {
            face.resolve(points)?;
            let [a, b, c] = face.indices().map(|i| remap[i]);
            volume.faces.push(Face::new(a, b, c)?);
        }
        Ok(volume)
    }

    /// Index of `point` in the arena, inserting it if no equal point exists.
    fn intern(&mut self, point: Point3) -> usize {
        let key = point_key(point);
        if let Some(&index) = self.lookup.get(&key) {
            return index;
        }
        let index = self.points.len();
        self.points.push(point);
        self.lookup.insert(key, index);
        index
    }

    /// Rebuilds the position lookup after the arena was edited in place.
    fn reindex(&mut self) {
        self.lookup.clear();
        for (index, point) in self.points.iter().enumerate() {
            self.lookup.entry(point_key(*point)).or_insert(index);
        }
    }

    /// Appends a triangle, reusing arena entries for corners already present.
    ///
    /// Returns the index of the new face. A triangle whose corners coincide
    /// is rejected with [`GeometryError::InvalidGeometry`].
    pub fn push_triangle(&mut self, triangle: Triangle) -> GeometryResult<usize> {
        let [a, b, c] = *triangle.points();
        let before = self.points.len();
        let face = Face::new(self.intern(a), self.intern(b), self.intern(c));
        let face = match face {
            Ok(face) => face,
            Err(err) => {
                self.discard_points_from(before);
                return Err(err);
            }
        };
        self.faces.push(face);
        Ok(self.faces.len() - 1)
    }

    fn discard_points_from(&mut self, len: usize) {
        for point in self.points.drain(len..) {
            self.lookup.remove(&point_key(point));
        }
    }

    /// Appends a face over points already in the arena.
    ///
    /// Repeated corners and indices outside the arena are `InvalidGeometry`.
    pub fn push_face(&mut self, face: Face) -> GeometryResult<usize> {
        let face = Face::new(face.a, face.b, face.c)?;
        if let Some(&i) = face.indices().iter().find(|&&i| i >= self.points.len()) {
            return Err(GeometryError::invalid_geometry(format!(
                "face {face} references point {i} but only {} exist",
                self.points.len()
            )));
        }
        self.faces.push(face);
        Ok(self.faces.len() - 1)
    }

    // ============ Access ============

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The deduplicated point set, in arena order.
    pub fn all_points(&self) -> &[Point3] {
        &self.points
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn triangle_of(&self, face: &Face) -> Triangle {
        Triangle::new(
            self.points[face.a],
            self.points[face.b],
            self.points[face.c],
        )
    }

    /// The face at `index` with its current corner positions.
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        self.faces.get(index).map(|f| self.triangle_of(f))
    }

    /// Every face with its current corner positions.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|f| self.triangle_of(f))
    }

    // ============ Measurements ============

    /// Mean of the face centroids, or `None` for an empty volume.
    ///
    /// This approximates the solid's centroid; it is exact only when every
    /// corner is shared by the same number of faces.
    pub fn centroid(&self) -> Option<Point3> {
        Point3::mean(self.triangles().map(|t| t.centroid()))
    }

    /// Sum of the face areas.
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|t| t.area()).sum()
    }

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Positive when faces wind counter-clockwise seen from outside.
    pub fn enclosed_volume(&self) -> f64 {
        self.triangles()
            .map(|t| {
                let [a, b, c] = (*t.points()).map(Vec3::from);
                a.dot(b.cross(c)) / 6.0
            })
            .sum()
    }

    /// Point statistics, or `None` for an empty volume.
    pub fn stats(&self) -> Option<VolumeStats> {
        let average = Point3::mean(self.points.iter().copied())?;
        let n = self.points.len() as f64;
        let mut variance = [0.0; 3];
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points {
            let d = *p - average;
            variance[0] += d.x() * d.x();
            variance[1] += d.y() * d.y();
            variance[2] += d.z() * d.z();
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some(VolumeStats {
            average,
            variance: Vec3::new(variance[0] / n, variance[1] / n, variance[2] / n),
            min,
            max,
            surface_area: self.surface_area(),
        })
    }

    fn faces_by_edge(&self) -> BTreeMap<(usize, usize), Vec<(usize, Edge)>> {
        let mut by_edge: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for (index, face) in self.faces.iter().enumerate() {
            for edge in face.edges() {
                by_edge.entry(edge.key()).or_default().push((index, edge));
            }
        }
        by_edge
    }

    /// Edges fused between exactly two faces, ordered by endpoint indices.
    pub fn shared_edges(&self) -> Vec<SharedEdge> {
        self.faces_by_edge()
            .into_values()
            .filter_map(|users| match users.as_slice() {
                [(first, edge), (second, _)] => Some(SharedEdge {
                    edge: *edge,
                    faces: [*first, *second],
                }),
                _ => None,
            })
            .collect()
    }

    /// True when every edge joins exactly two faces.
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.faces_by_edge().values().all(|users| users.len() == 2)
    }

    // ============ Transforms ============

    /// Moves every point by `offset`.
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        trace!(%offset, points = self.points.len(), "translating volume");
        for p in &mut self.points {
            *p = *p + offset;
        }
        self.reindex();
        self
    }

    /// Scales every point's offset from the current centroid per axis.
    ///
    /// An empty volume is left unchanged.
    pub fn scale(&mut self, factors: Vec3) -> &mut Self {
        let Some(center) = self.centroid() else {
            return self;
        };
        trace!(%factors, %center, "scaling volume");
        for p in &mut self.points {
            *p = center + (*p - center).scale_by(factors);
        }
        self.reindex();
        self
    }

    /// Scales uniformly about the current centroid.
    pub fn scale_uniform(&mut self, factor: f64) -> &mut Self {
        self.scale(Vec3::splat(factor))
    }

    /// Rotates about the volume's own centroid.
    ///
    /// Rotating again by `angle.inverse()` only undoes a single-axis angle:
    /// the axes compose in a fixed order, so negating every component does
    /// not invert a compound rotation. Use [`Volume::rotate_inverse_about`]
    /// with the same center for that.
    pub fn rotate(&mut self, angle: &Angle) -> GeometryResult<&mut Self> {
        match self.centroid() {
            Some(center) => self.rotate_about(angle, center),
            None => Ok(self),
        }
    }

    /// Rotates every point about `center`.
    pub fn rotate_about(&mut self, angle: &Angle, center: Point3) -> GeometryResult<&mut Self> {
        let rotation = Rotation::from_angle(angle)?;
        debug!(%angle, %center, "rotating volume");
        self.apply_rotation(&rotation, center)
    }

    /// Applies the exact inverse of [`Volume::rotate_about`] with the same arguments.
    pub fn rotate_inverse_about(
        &mut self,
        angle: &Angle,
        center: Point3,
    ) -> GeometryResult<&mut Self> {
        let rotation = Rotation::from_angle(angle)?.inverse();
        debug!(%angle, %center, "reversing volume rotation");
        self.apply_rotation(&rotation, center)
    }

    fn apply_rotation(&mut self, rotation: &Rotation, center: Point3) -> GeometryResult<&mut Self> {
        let rotated = self
            .points
            .iter()
            .map(|p| rotation.apply_about(*p, center))
            .collect::<GeometryResult<Vec<_>>>()?;
        self.points = rotated;
        self.reindex();
        Ok(self)
    }

    // ============ Export ============

    /// Flattened snapshot of the arena for the rendering collaborator.
    pub fn to_render_buffer(&self) -> GeometryResult<RenderBuffer> {
        RenderBuffer::from_volume(self)
    }

    /// Face index triples flattened into one list, for indexed drawing.
    pub fn face_indices(&self) -> GeometryResult<Vec<u32>> {
        self.faces
            .iter()
            .flat_map(|f| f.indices())
            .map(|i| {
                u32::try_from(i).map_err(|_| {
                    GeometryError::invalid_argument(format!("point index {i} exceeds u32"))
                })
            })
            .collect()
    }
}

impl PartialEq for Volume {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.faces == other.faces
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Volume: {} points, {} faces, surface area {}",
            self.points.len(),
            self.faces.len(),
            self.surface_area()
        )?;
        if let Some(center) = self.centroid() {
            write!(f, ", centroid {center}")?;
        }
        Ok(())
    }
}
