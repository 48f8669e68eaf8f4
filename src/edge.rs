//! Directed segment between two points of a shared point arena.
//!
//! An [`Edge`] stores indices, not positions, so it always reflects the
//! current coordinates of the points it names. Length and orientation are
//! derived on every read.

use std::fmt;

use crate::error::{GeometryError, GeometryResult};
use crate::math::angle::Angle;
use crate::math::point::Point3;
use crate::math::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    start: usize,
    end: usize,
}

impl Edge {
    /// Creates an edge from `start` to `end`. Both must name different points.
    pub fn new(start: usize, end: usize) -> GeometryResult<Self> {
        if start == end {
            return Err(GeometryError::invalid_geometry(format!(
                "edge endpoints must be distinct, both are point {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds an edge whose endpoints the caller has already checked to be distinct.
    pub(crate) const fn from_distinct(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The same edge with its direction reversed.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Endpoint indices ordered low to high, identifying the edge regardless of direction.
    pub fn key(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    /// Resolves both endpoints in `points`.
    pub fn endpoints(&self, points: &[Point3]) -> GeometryResult<(Point3, Point3)> {
        let lookup = |i: usize| {
            points.get(i).copied().ok_or_else(|| {
                GeometryError::invalid_geometry(format!(
                    "edge references point {i} but only {} exist",
                    points.len()
                ))
            })
        };
        Ok((lookup(self.start)?, lookup(self.end)?))
    }

    /// Displacement from the start point to the end point.
    pub fn direction(&self, points: &[Point3]) -> GeometryResult<Vec3> {
        let (a, b) = self.endpoints(points)?;
        Ok(b - a)
    }

    pub fn length(&self, points: &[Point3]) -> GeometryResult<f64> {
        let (a, b) = self.endpoints(points)?;
        Ok(a.distance(b))
    }

    /// Orientation from the direction cosines of the edge.
    ///
    /// Pitch is the angle to the X axis, roll to the Y axis and yaw to the Z
    /// axis, each quantized through [`Angle`]. A zero-length edge has no
    /// direction and is rejected.
    pub fn angle(&self, points: &[Point3]) -> GeometryResult<Angle> {
        let d = self.direction(points)?;
        let length = d.magnitude();
        if length == 0.0 {
            return Err(GeometryError::degenerate(format!(
                "edge {self} has zero length"
            )));
        }
        let cosine = |c: f64| (c / length).clamp(-1.0, 1.0).acos();
        Ok(Angle::from_radians(
            cosine(d.x()),
            cosine(d.z()),
            cosine(d.y()),
        ))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
