//! Flattened point data for the rendering collaborator.
//!
//! The renderer never touches geometry types; it receives a [`RenderBuffer`]
//! snapshot and uploads the two arrays as they are.

use std::fmt;

use crate::error::{GeometryError, GeometryResult};
use crate::math::point::Point3;
use crate::volume::Volume;

/// A flat snapshot of a point set.
///
/// - `vertices` holds `3 * point_count` scalars, `x, y, z` per point in order
/// - `indices` holds one index per point, counting up from zero
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderBuffer {
    point_count: u32,
    vertices: Vec<f64>,
    indices: Vec<u32>,
}

impl RenderBuffer {
    /// Flattens `points`. Fails when there are more points than a `u32` index can name.
    pub fn from_points(points: &[Point3]) -> GeometryResult<Self> {
        let point_count = u32::try_from(points.len()).map_err(|_| {
            GeometryError::invalid_argument(format!(
                "{} points do not fit a u32 index buffer",
                points.len()
            ))
        })?;
        Ok(Self {
            point_count,
            vertices: points.iter().flat_map(|p| p.to_array()).collect(),
            indices: (0..point_count).collect(),
        })
    }

    /// Flattens the deduplicated point arena of `volume`.
    pub fn from_volume(volume: &Volume) -> GeometryResult<Self> {
        Self::from_points(volume.all_points())
    }

    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex data as 32-bit floats, for graphics APIs without double support.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices.iter().map(|&v| v as f32).collect()
    }
}

impl fmt::Display for RenderBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RenderBuffer: {} points, {} scalars, {} indices",
            self.point_count,
            self.vertices.len(),
            self.indices.len()
        )
    }
}
