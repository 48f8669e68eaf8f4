//! A small 3D geometry kernel for real-time applications.
//!
//! This crate represents points, orientations and triangulated solids, and
//! provides affine transforms (translate, scale, rotate) plus derived
//! measurements (length, area, surface area, centroid). It has no graphics
//! dependency: a renderer reads a flattened [`RenderBuffer`] snapshot.
//!
//! # Quick Start
//!
//! ```
//! use trigon::prelude::*;
//!
//! let mut volume = generate_rectangle(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.5, 1.0))?;
//! assert_eq!(volume.face_count(), 12);
//!
//! volume
//!     .translate(Vec3::new(1.0, 0.0, 0.0))
//!     .rotate(&Angle::from_degrees(0.0, 90.0, 0.0))?;
//! let buffer = volume.to_render_buffer()?;
//! assert_eq!(buffer.point_count(), 8);
//! # Ok::<(), GeometryError>(())
//! ```

pub mod buffer;
pub mod edge;
pub mod error;
pub mod math;
pub mod shapes;
pub mod transform;
pub mod triangle;
pub mod volume;

// Re-export commonly needed types at crate root for convenience
pub use buffer::RenderBuffer;
pub use error::{GeometryError, GeometryResult};
pub use shapes::generate_rectangle;
pub use transform::Rotation;
pub use volume::Volume;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use trigon::prelude::*;
/// ```
pub mod prelude {
    // Errors
    pub use crate::error::{GeometryError, GeometryResult};

    // Math
    pub use crate::math::angle::Angle;
    pub use crate::math::matrix::Matrix;
    pub use crate::math::point::{Point3, Point3i};
    pub use crate::math::vec3::Vec3;

    // Mesh model
    pub use crate::edge::Edge;
    pub use crate::triangle::{Face, Triangle};
    pub use crate::volume::{SharedEdge, Volume, VolumeStats};

    // Transforms & generation
    pub use crate::shapes::generate_rectangle;
    pub use crate::transform::Rotation;

    // Rendering boundary
    pub use crate::buffer::RenderBuffer;
}
