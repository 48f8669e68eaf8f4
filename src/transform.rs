//! Rotation matrices built from an [`Angle`].
//!
//! # Convention
//! - Right-handed rotations; points are **column vectors** on the right: `R · p`
//! - The composed matrix is `Rz(yaw) · Ry(roll) · Rx(pitch)`, so pitch is
//!   applied first and yaw last
//! - Rotating about a center `c` maps `p` to `c + R · (p - c)`
//!
//! ```ignore
//! let rotation = Rotation::from_angle(&Angle::from_degrees(0.0, 90.0, 0.0))?;
//! let moved = rotation.apply_about(point, center)?;
//! let back = rotation.inverse().apply_about(moved, center)?;
//! ```

use std::fmt;

use crate::error::GeometryResult;
use crate::math::angle::Angle;
use crate::math::matrix::Matrix;
use crate::math::point::Point3;
use crate::math::vec3::Vec3;

/// Creates a rotation matrix around the X axis.
pub fn rotation_x(angle: f64) -> GeometryResult<Matrix> {
    let c = angle.cos();
    let s = angle.sin();
    Matrix::from_array(3, 3, [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
}

/// Creates a rotation matrix around the Y axis.
pub fn rotation_y(angle: f64) -> GeometryResult<Matrix> {
    let c = angle.cos();
    let s = angle.sin();
    Matrix::from_array(3, 3, [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
}

/// Creates a rotation matrix around the Z axis.
pub fn rotation_z(angle: f64) -> GeometryResult<Matrix> {
    let c = angle.cos();
    let s = angle.sin();
    Matrix::from_array(3, 3, [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// A composed 3x3 rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotation {
    matrix: Matrix,
}

impl Rotation {
    /// Composes the three per-axis rotations of `angle`.
    pub fn from_angle(angle: &Angle) -> GeometryResult<Self> {
        let rx = rotation_x(angle.pitch_rad())?;
        let ry = rotation_y(angle.roll_rad())?;
        let rz = rotation_z(angle.yaw_rad())?;
        let matrix = rz.dot_product(&ry)?.dot_product(&rx)?;
        Ok(Self { matrix })
    }

    /// The rotation that undoes this one. Rotation matrices are orthonormal,
    /// so this is the transpose.
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Rotates a displacement.
    pub fn apply_vector(&self, v: Vec3) -> GeometryResult<Vec3> {
        let column = Matrix::column(&v.to_array())?;
        let rotated = self.matrix.dot_product(&column)?;
        Ok(Vec3::new(
            rotated.get(0, 0)?,
            rotated.get(1, 0)?,
            rotated.get(2, 0)?,
        ))
    }

    /// Rotates `point` about `center`: `center + R · (point - center)`.
    pub fn apply_about(&self, point: Point3, center: Point3) -> GeometryResult<Point3> {
        Ok(center + self.apply_vector(point - center)?)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation {}", self.matrix)
    }
}
