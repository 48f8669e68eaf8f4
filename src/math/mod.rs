//! Value types: points, angles, vectors and matrices.

pub mod angle;
pub mod matrix;
pub mod point;
pub mod vec3;
