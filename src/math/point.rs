//! Raw 3D coordinates.
//!
//! Points carry position only. Displacements between points are [`Vec3`]s,
//! so `Point3 - Point3` yields a vector and `Point3 + Vec3` yields a point.

use std::fmt;
use std::ops::{Add, Sub};

use approx::{AbsDiffEq, RelativeEq};

use super::vec3::Vec3;

/// A point with integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3i {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A point with floating coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Rounds every coordinate to the nearest integer.
    ///
    /// Coordinates outside the `i32` range saturate.
    pub fn to_integer(&self) -> Point3i {
        Point3i::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.z.round() as i32,
        )
    }

    /// Arithmetic mean of a set of points, or `None` when the set is empty.
    pub fn mean<I>(points: I) -> Option<Point3>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut count = 0usize;
        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        for p in points {
            x += p.x;
            y += p.y;
            z += p.z;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Point3::new(x / n, y / n, z / n))
    }

    /// Coordinates as an array, in `x, y, z` order.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<Point3i> for Point3 {
    fn from(p: Point3i) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y), f64::from(p.z))
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Moves a point by a displacement.
impl Add<Vec3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point3::new(self.x + rhs.x(), self.y + rhs.y(), self.z + rhs.z())
    }
}

/// Moves a point against a displacement.
impl Sub<Vec3> for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Point3::new(self.x - rhs.x(), self.y - rhs.y(), self.z - rhs.z())
    }
}

/// Displacement from `rhs` to `self`.
impl Sub<Point3> for Point3 {
    type Output = Vec3;

    fn sub(self, rhs: Point3) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Point3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Point3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
