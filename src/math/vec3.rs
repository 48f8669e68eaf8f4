//! 3D displacement with a cached magnitude.
//!
//! Components are private so every way of changing them goes through a
//! constructor that recomputes the magnitude.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use super::angle::Angle;
use super::point::Point3;
use crate::error::{GeometryError, GeometryResult};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
    magnitude: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        magnitude: 0.0,
    };
    pub const RIGHT: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
        magnitude: 1.0,
    };
    pub const UP: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
        magnitude: 1.0,
    };
    pub const FORWARD: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
        magnitude: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            magnitude: (x * x + y * y + z * z).sqrt(),
        }
    }

    /// Uniform vector with every component equal to `value`.
    pub fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Displacement from `from` to `to`.
    pub fn between(from: Point3, to: Point3) -> Self {
        to - from
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Replaces all three components.
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        *self = Self::new(x, y, z);
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise product, used for per-axis scaling.
    pub fn scale_by(&self, factors: Self) -> Self {
        Self::new(self.x * factors.x, self.y * factors.y, self.z * factors.z)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`GeometryError::DegenerateInput`] for a zero vector.
    pub fn normalize(&self) -> GeometryResult<Self> {
        if self.magnitude == 0.0 || !self.magnitude.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "cannot normalize vector {self} with magnitude {}",
                self.magnitude
            )));
        }
        Ok(*self / self.magnitude)
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    pub fn normalize_or_zero(&self) -> Self {
        self.normalize().unwrap_or(Self::ZERO)
    }

    /// Orientation of the vector as seen from its base point.
    ///
    /// - pitch (around X) from the `y / z` ratio
    /// - yaw (around Z) from the `x / y` ratio
    /// - roll (around Y) from the `x / z` ratio
    ///
    /// Each component is `atan(num / den)`. A zero denominator gives a
    /// quarter turn signed like the numerator, or zero when both are zero.
    /// A zero vector has no direction and is rejected.
    pub fn angles(&self) -> GeometryResult<Angle> {
        if self.magnitude == 0.0 {
            return Err(GeometryError::degenerate(
                "zero vector has no orientation",
            ));
        }
        Ok(Angle::from_radians(
            ratio_angle(self.y, self.z),
            ratio_angle(self.x, self.y),
            ratio_angle(self.x, self.z),
        ))
    }
}

fn ratio_angle(num: f64, den: f64) -> f64 {
    if den != 0.0 {
        (num / den).atan()
    } else if num > 0.0 {
        FRAC_PI_2
    } else if num < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scalar multiplication of a vector.
impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Scalar division of a vector.
impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Self::Output {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Negation of a vector.
impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, {}, {}> |{}|",
            self.x, self.y, self.z, self.magnitude
        )
    }
}

impl AbsDiffEq for Vec3 {
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

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::angle::{STEP_DEG, STEP_RAD};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn assert_magnitude_holds(v: Vec3) {
        let expected = (v.x() * v.x() + v.y() * v.y() + v.z() * v.z()).sqrt();
        assert_relative_eq!(v.magnitude(), expected, epsilon = 1e-12);
    }

    #[test]
    fn magnitude_is_cached_on_construction() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert_relative_eq!(v.magnitude(), 13.0);
    }

    #[test]
    fn magnitude_survives_arithmetic() {
        let a = Vec3::new(1.0, -2.0, 3.5);
        let b = Vec3::new(-4.0, 0.25, 2.0);
        assert_magnitude_holds(a + b);
        assert_magnitude_holds(a - b);
        assert_magnitude_holds(a * -3.0);
        assert_magnitude_holds(a / 7.0);
        assert_magnitude_holds(-a);
        assert_magnitude_holds(a.cross(b));
        assert_magnitude_holds(a.scale_by(b));

        let mut c = a;
        c.set(6.0, 8.0, 0.0);
        assert_relative_eq!(c.magnitude(), 10.0);
    }

    #[test]
    fn unit_constants_have_unit_magnitude() {
        for v in [Vec3::RIGHT, Vec3::UP, Vec3::FORWARD] {
            assert_magnitude_holds(v);
            assert_relative_eq!(v.magnitude(), 1.0);
        }
        assert_magnitude_holds(Vec3::ZERO);
    }

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_relative_eq!(a.dot(b), 12.0);
        assert_relative_eq!(Vec3::RIGHT.dot(Vec3::UP), 0.0);
    }

    #[test]
    fn cross_product_uses_the_determinant_formula() {
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
        assert_eq!(Vec3::UP.cross(Vec3::FORWARD), Vec3::RIGHT);
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
        assert_relative_eq!(a.cross(b).dot(a), 0.0);
    }

    #[test]
    fn normalize() {
        let n = Vec3::new(0.0, 3.0, 4.0).normalize().unwrap();
        assert_relative_eq!(n, Vec3::new(0.0, 0.6, 0.8));
        assert_relative_eq!(n.magnitude(), 1.0);
    }

    #[test]
    fn normalize_zero_is_degenerate() {
        assert!(matches!(
            Vec3::ZERO.normalize(),
            Err(GeometryError::DegenerateInput(_))
        ));
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn angles_handle_zero_denominators() {
        let a = Vec3::RIGHT.angles().unwrap();
        // x / 0 resolves to a quarter turn on yaw and roll
        assert_relative_eq!(a.yaw_rad(), FRAC_PI_2, epsilon = STEP_RAD);
        assert_relative_eq!(a.roll_rad(), FRAC_PI_2, epsilon = STEP_RAD);
        assert_eq!(a.around_x(), 0);

        let b = Vec3::new(1.0, 1.0, 1.0).angles().unwrap();
        assert_relative_eq!(b.pitch_rad(), FRAC_PI_4, epsilon = STEP_RAD);
        assert_relative_eq!(b.yaw_rad(), FRAC_PI_4, epsilon = STEP_RAD);
        assert_relative_eq!(b.roll_rad(), FRAC_PI_4, epsilon = STEP_RAD);
    }

    #[test]
    fn angles_keep_the_ratio_half_turn() {
        // atan(1 / -1) is -45 degrees, stored as 315
        let a = Vec3::new(0.0, 1.0, -1.0).angles().unwrap();
        assert_relative_eq!(a.pitch_deg(), 315.0, epsilon = STEP_DEG);
        assert_eq!(a.around_z(), 0);
        assert_eq!(a.around_y(), 0);

        let b = Vec3::new(-2.0, 2.0, -2.0).angles().unwrap();
        assert_relative_eq!(b.pitch_deg(), 315.0, epsilon = STEP_DEG);
        assert_relative_eq!(b.yaw_deg(), 315.0, epsilon = STEP_DEG);
        assert_relative_eq!(b.roll_deg(), 45.0, epsilon = STEP_DEG);

        let c = Vec3::new(-1.0, 0.0, 0.0).angles().unwrap();
        assert_relative_eq!(c.yaw_deg(), 270.0, epsilon = STEP_DEG);
    }

    #[test]
    fn display_shows_components_and_magnitude() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).to_string(), "<3, 4, 0> |5|");
    }

    #[test]
    fn angles_of_zero_vector_fail() {
        assert!(Vec3::ZERO.angles().is_err());
    }

    #[test]
    fn between_points() {
        let v = Vec3::between(Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 3.0, 4.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }
}
