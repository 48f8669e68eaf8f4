//! Compact orientation encoding.
//!
//! An [`Angle`] stores one signed 16-bit component per axis. Each unit is a
//! fixed fraction of a full turn, [`STEP_RAD`] radians or [`STEP_DEG`]
//! degrees, so a component always lies in `[0, STEPS_PER_TURN)`.
//!
//! # Axis mapping
//! - pitch: rotation around X
//! - yaw: rotation around Z
//! - roll: rotation around Y
//!
//! Setters normalize their input into one positive turn and then truncate to
//! the step below, so reading a value back loses less than one step.

use std::f64::consts::TAU;
use std::fmt;

/// Number of encoding units in one full turn.
pub const STEPS_PER_TURN: i16 = i16::MAX;

/// Radians per encoding unit (`2π / 32767`).
pub const STEP_RAD: f64 = TAU / STEPS_PER_TURN as f64;

/// Degrees per encoding unit (`360 / 32767`).
pub const STEP_DEG: f64 = 360.0 / STEPS_PER_TURN as f64;

/// Normalizes `value` into `[0, turn)` and truncates it to whole steps.
fn quantize(value: f64, turn: f64, step: f64) -> i16 {
    let normalized = value.rem_euclid(turn);
    // rem_euclid can round up to exactly one turn for tiny negative inputs
    if !normalized.is_finite() || normalized == 0.0 || normalized >= turn {
        return 0;
    }
    let steps = (normalized / step) as i32;
    if steps >= i32::from(STEPS_PER_TURN) {
        0
    } else {
        steps as i16
    }
}

/// An orientation stored as three quantized per-axis components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Angle {
    around_x: i16,
    around_z: i16,
    around_y: i16,
}

impl Angle {
    pub const ZERO: Self = Self {
        around_x: 0,
        around_z: 0,
        around_y: 0,
    };

    /// Builds an angle from pitch, yaw and roll in radians.
    pub fn from_radians(pitch: f64, yaw: f64, roll: f64) -> Self {
        let mut angle = Self::ZERO;
        angle
            .set_pitch_rad(pitch)
            .set_yaw_rad(yaw)
            .set_roll_rad(roll);
        angle
    }

    /// Builds an angle from pitch, yaw and roll in degrees.
    pub fn from_degrees(pitch: f64, yaw: f64, roll: f64) -> Self {
        let mut angle = Self::ZERO;
        angle
            .set_pitch_deg(pitch)
            .set_yaw_deg(yaw)
            .set_roll_deg(roll);
        angle
    }

    // ============ Raw components ============

    /// Raw X (pitch) component in encoding units.
    pub fn around_x(&self) -> i16 {
        self.around_x
    }

    /// Raw Z (yaw) component in encoding units.
    pub fn around_z(&self) -> i16 {
        self.around_z
    }

    /// Raw Y (roll) component in encoding units.
    pub fn around_y(&self) -> i16 {
        self.around_y
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The angle that undoes each component on its own axis.
    ///
    /// Exact on the integer encoding: `a` and `a.inverse()` sum to whole turns.
    pub fn inverse(&self) -> Self {
        let flip = |c: i16| if c == 0 { 0 } else { STEPS_PER_TURN - c };
        Self {
            around_x: flip(self.around_x),
            around_z: flip(self.around_z),
            around_y: flip(self.around_y),
        }
    }

    // ============ Pitch ============

    pub fn pitch_rad(&self) -> f64 {
        f64::from(self.around_x) * STEP_RAD
    }

    pub fn pitch_deg(&self) -> f64 {
        f64::from(self.around_x) * STEP_DEG
    }

    pub fn set_pitch_rad(&mut self, radians: f64) -> &mut Self {
        self.around_x = quantize(radians, TAU, STEP_RAD);
        self
    }

    pub fn set_pitch_deg(&mut self, degrees: f64) -> &mut Self {
        self.around_x = quantize(degrees, 360.0, STEP_DEG);
        self
    }

    // ============ Yaw ============

    pub fn yaw_rad(&self) -> f64 {
        f64::from(self.around_z) * STEP_RAD
    }

    pub fn yaw_deg(&self) -> f64 {
        f64::from(self.around_z) * STEP_DEG
    }

    pub fn set_yaw_rad(&mut self, radians: f64) -> &mut Self {
        self.around_z = quantize(radians, TAU, STEP_RAD);
        self
    }

    pub fn set_yaw_deg(&mut self, degrees: f64) -> &mut Self {
        self.around_z = quantize(degrees, 360.0, STEP_DEG);
        self
    }

    // ============ Roll ============

    pub fn roll_rad(&self) -> f64 {
        f64::from(self.around_y) * STEP_RAD
    }

    pub fn roll_deg(&self) -> f64 {
        f64::from(self.around_y) * STEP_DEG
    }

    pub fn set_roll_rad(&mut self, radians: f64) -> &mut Self {
        self.around_y = quantize(radians, TAU, STEP_RAD);
        self
    }

    pub fn set_roll_deg(&mut self, degrees: f64) -> &mut Self {
        self.around_y = quantize(degrees, 360.0, STEP_DEG);
        self
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Angle(pitch: {:.4}°, yaw: {:.4}°, roll: {:.4}°)",
            self.pitch_deg(),
            self.yaw_deg(),
            self.roll_deg()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn display_in_degrees() {
        assert_eq!(
            Angle::ZERO.to_string(),
            "Angle(pitch: 0.0000°, yaw: 0.0000°, roll: 0.0000°)"
        );
        // 90 degrees truncates to step 8191
        assert_eq!(
            Angle::from_degrees(90.0, 0.0, 0.0).to_string(),
            "Angle(pitch: 89.9918°, yaw: 0.0000°, roll: 0.0000°)"
        );
    }

    #[test]
    fn zero_stays_zero() {
        let mut a = Angle::ZERO;
        a.set_pitch_deg(0.0).set_yaw_rad(0.0).set_roll_deg(-0.0);
        assert!(a.is_zero());
        a.set_pitch_deg(360.0).set_yaw_rad(TAU);
        assert!(a.is_zero());
    }

    #[test]
    fn degrees_round_trip_within_one_step() {
        for d in [0.5, 1.0, 45.0, 90.0, 123.456, 180.0, 270.0, 359.99] {
            let mut a = Angle::ZERO;
            a.set_pitch_deg(d);
            let back = a.pitch_deg();
            assert!(back <= d + 1e-9, "{back} > {d}");
            assert!(d - back < STEP_DEG + 1e-9, "{d} - {back} too large");
        }
    }

    #[test]
    fn radians_and_degrees_agree() {
        let mut a = Angle::ZERO;
        a.set_yaw_rad(FRAC_PI_2);
        assert_relative_eq!(a.yaw_deg(), 90.0, epsilon = STEP_DEG);
        assert_relative_eq!(a.yaw_rad(), FRAC_PI_2, epsilon = STEP_RAD);
    }

    #[test]
    fn many_turns_normalize() {
        let mut a = Angle::ZERO;
        a.set_roll_deg(720.0 + 30.0);
        assert_relative_eq!(a.roll_deg(), 30.0, epsilon = STEP_DEG);
        a.set_roll_rad(10.0 * TAU + PI);
        assert_relative_eq!(a.roll_rad(), PI, epsilon = STEP_RAD * 2.0);
    }

    #[test]
    fn negative_inputs_wrap_into_one_turn() {
        let mut a = Angle::ZERO;
        a.set_pitch_deg(-90.0);
        assert_relative_eq!(a.pitch_deg(), 270.0, epsilon = STEP_DEG);
        a.set_pitch_deg(-1e-20);
        assert_eq!(a.around_x(), 0);
    }

    #[test]
    fn roll_reads_the_y_component() {
        let a = Angle::from_degrees(10.0, 20.0, 30.0);
        assert_relative_eq!(a.pitch_deg(), 10.0, epsilon = STEP_DEG);
        assert_relative_eq!(a.yaw_deg(), 20.0, epsilon = STEP_DEG);
        assert_relative_eq!(a.roll_deg(), 30.0, epsilon = STEP_DEG);
        assert_relative_eq!(a.roll_rad(), 30f64.to_radians(), epsilon = STEP_RAD);
    }

    #[test]
    fn inverse_sums_to_whole_turns() {
        let a = Angle::from_degrees(10.0, 0.0, 300.0);
        let inv = a.inverse();
        assert_eq!(inv.around_z(), 0);
        assert_eq!(a.around_x() + inv.around_x(), STEPS_PER_TURN);
        assert_eq!(a.around_y() + inv.around_y(), STEPS_PER_TURN);
        assert_relative_eq!(inv.pitch_rad().sin(), -a.pitch_rad().sin(), epsilon = 1e-12);
        assert_eq!(inv.inverse(), a);
    }

    #[test]
    fn components_stay_below_one_turn() {
        let mut a = Angle::ZERO;
        a.set_pitch_deg(360.0 - 1e-12);
        assert!(a.around_x() < STEPS_PER_TURN);
        assert!(a.around_x() >= 0);
    }
}
