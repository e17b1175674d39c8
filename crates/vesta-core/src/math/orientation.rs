// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions between facing directions and pitch/yaw/roll angle triples.
//!
//! Angles follow the renderer's convention: degrees, `x`-forward, `z`-up,
//! positive pitch looks *down*. [`pitch_yaw_roll_from_direction`] and
//! [`angle_vectors`] are inverses of each other under that convention.
//!
//! Inverse trigonometry is routed through [`safe_asin`] and [`safe_atan2`],
//! which return a [`DomainError`] instead of producing NaN or an arbitrary
//! angle for undefined inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{degrees_to_radians, radians_to_degrees, Vec3};

/// A specialized `Result` type for orientation math.
pub type DomainResult<T> = Result<T, DomainError>;

/// A mathematical precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// An input component was NaN.
    NotANumber,
    /// The argument to `asin` was outside `[-1, 1]`.
    AsinOutOfDomain(f32),
    /// Both arguments to `atan2` were zero, so no angle is defined.
    Atan2Undefined,
    /// An auxiliary basis vector had zero length.
    DegenerateBasis(&'static str),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotANumber => write!(f, "Value is NaN"),
            DomainError::AsinOutOfDomain(value) => {
                write!(f, "Value {value} out of asin domain [-1, 1]")
            }
            DomainError::Atan2Undefined => write!(f, "atan2 is undefined for (0, 0)"),
            DomainError::DegenerateBasis(name) => {
                write!(f, "Basis vector '{name}' has zero length")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// `asin` that rejects NaN and arguments outside `[-1, 1]`.
#[inline]
pub fn safe_asin(x: f32) -> DomainResult<f32> {
    if x.is_nan() {
        return Err(DomainError::NotANumber);
    }
    if !(-1.0..=1.0).contains(&x) {
        return Err(DomainError::AsinOutOfDomain(x));
    }
    Ok(x.asin())
}

/// `atan2` that rejects NaN and the undefined `(0, 0)` input.
#[inline]
pub fn safe_atan2(y: f32, x: f32) -> DomainResult<f32> {
    if y.is_nan() || x.is_nan() {
        return Err(DomainError::NotANumber);
    }
    if y == 0.0 && x == 0.0 {
        return Err(DomainError::Atan2Undefined);
    }
    Ok(y.atan2(x))
}

/// A pitch/yaw/roll triple, in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the right axis. Positive looks down.
    pub pitch: f32,
    /// Rotation about the world up axis, counter-clockwise from `+x`.
    pub yaw: f32,
    /// Rotation about the forward axis.
    pub roll: f32,
}

impl EulerAngles {
    /// Creates a new angle triple.
    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// Decomposes a facing direction into pitch, yaw and roll.
///
/// `dir` must be unit length (or at least have `|dir.z| <= 1`) and must not be
/// vertical. `up_hint` fixes the roll: it must not be parallel to `dir`.
///
/// # Errors
///
/// - [`DomainError::AsinOutOfDomain`] if `dir.z` is outside `[-1, 1]`.
/// - [`DomainError::Atan2Undefined`] if `dir` has no horizontal component, or
///   if `up_hint` has no component perpendicular to `dir`.
/// - [`DomainError::DegenerateBasis`] if an auxiliary vector collapses to zero.
/// - [`DomainError::NotANumber`] if any input is NaN.
pub fn pitch_yaw_roll_from_direction(up_hint: Vec3, dir: Vec3) -> DomainResult<EulerAngles> {
    if up_hint.is_nan() || dir.is_nan() {
        return Err(DomainError::NotANumber);
    }

    let pitch = safe_asin(dir.z)?;
    let yaw = safe_atan2(dir.y, dir.x)?;

    // w0 is horizontal and perpendicular to dir; u0 completes the basis.
    let w0 = Vec3::new(-dir.y, dir.x, 0.0);
    let u0 = w0.cross(dir);

    let w0_len = w0.length();
    if w0_len == 0.0 {
        return Err(DomainError::DegenerateBasis("w0"));
    }
    let u0_len = u0.length();
    if u0_len == 0.0 {
        return Err(DomainError::DegenerateBasis("u0"));
    }

    let roll = safe_atan2(w0.dot(up_hint) / w0_len, u0.dot(up_hint) / u0_len)?;

    Ok(EulerAngles {
        pitch: -radians_to_degrees(pitch),
        yaw: radians_to_degrees(yaw),
        roll: radians_to_degrees(roll) - 180.0,
    })
}

/// The orthonormal basis described by an angle triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngledVectors {
    /// The facing direction.
    pub forward: Vec3,
    /// Points to the right of `forward`.
    pub right: Vec3,
    /// Points up, relative to `forward` and the roll.
    pub up: Vec3,
}

/// Builds the forward/right/up basis for an angle triple.
pub fn angle_vectors(angles: EulerAngles) -> AngledVectors {
    let (sy, cy) = degrees_to_radians(angles.yaw).sin_cos();
    let (sp, cp) = degrees_to_radians(angles.pitch).sin_cos();
    let (sr, cr) = degrees_to_radians(angles.roll).sin_cos();

    AngledVectors {
        forward: Vec3::new(cp * cy, cp * sy, -sp),
        right: Vec3::new(
            -sr * sp * cy + cr * sy,
            -sr * sp * sy - cr * cy,
            -sr * cp,
        ),
        up: Vec3::new(cr * sp * cy + sr * sy, cr * sp * sy - sr * cy, cr * cp),
    }
}

/// Returns the facing direction for an angle triple.
#[inline]
pub fn direction_from_pitch_yaw_roll(angles: EulerAngles) -> Vec3 {
    angle_vectors(angles).forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-4;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = TOLERANCE);
        assert_relative_eq!(a.y, b.y, epsilon = TOLERANCE);
        assert_relative_eq!(a.z, b.z, epsilon = TOLERANCE);
    }

    #[test]
    fn test_safe_asin() {
        assert_relative_eq!(safe_asin(1.0).unwrap(), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(safe_asin(-1.0).unwrap(), -std::f32::consts::FRAC_PI_2);
        assert_eq!(safe_asin(1.5), Err(DomainError::AsinOutOfDomain(1.5)));
        assert_eq!(safe_asin(f32::NAN), Err(DomainError::NotANumber));
    }

    #[test]
    fn test_safe_atan2() {
        assert_relative_eq!(safe_atan2(1.0, 0.0).unwrap(), std::f32::consts::FRAC_PI_2);
        assert_eq!(safe_atan2(0.0, 0.0), Err(DomainError::Atan2Undefined));
        assert_eq!(safe_atan2(0.0, f32::NAN), Err(DomainError::NotANumber));
    }

    #[test]
    fn test_level_forward_is_zero_angles() {
        let angles = pitch_yaw_roll_from_direction(Vec3::Z, Vec3::X).unwrap();
        assert_relative_eq!(angles.pitch, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.yaw, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.roll, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_yaw_and_pitch_convention() {
        let left = pitch_yaw_roll_from_direction(Vec3::Z, Vec3::Y).unwrap();
        assert_relative_eq!(left.yaw, 90.0, epsilon = TOLERANCE);

        // Looking up 45 degrees yields a negative pitch.
        let up_45 = Vec3::new(1.0, 0.0, 1.0).normalize();
        let angles = pitch_yaw_roll_from_direction(Vec3::Z, up_45).unwrap();
        assert_relative_eq!(angles.pitch, -45.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.yaw, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.roll, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_direction_round_trip() {
        let dirs = [
            Vec3::X,
            Vec3::Y,
            -Vec3::Y,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-2.0, 0.5, 1.0),
            Vec3::new(0.3, -0.8, -0.5),
            Vec3::new(-1.0, -1.0, 3.0),
        ];
        for raw in dirs {
            let dir = raw.normalize();
            let angles = pitch_yaw_roll_from_direction(Vec3::Z, dir).unwrap();
            assert_vec3_near(direction_from_pitch_yaw_roll(angles), dir);
        }
    }

    #[test]
    fn test_roll_recovers_up_hint() {
        let half_sqrt3 = 3.0_f32.sqrt() / 2.0;
        let cases = [
            (Vec3::X, Vec3::Y, -90.0),
            (Vec3::Y, -Vec3::X, -90.0),
            (Vec3::X, Vec3::new(0.0, 0.5, half_sqrt3), -30.0),
        ];
        for (dir, up, expected_roll) in cases {
            let angles = pitch_yaw_roll_from_direction(up, dir).unwrap();
            assert_relative_eq!(angles.roll, expected_roll, epsilon = TOLERANCE);

            let basis = angle_vectors(angles);
            assert_vec3_near(basis.forward, dir);
            assert_vec3_near(basis.up, up);
        }
    }

    #[test]
    fn test_angle_vectors_are_orthonormal() {
        let basis = angle_vectors(EulerAngles::new(-20.0, 135.0, 15.0));
        assert_relative_eq!(basis.forward.length(), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(basis.right.length(), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(basis.up.length(), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(basis.forward.dot(basis.right), 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(basis.forward.dot(basis.up), 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(basis.right.dot(basis.up), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_degenerate_inputs() {
        // Vertical: no horizontal projection, so yaw is undefined.
        assert_eq!(
            pitch_yaw_roll_from_direction(Vec3::X, Vec3::Z),
            Err(DomainError::Atan2Undefined)
        );
        // Up hint parallel to the direction leaves roll undefined.
        assert_eq!(
            pitch_yaw_roll_from_direction(Vec3::X, Vec3::X),
            Err(DomainError::Atan2Undefined)
        );
        // Non-unit direction past the asin domain.
        assert_eq!(
            pitch_yaw_roll_from_direction(Vec3::Z, Vec3::new(1.0, 0.0, 2.0)),
            Err(DomainError::AsinOutOfDomain(2.0))
        );
        // A tiny direction underflows the basis length.
        assert_eq!(
            pitch_yaw_roll_from_direction(Vec3::Z, Vec3::new(1e-30, 0.0, 0.0)),
            Err(DomainError::DegenerateBasis("w0"))
        );
        assert_eq!(
            pitch_yaw_roll_from_direction(Vec3::Z, Vec3::new(f32::NAN, 1.0, 0.0)),
            Err(DomainError::NotANumber)
        );
    }
}
