//! Driving parameters and the effective field they generate in the frame of
//! the drive.

use std::f64::consts::TAU;
use crate::vector::Vec3;

/// Parameters of the applied drive.
///
/// Both values are frequencies in MHz (cycles per microsecond) and may be any
/// finite real number; a negative Rabi frequency reverses the sense of
/// rotation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DriveParams {
    /// Rabi frequency of the drive.
    pub rabi_frequency: f64,
    /// Drive frequency minus resonance frequency.
    pub detuning: f64,
}

impl DriveParams {
    /// Create a new `DriveParams`.
    pub fn new(rabi_frequency: f64, detuning: f64) -> Self {
        Self { rabi_frequency, detuning }
    }

    /// Compute the effective field.
    pub fn field(&self) -> EffectiveField { EffectiveField::from(*self) }
}

/// Effective field in angular-frequency units (rad/μs).
///
/// Its direction is the instantaneous rotation axis of the Bloch vector and
/// its magnitude the rotation rate. There is no quadrature drive, so the `y`
/// component is always zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EffectiveField {
    pub bx: f64,
    pub by: f64,
    pub bz: f64,
    /// Magnitude of `(bx, by, bz)`.
    pub magnitude: f64,
}

impl From<DriveParams> for EffectiveField {
    fn from(drive: DriveParams) -> Self {
        let bx = TAU * drive.rabi_frequency;
        let by = 0.0;
        let bz = TAU * drive.detuning;
        let magnitude = bx.hypot(by).hypot(bz);
        Self { bx, by, bz, magnitude }
    }
}

impl EffectiveField {
    /// Return `(bx, by, bz)` as a vector.
    pub fn vector(&self) -> Vec3 { Vec3::new(self.bx, self.by, self.bz) }

    /// Return `(bx, by, bz, magnitude)`.
    pub fn components(&self) -> (f64, f64, f64, f64) {
        (self.bx, self.by, self.bz, self.magnitude)
    }

    /// Return `true` if the field vanishes, in which case there is no rotation
    /// axis.
    pub fn is_zero(&self) -> bool { self.magnitude == 0.0 }

    /// Return the unit rotation axis, or `None` if the field is zero or too
    /// strong to be represented.
    pub fn axis(&self) -> Option<Vec3> {
        (!self.is_zero() && self.magnitude.is_finite())
            .then(|| self.vector().map(|b| b / self.magnitude))
    }

    /// Return the angle swept over a time `dt`.
    pub fn rotation_angle(&self, dt: f64) -> f64 { self.magnitude * dt }

    /// Return the field vector scaled for display as an arrow of at most
    /// `length`.
    ///
    /// Fields weaker than 1 rad/μs are drawn proportionally shorter; a field
    /// without an [axis][Self::axis] gives a zero vector.
    pub fn arrow(&self, length: f64) -> Vec3 {
        match self.axis() {
            Some(axis) => axis * (length * self.magnitude.min(1.0)),
            None => Vec3::zeros(),
        }
    }
}
