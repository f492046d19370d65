//! Points on the Bloch sphere and conversions between their spherical and
//! cartesian representations.
//!
//! The north pole (`θ = 0`) is the excited state `|e⟩` and the south pole
//! (`θ = π`) is the ground state `|g⟩`.

use std::f64::consts::PI;
use num_complex::Complex64 as C64;
use crate::vector::Vec3;

/// Convert spherical angles to a cartesian point on the unit sphere.
///
/// Defined for all real `theta` and `phi`.
pub fn to_cartesian(theta: f64, phi: f64) -> Vec3 {
    let (sin_th, cos_th) = theta.sin_cos();
    let (sin_ph, cos_ph) = phi.sin_cos();
    Vec3::new(sin_th * cos_ph, sin_th * sin_ph, cos_th)
}

/// Convert a cartesian point to spherical angles `(theta, phi)`.
///
/// `z` is clamped to `[-1, 1]` before `acos` so that rounding error cannot
/// produce a NaN; `phi` comes from `atan2` and so lies in `(-π, π]`, with
/// `phi = 0` on the `z` axis. The input is not re-normalized.
pub fn to_spherical(v: &Vec3) -> (f64, f64) {
    let theta = v.z().clamp(-1.0, 1.0).acos();
    let phi = v.y().atan2(v.x());
    (theta, phi)
}

/// Qubit state on the Bloch sphere along with the simulated time elapsed since
/// the last reset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct State {
    /// Polar angle.
    pub theta: f64,
    /// Azimuthal angle.
    pub phi: f64,
    /// Elapsed simulated time, in microseconds.
    pub elapsed: f64,
}

impl Default for State {
    fn default() -> Self { Self::ground() }
}

impl State {
    /// Create a new state at `t = 0`.
    pub fn new(theta: f64, phi: f64) -> Self { Self { theta, phi, elapsed: 0.0 } }

    /// The ground state `|g⟩` (south pole) at `t = 0`.
    pub fn ground() -> Self { Self::new(PI, 0.0) }

    /// The excited state `|e⟩` (north pole) at `t = 0`.
    pub fn excited() -> Self { Self::new(0.0, 0.0) }

    /// Create a new state at `t = 0` from a cartesian point.
    ///
    /// See [`to_spherical`].
    pub fn from_cartesian(v: &Vec3) -> Self {
        let (theta, phi) = to_spherical(v);
        Self::new(theta, phi)
    }

    /// Return the cartesian projection `(sinθ cosφ, sinθ sinφ, cosθ)`.
    pub fn cartesian(&self) -> Vec3 { to_cartesian(self.theta, self.phi) }

    /// Return `(theta, phi)`.
    pub fn spherical(&self) -> (f64, f64) { (self.theta, self.phi) }

    /// Return the `(excited, ground)` state populations.
    pub fn populations(&self) -> (f64, f64) {
        let cos_th = self.theta.cos();
        ((1.0 + cos_th) / 2.0, (1.0 - cos_th) / 2.0)
    }

    /// Return the state amplitudes in the `(|e⟩, |g⟩)` basis, taking the
    /// global phase such that the `|e⟩` amplitude is real and non-negative.
    pub fn amplitudes(&self) -> [C64; 2] {
        let half = self.theta / 2.0;
        [
            C64::from(half.cos()),
            C64::from_polar(half.sin(), self.phi),
        ]
    }

    /// Create a new state at `t = 0` from amplitudes in the `(|e⟩, |g⟩)`
    /// basis.
    ///
    /// The amplitudes are normalized and their global phase discarded. Returns
    /// `None` if both are zero.
    pub fn from_amplitudes(amps: [C64; 2]) -> Option<Self> {
        let [ce, cg] = amps;
        let norm = ce.norm_sqr() + cg.norm_sqr();
        if norm == 0.0 { return None; }
        // ⟨σ_x⟩ + i⟨σ_y⟩ = 2 ce* cg
        let coh = 2.0 * ce.conj() * cg / norm;
        let z = (ce.norm_sqr() - cg.norm_sqr()) / norm;
        Some(Self::from_cartesian(&Vec3::new(coh.re, coh.im, z)))
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::{ FRAC_PI_2, FRAC_PI_4 };
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn poles() {
        let g = State::ground().cartesian();
        assert_abs_diff_eq!(g.z(), -1.0);
        assert_abs_diff_eq!(g.x(), 0.0, epsilon = 1e-15);
        let e = State::excited().cartesian();
        assert_eq!(e, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn spherical_cartesian_roundtrip() {
        let (theta, phi) = (1.1, -2.3);
        let v = to_cartesian(theta, phi);
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = 1e-15);
        let (th, ph) = to_spherical(&v);
        assert_abs_diff_eq!(th, theta, epsilon = 1e-12);
        assert_abs_diff_eq!(ph, phi, epsilon = 1e-12);
    }

    #[test]
    fn drifted_z_is_clamped() {
        let (theta, phi) = to_spherical(&Vec3::new(0.0, 0.0, 1.0 + 1e-12));
        assert_eq!(theta, 0.0);
        assert_eq!(phi, 0.0);
        let (theta, _) = to_spherical(&Vec3::new(0.0, 0.0, -1.0 - 1e-12));
        assert_eq!(theta, PI);
    }

    #[test]
    fn azimuth_is_atan2() {
        let (_, phi) = to_spherical(&Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(phi, PI);
        let (_, phi) = to_spherical(&Vec3::new(0.0, -1.0, 0.0));
        assert_abs_diff_eq!(phi, -FRAC_PI_2);
    }

    #[test]
    fn populations() {
        let (pe, pg) = State::ground().populations();
        assert_abs_diff_eq!(pe, 0.0);
        assert_abs_diff_eq!(pg, 1.0);
        let (pe, pg) = State::new(FRAC_PI_2, 0.3).populations();
        assert_abs_diff_eq!(pe, 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(pg, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn amplitudes_roundtrip() {
        let state = State::new(2.0 * FRAC_PI_4 + 0.2, 0.7);
        let [ce, cg] = state.amplitudes();
        assert_abs_diff_eq!(ce.norm_sqr() + cg.norm_sqr(), 1.0, epsilon = 1e-15);
        // global phase must not matter
        let phase = C64::from_polar(1.0, 1.234);
        let back = State::from_amplitudes([ce * phase, cg * phase]).unwrap();
        assert_abs_diff_eq!(back.theta, state.theta, epsilon = 1e-12);
        assert_abs_diff_eq!(back.phi, state.phi, epsilon = 1e-12);
        assert!(State::from_amplitudes([C64::from(0.0); 2]).is_none());
    }

    #[test]
    fn unnormalized_amplitudes() {
        let back
            = State::from_amplitudes([C64::from(0.0), C64::from(3.0)]).unwrap();
        assert_eq!(back.theta, PI);
    }
}
