//! Exact stepwise evolution of the Bloch vector under a piecewise-constant
//! drive.
//!
//! For a constant effective field `ω`, the Bloch equation `dv/dt = ω × v` is
//! solved by a rigid rotation of `v` about `ω` by the angle `|ω| t`. Each step
//! applies this rotation in closed form (Rodrigues' formula), so the only
//! approximation is that the drive is held constant over a step.

use itertools::Itertools;
use ndarray as nd;
use tracing::trace;
use crate::{
    bloch::{ State, to_spherical },
    field::DriveParams,
    vector::Vec3,
};

/// Default time step, in microseconds.
pub const DT: f64 = 0.01;

/// Rotate `v` about the unit vector `axis` by `angle` using Rodrigues' formula:
/// ```text
/// v' = v cos(a) + (u × v) sin(a) + u (u · v) (1 - cos(a))
/// ```
///
/// `axis` must already be normalized.
pub fn rotate(v: &Vec3, axis: &Vec3, angle: f64) -> Vec3 {
    let (sin_a, cos_a) = angle.sin_cos();
    *v * cos_a
        + axis.cross(v) * sin_a
        + *axis * (axis.dot(v) * (1.0 - cos_a))
}

/// Advance `state` by one time step `dt` under the drive `params`.
///
/// If the effective field vanishes, or the field or swept angle overflows, the
/// angles are left untouched; elapsed time advances either way.
pub fn step(state: &State, params: &DriveParams, dt: f64) -> State {
    let field = params.field();
    let angle = field.rotation_angle(dt);
    let (theta, phi)
        = match field.axis().filter(|_| angle.is_finite()) {
            Some(axis) => {
                to_spherical(&rotate(&state.cartesian(), &axis, angle))
            },
            None => state.spherical(),
        };
    let elapsed = state.elapsed + dt;
    trace!(theta, phi, elapsed, b_eff = field.magnitude, "step");
    State { theta, phi, elapsed }
}

/// Compute the cartesian trajectory of `state` under a constant drive, sampled
/// at the times in `time`.
///
/// The returned array has shape `(3, time.len())` with time along the last
/// axis; the first column is `state` itself and each subsequent column is
/// reached by a single [`step`] spanning the interval between samples, so
/// `time` need not be uniformly spaced.
pub fn evolve(state: &State, params: &DriveParams, time: &nd::Array1<f64>)
    -> nd::Array2<f64>
{
    let mut traj: nd::Array2<f64> = nd::Array2::zeros((3, time.len()));
    if time.is_empty() { return traj; }
    let mut cur: State = *state;
    traj.column_mut(0).assign(&nd::arr1(&cur.cartesian().0));
    let iter = time.iter().tuple_windows().enumerate();
    for (k, (&tk, &tkp1)) in iter {
        cur = step(&cur, params, tkp1 - tk);
        traj.column_mut(k + 1).assign(&nd::arr1(&cur.cartesian().0));
    }
    traj
}
