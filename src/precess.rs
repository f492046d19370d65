//! Run a simulation headlessly for one generalized Rabi period and log where
//! the state ends up.
//!
//! Usage: `precess [config.toml]`

use std::f64::consts::TAU;
use anyhow::Context;
use tracing::{ info, warn };
use bloch_precession::{
    telemetry::init_tracing,
    EffectiveField,
    SimConfig,
    Simulation,
};

// ticks to run when there is no drive to define a period
const IDLE_TICKS: usize = 100;

// longest run allowed for very weak drives
const MAX_TICKS: usize = 1_000_000;

fn period_ticks(field: &EffectiveField, dt: f64) -> usize {
    if field.is_zero() {
        warn!("no drive or detuning; state will not move");
        return IDLE_TICKS;
    }
    let period = TAU / field.magnitude / dt;
    if !period.is_finite() || period > MAX_TICKS as f64 {
        warn!(period, max = MAX_TICKS, "period too long; truncating run");
        MAX_TICKS
    } else {
        (period.round() as usize).max(1)
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config
        = match std::env::args().nth(1) {
            Some(path) => SimConfig::load(&path)
                .with_context(|| format!("couldn't load config from {}", path))?,
            None => SimConfig::default(),
        };
    info!(?config, "loaded config");

    let mut sim = Simulation::from_config(&config)?;
    sim.set_running(true);

    let field = sim.effective_field();
    let ticks = period_ticks(&field, sim.dt());
    info!(ticks, b_eff = field.magnitude, "running one period");

    let mut max_excited: f64 = 0.0;
    for _ in 0..ticks {
        sim.tick();
        max_excited = max_excited.max(sim.populations().0);
    }

    let (theta, phi) = sim.current_spherical();
    let (excited, ground) = sim.populations();
    info!(
        theta,
        phi,
        elapsed = sim.elapsed_time(),
        excited,
        ground,
        max_excited,
        trail_len = sim.trail_points().len(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use bloch_precession::DriveParams;
    use super::*;

    #[test]
    fn ticks_for_one_period() {
        // 2 MHz Rabi frequency: 0.5 μs period
        let field = DriveParams::new(2.0, 0.0).field();
        assert_eq!(period_ticks(&field, 0.01), 50);
        assert_eq!(period_ticks(&DriveParams::default().field(), 0.01), IDLE_TICKS);
    }

    #[test]
    fn weak_drive_is_capped() {
        let field = DriveParams::new(1e-12, 0.0).field();
        assert_eq!(period_ticks(&field, 0.01), MAX_TICKS);
        let field = DriveParams::new(2.0, 0.0).field();
        assert_eq!(period_ticks(&field, f64::MIN_POSITIVE), MAX_TICKS);
        // an overflowing field still takes a step
        let field = DriveParams::new(f64::MAX, 0.0).field();
        assert_eq!(period_ticks(&field, 0.01), 1);
    }
}
