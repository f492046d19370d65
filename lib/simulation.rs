//! Owned simulation state with play/pause and reset controls.
//!
//! A [`Simulation`] is driven by an external scheduler calling
//! [`tick`][Simulation::tick] once per frame; renderers read it through the
//! `&self` accessors and control panels mutate it between ticks.

use tracing::debug;
use crate::{
    bloch::State,
    config::{ ConfigResult, SimConfig },
    field::{ DriveParams, EffectiveField },
    integrator,
    trail::Trail,
    vector::Vec3,
};

/// Whether ticks advance the state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    /// Return the other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Stopped => Self::Running,
            Self::Running => Self::Stopped,
        }
    }
}

/// A driven qubit on the Bloch sphere together with its recent history.
#[derive(Clone, Debug)]
pub struct Simulation {
    state: State,
    drive: DriveParams,
    trail: Trail,
    run_state: RunState,
    dt: f64,
}

impl Default for Simulation {
    fn default() -> Self { Self::new() }
}

impl Simulation {
    /// Create a new, stopped simulation in the ground state with default
    /// settings.
    pub fn new() -> Self { Self::with_config(&SimConfig::default()) }

    /// Create a new simulation from a [validated][SimConfig::validate]
    /// configuration.
    pub fn from_config(config: &SimConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: &SimConfig) -> Self {
        Self {
            state: State::ground(),
            drive: DriveParams::new(config.rabi_frequency, config.detuning),
            trail: Trail::with_capacity(config.trail_capacity),
            run_state:
                if config.running { RunState::Running } else { RunState::Stopped },
            dt: config.dt,
        }
    }

    /// Set the Rabi frequency in MHz, taking effect on the next step.
    pub fn set_rabi_frequency(&mut self, rabi_frequency: f64) {
        debug!(rabi_frequency, "set Rabi frequency");
        self.drive.rabi_frequency = rabi_frequency;
    }

    /// Set the detuning in MHz, taking effect on the next step.
    pub fn set_detuning(&mut self, detuning: f64) {
        debug!(detuning, "set detuning");
        self.drive.detuning = detuning;
    }

    /// Switch between running and stopped.
    pub fn toggle_running(&mut self) {
        self.run_state = self.run_state.toggled();
        debug!(run_state = ?self.run_state, "toggled");
    }

    /// Start or stop the simulation.
    pub fn set_running(&mut self, running: bool) {
        self.run_state
            = if running { RunState::Running } else { RunState::Stopped };
        debug!(run_state = ?self.run_state, "set run state");
    }

    /// Return the state to `|g⟩` at `t = 0` and clear the trail, leaving the
    /// run state and drive unchanged.
    pub fn reset(&mut self) {
        self.state = State::ground();
        self.trail.clear();
        debug!(run_state = ?self.run_state, "reset");
    }

    /// Advance the state by one time step regardless of the run state and
    /// record the new position in the trail.
    pub fn step(&mut self) {
        self.state = integrator::step(&self.state, &self.drive, self.dt);
        self.trail.append(self.state.cartesian());
    }

    /// Perform one scheduling tick: [step][Self::step] if running.
    ///
    /// Returns `true` if a step was taken.
    pub fn tick(&mut self) -> bool {
        let running = self.is_running();
        if running { self.step(); }
        running
    }

    /// Perform `n` [ticks][Self::tick].
    pub fn run(&mut self, n: usize) {
        (0..n).for_each(|_| { self.tick(); });
    }

    /// Return `true` if ticks advance the state.
    pub fn is_running(&self) -> bool { self.run_state == RunState::Running }

    pub fn run_state(&self) -> RunState { self.run_state }

    /// Return the current drive.
    pub fn driving(&self) -> DriveParams { self.drive }

    /// Return the time step in μs.
    pub fn dt(&self) -> f64 { self.dt }

    /// Return the full current state.
    pub fn state(&self) -> &State { &self.state }

    pub fn current_cartesian(&self) -> Vec3 { self.state.cartesian() }

    pub fn current_spherical(&self) -> (f64, f64) { self.state.spherical() }

    /// Return the trail, oldest point first.
    pub fn trail_points(&self) -> &Trail { &self.trail }

    /// Return the effective field of the current drive.
    pub fn effective_field(&self) -> EffectiveField { self.drive.field() }

    /// Return simulated time elapsed since the last reset, in μs.
    pub fn elapsed_time(&self) -> f64 { self.state.elapsed }

    /// Return the `(excited, ground)` populations.
    pub fn populations(&self) -> (f64, f64) { self.state.populations() }
}
