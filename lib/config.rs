//! Simulation settings, loadable from TOML.
//!
//! Every key is optional:
//! ```toml
//! dt = 0.01             # μs
//! trail_capacity = 200
//! rabi_frequency = 2.0  # MHz
//! detuning = 0.0        # MHz
//! running = false
//! ```

use std::{ fs, path::Path };
use serde::Deserialize;
use thiserror::Error;
use crate::{
    integrator::DT,
    trail::TRAIL_CAPACITY,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("couldn't parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("trail capacity must be nonzero")]
    ZeroTrailCapacity,

    #[error("initial {0} must be finite, got {1}")]
    NonFiniteDrive(&'static str, f64),
}
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a [`Simulation`][crate::simulation::Simulation].
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Integration time step, in μs.
    pub dt: f64,
    /// Maximum number of points kept in the trail.
    pub trail_capacity: usize,
    /// Initial Rabi frequency, in MHz.
    pub rabi_frequency: f64,
    /// Initial detuning, in MHz.
    pub detuning: f64,
    /// Whether the simulation starts out running.
    pub running: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DT,
            trail_capacity: TRAIL_CAPACITY,
            rabi_frequency: 2.0,
            detuning: 0.0,
            running: false,
        }
    }
}

impl SimConfig {
    /// Parse and [validate][Self::validate] a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and [validate][Self::validate] a TOML file.
    pub fn load<P>(path: P) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check that all settings are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        if !self.rabi_frequency.is_finite() {
            return Err(
                ConfigError::NonFiniteDrive("Rabi frequency", self.rabi_frequency));
        }
        if !self.detuning.is_finite() {
            return Err(ConfigError::NonFiniteDrive("detuning", self.detuning));
        }
        Ok(())
    }
}
