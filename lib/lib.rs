//! Precession of a driven two-level system on the Bloch sphere.
//!
//! A [`Simulation`] owns the qubit [`State`], the [`DriveParams`] set by the
//! user, and a bounded [`Trail`] of recent positions. Each tick advances the
//! state by an exact rotation about the [effective field][EffectiveField]; see
//! [`integrator`].

pub mod vector;
pub mod bloch;
pub mod field;
pub mod trail;
pub mod integrator;
pub mod config;
pub mod simulation;
pub mod telemetry;

pub use bloch::State;
pub use config::{ ConfigError, SimConfig };
pub use field::{ DriveParams, EffectiveField };
pub use simulation::{ RunState, Simulation };
pub use trail::Trail;
pub use vector::Vec3;
