//! Logging setup for executables.
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber.

use std::{ io::IsTerminal, sync::OnceLock };
use thiserror::Error;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Registry,
};

static INITIALIZED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum InitError {
    #[error("tracing has already been initialized")]
    AlreadyInitialized,

    #[error("couldn't install global subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a global formatting subscriber filtered by `RUST_LOG`, defaulting
/// to `info`.
///
/// Fails if called more than once.
pub fn init_tracing() -> Result<(), InitError> {
    INITIALIZED.set(())
        .map_err(|_| InitError::AlreadyInitialized)?;
    let filter
        = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer
        = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
