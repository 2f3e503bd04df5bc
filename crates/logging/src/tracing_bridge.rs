//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation for the `safenum` binary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(&VerbosityConfig::from_verbose_level(2).with_env_filter());
//!
//! tracing::debug!(target: "safenum::strict", raw = "1e400", "rejected");
//! ```

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::VerbosityConfig;

/// Build the [`EnvFilter`] described by `config`.
///
/// An override that fails to parse falls back to the level-derived directive
/// so a typo in the environment never silences warnings.
#[must_use]
pub fn build_filter(config: &VerbosityConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(config.level_filter().to_string().to_ascii_lowercase());
    match &config.filter {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| fallback()),
        None => fallback(),
    }
}

/// Install the global subscriber: an `fmt` layer on standard error filtered
/// by [`build_filter`].
///
/// Returns `false` when another subscriber was already installed, in which
/// case the existing one stays in place.
pub fn init_tracing(config: &VerbosityConfig) -> bool {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_ansi(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()
        .is_ok()
}
