#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the `-v` count accepted by the `safenum` command line onto
//! [`tracing`] levels and installs the process-wide subscriber that renders
//! diagnostics on standard error.
//!
//! # Design
//!
//! [`VerbosityConfig`] is a plain value computed from the verbose count and an
//! optional filter override. [`init_tracing`] turns it into an
//! [`EnvFilter`](tracing_subscriber::EnvFilter) plus a `fmt` layer. Library
//! crates never call into this crate; they emit `tracing` events and leave the
//! choice of subscriber to the binary.
//!
//! # Invariants
//!
//! - Level 0 shows warnings and errors only; every additional `-v` widens the
//!   filter by one level until `TRACE`.
//! - A non-empty filter override replaces the level-derived directive.
//! - Installing the subscriber twice is a no-op; the first one wins.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//! use tracing::level_filters::LevelFilter;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.level_filter(), LevelFilter::DEBUG);
//! assert_eq!(config.directive(), "debug");
//! ```

mod config;
mod tracing_bridge;

pub use config::{FILTER_ENV, VerbosityConfig};
pub use tracing_bridge::{build_filter, init_tracing};
