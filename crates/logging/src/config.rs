//! crates/logging/src/config.rs
//! Verbosity configuration derived from the command-line `-v` count.

use tracing::level_filters::LevelFilter;

/// Environment variable that overrides the level-derived filter directive.
///
/// The value uses the `tracing_subscriber::EnvFilter` directive syntax, for
/// example `safenum::strict=debug`.
pub const FILTER_ENV: &str = "SAFENUM_LOG";

/// Verbosity selected for a single process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Number of `-v` flags seen on the command line.
    pub verbose: u8,
    /// Filter directive that takes precedence over `verbose` when present.
    pub filter: Option<String>,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level.
    ///
    /// Levels above 3 behave like 3.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self {
            verbose: level,
            filter: None,
        }
    }

    /// Attach a filter directive, ignoring blank input.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|directive| !directive.trim().is_empty());
        self
    }

    /// Read [`FILTER_ENV`] and attach it as the filter override.
    #[must_use]
    pub fn with_env_filter(self) -> Self {
        self.with_filter(std::env::var(FILTER_ENV).ok())
    }

    /// Maximum level enabled by the verbose count alone.
    #[must_use]
    pub const fn level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Filter directive handed to the subscriber.
    #[must_use]
    pub fn directive(&self) -> String {
        match &self.filter {
            Some(filter) => filter.clone(),
            None => self.level_filter().to_string().to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_levels_widen_one_step_at_a_time() {
        let levels: Vec<_> = (0..=3)
            .map(|level| VerbosityConfig::from_verbose_level(level).level_filter())
            .collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE
            ]
        );
    }

    #[test]
    fn levels_above_three_saturate_at_trace() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(u8::MAX).level_filter(),
            LevelFilter::TRACE
        );
    }

    #[test]
    fn directive_follows_level_without_override() {
        assert_eq!(VerbosityConfig::from_verbose_level(0).directive(), "warn");
        assert_eq!(VerbosityConfig::from_verbose_level(5).directive(), "trace");
    }

    #[test]
    fn override_replaces_level_directive() {
        let config = VerbosityConfig::from_verbose_level(0)
            .with_filter(Some("safenum::strict=debug".to_owned()));
        assert_eq!(config.directive(), "safenum::strict=debug");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = VerbosityConfig::from_verbose_level(1).with_filter(Some("  ".to_owned()));
        assert_eq!(config.filter, None);
        assert_eq!(config.directive(), "info");
    }
}
