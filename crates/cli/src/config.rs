//! crates/cli/src/config.rs
//! Options controlling a single `safenum` invocation.

use std::ffi::OsString;

use clap::ValueEnum;

/// Which checkers run against each value.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum CheckMode {
    /// Safe-integer checker only.
    Int,
    /// Exact-float checker only.
    Float,
    /// Both checkers.
    #[default]
    Both,
}

impl CheckMode {
    /// Whether the safe-integer checker runs.
    #[must_use]
    pub const fn checks_int(self) -> bool {
        matches!(self, Self::Int | Self::Both)
    }

    /// Whether the exact-float checker runs.
    #[must_use]
    pub const fn checks_float(self) -> bool {
        matches!(self, Self::Float | Self::Both)
    }
}

/// How results are written to standard output.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated `VALUE int=… float=…` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Fully resolved configuration for one run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckConfig {
    values: Vec<OsString>,
    inputs: Vec<OsString>,
    from0: bool,
    mode: CheckMode,
    format: OutputFormat,
    strict: bool,
    verbose: u8,
}

impl CheckConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    /// Values given directly on the command line.
    #[must_use]
    pub fn values(&self) -> &[OsString] {
        &self.values
    }

    /// Files (or `-` for standard input) holding additional values.
    #[must_use]
    pub fn inputs(&self) -> &[OsString] {
        &self.inputs
    }

    /// Whether input files hold NUL-terminated records.
    #[must_use]
    pub const fn from0(&self) -> bool {
        self.from0
    }

    /// Checkers to run.
    #[must_use]
    pub const fn mode(&self) -> CheckMode {
        self.mode
    }

    /// Output rendering.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether the first rejected value aborts the run.
    #[must_use]
    pub const fn strict(&self) -> bool {
        self.strict
    }

    /// Number of `-v` flags.
    #[must_use]
    pub const fn verbose(&self) -> u8 {
        self.verbose
    }
}

/// Builder for [`CheckConfig`].
#[derive(Clone, Debug, Default)]
pub struct CheckConfigBuilder {
    config: CheckConfig,
}

impl CheckConfigBuilder {
    /// Set the values given on the command line.
    #[must_use]
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.config.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the input files.
    #[must_use]
    pub fn inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.config.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    /// Treat input records as NUL-terminated.
    #[must_use]
    pub const fn from0(mut self, from0: bool) -> Self {
        self.config.from0 = from0;
        self
    }

    /// Select the checkers.
    #[must_use]
    pub const fn mode(mut self, mode: CheckMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Select the output rendering.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Stop at the first rejected value.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Set the verbose count.
    #[must_use]
    pub const fn verbose(mut self, verbose: u8) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Finish the configuration.
    #[must_use]
    pub fn build(self) -> CheckConfig {
        self.config
    }
}
