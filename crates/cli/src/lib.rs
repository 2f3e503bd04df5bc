#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end of the `safenum` binary. It
//! checks each value given on the command line (or read from `--input`
//! files) with the safe-integer and exact-float parsers of the [`safenum`]
//! crate and reports the outcome per value.
//!
//! # Design
//!
//! [`run`] is the entry point. It accepts an iterator of arguments together
//! with handles for standard output and error so tests can drive it with
//! in-memory buffers. A [`clap`](https://docs.rs/clap/) command definition
//! parses the arguments into a [`CheckConfig`]; values are then checked in
//! order and rendered as text or JSON lines.
//!
//! # Invariants
//!
//! - `run` never panics; I/O failures surface as non-zero exit codes.
//! - Values are checked as raw bytes, so arguments and input records that
//!   are not UTF-8 are reported as rejected instead of aborting the run.
//! - With `--strict`, nothing is written for the first rejected value or any
//!   value after it.
//!
//! # Errors
//!
//! Exit status `0` means every value was accepted by at least one selected
//! checker. Status `1` means a value was rejected or an input could not be
//! read. Status `2` reports a usage error detected by the argument parser.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["safenum", "--mode", "int", "00003"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b"00003\tint=3\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

use logging::VerbosityConfig;
use tracing::debug;

mod arguments;
mod config;
mod input;
mod report;

pub use config::{CheckConfig, CheckConfigBuilder, CheckMode, OutputFormat};
pub use input::{InputError, load_input_values, read_values_from_reader};
pub use report::ValueReport;

use arguments::{ParsedArgs, parse_args};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Exit code for values that were rejected or inputs that could not be read.
const REJECTED_EXIT_CODE: i32 = 1;

/// Exit code for command-line usage errors.
const USAGE_EXIT_CODE: i32 = 2;

/// Deterministic help text describing the command-line surface.
const HELP_TEXT: &str = concat!(
    "safenum ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: safenum [OPTIONS] [VALUE]...\n",
    "\n",
    "Checks that each VALUE is a safe integer or a float that can be\n",
    "represented without loss of precision.\n",
    "\n",
    "Options:\n",
    "  -h, --help           Show this help message and exit.\n",
    "  -V, --version        Output version information and exit.\n",
    "  -m, --mode=MODE      Checkers to run: int, float, or both (default).\n",
    "      --input=FILE     Read additional values from FILE ('-' for standard input).\n",
    "      --from0          Treat --input records as NUL-terminated.\n",
    "      --strict         Stop at the first rejected value.\n",
    "      --format=FORMAT  Output format: text (default) or json.\n",
    "  -v, --verbose        Increase diagnostic output; repeat for more.\n",
    "\n",
    "Negative numerals such as -12, -.5 or -1e+5 are accepted as values; place\n",
    "any other value that starts with '-' after --.\n",
    "\n",
    "The SAFENUM_LOG environment variable overrides the diagnostic filter.\n",
);

/// Version banner printed by `--version`.
const VERSION_TEXT: &str = concat!("safenum ", env!("CARGO_PKG_VERSION"), "\n");

/// Returns the help text printed by `--help`.
#[must_use]
pub const fn render_help() -> &'static str {
    HELP_TEXT
}

/// Run the command line and return the process exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(ParsedArgs::Help) => write_banner(HELP_TEXT, stdout, stderr),
        Ok(ParsedArgs::Version) => write_banner(VERSION_TEXT, stdout, stderr),
        Ok(ParsedArgs::Check(config)) => execute(&config, stdout, stderr),
        Err(error) => {
            let _ = write!(stderr, "{error}");
            USAGE_EXIT_CODE
        }
    }
}

fn write_banner<Out, Err>(text: &str, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()).is_err() {
        let _ = writeln!(stderr, "safenum: failed to write to standard output");
        return REJECTED_EXIT_CODE;
    }
    0
}

/// Check every configured value, writing one report line per value.
pub fn execute<Out, Err>(config: &CheckConfig, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    logging::init_tracing(
        &VerbosityConfig::from_verbose_level(config.verbose()).with_env_filter(),
    );
    debug!(target: "safenum::cli", ?config, "starting");

    let mut values: Vec<Vec<u8>> = config
        .values()
        .iter()
        .map(|value| value.as_encoded_bytes().to_vec())
        .collect();
    match load_input_values(config.inputs(), config.from0()) {
        Ok(loaded) => values.extend(loaded),
        Err(error) => {
            let _ = writeln!(stderr, "safenum: {error}");
            return REJECTED_EXIT_CODE;
        }
    }

    let mut status = 0;
    for raw in &values {
        let report = ValueReport::check(raw, config.mode());
        if report.rejected() {
            status = REJECTED_EXIT_CODE;
            if config.strict() {
                if let Some(error) = report.error() {
                    let _ = writeln!(stderr, "safenum: {error}");
                }
                break;
            }
        }
        if let Err(error) = report.write_to(config.format(), stdout) {
            let _ = writeln!(stderr, "safenum: failed to write to standard output: {error}");
            return REJECTED_EXIT_CODE;
        }
    }

    if let Err(error) = stdout.flush() {
        let _ = writeln!(stderr, "safenum: failed to write to standard output: {error}");
        return REJECTED_EXIT_CODE;
    }
    status
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
