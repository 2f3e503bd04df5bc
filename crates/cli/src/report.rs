//! crates/cli/src/report.rs
//! Per-value checking and rendering.

use std::borrow::Cow;
use std::io::{self, Write};

use safenum::{SafeFloat, SafeInteger, SafeNumberError};
use serde::Serialize;
use tracing::trace;

use crate::config::{CheckMode, OutputFormat};

/// Outcome of the selected checkers for one value.
///
/// A `None` field means the checker was not selected.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueReport<'a> {
    input: Cow<'a, str>,
    int: Option<Result<SafeInteger, SafeNumberError>>,
    float: Option<Result<SafeFloat, SafeNumberError>>,
}

impl<'a> ValueReport<'a> {
    /// Run the checkers selected by `mode` against `raw`.
    pub fn check(raw: &'a [u8], mode: CheckMode) -> Self {
        let report = Self {
            input: String::from_utf8_lossy(raw),
            int: mode.checks_int().then(|| SafeInteger::try_from(raw)),
            float: mode.checks_float().then(|| SafeFloat::try_from(raw)),
        };
        trace!(
            target: "safenum::cli",
            input = %report.input,
            int = ?report.int.as_ref().map(|result| result.as_ref().ok().map(|value| value.get())),
            float = ?report.float.as_ref().map(|result| result.as_ref().ok().map(|value| value.get())),
            "checked value"
        );
        report
    }

    /// Whether every selected checker rejected the value.
    #[must_use]
    pub fn rejected(&self) -> bool {
        let accepted_int = matches!(self.int, Some(Ok(_)));
        let accepted_float = matches!(self.float, Some(Ok(_)));
        !accepted_int && !accepted_float
    }

    /// The error to surface for a rejected value: the float error when the
    /// float checker ran, otherwise the integer error.
    #[must_use]
    pub fn error(&self) -> Option<&SafeNumberError> {
        if !self.rejected() {
            return None;
        }
        match (&self.float, &self.int) {
            (Some(Err(error)), _) | (None, Some(Err(error))) => Some(error),
            _ => None,
        }
    }

    /// Write the report as one line in `format`.
    pub fn write_to<W: Write + ?Sized>(&self, format: OutputFormat, out: &mut W) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.input.escape_debug())?;
        if let Some(result) = &self.int {
            match result {
                Ok(value) => write!(out, "\tint={value}")?,
                Err(_) => out.write_all(b"\tint=invalid")?,
            }
        }
        if let Some(result) = &self.float {
            match result {
                Ok(value) => write!(out, "\tfloat={value}")?,
                Err(_) => out.write_all(b"\tfloat=invalid")?,
            }
        }
        out.write_all(b"\n")
    }

    fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let record = JsonRecord {
            input: &self.input,
            int: self
                .int
                .as_ref()
                .map(|result| result.as_ref().ok().map(|value| value.get())),
            float: self
                .float
                .as_ref()
                .map(|result| result.as_ref().ok().map(|value| value.get())),
        };
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")
    }
}

#[derive(Serialize)]
struct JsonRecord<'r> {
    input: &'r str,
    #[serde(skip_serializing_if = "Option::is_none")]
    int: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    float: Option<Option<f64>>,
}
