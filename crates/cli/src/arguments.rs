//! crates/cli/src/arguments.rs
//! Command-line definition and parsing into [`CheckConfig`].

use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, value_parser};

use crate::config::{CheckConfig, CheckMode, OutputFormat};

/// Result of parsing the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum ParsedArgs {
    Help,
    Version,
    Check(CheckConfig),
}

pub(crate) fn clap_command() -> Command {
    Command::new("safenum")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .value_name("MODE")
                .help("Checkers to run: int, float, or both.")
                .value_parser(value_parser!(CheckMode))
                .default_value("both")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .help("Read additional values from FILE ('-' for standard input).")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("from0")
                .long("from0")
                .help("Treat --input records as NUL-terminated.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Stop at the first rejected value.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text or json.")
                .value_parser(value_parser!(OutputFormat))
                .default_value("text")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("values")
                .value_name("VALUE")
                .help("Values to check.")
                .value_parser(OsStringValueParser::new())
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

/// Stands in for a hyphenated numeral while clap parses the command line.
/// Process arguments cannot contain NUL, so no real value collides with it.
const NUMERAL_PLACEHOLDER: &str = "\0";

/// Replaces every `-`-prefixed argument shaped like a float numeral with
/// [`NUMERAL_PLACEHOLDER`] and returns the numerals in command-line order.
///
/// Arguments after `--` and arguments consumed by a value-taking option are
/// left alone.
fn shelter_numerals(command: &Command, args: &mut [OsString]) -> Vec<OsString> {
    let mut takes_value: Vec<String> = Vec::new();
    for arg in command.get_arguments() {
        if !arg.get_action().takes_values() {
            continue;
        }
        if let Some(long) = arg.get_long() {
            takes_value.push(format!("--{long}"));
        }
        if let Some(short) = arg.get_short() {
            takes_value.push(format!("-{short}"));
        }
    }

    let mut numerals = Vec::new();
    let mut option_value_pending = false;
    for arg in args.iter_mut().skip(1) {
        if option_value_pending {
            option_value_pending = false;
            continue;
        }
        let Some(text) = arg.to_str() else {
            continue;
        };
        if text == "--" {
            break;
        }
        if text.starts_with('-') && safenum::is_float_numeral(text) {
            numerals.push(std::mem::replace(arg, OsString::from(NUMERAL_PLACEHOLDER)));
        } else if takes_value.iter().any(|flag| flag == text) {
            option_value_pending = true;
        }
    }
    numerals
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from("safenum"));
    }

    let command = clap_command();
    let mut numerals = shelter_numerals(&command, &mut args).into_iter();
    let mut matches = command.try_get_matches_from(args)?;

    if matches.get_flag("help") {
        return Ok(ParsedArgs::Help);
    }
    if matches.get_flag("version") {
        return Ok(ParsedArgs::Version);
    }

    let mode = matches.get_one::<CheckMode>("mode").copied().unwrap_or_default();
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default();

    let values: Vec<OsString> = matches
        .remove_many::<OsString>("values")
        .map(|values| {
            values
                .map(|value| {
                    if value == NUMERAL_PLACEHOLDER {
                        numerals.next().unwrap_or(value)
                    } else {
                        value
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    let inputs: Vec<OsString> = matches
        .remove_many::<OsString>("input")
        .map(Iterator::collect)
        .unwrap_or_default();

    let config = CheckConfig::builder()
        .values(values)
        .inputs(inputs)
        .from0(matches.get_flag("from0"))
        .mode(mode)
        .format(format)
        .strict(matches.get_flag("strict"))
        .verbose(matches.get_count("verbose"))
        .build();

    Ok(ParsedArgs::Check(config))
}
