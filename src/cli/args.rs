use crate::constants::verbosity;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::ffi::OsString;

/// Usage text printed verbatim by `-h`/`--help`.
pub const HELP_MESSAGE: &str = "\
Usage: create-vite-ssg [DIRECTORY]

Create a new static site project in DIRECTORY using `vite-plugin-static-md`.
With no arguments, start the CLI in interactive mode.

Options:
  -v, --verbosity INT           set log output level as number from 0 to 5
                                (inclusive) where lower is less verbose & higher
                                is more & where 0<=n<=5; default value is 2;
                                can give number as number of flags: `-vvv` => 3
  -o, --overwrite               overwrite the contents of the DIRECTORY given,
                                if it already exists
  -h, --help                    display this message
";

/// CLI arguments for create-vite-ssg.
#[derive(Parser, Debug, Clone)]
#[command(name = "create-vite-ssg", version, about, override_help = HELP_MESSAGE)]
pub struct Args {
    /// Directory to scaffold into; prompts for a project name when omitted.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<String>,

    /// Log output level, clamped to 0..=5.
    #[arg(
        long = "verbosity",
        value_name = "INT",
        allow_negative_numbers = true,
        overrides_with = "verbosity"
    )]
    pub verbosity: Option<i64>,

    /// Log output level as a count of flags (`-vvv` => 3).
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Overwrite the contents of DIRECTORY if it already exists.
    #[arg(short, long)]
    pub overwrite: bool,
}

impl Args {
    /// Verbosity after defaulting and clamping; `--verbosity` wins over `-v`.
    pub fn effective_verbosity(&self) -> u8 {
        match (self.verbosity, self.verbose) {
            (Some(level), _) => level.clamp(0, i64::from(verbosity::MAX)) as u8,
            (None, 0) => verbosity::DEFAULT,
            (None, count) => count.min(verbosity::MAX),
        }
    }
}

/// Parse command line arguments, exiting on usage errors and after `--help`.
pub fn get_args() -> Args {
    Args::parse_from(expand_verbosity_values(std::env::args_os()))
}

/// Rewrites `-v N`, `-vN` and `-v=N` to `--verbosity N`.
///
/// Clap cannot give one short flag both a counting and a valued form, so the
/// valued forms are translated up front. Bare `-v` and `-vvv` are left for
/// counting, and nothing after `--` is touched.
pub fn expand_verbosity_values<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut expanded = Vec::new();
    let mut options_ended = false;

    while let Some(arg) = args.next() {
        if options_ended {
            expanded.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                options_ended = true;
                expanded.push(arg);
            }
            Some("-v") => {
                let value = args
                    .peek()
                    .and_then(|next| next.to_str())
                    .filter(|next| is_verbosity_value(next))
                    .map(str::to_string);
                match value {
                    Some(value) => {
                        args.next();
                        expanded.push("--verbosity".into());
                        expanded.push(value.into());
                    }
                    None => expanded.push(arg),
                }
            }
            Some(flag) => match attached_verbosity(flag) {
                Some(value) => {
                    let value = value.to_string();
                    expanded.push("--verbosity".into());
                    expanded.push(value.into());
                }
                None => expanded.push(arg),
            },
            None => expanded.push(arg),
        }
    }
    expanded
}

fn is_verbosity_value(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

/// The value of `-vN` or `-v=N`, if `flag` is one of those.
fn attached_verbosity(flag: &str) -> Option<&str> {
    let value = flag.strip_prefix("-v")?;
    let value = value.strip_prefix('=').unwrap_or(value);
    is_verbosity_value(value).then_some(value)
}

/// Map a verbosity level to the appropriate log filter.
pub fn get_log_level_from_verbosity(level: u8) -> LevelFilter {
    match level {
        verbosity::OFF => LevelFilter::Off,
        verbosity::WARN => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
