//! Flags shared by the merge invocation and every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` reports located files and the merge result, `-vv`
    /// every classified workspace entry, `-vvv` everything.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only errors. The merged rules of `--dry-run` and JSON reports
    /// are still printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes. Also set by `NO_COLOR`.
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the default config location.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How the merge result is reported on stdout.
    #[arg(long = "output-format", global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

/// Rendering of the merge result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Use `output.format` from the config; if that is also auto, colored
    /// lines on a terminal and plain lines when piped.
    #[default]
    Auto,
    /// Colored success and warning lines.
    Human,
    /// The same lines without color, for logs and scripts.
    Plain,
    /// The merge report (output path, template, fragments, spliced flag,
    /// bytes written) as a JSON document.
    Json,
}
