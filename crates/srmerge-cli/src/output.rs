//! Output management and formatting.
//!
//! Status lines go to stdout through [`console::Term`]. Diagnostics go to
//! stderr through tracing, never through here.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format auto` defers to `output.format` from the config;
    /// a remaining `auto` becomes Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or_else(|_| {
                    tracing::warn!(
                        format = %config.output.format,
                        "Unknown output.format in configuration, using auto"
                    );
                    OutputFormat::Auto
                })
            }
            explicit => explicit,
        };

        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Requested payload (merged rules, completions aside). Printed even
    /// in quiet mode, exactly as given.
    pub fn raw(&self, content: &str) -> io::Result<()> {
        self.term.write_str(content)?;
        self.term.flush()
    }

    /// Pretty JSON document; printed even in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        }
    }

    fn config_with_format(format: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.output.format = format.into();
        config
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        let out = OutputManager::new(
            &args(OutputFormat::Plain, false, false),
            &config_with_format("json"),
        );
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn auto_defers_to_config() {
        let out = OutputManager::new(
            &args(OutputFormat::Auto, false, false),
            &config_with_format("JSON"),
        );
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn unknown_config_format_falls_back_to_detection() {
        let out = OutputManager::new(
            &args(OutputFormat::Auto, false, false),
            &config_with_format("fancy"),
        );
        assert_ne!(out.format(), OutputFormat::Auto);
        assert_ne!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn color_only_for_human_output() {
        let human = OutputManager::new(
            &args(OutputFormat::Human, false, false),
            &AppConfig::default(),
        );
        let plain = OutputManager::new(
            &args(OutputFormat::Plain, false, false),
            &AppConfig::default(),
        );
        let human_no_color = OutputManager::new(
            &args(OutputFormat::Human, false, true),
            &AppConfig::default(),
        );

        assert!(!human.no_color);
        assert!(plain.no_color);
        assert!(human_no_color.no_color);
    }

    #[test]
    fn quiet_suppresses_status_lines() {
        let out = OutputManager::new(
            &args(OutputFormat::Plain, true, true),
            &AppConfig::default(),
        );
        assert!(out.print("hello").is_ok());
        assert!(out.success("done").is_ok());
        assert!(out.warning("careful").is_ok());
    }
}
