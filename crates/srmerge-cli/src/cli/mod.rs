//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here. No merge
//! logic does.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use srmerge_core::domain::constants::{
    CLI_ARG_ROOT_SR_FILE, CLI_ARG_ROOT_SR_TEMPLATE, CLI_ARG_WORKSPACE_PATH,
};

use crate::error::{CliError, CliResult};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "srmerge",
    bin_name = "srmerge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Merge security rules fragments into a single rules file",
    long_about = "srmerge collects every *.rules fragment below a workspace, \
                  indents them and splices them into the root template just \
                  before its final two closing braces.",
    after_help = "EXAMPLES:\n\
        \x20 srmerge --workspace_path ./rules --root_sr_template firestore.rules.template --root_sr_file firestore.rules\n\
        \x20 srmerge --workspace_path ./rules --root_sr_template storage.rules.template --root_sr_file storage.rules --dry-run\n\
        \x20 srmerge completions bash > /usr/share/bash-completion/completions/srmerge",
    arg_required_else_help = true,
    subcommand_negates_reqs = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub merge: MergeArgs,

    /// Auxiliary subcommand. Without one, a merge runs.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Merge arguments ───────────────────────────────────────────────────────────

/// The three merge parameters. Each may be given once, in any order.
#[derive(Debug, Args)]
pub struct MergeArgs {
    #[arg(
        long = CLI_ARG_WORKSPACE_PATH,
        visible_alias = "workspace-path",
        value_name = "DIR",
        required = true,
        help = "Directory holding the template and the rule fragments"
    )]
    pub workspace_path: Option<PathBuf>,

    #[arg(
        long = CLI_ARG_ROOT_SR_TEMPLATE,
        visible_alias = "root-sr-template",
        value_name = "NAME",
        required = true,
        help = "File name of the template in the workspace root"
    )]
    pub root_sr_template: Option<String>,

    #[arg(
        long = CLI_ARG_ROOT_SR_FILE,
        visible_alias = "root-sr-file",
        value_name = "NAME",
        required = true,
        help = "File name of the merged output, written to the workspace root"
    )]
    pub root_sr_file: Option<String>,

    /// Print the merged rules instead of writing them.
    #[arg(long = "dry-run", help = "Print the merged rules without writing")]
    pub dry_run: bool,
}

/// A merge request with every parameter present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub workspace_path: PathBuf,
    pub template_name: String,
    pub output_name: String,
    pub dry_run: bool,
}

impl MergeArgs {
    /// Check that all three parameters were supplied.
    ///
    /// clap enforces this already when no subcommand is given; the check
    /// keeps the core from ever being called with a partial request.
    pub fn into_request(self) -> CliResult<MergeRequest> {
        let mut missing = Vec::new();
        if self.workspace_path.is_none() {
            missing.push(CLI_ARG_WORKSPACE_PATH);
        }
        if self.root_sr_template.is_none() {
            missing.push(CLI_ARG_ROOT_SR_TEMPLATE);
        }
        if self.root_sr_file.is_none() {
            missing.push(CLI_ARG_ROOT_SR_FILE);
        }

        match (self.workspace_path, self.root_sr_template, self.root_sr_file) {
            (Some(workspace_path), Some(template_name), Some(output_name)) => Ok(MergeRequest {
                workspace_path,
                template_name,
                output_name,
                dry_run: self.dry_run,
            }),
            _ => Err(CliError::MissingArguments { flags: missing }),
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 srmerge completions bash > ~/.local/share/bash-completion/completions/srmerge\n\
            \x20 srmerge completions zsh  > ~/.zfunc/_srmerge"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(subcommand, about = "Inspect configuration")]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print a single configuration value.
    Get {
        #[arg(help = "Dotted key, e.g. merge.parallel_reads")]
        key: String,
    },
    /// Print the whole effective configuration as TOML.
    List,
    /// Print the default configuration file location.
    Path,
}
