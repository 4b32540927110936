//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{
    BuildCodeCommand, BumpCommand, CompletionsCommand, InitCommand, ParseCommand, ShowCommand,
};

/// relkit - Version and build code management for mobile releases
#[derive(Debug, Parser)]
#[command(name = "relkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Project directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a version string and show every rendering of it
    Parse(ParseCommand),

    /// Show the version stored in a platform's version file
    Show(ShowCommand),

    /// Compute the next version and write it to the version file
    Bump(BumpCommand),

    /// Advance the build code in the version file
    BuildCode(BuildCodeCommand),

    /// Initialize a new relkit configuration
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Parse(cmd) => cmd.execute(self),
            Commands::Show(cmd) => cmd.execute(self),
            Commands::Bump(cmd) => cmd.execute(self),
            Commands::BuildCode(cmd) => cmd.execute(self),
            Commands::Init(cmd) => cmd.execute(self),
            Commands::Completions(cmd) => cmd.execute(self),
        }
    }

    /// Project root: `-C` when given, the working directory otherwise
    pub fn project_root(&self) -> anyhow::Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Whether results are printed as JSON
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
