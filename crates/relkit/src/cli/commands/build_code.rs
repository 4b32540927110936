//! Build code command

use std::path::{Path, PathBuf};

use clap::Args;
use serde_json::json;
use tracing::info;

use relkit_adapters::open_version_file;
use relkit_core::config::load_config_or_default;
use relkit_core::error::Result;
use relkit_core::Platform;
use relkit_versioning::{BuildCode, BuildCodeCalculator, BuildCodeCalculatorKind, BuildCodeScheme};

use crate::cli::output;
use crate::cli::Cli;

/// Advance the build code in the version file
#[derive(Debug, Args)]
pub struct BuildCodeCommand {
    /// Platform whose version file to update
    #[arg(short, long)]
    pub platform: Platform,

    /// Build code scheme, overriding the configuration
    #[arg(long)]
    pub scheme: Option<BuildCodeScheme>,

    /// Show the new build code without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildCodeCommand {
    /// Execute the build-code command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(platform = %self.platform, dry_run = self.dry_run, "executing build-code command");
        let root = cli.project_root()?;
        let (file, current, next) = self.run(&root)?;

        if cli.json() {
            return output::json(&json!({
                "platform": self.platform,
                "file": file,
                "current": current,
                "next": next,
                "dry_run": self.dry_run,
            }));
        }

        if cli.quiet {
            println!("{}", next);
        } else if self.dry_run {
            output::info(&format!("Build code {} → {} (dry run)", current, next));
        } else {
            output::success(&format!(
                "Build code {} → {} in {}",
                current,
                output::version_style().apply_to(next),
                output::path_style().apply_to(file.display())
            ));
        }
        Ok(())
    }

    /// Compute the next build code and, unless this is a dry run, write it
    pub fn run(&self, root: &Path) -> Result<(PathBuf, BuildCode, BuildCode)> {
        let (config, _) = load_config_or_default(root)?;
        let scheme = self.scheme.unwrap_or(config.versioning.build_code);

        let file = open_version_file(&config, self.platform, root)?;
        let current: BuildCode = file.read_build_code()?.parse()?;
        let next = BuildCodeCalculatorKind::for_scheme(scheme).next_build_code(&current)?;

        if !self.dry_run {
            file.write_build_code(&next.to_string())?;
        }
        Ok((file.path().to_path_buf(), current, next))
    }
}
