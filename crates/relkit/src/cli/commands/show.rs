//! Show command

use clap::Args;
use serde_json::json;
use tracing::info;

use relkit_adapters::open_version_file;
use relkit_core::config::load_config_or_default;
use relkit_core::{Platform, RelkitError};
use relkit_versioning::{BuildCode, Version};

use crate::cli::output;
use crate::cli::Cli;

/// Show the version stored in a platform's version file
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Platform whose version file to read
    #[arg(short, long)]
    pub platform: Platform,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(platform = %self.platform, "executing show command");
        let root = cli.project_root()?;
        let (config, _) = load_config_or_default(&root)?;
        let file = open_version_file(&config, self.platform, &root)?;

        let raw_version = file.read_version()?;
        let version = Version::parse(&raw_version).map_err(RelkitError::from)?;
        let build_code = file
            .read_build_code()?
            .parse::<BuildCode>()
            .map_err(RelkitError::from)?;

        if cli.json() {
            return output::json(&json!({
                "platform": self.platform,
                "file": file.path(),
                "raw": raw_version,
                "version": version,
                "build_code": build_code,
            }));
        }

        if cli.quiet {
            println!("{}", version);
            return Ok(());
        }

        println!(
            "{} {}",
            output::header("Version file"),
            output::path_style().apply_to(file.path().display())
        );
        println!();
        println!(
            "{}",
            output::key_value("Version", &output::version_style().apply_to(&version).to_string())
        );
        println!("{}", output::key_value("Stored as", &raw_version));
        println!("{}", output::key_value("Build code", &build_code.to_string()));
        Ok(())
    }
}
