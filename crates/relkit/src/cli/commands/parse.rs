//! Parse command

use clap::Args;
use serde_json::json;
use tracing::info;

use relkit_core::RelkitError;
use relkit_versioning::{
    android_version_code, android_version_name, ios_public_version, ios_version_number, Version,
};

use crate::cli::output;
use crate::cli::Cli;

/// Parse a version string and show every rendering of it
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Version string, e.g. `1.2-rc-3` or `v1.2.3.4`
    pub input: String,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = %self.input, "executing parse command");
        let version = Version::parse(&self.input).map_err(RelkitError::from)?;

        // Fields above 99 have no Android code; every other rendering still applies.
        let code = android_version_code(&version).ok();

        if cli.json() {
            return output::json(&json!({
                "input": self.input,
                "version": version,
                "major": version.major,
                "minor": version.minor,
                "patch": version.patch,
                "rc": version.rc,
                "android_version_name": android_version_name(&version),
                "android_version_code": code,
                "ios_version_number": ios_version_number(&version),
                "ios_public_version": ios_public_version(&version),
                "raw_code": version.raw_code(),
                "release_candidate": version.is_release_candidate(),
                "hotfix": version.is_hotfix(),
            }));
        }

        if cli.quiet {
            println!("{}", version);
            return Ok(());
        }

        println!("{}", output::header(&version.to_string()));
        println!();
        println!("{}", output::key_value("Android version name", &android_version_name(&version)));
        println!(
            "{}",
            output::key_value(
                "Android version code",
                &code.map_or_else(|| "n/a".to_string(), |c| c.to_string())
            )
        );
        println!("{}", output::key_value("iOS version number", &ios_version_number(&version)));
        println!("{}", output::key_value("iOS public version", &ios_public_version(&version)));
        println!("{}", output::key_value("Raw code", &version.raw_code().to_string()));
        println!(
            "{}",
            output::key_value("Release candidate", &version.is_release_candidate().to_string())
        );
        println!("{}", output::key_value("Hotfix", &version.is_hotfix().to_string()));
        Ok(())
    }
}
