//! Init command

use clap::Args;
use console::{style, Term};
use dialoguer::Confirm;
use tracing::{debug, info};

use relkit_adapters::{detect_version_files, DetectedFile};
use relkit_core::config::{Config, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML};
use relkit_core::Platform;

use crate::cli::output;
use crate::cli::Cli;

const DEFAULT_XCCONFIG_LINE: &str = "xcconfig: config/Version.public.xcconfig\n";
const DEFAULT_ANDROID_LINE: &str = "file: version.properties\n";

/// Initialize a new relkit configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write `relkit.toml` instead of `relkit.yaml`
    #[arg(long)]
    pub toml: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let root = cli.project_root()?;
        let file_name = if self.toml {
            DEFAULT_CONFIG_TOML
        } else {
            DEFAULT_CONFIG_YAML
        };
        let config_path = root.join(file_name);

        if config_path.exists() && !self.force {
            if !Term::stdout().is_term() {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let detected = detect_version_files(&root);
        let content = self.render(&detected)?;
        std::fs::write(&config_path, &content)?;

        if !cli.quiet {
            for file in &detected {
                output::info(&format!(
                    "Found {} version file {}",
                    file.platform,
                    output::path_style().apply_to(file.path.display())
                ));
            }
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to pick your versioning scheme", file_name);
            println!("  2. Run {} to check the version files", style("relkit show --platform ios").cyan());
            println!("  3. Run {} to cut a release", style("relkit bump release --platform ios").cyan());
        }

        Ok(())
    }

    /// Configuration file content, pointing at detected version files
    fn render(&self, detected: &[DetectedFile]) -> anyhow::Result<String> {
        let ios = DetectedFile::first_for(detected, Platform::Ios);
        let android = DetectedFile::first_for(detected, Platform::Android);
        debug!(?ios, ?android, "rendering configuration");

        if self.toml {
            let mut config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
            if let Some(file) = ios {
                config.ios.xcconfig = file.path.clone();
            }
            if let Some(file) = android {
                config.android.file = file.path.clone();
            }
            return Ok(toml::to_string_pretty(&config)?);
        }

        // Line edits keep the template's comments
        let mut content = DEFAULT_CONFIG_TEMPLATE.to_string();
        if let Some(file) = ios {
            content = content.replacen(
                DEFAULT_XCCONFIG_LINE,
                &format!("xcconfig: {}\n", file.path.display()),
                1,
            );
        }
        if let Some(file) = android {
            content = content.replacen(
                DEFAULT_ANDROID_LINE,
                &format!("file: {}\n", file.path.display()),
                1,
            );
        }
        Ok(content)
    }
}
