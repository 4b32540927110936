//! Bump command

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use serde_json::json;
use tracing::{debug, info};

use relkit_adapters::open_version_file;
use relkit_core::config::load_config_or_default;
use relkit_core::error::Result;
use relkit_core::Platform;
use relkit_versioning::{
    format_for_platform, ios_public_version, DateCalculator, ReleasePrompter, SchemeCalculator,
    Version, VersionCalculator, VersioningScheme,
};

use super::prompter::DialoguerPrompter;
use crate::cli::output;
use crate::cli::Cli;

/// Compute the next version and write it to the version file
#[derive(Debug, Args)]
pub struct BumpCommand {
    /// Which version to move to
    #[arg(value_enum)]
    pub kind: BumpKind,

    /// Platform whose version file to update
    #[arg(short, long)]
    pub platform: Platform,

    /// Versioning scheme, overriding the configuration
    #[arg(long)]
    pub scheme: Option<VersioningScheme>,

    /// Show the new version without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Date scheme: whether a December release is the first one of next year
    #[arg(long)]
    pub first_release_of_next_year: Option<bool>,

    /// Date scheme: final minor version released during the previous year
    #[arg(long)]
    pub previous_year_minor: Option<u64>,

    /// Never prompt; missing date scheme inputs become an error
    #[arg(long, env = "RELKIT_NO_INPUT")]
    pub no_input: bool,
}

/// Version transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpKind {
    /// Next regular release of the scheme
    Release,
    /// Next hotfix of the current release
    Hotfix,
    /// Next major version
    Major,
    /// Next minor version
    Minor,
    /// Next patch version
    Patch,
    /// Next build number
    Build,
    /// Release that preceded the current one
    PreviousRelease,
    /// Previous patch version
    PreviousPatch,
}

impl BumpKind {
    fn apply(&self, calculator: &dyn VersionCalculator, current: &Version) -> Result<Version> {
        match self {
            Self::Release => calculator.next_release_version(current),
            Self::Hotfix => calculator.next_hotfix_version(current),
            Self::Major => calculator.next_major(current),
            Self::Minor => calculator.next_minor(current),
            Self::Patch => calculator.next_patch(current),
            Self::Build => calculator.next_build_number(current),
            Self::PreviousRelease => calculator.previous_release_version(current),
            Self::PreviousPatch => calculator.previous_patch(current),
        }
    }
}

/// Result of a bump
#[derive(Debug)]
pub struct BumpOutcome {
    /// Scheme that computed the new version
    pub scheme: VersioningScheme,
    /// File holding the version
    pub file: PathBuf,
    /// Version read from the file
    pub current: Version,
    /// New version
    pub next: Version,
    /// New version as written to the file
    pub formatted: String,
    /// Public version written next to it (iOS)
    pub public: Option<String>,
    /// Calendar day the date scheme worked with
    pub date: Option<NaiveDate>,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(kind = ?self.kind, platform = %self.platform, dry_run = self.dry_run, "executing bump command");
        let root = cli.project_root()?;
        let outcome = self.run(&root, Local::now().date_naive(), &DialoguerPrompter)?;

        if cli.json() {
            return output::json(&json!({
                "platform": self.platform,
                "scheme": outcome.scheme,
                "file": outcome.file,
                "current": outcome.current,
                "next": outcome.next,
                "formatted": outcome.formatted,
                "public": outcome.public,
                "date": outcome.date,
                "dry_run": self.dry_run,
            }));
        }

        if cli.quiet {
            println!("{}", outcome.formatted);
            return Ok(());
        }

        println!(
            "  {} {} {}",
            outcome.current,
            console::style("→").dim(),
            output::version_style().apply_to(&outcome.next)
        );
        if self.dry_run {
            output::warning(&format!(
                "Dry run: {} not written to {}",
                outcome.formatted,
                outcome.file.display()
            ));
        } else {
            output::success(&format!(
                "Wrote {} to {}",
                outcome.formatted,
                output::path_style().apply_to(outcome.file.display())
            ));
        }
        Ok(())
    }

    /// Compute the new version and, unless this is a dry run, write it
    pub fn run(
        &self,
        root: &Path,
        today: NaiveDate,
        prompter: &dyn ReleasePrompter,
    ) -> Result<BumpOutcome> {
        let (config, _) = load_config_or_default(root)?;
        let scheme = self.scheme.unwrap_or(config.versioning.scheme);

        let file = open_version_file(&config, self.platform, root)?;
        let current = Version::parse(&file.read_version()?)?;

        let calculator = self.calculator(scheme, today, &current, prompter)?;
        let next = self.kind.apply(&calculator, &current)?;
        let date = match &calculator {
            SchemeCalculator::Date(date) => Some(date.date()),
            _ => None,
        };
        debug!(%current, %next, scheme = calculator.name(), "computed new version");

        let formatted = format_for_platform(self.platform, &next);
        let public = (self.platform == Platform::Ios).then(|| ios_public_version(&next));

        if !self.dry_run {
            file.write_version(&formatted)?;
            if let Some(public) = &public {
                file.write_public_version(public)?;
            }
        }

        Ok(BumpOutcome {
            scheme,
            file: file.path().to_path_buf(),
            current,
            next,
            formatted,
            public,
            date,
        })
    }

    fn calculator(
        &self,
        scheme: VersioningScheme,
        today: NaiveDate,
        current: &Version,
        prompter: &dyn ReleasePrompter,
    ) -> Result<SchemeCalculator> {
        if scheme != VersioningScheme::Date {
            return Ok(SchemeCalculator::for_scheme(scheme, today));
        }

        let mut date = DateCalculator::new(today);
        if let Some(first) = self.first_release_of_next_year {
            date = date.with_first_release_of_next_year(first);
        }
        if let Some(minor) = self.previous_year_minor {
            date = date.with_previous_year_final_minor(minor);
        }

        if !self.no_input {
            date = match self.kind {
                BumpKind::Release => date.resolve_next_release_inputs(prompter)?,
                BumpKind::PreviousRelease => {
                    date.resolve_previous_release_inputs(current, prompter)?
                }
                _ => date,
            };
        }

        Ok(date.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relkit_core::error::{RelkitError, VersionError};
    use tempfile::TempDir;

    struct Unreachable;

    impl ReleasePrompter for Unreachable {
        fn confirm(&self, question: &str) -> Result<bool> {
            panic!("unexpected prompt: {}", question);
        }

        fn prompt_integer(&self, question: &str) -> Result<u64> {
            panic!("unexpected prompt: {}", question);
        }
    }

    struct Answers(bool);

    impl ReleasePrompter for Answers {
        fn confirm(&self, _question: &str) -> Result<bool> {
            Ok(self.0)
        }

        fn prompt_integer(&self, _question: &str) -> Result<u64> {
            Ok(11)
        }
    }

    fn command(kind: BumpKind, platform: Platform) -> BumpCommand {
        BumpCommand {
            kind,
            platform,
            scheme: None,
            dry_run: false,
            first_release_of_next_year: None,
            previous_year_minor: None,
            no_input: true,
        }
    }

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("relkit.yaml"), config).unwrap();
        std::fs::write(
            temp.path().join("version.properties"),
            "versionName=1.9\nversionCode=1090000\n",
        )
        .unwrap();
        std::fs::create_dir_all(temp.path().join("config")).unwrap();
        std::fs::write(
            temp.path().join("config/Version.public.xcconfig"),
            "VERSION_SHORT = 24.3\nVERSION_LONG = 24.3.0.2\nBUILD_NUMBER = 12\n",
        )
        .unwrap();
        temp
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_marketing_release_on_android() {
        let temp = project("versioning:\n  scheme: marketing\n");
        let cmd = command(BumpKind::Release, Platform::Android);

        let outcome = cmd.run(temp.path(), today(), &Unreachable).unwrap();
        assert_eq!(outcome.next, Version::new(2, 0, 0));
        assert_eq!(outcome.formatted, "2.0");
        assert_eq!(outcome.public, None);
        assert_eq!(outcome.date, None);

        let content = std::fs::read_to_string(temp.path().join("version.properties")).unwrap();
        assert_eq!(content, "versionName=2.0\nversionCode=1090000\n");
    }

    #[test]
    fn test_ios_writes_long_and_short_versions() {
        let temp = project("versioning:\n  scheme: semantic\n");
        let cmd = command(BumpKind::Hotfix, Platform::Ios);

        let outcome = cmd.run(temp.path(), today(), &Unreachable).unwrap();
        assert_eq!(outcome.current, Version::release_candidate(24, 3, 0, 2));
        assert_eq!(outcome.next, Version::new(24, 3, 1));
        assert_eq!(outcome.formatted, "24.3.1.0");
        assert_eq!(outcome.public.as_deref(), Some("24.3.1"));

        let content =
            std::fs::read_to_string(temp.path().join("config/Version.public.xcconfig")).unwrap();
        assert_eq!(
            content,
            "VERSION_SHORT = 24.3.1\nVERSION_LONG = 24.3.1.0\nBUILD_NUMBER = 12\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let temp = project("versioning:\n  scheme: semantic\n");
        let mut cmd = command(BumpKind::Build, Platform::Ios);
        cmd.dry_run = true;

        let outcome = cmd.run(temp.path(), today(), &Unreachable).unwrap();
        assert_eq!(outcome.formatted, "24.3.0.3");
        let content =
            std::fs::read_to_string(temp.path().join("config/Version.public.xcconfig")).unwrap();
        assert!(content.contains("VERSION_LONG = 24.3.0.2"));
    }

    #[test]
    fn test_capitalised_scheme_in_config() {
        let temp = project("versioning:\n  scheme: Marketing\n");
        let mut cmd = command(BumpKind::Release, Platform::Android);
        cmd.dry_run = true;

        let outcome = cmd.run(temp.path(), today(), &Unreachable).unwrap();
        assert_eq!(outcome.scheme, VersioningScheme::Marketing);
        assert_eq!(outcome.formatted, "2.0");
    }

    #[test]
    fn test_scheme_flag_overrides_config() {
        let temp = project("versioning:\n  scheme: marketing\n");
        let mut cmd = command(BumpKind::Release, Platform::Android);
        cmd.scheme = Some(VersioningScheme::Semantic);
        cmd.dry_run = true;

        let outcome = cmd.run(temp.path(), today(), &Unreachable).unwrap();
        assert_eq!(outcome.scheme, VersioningScheme::Semantic);
        assert_eq!(outcome.formatted, "1.10");
    }

    #[test]
    fn test_date_scheme_without_input_fails() {
        let temp = project("versioning:\n  scheme: date\n");
        let december = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
        let cmd = command(BumpKind::Release, Platform::Ios);

        let err = cmd.run(temp.path(), december, &Unreachable).unwrap_err();
        assert!(matches!(
            err,
            RelkitError::Version(VersionError::MissingExternalInput(_))
        ));
    }

    #[test]
    fn test_date_scheme_uses_flags_and_prompter() {
        let temp = project("versioning:\n  scheme: date\n");
        let december = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();

        let mut cmd = command(BumpKind::Release, Platform::Ios);
        cmd.first_release_of_next_year = Some(true);
        cmd.dry_run = true;
        let outcome = cmd.run(temp.path(), december, &Unreachable).unwrap();
        assert_eq!(outcome.next, Version::release_candidate(25, 1, 0, 0));
        assert_eq!(outcome.date, Some(december));

        let mut cmd = command(BumpKind::Release, Platform::Ios);
        cmd.no_input = false;
        cmd.dry_run = true;
        let outcome = cmd.run(temp.path(), december, &Answers(false)).unwrap();
        assert_eq!(outcome.next, Version::release_candidate(24, 4, 0, 0));
    }

    #[test]
    fn test_invalid_version_in_file() {
        let temp = project("versioning:\n  scheme: semantic\n");
        std::fs::write(temp.path().join("version.properties"), "versionName=beta\n").unwrap();
        let cmd = command(BumpKind::Release, Platform::Android);

        let err = cmd.run(temp.path(), today(), &Unreachable).unwrap_err();
        assert!(matches!(err, RelkitError::Version(VersionError::Parse(_))));
    }
}
