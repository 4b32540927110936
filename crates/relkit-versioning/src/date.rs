//! Date-based versioning scheme
//!
//! The major version follows the year (e.g. `24.x` during 2024) and the minor
//! version counts the releases of that year starting at 1. Whether a release
//! cut in December belongs to the next year, and what the final minor of the
//! previous year was, cannot be derived from the version: the caller supplies
//! both, directly or through a [`ReleasePrompter`].

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, info, instrument};

use relkit_core::error::{Result, VersionError};

use crate::traits::{increment, reset_build, ReleasePrompter, VersionCalculator};
use crate::version::Version;

const DECEMBER: u32 = 12;

/// Date-based versioning calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCalculator {
    today: NaiveDate,
    is_first_release_of_next_year: Option<bool>,
    previous_year_final_minor: Option<u64>,
}

impl DateCalculator {
    /// Create a calculator for the given calendar day
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            is_first_release_of_next_year: None,
            previous_year_final_minor: None,
        }
    }

    /// Create a calculator for the current local date
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Whether a release cut in December is the first one of the next year
    pub fn with_first_release_of_next_year(mut self, value: bool) -> Self {
        self.is_first_release_of_next_year = Some(value);
        self
    }

    /// Final minor version released during the previous year
    pub fn with_previous_year_final_minor(mut self, minor: u64) -> Self {
        self.previous_year_final_minor = Some(minor);
        self
    }

    /// The calendar day this calculator works with
    pub fn date(&self) -> NaiveDate {
        self.today
    }

    fn is_december(&self) -> bool {
        self.today.month() == DECEMBER
    }

    /// Whether `next_release_version` needs the year boundary decision
    pub fn needs_year_boundary_decision(&self) -> bool {
        self.is_december() && self.is_first_release_of_next_year.is_none()
    }

    /// Whether `previous_release_version` needs the previous year's final minor
    pub fn needs_previous_year_minor(&self, current: &Version) -> bool {
        current.minor == 1 && self.previous_year_final_minor.is_none()
    }

    /// Ask the prompter for the year boundary decision when it is needed
    pub fn resolve_next_release_inputs(self, prompter: &dyn ReleasePrompter) -> Result<Self> {
        if !self.needs_year_boundary_decision() {
            return Ok(self);
        }

        let question = format!(
            "Is this release the first one of {}?",
            self.today.year() + 1
        );
        let answer = prompter.confirm(&question)?;
        debug!(answer, "year boundary decision supplied by prompter");
        Ok(self.with_first_release_of_next_year(answer))
    }

    /// Ask the prompter for the previous year's final minor when it is needed
    pub fn resolve_previous_release_inputs(
        self,
        current: &Version,
        prompter: &dyn ReleasePrompter,
    ) -> Result<Self> {
        if !self.needs_previous_year_minor(current) {
            return Ok(self);
        }

        let question = format!(
            "What was the last minor version released under major version {}?",
            current.major.saturating_sub(1)
        );
        let minor = prompter.prompt_integer(&question)?;
        debug!(minor, "previous year minor supplied by prompter");
        Ok(self.with_previous_year_final_minor(minor))
    }
}

impl Default for DateCalculator {
    fn default() -> Self {
        Self::today()
    }
}

impl VersionCalculator for DateCalculator {
    fn name(&self) -> &'static str {
        "date"
    }

    #[instrument(skip_all, fields(scheme = "date", current = %current, today = %self.today))]
    fn next_release_version(&self, current: &Version) -> Result<Version> {
        if !self.is_december() {
            return self.next_minor(current);
        }

        match self.is_first_release_of_next_year {
            Some(true) => {
                info!("first release of the new year");
                Ok(Version {
                    major: increment(current.major, "major")?,
                    minor: 1,
                    patch: 0,
                    rc: reset_build(current),
                })
            }
            Some(false) => self.next_minor(current),
            None => Err(VersionError::MissingExternalInput(
                "whether this December release is the first release of next year".to_string(),
            )
            .into()),
        }
    }

    #[instrument(skip_all, fields(scheme = "date", current = %current))]
    fn previous_release_version(&self, current: &Version) -> Result<Version> {
        if current.minor != 1 {
            return self.previous_minor(current);
        }

        let minor = self.previous_year_final_minor.ok_or_else(|| {
            VersionError::MissingExternalInput(format!(
                "final minor version released before {}",
                current
            ))
        })?;
        let major = current.major.checked_sub(1).ok_or_else(|| {
            VersionError::InvalidState(format!("{} has no previous year", current))
        })?;

        Ok(Version {
            major,
            minor,
            patch: 0,
            rc: reset_build(current),
        })
    }
}
