//! Build codes and their calculators
//!
//! A build code is the platform counter that travels next to the marketing
//! version: Android's `versionCode` or iOS's `BUILD_NUMBER`.
//! - Simple: 123, 124, 125...
//! - Date: 20240115 (one value per calendar day)

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use relkit_core::error::{Result, VersionError};

use crate::format::android_version_code;
use crate::traits::{increment, BuildCodeCalculator};
use crate::version::Version;

/// Platform build code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildCode(pub u64);

impl BuildCode {
    /// Create a build code
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Android version code derived from a version (`1.2.3-rc-4` is `11020304`)
    pub fn derived_from(version: &Version) -> Result<Self> {
        android_version_code(version).map(Self)
    }
}

impl fmt::Display for BuildCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BuildCode {
    type Err = VersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(VersionError::InvalidBuildCode(s.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| VersionError::InvalidBuildCode(s.to_string()))
    }
}

/// Build code that increments by one
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleBuildCodeCalculator;

impl BuildCodeCalculator for SimpleBuildCodeCalculator {
    fn name(&self) -> &'static str {
        "simple"
    }

    #[instrument(skip_all, fields(scheme = "simple", current = current.0))]
    fn next_build_code(&self, current: &BuildCode) -> Result<BuildCode> {
        increment(current.0, "build code").map(BuildCode)
    }
}

/// Build code set to the date of the build, `YYYYMMDD`.
///
/// Two builds on the same day get the same code.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateBuildCodeCalculator {
    date: Option<NaiveDate>,
}

impl DateBuildCodeCalculator {
    /// Use the local date at the time of each call
    pub fn new() -> Self {
        Self { date: None }
    }

    /// Use a fixed date
    pub fn for_date(date: NaiveDate) -> Self {
        Self { date: Some(date) }
    }

    fn date_number(&self) -> u64 {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        // Years before 0 do not occur in build dates.
        let year = u64::try_from(date.year()).unwrap_or(0);
        year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
    }
}

impl BuildCodeCalculator for DateBuildCodeCalculator {
    fn name(&self) -> &'static str {
        "date"
    }

    #[instrument(skip_all, fields(scheme = "date", current = current.0))]
    fn next_build_code(&self, current: &BuildCode) -> Result<BuildCode> {
        Ok(BuildCode(self.date_number()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_code() {
        assert_eq!("123".parse::<BuildCode>().unwrap(), BuildCode(123));
        assert_eq!(" 0042\n".parse::<BuildCode>().unwrap(), BuildCode(42));
        assert!("12a".parse::<BuildCode>().is_err());
        assert!("".parse::<BuildCode>().is_err());
        assert!("-3".parse::<BuildCode>().is_err());
    }

    #[test]
    fn test_simple_increments() {
        let calc = SimpleBuildCodeCalculator;
        let once = calc.next_build_code(&BuildCode(5)).unwrap();
        let twice = calc.next_build_code(&once).unwrap();
        assert_eq!(twice, BuildCode(7));
        assert_eq!(twice.to_string(), "7");
    }

    #[test]
    fn test_simple_overflow() {
        assert!(SimpleBuildCodeCalculator
            .next_build_code(&BuildCode(u64::MAX))
            .is_err());
    }

    #[test]
    fn test_date_ignores_current_value() {
        let calc = DateBuildCodeCalculator::for_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(calc.next_build_code(&BuildCode(1)).unwrap(), BuildCode(20240105));
        assert_eq!(
            calc.next_build_code(&BuildCode(99999999)).unwrap(),
            BuildCode(20240105)
        );
    }

    #[test]
    fn test_date_today_is_eight_digits() {
        let code = DateBuildCodeCalculator::new()
            .next_build_code(&BuildCode(0))
            .unwrap();
        assert_eq!(code.to_string().len(), 8);
    }

    #[test]
    fn test_derived_from_version() {
        let code = BuildCode::derived_from(&Version::release_candidate(1, 2, 3, 4)).unwrap();
        assert_eq!(code, BuildCode(11020304));
    }
}
