//! Canonical version value

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use relkit_core::error::ParseError;

use crate::parser;

/// An app version: `major.minor.patch` plus an optional release candidate number.
///
/// `rc == None` is a final release, `Some(n)` is release candidate `n`. Versions
/// are plain values; calculators return new instances instead of mutating.
///
/// Ordering is lexicographic over (major, minor, patch, rc) with an absent rc
/// counting as 0, which matches the numeric order of [`Version::raw_code`].
/// When two versions only differ by `None` versus `Some(0)`, `None` sorts first
/// so that ordering stays consistent with equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version
    pub major: u64,
    /// Minor version
    pub minor: u64,
    /// Patch version
    pub patch: u64,
    /// Release candidate (build) number
    pub rc: Option<u64>,
}

impl Version {
    /// Create a final release version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            rc: None,
        }
    }

    /// Create a release candidate version
    pub const fn release_candidate(major: u64, minor: u64, patch: u64, rc: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            rc: Some(rc),
        }
    }

    /// Parse a version string. See [`crate::parse`] for the accepted grammar.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// Same version with the given release candidate number
    pub const fn with_rc(mut self, rc: u64) -> Self {
        self.rc = Some(rc);
        self
    }

    /// Same version as a final release
    pub const fn release(mut self) -> Self {
        self.rc = None;
        self
    }

    /// Whether this is a release candidate
    pub const fn is_release_candidate(&self) -> bool {
        self.rc.is_some()
    }

    /// Whether this is a hotfix (patch > 0)
    pub const fn is_hotfix(&self) -> bool {
        self.patch > 0
    }

    /// Build number, 0 when absent
    pub fn build_number(&self) -> u64 {
        self.rc.unwrap_or(0)
    }

    /// Packed integer code `major*10^6 + minor*10^4 + patch*10^2 + rc`.
    ///
    /// Saturates instead of overflowing for majors near `u64::MAX`.
    pub fn raw_code(&self) -> u64 {
        self.major
            .saturating_mul(1_000_000)
            .saturating_add(self.minor.saturating_mul(10_000))
            .saturating_add(self.patch.saturating_mul(100))
            .saturating_add(self.build_number())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then(self.build_number().cmp(&other.build_number()))
            .then(self.rc.is_some().cmp(&other.rc.is_some()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(rc) = self.rc {
            write!(f, "-rc-{}", rc)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parser::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        let mut v = semver::Version::new(version.major, version.minor, version.patch);
        if let Some(rc) = version.rc {
            v.pre = semver::Prerelease::new(&format!("rc.{}", rc)).unwrap_or_default();
        }
        v
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = ParseError;

    fn try_from(v: &semver::Version) -> Result<Self, Self::Error> {
        let base = Version::new(v.major, v.minor, v.patch);
        if v.pre.is_empty() {
            return Ok(base);
        }

        let rc = v
            .pre
            .as_str()
            .strip_prefix("rc.")
            .and_then(|n| n.parse::<u64>().ok())
            .ok_or_else(|| {
                ParseError::invalid(v.to_string(), "only rc.N prereleases are supported")
            })?;
        Ok(base.with_rc(rc))
    }
}
