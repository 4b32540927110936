//! Core types for relkit

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// Mobile platform whose project files carry the version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS (Xcode `.xcconfig`)
    Ios,
    /// Android (`version.properties` or Gradle build file)
    Android,
}

impl Platform {
    /// Returns the string representation of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// How release versions advance
///
/// Names are matched case-insensitively, in configuration files as well as on
/// the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersioningScheme {
    /// Minor bump per release
    #[default]
    Semantic,
    /// Minor bump per release, wrapping to the next major after `.9`
    Marketing,
    /// Major follows the year, minor counts releases within it
    /// (also accepted as `date-based` or `calendar`)
    Date,
}

impl VersioningScheme {
    /// Returns the string representation of the scheme
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Marketing => "marketing",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for VersioningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VersioningScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "semantic" => Ok(Self::Semantic),
            "marketing" => Ok(Self::Marketing),
            "date" | "date-based" | "calendar" => Ok(Self::Date),
            _ => Err(ConfigError::InvalidValue {
                field: "versioning.scheme".to_string(),
                message: format!(
                    "unknown scheme '{}', expected semantic, marketing or date",
                    s
                ),
            }),
        }
    }
}

/// How build codes advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildCodeScheme {
    /// Increment by one
    #[default]
    Simple,
    /// Date of the build, `YYYYMMDD`
    Date,
}

impl BuildCodeScheme {
    /// Returns the string representation of the scheme
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for BuildCodeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildCodeScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "date" => Ok(Self::Date),
            _ => Err(ConfigError::InvalidValue {
                field: "versioning.build_code".to_string(),
                message: format!("unknown build code scheme '{}', expected simple or date", s),
            }),
        }
    }
}

// Both schemes travel as their names, parsed with `FromStr` so that the
// accepted spellings are the same everywhere.
macro_rules! serde_via_str {
    ($($ty:ty),*) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    )*};
}

serde_via_str!(VersioningScheme, BuildCodeScheme);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("semantic".parse::<VersioningScheme>().unwrap(), VersioningScheme::Semantic);
        assert_eq!("Marketing".parse::<VersioningScheme>().unwrap(), VersioningScheme::Marketing);
        assert_eq!("date-based".parse::<VersioningScheme>().unwrap(), VersioningScheme::Date);
        assert_eq!("CALENDAR".parse::<VersioningScheme>().unwrap(), VersioningScheme::Date);
        assert!("calver".parse::<VersioningScheme>().is_err());

        assert_eq!("Date".parse::<BuildCodeScheme>().unwrap(), BuildCodeScheme::Date);
        assert!("weekly".parse::<BuildCodeScheme>().is_err());
    }

    #[test]
    fn test_scheme_serde() {
        let scheme: VersioningScheme = serde_yaml::from_str("Marketing").unwrap();
        assert_eq!(scheme, VersioningScheme::Marketing);
        let scheme: VersioningScheme = serde_yaml::from_str("date-based").unwrap();
        assert_eq!(scheme, VersioningScheme::Date);
        assert_eq!(serde_yaml::to_string(&VersioningScheme::Date).unwrap().trim(), "date");

        let err = serde_yaml::from_str::<BuildCodeScheme>("hourly").unwrap_err();
        assert!(err.to_string().contains("unknown build code scheme"));
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert!("windows".parse::<Platform>().is_err());
    }
}
