//! Versioning schemes and calculator selection

use chrono::NaiveDate;
use tracing::debug;

use relkit_core::error::Result;
pub use relkit_core::types::{BuildCodeScheme, VersioningScheme};

use crate::build_code::{BuildCode, DateBuildCodeCalculator, SimpleBuildCodeCalculator};
use crate::date::DateCalculator;
use crate::marketing::MarketingCalculator;
use crate::semantic::SemanticCalculator;
use crate::traits::{BuildCodeCalculator, VersionCalculator};
use crate::version::Version;

/// Calculator for a versioning scheme
#[derive(Debug, Clone, Copy)]
pub enum SchemeCalculator {
    /// Semantic versioning
    Semantic(SemanticCalculator),
    /// Marketing versioning
    Marketing(MarketingCalculator),
    /// Date-based versioning
    Date(DateCalculator),
}

impl SchemeCalculator {
    /// Calculator for a scheme; `today` only matters for the date scheme
    pub fn for_scheme(scheme: VersioningScheme, today: NaiveDate) -> Self {
        debug!(%scheme, %today, "selecting version calculator");
        match scheme {
            VersioningScheme::Semantic => Self::Semantic(SemanticCalculator),
            VersioningScheme::Marketing => Self::Marketing(MarketingCalculator),
            VersioningScheme::Date => Self::Date(DateCalculator::new(today)),
        }
    }

    /// Scheme of this calculator
    pub fn scheme(&self) -> VersioningScheme {
        match self {
            Self::Semantic(_) => VersioningScheme::Semantic,
            Self::Marketing(_) => VersioningScheme::Marketing,
            Self::Date(_) => VersioningScheme::Date,
        }
    }

    fn inner(&self) -> &dyn VersionCalculator {
        match self {
            Self::Semantic(c) => c,
            Self::Marketing(c) => c,
            Self::Date(c) => c,
        }
    }
}

impl From<DateCalculator> for SchemeCalculator {
    fn from(calc: DateCalculator) -> Self {
        Self::Date(calc)
    }
}

impl VersionCalculator for SchemeCalculator {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn next_release_version(&self, current: &Version) -> Result<Version> {
        self.inner().next_release_version(current)
    }

    fn previous_release_version(&self, current: &Version) -> Result<Version> {
        self.inner().previous_release_version(current)
    }
}

/// Calculator for a build code scheme
#[derive(Debug, Clone, Copy)]
pub enum BuildCodeCalculatorKind {
    /// Increment by one
    Simple(SimpleBuildCodeCalculator),
    /// Date of the build
    Date(DateBuildCodeCalculator),
}

impl BuildCodeCalculatorKind {
    /// Calculator for a build code scheme
    pub fn for_scheme(scheme: BuildCodeScheme) -> Self {
        match scheme {
            BuildCodeScheme::Simple => Self::Simple(SimpleBuildCodeCalculator),
            BuildCodeScheme::Date => Self::Date(DateBuildCodeCalculator::new()),
        }
    }
}

impl BuildCodeCalculator for BuildCodeCalculatorKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Simple(c) => c.name(),
            Self::Date(c) => c.name(),
        }
    }

    fn next_build_code(&self, current: &BuildCode) -> Result<BuildCode> {
        match self {
            Self::Simple(c) => c.next_build_code(current),
            Self::Date(c) => c.next_build_code(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, d).unwrap()
    }

    #[test]
    fn test_calculator_dispatch() {
        let today = day(2024, 5, 2);
        let v = Version::release_candidate(1, 9, 0, 0);

        let semantic = SchemeCalculator::for_scheme(VersioningScheme::Semantic, today);
        assert_eq!(semantic.name(), "semantic");
        assert_eq!(
            semantic.next_release_version(&v).unwrap(),
            Version::release_candidate(1, 10, 0, 0)
        );

        let marketing = SchemeCalculator::for_scheme(VersioningScheme::Marketing, today);
        assert_eq!(marketing.scheme(), VersioningScheme::Marketing);
        assert_eq!(
            marketing.next_release_version(&v).unwrap(),
            Version::release_candidate(2, 0, 0, 0)
        );

        let date = SchemeCalculator::for_scheme(VersioningScheme::Date, today);
        assert_eq!(
            date.next_release_version(&v).unwrap(),
            Version::release_candidate(1, 10, 0, 0)
        );
    }

    #[test]
    fn test_shared_operations_dispatch() {
        let calc = SchemeCalculator::for_scheme(VersioningScheme::Marketing, day(2024, 5, 2));
        let v = Version::release_candidate(3, 4, 1, 6);
        assert_eq!(calc.next_build_number(&v).unwrap(), Version::release_candidate(3, 4, 1, 7));
        assert_eq!(calc.previous_patch(&v).unwrap(), Version::release_candidate(3, 4, 0, 0));
        assert!(calc.is_hotfix(&v));
    }

    #[test]
    fn test_build_code_dispatch() {
        let simple = BuildCodeCalculatorKind::for_scheme(BuildCodeScheme::Simple);
        assert_eq!(simple.name(), "simple");
        assert_eq!(simple.next_build_code(&BuildCode(41)).unwrap(), BuildCode(42));

        let date = BuildCodeCalculatorKind::for_scheme(BuildCodeScheme::Date);
        assert_eq!(date.name(), "date");
        assert!(date.next_build_code(&BuildCode(41)).unwrap().value() > 20_000_000);
    }
}
