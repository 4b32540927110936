//! Calculator traits

use relkit_core::error::{Result, VersionError};

use crate::build_code::BuildCode;
use crate::version::Version;

/// Trait for version calculators
///
/// Every operation takes the current version by reference and returns a new
/// one. The common increments are provided; schemes only decide what the next
/// and previous *release* versions are.
pub trait VersionCalculator: Send + Sync {
    /// Get the name of the versioning scheme
    fn name(&self) -> &'static str;

    /// Next regular release
    fn next_release_version(&self, current: &Version) -> Result<Version>;

    /// Release that preceded the current one
    fn previous_release_version(&self, current: &Version) -> Result<Version>;

    /// major+1, minor and patch to 0, build reset
    fn next_major(&self, current: &Version) -> Result<Version> {
        Ok(Version {
            major: increment(current.major, "major")?,
            minor: 0,
            patch: 0,
            rc: reset_build(current),
        })
    }

    /// minor+1, patch to 0, build reset
    fn next_minor(&self, current: &Version) -> Result<Version> {
        Ok(Version {
            minor: increment(current.minor, "minor")?,
            patch: 0,
            rc: reset_build(current),
            ..*current
        })
    }

    /// patch+1, build reset
    fn next_patch(&self, current: &Version) -> Result<Version> {
        Ok(Version {
            patch: increment(current.patch, "patch")?,
            rc: reset_build(current),
            ..*current
        })
    }

    /// build+1, an absent build counting as 0
    fn next_build_number(&self, current: &Version) -> Result<Version> {
        Ok(Version {
            rc: Some(increment(current.build_number(), "build number")?),
            ..*current
        })
    }

    /// patch-1 floored at 0, build reset
    fn previous_patch(&self, current: &Version) -> Result<Version> {
        Ok(Version {
            patch: current.patch.saturating_sub(1),
            rc: reset_build(current),
            ..*current
        })
    }

    /// minor-1, patch to 0, build reset. A minor of 0 has no predecessor.
    fn previous_minor(&self, current: &Version) -> Result<Version> {
        let minor = current.minor.checked_sub(1).ok_or_else(|| {
            VersionError::InvalidState(format!("{} has no previous minor version", current))
        })?;
        Ok(Version {
            minor,
            patch: 0,
            rc: reset_build(current),
            ..*current
        })
    }

    /// Next hotfix of the release the current version belongs to
    fn next_hotfix_version(&self, current: &Version) -> Result<Version> {
        self.next_patch(&current.release())
    }

    /// Whether the version is a hotfix
    fn is_hotfix(&self, current: &Version) -> bool {
        current.is_hotfix()
    }
}

/// Trait for build code calculators
pub trait BuildCodeCalculator: Send + Sync {
    /// Get the name of the build code scheme
    fn name(&self) -> &'static str;

    /// Build code to use for the next build
    fn next_build_code(&self, current: &BuildCode) -> Result<BuildCode>;
}

/// Decisions a calculator cannot make on its own, supplied by the caller
/// (an interactive terminal, a CI step, or a test).
pub trait ReleasePrompter {
    /// Ask a yes/no question
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Ask for a non-negative integer
    fn prompt_integer(&self, question: &str) -> Result<u64>;
}

/// Build number after a major/minor/patch change: 0 when the version carries
/// one, still absent when it does not.
pub(crate) fn reset_build(current: &Version) -> Option<u64> {
    current.rc.map(|_| 0)
}

pub(crate) fn increment(value: u64, field: &str) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| VersionError::InvalidState(format!("{} overflows", field)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SemanticCalculator;
    use proptest::prelude::*;

    #[test]
    fn test_next_major() {
        let calc = SemanticCalculator;
        assert_eq!(
            calc.next_major(&Version::release_candidate(1, 2, 3, 4)).unwrap(),
            Version::release_candidate(2, 0, 0, 0)
        );
        assert_eq!(calc.next_major(&Version::new(1, 2, 3)).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_next_minor_and_patch() {
        let calc = SemanticCalculator;
        let v = Version::release_candidate(1, 2, 3, 4);
        assert_eq!(calc.next_minor(&v).unwrap(), Version::release_candidate(1, 3, 0, 0));
        assert_eq!(calc.next_patch(&v).unwrap(), Version::release_candidate(1, 2, 4, 0));
    }

    #[test]
    fn test_next_build_number_does_not_cascade() {
        let calc = SemanticCalculator;
        assert_eq!(
            calc.next_build_number(&Version::release_candidate(1, 2, 3, 4)).unwrap(),
            Version::release_candidate(1, 2, 3, 5)
        );
        assert_eq!(
            calc.next_build_number(&Version::new(1, 2, 3)).unwrap(),
            Version::release_candidate(1, 2, 3, 1)
        );
    }

    #[test]
    fn test_previous_patch_floors_at_zero() {
        let calc = SemanticCalculator;
        assert_eq!(
            calc.previous_patch(&Version::release_candidate(1, 2, 3, 4)).unwrap(),
            Version::release_candidate(1, 2, 2, 0)
        );
        assert_eq!(calc.previous_patch(&Version::new(1, 2, 0)).unwrap(), Version::new(1, 2, 0));
    }

    #[test]
    fn test_previous_minor_rejects_zero() {
        let calc = SemanticCalculator;
        let err = calc.previous_minor(&Version::new(3, 0, 0)).unwrap_err();
        assert!(err.to_string().contains("no previous minor"));
    }

    #[test]
    fn test_next_hotfix_drops_rc() {
        let calc = SemanticCalculator;
        assert_eq!(
            calc.next_hotfix_version(&Version::release_candidate(1, 2, 0, 3)).unwrap(),
            Version::new(1, 2, 1)
        );
        assert!(calc.is_hotfix(&Version::new(1, 2, 1)));
        assert!(!calc.is_hotfix(&Version::new(1, 2, 0)));
    }

    #[test]
    fn test_overflow_is_reported() {
        let calc = SemanticCalculator;
        assert!(calc.next_major(&Version::new(u64::MAX, 0, 0)).is_err());
    }

    #[test]
    fn test_input_is_untouched() {
        let calc = SemanticCalculator;
        let before = Version::release_candidate(1, 2, 3, 4);
        let after = calc.next_major(&before).unwrap();
        assert_eq!(before, Version::release_candidate(1, 2, 3, 4));
        assert_ne!(before, after);
    }

    proptest! {
        #[test]
        fn next_major_resets_lower_fields(
            major in 0u64..10_000,
            minor in 0u64..100,
            patch in 0u64..100,
            rc in prop::option::of(0u64..100),
        ) {
            let next = SemanticCalculator.next_major(&Version { major, minor, patch, rc }).unwrap();
            prop_assert_eq!(next.major, major + 1);
            prop_assert_eq!(next.minor, 0);
            prop_assert_eq!(next.patch, 0);
            prop_assert_eq!(next.build_number(), 0);
        }

        #[test]
        fn increments_move_forward(
            major in 0u64..100,
            minor in 0u64..99,
            patch in 0u64..99,
            rc in prop::option::of(0u64..99),
        ) {
            let calc = SemanticCalculator;
            let v = Version { major, minor, patch, rc };
            prop_assert!(calc.next_major(&v).unwrap() > v);
            prop_assert!(calc.next_minor(&v).unwrap() > v);
            prop_assert!(calc.next_patch(&v).unwrap() > v);
            prop_assert!(calc.next_build_number(&v).unwrap() > v);
            prop_assert!(calc.previous_patch(&v).unwrap() <= v);
        }
    }
}
