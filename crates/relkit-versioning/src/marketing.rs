//! Marketing versioning scheme
//!
//! The minor version counts 0 to 9; the release after `N.9` is `N+1.0`.

use tracing::{debug, instrument};

use relkit_core::error::{Result, VersionError};

use crate::traits::{reset_build, VersionCalculator};
use crate::version::Version;

/// Highest minor version a marketing version can carry
pub const MAX_MARKETING_MINOR: u64 = 9;

/// Marketing versioning calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketingCalculator;

impl MarketingCalculator {
    fn check_minor(current: &Version) -> Result<()> {
        if current.minor > MAX_MARKETING_MINOR {
            return Err(VersionError::InvalidState(format!(
                "marketing version {} has minor {} above {}",
                current, current.minor, MAX_MARKETING_MINOR
            ))
            .into());
        }
        Ok(())
    }
}

impl VersionCalculator for MarketingCalculator {
    fn name(&self) -> &'static str {
        "marketing"
    }

    #[instrument(skip_all, fields(scheme = "marketing", current = %current))]
    fn next_release_version(&self, current: &Version) -> Result<Version> {
        Self::check_minor(current)?;

        if current.minor == MAX_MARKETING_MINOR {
            debug!("minor at {}, rolling over to next major", MAX_MARKETING_MINOR);
            self.next_major(current)
        } else {
            self.next_minor(current)
        }
    }

    #[instrument(skip_all, fields(scheme = "marketing", current = %current))]
    fn previous_release_version(&self, current: &Version) -> Result<Version> {
        Self::check_minor(current)?;

        if current.minor > 0 {
            return self.previous_minor(current);
        }

        let major = current.major.checked_sub(1).ok_or_else(|| {
            VersionError::InvalidState(format!("{} has no previous release", current))
        })?;
        Ok(Version {
            major,
            minor: MAX_MARKETING_MINOR,
            patch: 0,
            rc: reset_build(current),
        })
    }
}
