//! Semantic versioning scheme

use tracing::instrument;

use relkit_core::error::Result;

use crate::traits::VersionCalculator;
use crate::version::Version;

/// Semantic Versioning calculator
///
/// A regular release bumps the minor version; hotfixes bump the patch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticCalculator;

impl VersionCalculator for SemanticCalculator {
    fn name(&self) -> &'static str {
        "semantic"
    }

    #[instrument(skip_all, fields(scheme = "semantic", current = %current))]
    fn next_release_version(&self, current: &Version) -> Result<Version> {
        self.next_minor(current)
    }

    /// Decrements the minor version without wrapping into the previous major;
    /// a minor of 0 is reported as an invalid state.
    #[instrument(skip_all, fields(scheme = "semantic", current = %current))]
    fn previous_release_version(&self, current: &Version) -> Result<Version> {
        self.previous_minor(current)
    }
}
