//! Version file adapter traits

use std::path::Path;

use relkit_core::error::Result;

/// Trait for version file adapters
///
/// Adapters only move strings: parsing and formatting happen in the
/// versioning engine.
pub trait VersionFile: Send + Sync {
    /// Get the adapter name (e.g., "xcconfig", "gradle")
    fn name(&self) -> &'static str;

    /// Path of the file this adapter edits
    fn path(&self) -> &Path;

    /// Raw version string stored in the file
    fn read_version(&self) -> Result<String>;

    /// Store a formatted version string
    fn write_version(&self, formatted: &str) -> Result<()>;

    /// Raw build code stored in the file
    fn read_build_code(&self) -> Result<String>;

    /// Store a formatted build code
    fn write_build_code(&self, formatted: &str) -> Result<()>;

    /// Store the public (store-facing) version, for files that keep one
    /// next to the full version
    fn write_public_version(&self, _formatted: &str) -> Result<()> {
        Ok(())
    }
}
