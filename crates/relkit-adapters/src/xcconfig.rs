//! iOS `.xcconfig` version file
//!
//! ```text
//! VERSION_SHORT = 1.2
//! VERSION_LONG = 1.2.0.3
//! BUILD_NUMBER = 45
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use relkit_core::config::IosConfig;
use relkit_core::error::Result;

use crate::keyvalue::{read_key, write_key, Syntax};
use crate::traits::VersionFile;

/// Version stored in an Xcode build configuration file
#[derive(Debug, Clone)]
pub struct XcconfigFile {
    path: PathBuf,
    version_key: String,
    short_version_key: Option<String>,
    build_key: String,
}

impl XcconfigFile {
    /// Adapter with the default keys (`VERSION_LONG`, `VERSION_SHORT`, `BUILD_NUMBER`)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_config(path, &IosConfig::default())
    }

    /// Adapter with the keys from the iOS configuration
    pub fn from_config(path: impl Into<PathBuf>, config: &IosConfig) -> Self {
        Self {
            path: path.into(),
            version_key: config.version_key.clone(),
            short_version_key: config.short_version_key.clone(),
            build_key: config.build_key.clone(),
        }
    }

    /// Set the key holding the four-part version
    pub fn with_version_key(mut self, key: impl Into<String>) -> Self {
        self.version_key = key.into();
        self
    }

    /// Set or clear the key holding the public version
    pub fn with_short_version_key(mut self, key: Option<String>) -> Self {
        self.short_version_key = key;
        self
    }
}

impl VersionFile for XcconfigFile {
    fn name(&self) -> &'static str {
        "xcconfig"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display(), key = %self.version_key))]
    fn read_version(&self) -> Result<String> {
        let version = read_key(Syntax::Xcconfig, &self.path, &self.version_key)?;
        debug!(%version, "read version");
        Ok(version)
    }

    #[instrument(skip(self), fields(path = %self.path.display(), key = %self.version_key))]
    fn write_version(&self, formatted: &str) -> Result<()> {
        write_key(Syntax::Xcconfig, &self.path, &self.version_key, formatted)?;
        info!(version = formatted, "wrote version");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display(), key = %self.build_key))]
    fn read_build_code(&self) -> Result<String> {
        read_key(Syntax::Xcconfig, &self.path, &self.build_key)
    }

    #[instrument(skip(self), fields(path = %self.path.display(), key = %self.build_key))]
    fn write_build_code(&self, formatted: &str) -> Result<()> {
        write_key(Syntax::Xcconfig, &self.path, &self.build_key, formatted)?;
        info!(build_code = formatted, "wrote build code");
        Ok(())
    }

    fn write_public_version(&self, formatted: &str) -> Result<()> {
        match &self.short_version_key {
            Some(key) => {
                write_key(Syntax::Xcconfig, &self.path, key, formatted)?;
                info!(path = %self.path.display(), key = %key, version = formatted, "wrote public version");
                Ok(())
            }
            None => Ok(()),
        }
    }
}
