//! Android `version.properties` file
//!
//! ```text
//! versionName=1.2-rc-3
//! versionCode=1234
//! ```

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use relkit_core::config::AndroidConfig;
use relkit_core::error::Result;

use crate::keyvalue::{read_key, write_key, Syntax};
use crate::traits::VersionFile;

/// Version stored in a Java properties file
#[derive(Debug, Clone)]
pub struct VersionPropertiesFile {
    path: PathBuf,
    version_name_key: String,
    version_code_key: String,
}

impl VersionPropertiesFile {
    /// Adapter with the default keys (`versionName`, `versionCode`)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_config(path, &AndroidConfig::default())
    }

    /// Adapter with the keys from the Android configuration
    pub fn from_config(path: impl Into<PathBuf>, config: &AndroidConfig) -> Self {
        Self {
            path: path.into(),
            version_name_key: config.version_name_key.clone(),
            version_code_key: config.version_code_key.clone(),
        }
    }
}

impl VersionFile for VersionPropertiesFile {
    fn name(&self) -> &'static str {
        "properties"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_version(&self) -> Result<String> {
        read_key(Syntax::Properties, &self.path, &self.version_name_key)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn write_version(&self, formatted: &str) -> Result<()> {
        write_key(Syntax::Properties, &self.path, &self.version_name_key, formatted)?;
        info!(version = formatted, "wrote version name");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_build_code(&self) -> Result<String> {
        read_key(Syntax::Properties, &self.path, &self.version_code_key)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn write_build_code(&self, formatted: &str) -> Result<()> {
        write_key(Syntax::Properties, &self.path, &self.version_code_key, formatted)?;
        info!(build_code = formatted, "wrote version code");
        Ok(())
    }
}
