//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{BuildCodeScheme, Platform, VersioningScheme};

/// Main configuration for relkit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// App name, used in log and CLI output only
    pub name: Option<String>,

    /// Versioning configuration
    pub versioning: VersioningConfig,

    /// iOS version file configuration
    pub ios: IosConfig,

    /// Android version file configuration
    pub android: AndroidConfig,
}

impl Config {
    /// Path of the version file for a platform
    pub fn version_file(&self, platform: Platform) -> &PathBuf {
        match platform {
            Platform::Ios => &self.ios.xcconfig,
            Platform::Android => &self.android.file,
        }
    }
}

/// Versioning configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Versioning scheme (semantic, marketing, date)
    pub scheme: VersioningScheme,

    /// Build code scheme (simple, date)
    pub build_code: BuildCodeScheme,
}

/// iOS `.xcconfig` version file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IosConfig {
    /// Path to the xcconfig file holding the version
    pub xcconfig: PathBuf,

    /// Key of the four-part version (e.g. `1.2.3.4`)
    pub version_key: String,

    /// Key of the public version (e.g. `1.2.3`), written alongside the long one
    pub short_version_key: Option<String>,

    /// Key of the build number
    pub build_key: String,
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            xcconfig: PathBuf::from("config/Version.public.xcconfig"),
            version_key: "VERSION_LONG".to_string(),
            short_version_key: Some("VERSION_SHORT".to_string()),
            build_key: "BUILD_NUMBER".to_string(),
        }
    }
}

/// Android version file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Path to `version.properties` or the app's Gradle build file
    pub file: PathBuf,

    /// Key of the version name
    pub version_name_key: String,

    /// Key of the version code
    pub version_code_key: String,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("version.properties"),
            version_name_key: "versionName".to_string(),
            version_code_key: "versionCode".to_string(),
        }
    }
}
