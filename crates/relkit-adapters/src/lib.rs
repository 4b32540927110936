//! relkit Adapters - Version file adapters
//!
//! This crate reads and writes version strings and build codes in platform
//! project files: iOS `.xcconfig`, Android `version.properties` and Android
//! Gradle build files.

pub mod detector;
pub mod gradle;
mod keyvalue;
pub mod properties;
pub mod registry;
mod traits;
pub mod xcconfig;

pub use detector::{detect_version_files, DetectedFile};
pub use gradle::GradleFile;
pub use properties::VersionPropertiesFile;
pub use registry::open_version_file;
pub use traits::VersionFile;
pub use xcconfig::XcconfigFile;
