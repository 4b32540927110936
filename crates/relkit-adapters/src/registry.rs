//! Adapter selection from configuration

use std::path::Path;

use tracing::debug;

use relkit_core::config::Config;
use relkit_core::error::{AdapterError, Result};
use relkit_core::Platform;

use crate::gradle::GradleFile;
use crate::properties::VersionPropertiesFile;
use crate::traits::VersionFile;
use crate::xcconfig::XcconfigFile;

/// Open the version file configured for a platform.
///
/// Relative paths in the configuration are resolved against `root`. Android
/// files are told apart by name: Gradle scripts end in `.gradle` or
/// `.gradle.kts`, everything ending in `.properties` is a properties file.
pub fn open_version_file(
    config: &Config,
    platform: Platform,
    root: &Path,
) -> Result<Box<dyn VersionFile>> {
    let path = root.join(config.version_file(platform));

    let file: Box<dyn VersionFile> = match platform {
        Platform::Ios => Box::new(XcconfigFile::from_config(path, &config.ios)),
        Platform::Android => {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            if name.ends_with(".gradle") || name.ends_with(".gradle.kts") {
                Box::new(GradleFile::new(path))
            } else if name.ends_with(".properties") {
                Box::new(VersionPropertiesFile::from_config(path, &config.android))
            } else {
                return Err(AdapterError::UnsupportedFile(path).into());
            }
        }
    };

    debug!(%platform, adapter = file.name(), path = %file.path().display(), "opened version file");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relkit_core::error::RelkitError;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        let root = Path::new("/project");

        let ios = open_version_file(&config, Platform::Ios, root).unwrap();
        assert_eq!(ios.name(), "xcconfig");
        assert_eq!(ios.path(), Path::new("/project/config/Version.public.xcconfig"));

        let android = open_version_file(&config, Platform::Android, root).unwrap();
        assert_eq!(android.name(), "properties");
    }

    #[test]
    fn test_gradle_selection() {
        let mut config = Config::default();
        config.android.file = PathBuf::from("app/build.gradle.kts");
        let file = open_version_file(&config, Platform::Android, Path::new(".")).unwrap();
        assert_eq!(file.name(), "gradle");

        config.android.file = PathBuf::from("app/build.gradle");
        let file = open_version_file(&config, Platform::Android, Path::new(".")).unwrap();
        assert_eq!(file.name(), "gradle");
    }

    #[test]
    fn test_absolute_path_kept() {
        let mut config = Config::default();
        config.android.file = PathBuf::from("/elsewhere/version.properties");
        let file = open_version_file(&config, Platform::Android, Path::new("/project")).unwrap();
        assert_eq!(file.path(), Path::new("/elsewhere/version.properties"));
    }

    #[test]
    fn test_unsupported_file() {
        let mut config = Config::default();
        config.android.file = PathBuf::from("AndroidManifest.xml");
        let err = open_version_file(&config, Platform::Android, Path::new(".")).err();
        assert!(matches!(
            err,
            Some(RelkitError::Adapter(AdapterError::UnsupportedFile(_)))
        ));
    }
}
