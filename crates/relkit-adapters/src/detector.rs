//! Version file detection
//!
//! Walks a project tree looking for files that carry an app version, so that
//! `relkit init` can point the configuration at them.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use relkit_core::Platform;

const MAX_DEPTH: usize = 4;
const SKIPPED_DIRS: &[&str] = &["build", "node_modules", "Pods", "DerivedData", "target"];
const XCCONFIG_KEYS: &[&str] = &["VERSION_LONG", "VERSION_SHORT", "BUILD_NUMBER"];

/// A version file found in the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFile {
    /// Platform the file belongs to
    pub platform: Platform,
    /// Path relative to the project root
    pub path: PathBuf,
}

fn is_skipped(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn file_contains(path: &Path, needles: &[&str]) -> bool {
    std::fs::read_to_string(path)
        .map(|content| needles.iter().any(|needle| content.contains(needle)))
        .unwrap_or(false)
}

fn classify(path: &Path) -> Option<Platform> {
    let name = path.file_name()?.to_str()?;
    if name == "version.properties" {
        return Some(Platform::Android);
    }
    if (name == "build.gradle" || name == "build.gradle.kts") && file_contains(path, &["versionName"]) {
        return Some(Platform::Android);
    }
    if name.ends_with(".xcconfig") && file_contains(path, XCCONFIG_KEYS) {
        return Some(Platform::Ios);
    }
    None
}

/// Find version files under `root`.
///
/// Hidden and build output directories are skipped. Results are sorted by
/// platform, then with `version.properties` ahead of Gradle scripts, then by path.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn detect_version_files(root: &Path) -> Vec<DetectedFile> {
    let mut found: Vec<DetectedFile> = WalkDir::new(root)
        .max_depth(MAX_DEPTH)
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let platform = classify(e.path())?;
            let path = e.path().strip_prefix(root).unwrap_or(e.path()).to_path_buf();
            debug!(%platform, path = %path.display(), "detected version file");
            Some(DetectedFile { platform, path })
        })
        .collect();

    found.sort_by_key(|f| {
        let gradle = f.path.extension().is_some_and(|ext| ext != "properties");
        (f.platform.as_str(), gradle, f.path.clone())
    });
    found
}

impl DetectedFile {
    /// First detected file for a platform
    pub fn first_for(files: &[DetectedFile], platform: Platform) -> Option<&DetectedFile> {
        files.iter().find(|f| f.platform == platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_detects_mobile_version_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "config/Version.public.xcconfig", "VERSION_LONG = 1.2.0.0\n");
        touch(root, "config/Signing.xcconfig", "CODE_SIGN_STYLE = Manual\n");
        touch(root, "WordPress/version.properties", "versionName=1.2\n");
        touch(root, "WordPress/build.gradle", "android { versionName '1.2' }\n");
        touch(root, "build.gradle", "plugins {}\n");

        let found = detect_version_files(root);
        assert_eq!(
            found,
            vec![
                DetectedFile {
                    platform: Platform::Android,
                    path: PathBuf::from("WordPress/version.properties"),
                },
                DetectedFile {
                    platform: Platform::Android,
                    path: PathBuf::from("WordPress/build.gradle"),
                },
                DetectedFile {
                    platform: Platform::Ios,
                    path: PathBuf::from("config/Version.public.xcconfig"),
                },
            ]
        );
        assert_eq!(
            DetectedFile::first_for(&found, Platform::Ios).map(|f| f.path.clone()),
            Some(PathBuf::from("config/Version.public.xcconfig"))
        );
    }

    #[test]
    fn test_skips_build_output() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "app/build/intermediates/version.properties", "versionName=1.0\n");
        touch(root, "Pods/Target/Version.xcconfig", "VERSION_LONG = 1.0.0.0\n");
        touch(root, ".git/version.properties", "versionName=1.0\n");

        assert!(detect_version_files(root).is_empty());
    }
}
