//! Android Gradle build file (`build.gradle` / `build.gradle.kts`)

use std::path::{Path, PathBuf};

use regex::{Captures, Regex};
use tracing::{debug, info, instrument};

use relkit_core::error::{AdapterError, RelkitError, Result};

use crate::keyvalue::{read_file, write_file};
use crate::traits::VersionFile;

/// Build script dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradleDialect {
    /// `versionName "1.2"`
    Groovy,
    /// `versionName = "1.2"`
    Kotlin,
}

impl GradleDialect {
    /// Dialect from the file name: `.kts` is Kotlin, anything else Groovy
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("kts") => Self::Kotlin,
            _ => Self::Groovy,
        }
    }

    fn name_pattern(&self) -> &'static str {
        match self {
            Self::Kotlin => r#"(versionName\s*=\s*)"([^"]*)""#,
            Self::Groovy => r#"(versionName\s+)(["'])([^"']*)["']"#,
        }
    }

    fn code_pattern(&self) -> &'static str {
        match self {
            Self::Kotlin => r"(versionCode\s*=\s*)(\d+)",
            Self::Groovy => r"(versionCode\s+)(\d+)",
        }
    }
}

/// Version stored in the `defaultConfig` block of a Gradle build script
#[derive(Debug, Clone)]
pub struct GradleFile {
    path: PathBuf,
    dialect: GradleDialect,
}

impl GradleFile {
    /// Adapter for a build script, dialect taken from the file name
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let dialect = GradleDialect::from_path(&path);
        Self { path, dialect }
    }

    /// Build script dialect
    pub fn dialect(&self) -> GradleDialect {
        self.dialect
    }

    fn regex(&self, pattern: &str) -> Result<Regex> {
        Regex::new(pattern).map_err(|e| RelkitError::other(format!("invalid pattern: {}", e)))
    }

    fn key_not_found(&self, key: &str) -> RelkitError {
        AdapterError::KeyNotFound {
            key: key.to_string(),
            path: self.path.clone(),
        }
        .into()
    }
}

impl VersionFile for GradleFile {
    fn name(&self) -> &'static str {
        "gradle"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_version(&self) -> Result<String> {
        let content = read_file(&self.path)?;
        let re = self.regex(self.dialect.name_pattern())?;
        let caps = re
            .captures(&content)
            .ok_or_else(|| self.key_not_found("versionName"))?;

        // Groovy captures the quote character as group 2
        let value = match self.dialect {
            GradleDialect::Kotlin => &caps[2],
            GradleDialect::Groovy => &caps[3],
        };
        debug!(version = value, "read versionName");
        Ok(value.to_string())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn write_version(&self, formatted: &str) -> Result<()> {
        let content = read_file(&self.path)?;
        let re = self.regex(self.dialect.name_pattern())?;
        if !re.is_match(&content) {
            return Err(self.key_not_found("versionName"));
        }

        let dialect = self.dialect;
        let updated = re.replace(&content, |caps: &Captures| match dialect {
            GradleDialect::Kotlin => format!("{}\"{}\"", &caps[1], formatted),
            GradleDialect::Groovy => format!("{}{}{}{}", &caps[1], &caps[2], formatted, &caps[2]),
        });
        write_file(&self.path, &updated)?;
        info!(version = formatted, "wrote versionName");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_build_code(&self) -> Result<String> {
        let content = read_file(&self.path)?;
        let re = self.regex(self.dialect.code_pattern())?;
        re.captures(&content)
            .map(|caps| caps[2].to_string())
            .ok_or_else(|| self.key_not_found("versionCode"))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn write_build_code(&self, formatted: &str) -> Result<()> {
        let content = read_file(&self.path)?;
        let re = self.regex(self.dialect.code_pattern())?;
        if !re.is_match(&content) {
            return Err(self.key_not_found("versionCode"));
        }

        let updated = re.replace(&content, |caps: &Captures| format!("{}{}", &caps[1], formatted));
        write_file(&self.path, &updated)?;
        info!(build_code = formatted, "wrote versionCode");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KOTLIN: &str = r#"
android {
    defaultConfig {
        applicationId = "com.example.app"
        minSdk = 24
        versionCode = 42
        versionName = "1.2-rc-3"
    }
}
"#;

    const GROOVY: &str = r#"
android {
    defaultConfig {
        applicationId "com.example.app"
        versionCode 15
        versionName '2.0'
    }
}
"#;

    fn write(temp: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = temp.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(GradleDialect::from_path(Path::new("app/build.gradle.kts")), GradleDialect::Kotlin);
        assert_eq!(GradleDialect::from_path(Path::new("app/build.gradle")), GradleDialect::Groovy);
    }

    #[test]
    fn test_kotlin_read_and_write() {
        let temp = TempDir::new().unwrap();
        let file = GradleFile::new(write(&temp, "build.gradle.kts", KOTLIN));

        assert_eq!(file.read_version().unwrap(), "1.2-rc-3");
        assert_eq!(file.read_build_code().unwrap(), "42");

        file.write_version("1.3").unwrap();
        file.write_build_code("43").unwrap();

        let updated = std::fs::read_to_string(file.path()).unwrap();
        assert!(updated.contains("versionName = \"1.3\""));
        assert!(updated.contains("versionCode = 43"));
        assert!(updated.contains("minSdk = 24"));
    }

    #[test]
    fn test_groovy_keeps_quote_style() {
        let temp = TempDir::new().unwrap();
        let file = GradleFile::new(write(&temp, "build.gradle", GROOVY));

        assert_eq!(file.read_version().unwrap(), "2.0");
        assert_eq!(file.read_build_code().unwrap(), "15");

        file.write_version("2.1-rc-1").unwrap();
        file.write_build_code("16").unwrap();

        let updated = std::fs::read_to_string(file.path()).unwrap();
        assert!(updated.contains("versionName '2.1-rc-1'"));
        assert!(updated.contains("versionCode 16"));
        assert!(updated.contains("applicationId \"com.example.app\""));
    }

    #[test]
    fn test_missing_keys() {
        let temp = TempDir::new().unwrap();
        let file = GradleFile::new(write(&temp, "build.gradle", "android {}\n"));

        assert!(matches!(
            file.read_version(),
            Err(RelkitError::Adapter(AdapterError::KeyNotFound { .. }))
        ));
        assert!(file.write_build_code("1").is_err());
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "android {}\n");
    }
}
