//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relkit.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relkit.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".relkit.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".relkit.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# relkit configuration

versioning:
  # semantic | marketing | date
  scheme: semantic
  # simple | date
  build_code: simple

ios:
  xcconfig: config/Version.public.xcconfig
  version_key: VERSION_LONG
  short_version_key: VERSION_SHORT
  build_key: BUILD_NUMBER

android:
  # version.properties, app/build.gradle or app/build.gradle.kts
  file: version.properties
  version_name_key: versionName
  version_code_key: versionCode
"#;
