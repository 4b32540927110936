//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_ios(config)?;
    validate_android(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_ios(config: &Config) -> Result<()> {
    require_non_empty("ios.version_key", &config.ios.version_key)?;
    require_non_empty("ios.build_key", &config.ios.build_key)?;
    if let Some(key) = &config.ios.short_version_key {
        require_non_empty("ios.short_version_key", key)?;
    }
    Ok(())
}

fn validate_android(config: &Config) -> Result<()> {
    require_non_empty("android.version_name_key", &config.android.version_name_key)?;
    require_non_empty("android.version_code_key", &config.android.version_code_key)?;
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}
