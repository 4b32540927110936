//! Exit codes for the CLI

use relkit_core::RelkitError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Version error (parse failure, invalid state, missing input)
pub const VERSION_ERROR: i32 = 4;

/// Version file error
pub const ADAPTER_ERROR: i32 = 6;

/// User cancelled
pub const CANCELLED: i32 = 130;

/// Exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RelkitError>() {
        Some(RelkitError::Config(_)) => CONFIG_ERROR,
        Some(RelkitError::Version(_)) => VERSION_ERROR,
        Some(RelkitError::Adapter(_)) => ADAPTER_ERROR,
        Some(RelkitError::Cancelled) => CANCELLED,
        Some(RelkitError::Io(_)) | Some(RelkitError::Other(_)) | None => ERROR,
    }
}
