//! Platform version formatters

use relkit_core::error::{Result, VersionError};
use relkit_core::Platform;

use crate::version::Version;

/// Largest value a two-digit field of the Android version code can hold
const MAX_CODE_FIELD: u64 = 99;

/// Android `versionName`: `M.m`, `M.m.p`, `M.m-rc-N` or `M.m.p-rc-N`
pub fn android_version_name(version: &Version) -> String {
    let mut name = format!("{}.{}", version.major, version.minor);
    if version.patch != 0 {
        name.push_str(&format!(".{}", version.patch));
    }
    if let Some(rc) = version.rc {
        name.push_str(&format!("-rc-{}", rc));
    }
    name
}

/// Android `versionCode` derived from the version:
/// `"1" + major + minor:02 + patch:02 + rc:02`.
///
/// Minor, patch and rc must be below 100 for the fixed-width packing to keep
/// the code ordered like the versions.
pub fn android_version_code(version: &Version) -> Result<u64> {
    for (field, value) in [
        ("minor", version.minor),
        ("patch", version.patch),
        ("rc", version.build_number()),
    ] {
        if value > MAX_CODE_FIELD {
            return Err(VersionError::InvalidState(format!(
                "{} {} of {} does not fit in a two-digit version code field",
                field, value, version
            ))
            .into());
        }
    }

    let code = format!(
        "1{}{:02}{:02}{:02}",
        version.major,
        version.minor,
        version.patch,
        version.build_number()
    );
    code.parse::<u64>().map_err(|_| {
        VersionError::InvalidState(format!("version code {} is out of range", code)).into()
    })
}

/// iOS four-part version number `M.m.p.b`, build 0 when absent
pub fn ios_version_number(version: &Version) -> String {
    format!(
        "{}.{}.{}.{}",
        version.major,
        version.minor,
        version.patch,
        version.build_number()
    )
}

/// iOS public (App Store) version: `M.m`, or `M.m.p` for hotfixes
pub fn ios_public_version(version: &Version) -> String {
    if version.patch == 0 {
        format!("{}.{}", version.major, version.minor)
    } else {
        format!("{}.{}.{}", version.major, version.minor, version.patch)
    }
}

/// Version string written to a platform's version file
pub fn format_for_platform(platform: Platform, version: &Version) -> String {
    match platform {
        Platform::Ios => ios_version_number(version),
        Platform::Android => android_version_name(version),
    }
}
