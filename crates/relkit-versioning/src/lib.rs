//! relkit Versioning - Version parsing and calculation for mobile releases
//!
//! This crate parses the version strings found in iOS and Android project
//! files, computes next/previous versions under the semantic, marketing and
//! date-based schemes, advances build codes and renders versions in each
//! platform's format.

mod build_code;
mod date;
pub mod format;
mod marketing;
mod parser;
mod scheme;
mod semantic;
mod traits;
mod version;

pub use build_code::{BuildCode, DateBuildCodeCalculator, SimpleBuildCodeCalculator};
pub use date::DateCalculator;
pub use format::{
    android_version_code, android_version_name, format_for_platform, ios_public_version,
    ios_version_number,
};
pub use marketing::{MarketingCalculator, MAX_MARKETING_MINOR};
pub use parser::parse;
pub use scheme::{BuildCodeCalculatorKind, BuildCodeScheme, SchemeCalculator, VersioningScheme};
pub use semantic::SemanticCalculator;
pub use traits::{BuildCodeCalculator, ReleasePrompter, VersionCalculator};
pub use version::Version;
