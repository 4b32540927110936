//! relkit Core - Core library for mobile release versioning
//!
//! This crate provides the error hierarchy, shared types and configuration
//! loading used by the versioning engine, the version file adapters and the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use error::{AdapterError, ConfigError, ParseError, RelkitError, Result, VersionError};
pub use types::{BuildCodeScheme, Platform, VersioningScheme};
