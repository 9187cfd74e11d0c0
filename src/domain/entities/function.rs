//! Function records exchanged with the provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{NetworkPlacement, Runtime, VersionId};

/// Configuration fields pushed on create and on configuration update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfiguration {
    pub name: String,
    pub runtime: Runtime,
    pub role: String,
    pub handler: String,
    pub description: String,
    pub timeout: u32,
    pub memory_size: u32,
    pub network: Option<NetworkPlacement>,
}

/// Provider-reported state of an existing function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDetails {
    pub name: String,
    /// Runtime identifier as reported by the provider
    pub runtime: String,
    pub role: String,
    pub handler: String,
    pub description: String,
    pub timeout: u32,
    pub memory_size: u32,
    pub network: Option<NetworkPlacement>,
    /// `sha256:`-prefixed digest of the current code
    pub code_sha256: String,
    pub code_size: u64,
    pub last_modified: DateTime<Utc>,
}

/// One entry of a version listing
///
/// Carries the configuration snapshot taken when the version was published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionVersion {
    pub version: VersionId,
    pub description: String,
    pub runtime: String,
    pub handler: String,
    pub timeout: u32,
    pub memory_size: u32,
    pub code_sha256: String,
    pub last_modified: DateTime<Utc>,
}
