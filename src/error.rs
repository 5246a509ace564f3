//! Error types for cluster configuration resolution.

use crate::cluster::ProfileField;
use thiserror::Error;

/// Profile store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Failed to decode profile '{profile}': {message}")]
    Decode { profile: String, message: String },

    #[error("Invalid profile name: '{0}'")]
    InvalidProfileName(String),

    #[error("Profile store is read-only: {0}")]
    ReadOnly(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// Topology constraint broken by a fully resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopologyViolation {
    #[error("Cluster configuration must have a masterCount of 1")]
    MasterCountMustBeOne,

    #[error("Cluster configuration may not have a workerCount less than 1")]
    WorkerCountMustBeAtLeastOne,
}

/// Failure of a single resolution call. No partial result accompanies any variant.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Named config '{0}' does not exist")]
    ProfileNotFound(String),

    #[error("Error while processing {profile}.{field}: expected integer, got '{value}'")]
    ConfigParse {
        profile: String,
        field: ProfileField,
        value: String,
    },

    #[error(transparent)]
    InvalidConfiguration(#[from] TopologyViolation),

    #[error("Failed to read profile '{profile}': {source}")]
    Store {
        profile: String,
        #[source]
        source: StorageError,
    },
}

/// Errors surfaced by the command-line layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to render output: {0}")]
    Render(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
