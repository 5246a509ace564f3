//! Configuration System
//!
//! Settings for the tool itself: which profile store backend to open and how
//! to log. Cluster sizing profiles live in the store, not here. Settings are
//! layered from built-in defaults, a global file, local files and environment
//! variables; see [`ConfigLoader`].

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Default directory of mounted profiles
pub const DEFAULT_PROFILE_DIR: &str = "/etc/clusterconf/profiles";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Profile store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Profile store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map; empty at startup
    Memory,
    /// Embedded sled database at `path`
    Sled,
    /// Read-only directory of mounted profiles at `path`
    Mounted,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(StoreBackend::Memory),
            "sled" => Ok(StoreBackend::Sled),
            "mounted" => Ok(StoreBackend::Mounted),
            other => Err(format!(
                "unknown store backend '{}' (must be 'memory', 'sled', or 'mounted')",
                other
            )),
        }
    }
}

/// Profile store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_backend() -> StoreBackend {
    StoreBackend::Mounted
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_PROFILE_DIR)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.backend != StoreBackend::Memory && self.path.as_os_str().is_empty() {
            return Err("Store path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl ToolConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.store.validate() {
            errors.push(format!("store: {}", e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(format!("logging: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
