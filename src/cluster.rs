//! Cluster Sizing Configuration
//!
//! The value handed to provisioning: master/worker counts plus references to the
//! per-role configuration overlays. Each configuration layer (stored profile or
//! caller override) is a partial `ClusterConfig` in which zero and the empty
//! string mean "not specified by this layer".

use crate::error::TopologyViolation;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

mod field;
mod overlay;

pub use field::{parse_count, ProfileField};
pub use overlay::layer_from_record;

/// Name of the profile that is consulted on every resolution.
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Cluster sizing configuration.
///
/// `Default` yields the fully unspecified layer (all zero values), not the
/// compiled-in default; see [`compiled_default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Requested profile name; selects a stored profile, never merged
    pub name: String,

    pub master_count: i64,

    pub worker_count: i64,

    /// Reference to the master-role configuration overlay
    pub spark_master_config: String,

    /// Reference to the worker-role configuration overlay
    pub spark_worker_config: String,
}

static COMPILED_DEFAULT: OnceLock<ClusterConfig> = OnceLock::new();

/// The compiled-in default configuration: one master, one worker, no role overlays.
pub fn compiled_default() -> &'static ClusterConfig {
    COMPILED_DEFAULT.get_or_init(|| ClusterConfig {
        name: DEFAULT_PROFILE_NAME.to_string(),
        master_count: 1,
        worker_count: 1,
        spark_master_config: String::new(),
        spark_worker_config: String::new(),
    })
}

impl ClusterConfig {
    /// An otherwise unspecified layer that requests the named profile.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check the topology constraints of a fully resolved configuration.
    ///
    /// Only multi-worker, single-master clusters can be provisioned. The master
    /// constraint is reported first when both are broken.
    pub fn validate(&self) -> Result<(), TopologyViolation> {
        if self.master_count != 1 {
            return Err(TopologyViolation::MasterCountMustBeOne);
        }
        if self.worker_count < 1 {
            return Err(TopologyViolation::WorkerCountMustBeAtLeastOne);
        }
        Ok(())
    }

    /// Current value of a field rendered the way a profile record stores it.
    pub fn field_value(&self, field: ProfileField) -> String {
        match field {
            ProfileField::MasterCount => self.master_count.to_string(),
            ProfileField::WorkerCount => self.worker_count.to_string(),
            ProfileField::SparkMasterConfig => self.spark_master_config.clone(),
            ProfileField::SparkWorkerConfig => self.spark_worker_config.clone(),
        }
    }
}
