//! Merge rules: zero-value-as-absent overlay of partial layers.

use super::{ClusterConfig, ProfileField};
use crate::error::ResolveError;
use crate::store::ProfileRecord;
use tracing::trace;

impl ClusterConfig {
    /// Overlay the specified fields of `layer` onto `self`.
    ///
    /// Zero counts and empty strings in `layer` leave `self` untouched; every
    /// other value replaces the current one. `name` is never merged. Returns the
    /// fields that were written, in declaration order.
    pub fn overlay(&mut self, layer: &ClusterConfig) -> Vec<ProfileField> {
        let mut written = Vec::new();
        if layer.master_count != 0 {
            self.master_count = layer.master_count;
            written.push(ProfileField::MasterCount);
        }
        if layer.worker_count != 0 {
            self.worker_count = layer.worker_count;
            written.push(ProfileField::WorkerCount);
        }
        if !layer.spark_master_config.is_empty() {
            self.spark_master_config = layer.spark_master_config.clone();
            written.push(ProfileField::SparkMasterConfig);
        }
        if !layer.spark_worker_config.is_empty() {
            self.spark_worker_config = layer.spark_worker_config.clone();
            written.push(ProfileField::SparkWorkerConfig);
        }
        written
    }
}

/// Convert a stored profile record into a partial layer.
///
/// Keys are processed in record order and the first unparseable count aborts
/// the conversion. Unrecognized keys are skipped.
pub fn layer_from_record(
    profile: &str,
    record: &ProfileRecord,
) -> Result<ClusterConfig, ResolveError> {
    let mut layer = ClusterConfig::default();
    for (key, value) in record {
        match ProfileField::from_key(key) {
            Some(field) => field.assign(&mut layer, profile, value)?,
            None => trace!(profile, key = key.as_str(), "Skipping unrecognized profile field"),
        }
    }
    Ok(layer)
}
