//! Recognized profile record keys.

use super::ClusterConfig;
use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field a stored profile record may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    MasterCount,
    WorkerCount,
    SparkMasterConfig,
    SparkWorkerConfig,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::MasterCount,
        ProfileField::WorkerCount,
        ProfileField::SparkMasterConfig,
        ProfileField::SparkWorkerConfig,
    ];

    /// Look up a record key. Unrecognized keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "mastercount" => Some(ProfileField::MasterCount),
            "workercount" => Some(ProfileField::WorkerCount),
            "sparkmasterconfig" => Some(ProfileField::SparkMasterConfig),
            "sparkworkerconfig" => Some(ProfileField::SparkWorkerConfig),
            _ => None,
        }
    }

    /// Record key as stored in a profile.
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::MasterCount => "mastercount",
            ProfileField::WorkerCount => "workercount",
            ProfileField::SparkMasterConfig => "sparkmasterconfig",
            ProfileField::SparkWorkerConfig => "sparkworkerconfig",
        }
    }

    /// Whether the field holds an integer count.
    pub fn is_count(self) -> bool {
        matches!(self, ProfileField::MasterCount | ProfileField::WorkerCount)
    }

    /// Parse a stored value and write it into `target`.
    ///
    /// Counts must be base-10 integers; anything else is reported against
    /// `profile` and this field. String fields are taken verbatim.
    pub fn assign(
        self,
        target: &mut ClusterConfig,
        profile: &str,
        value: &str,
    ) -> Result<(), ResolveError> {
        match self {
            ProfileField::MasterCount => target.master_count = self.parse(profile, value)?,
            ProfileField::WorkerCount => target.worker_count = self.parse(profile, value)?,
            ProfileField::SparkMasterConfig => target.spark_master_config = value.to_string(),
            ProfileField::SparkWorkerConfig => target.spark_worker_config = value.to_string(),
        }
        Ok(())
    }

    fn parse(self, profile: &str, value: &str) -> Result<i64, ResolveError> {
        parse_count(value).ok_or_else(|| ResolveError::ConfigParse {
            profile: profile.to_string(),
            field: self,
            value: value.to_string(),
        })
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parse a base-10 count. Whitespace is not trimmed.
pub fn parse_count(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}
