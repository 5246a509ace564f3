//! clusterconf: Layered Cluster Configuration Resolution
//!
//! Resolves the cluster sizing used to provision a Spark cluster from a
//! compiled-in default, stored profiles and a caller override, then validates
//! the cluster topology.

pub mod cli;
pub mod cluster;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod store;

pub use cluster::{compiled_default, ClusterConfig, ProfileField, DEFAULT_PROFILE_NAME};
pub use error::{ApiError, ResolveError, StorageError, TopologyViolation};
pub use resolver::{ConfigResolver, Layer, Resolution};
pub use store::{MemoryProfileStore, MountedProfileStore, ProfileRecord, ProfileStore, SledProfileStore};
