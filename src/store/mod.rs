//! Profile Store
//!
//! Named, externally stored partial configurations. Each profile is a flat
//! mapping from field name to string value. The resolver only reads from a
//! store; `put` and `remove` exist for administrative tooling.

pub mod memory;
pub mod mounted;
pub mod persistence;

pub use memory::MemoryProfileStore;
pub use mounted::MountedProfileStore;
pub use persistence::SledProfileStore;

use crate::config::{StoreBackend, StoreConfig};
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// A single stored profile: field name to raw string value.
pub type ProfileRecord = BTreeMap<String, String>;

/// Profile store interface
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by name. `Ok(None)` means the profile does not exist.
    fn get(&self, name: &str) -> Result<Option<ProfileRecord>, StorageError>;

    /// Names of all stored profiles, sorted.
    fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Create or replace a profile.
    fn put(&self, name: &str, record: &ProfileRecord) -> Result<(), StorageError>;

    /// Delete a profile. Returns whether it existed.
    fn remove(&self, name: &str) -> Result<bool, StorageError>;
}

/// Reject names that cannot address a single flat profile.
pub fn validate_profile_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if invalid {
        return Err(StorageError::InvalidProfileName(name.to_string()));
    }
    Ok(())
}

/// Open the store backend selected by configuration.
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn ProfileStore>, StorageError> {
    debug!(backend = ?config.backend, path = %config.path.display(), "Opening profile store");
    let store: Arc<dyn ProfileStore> = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryProfileStore::new()),
        StoreBackend::Sled => Arc::new(SledProfileStore::new(&config.path)?),
        StoreBackend::Mounted => Arc::new(MountedProfileStore::new(&config.path)),
    };
    Ok(store)
}
