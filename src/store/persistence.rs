//! Persistence layer for the profile store

use super::{validate_profile_name, ProfileRecord, ProfileStore};
use crate::error::StorageError;
use std::path::Path;

/// Sled-based implementation of ProfileStore
///
/// Keys are profile names; values are bincode-encoded records.
pub struct SledProfileStore {
    db: sled::Db,
}

impl SledProfileStore {
    /// Open (or create) a sled database at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(|e| {
            StorageError::Backend(format!("Failed to open sled database: {}", e))
        })?;
        Ok(Self { db })
    }

    /// Wrap an already opened database
    pub fn from_db(db: sled::Db) -> Self {
        Self { db }
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    fn decode(name: &str, bytes: &[u8]) -> Result<ProfileRecord, StorageError> {
        bincode::deserialize(bytes).map_err(|e| StorageError::Decode {
            profile: name.to_string(),
            message: e.to_string(),
        })
    }
}

impl ProfileStore for SledProfileStore {
    fn get(&self, name: &str) -> Result<Option<ProfileRecord>, StorageError> {
        match self.db.get(name.as_bytes())? {
            Some(value) => Ok(Some(Self::decode(name, &value)?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for key in self.db.iter().keys() {
            let key = key?;
            names.push(String::from_utf8_lossy(&key).into_owned());
        }
        // sled iterates in byte order, which is already sorted for UTF-8 keys
        Ok(names)
    }

    fn put(&self, name: &str, record: &ProfileRecord) -> Result<(), StorageError> {
        validate_profile_name(name)?;
        let value = bincode::serialize(record).map_err(|e| StorageError::Decode {
            profile: name.to_string(),
            message: format!("Failed to encode record: {}", e),
        })?;
        self.db.insert(name.as_bytes(), value)?;
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.db.remove(name.as_bytes())?.is_some())
    }
}
