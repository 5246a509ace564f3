//! In-memory profile store

use super::{validate_profile_name, ProfileRecord, ProfileStore};
use crate::error::StorageError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Profile store backed by a map behind a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, ProfileRecord>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a profile from key/value pairs.
    pub fn with_profile<K, V>(self, name: &str, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let record = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.profiles.write().insert(name.to_string(), record);
        self
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, name: &str) -> Result<Option<ProfileRecord>, StorageError> {
        Ok(self.profiles.read().get(name).cloned())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names: Vec<String> = self.profiles.read().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn put(&self, name: &str, record: &ProfileRecord) -> Result<(), StorageError> {
        validate_profile_name(name)?;
        self.profiles
            .write()
            .insert(name.to_string(), record.clone());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.profiles.write().remove(name).is_some())
    }
}
