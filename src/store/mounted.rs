//! Mounted profile directory: `<root>/<profile>/<field>` files.
//!
//! This is the layout produced when configuration maps are mounted as volumes:
//! one directory per profile, one file per key, the file contents being the
//! value. Entries starting with `.` (volume bookkeeping such as `..data`) are
//! skipped.

use super::{validate_profile_name, ProfileRecord, ProfileStore};
use crate::error::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read-only profile store over a directory tree.
#[derive(Debug, Clone)]
pub struct MountedProfileStore {
    root: PathBuf,
}

impl MountedProfileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn read_only(&self) -> StorageError {
        StorageError::ReadOnly(format!(
            "profiles under {} are managed outside this tool",
            self.root.display()
        ))
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Strip one trailing line terminator left by editors and `echo`.
fn strip_line_terminator(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}

impl ProfileStore for MountedProfileStore {
    fn get(&self, name: &str) -> Result<Option<ProfileRecord>, StorageError> {
        validate_profile_name(name)?;
        // Hidden entries and stray files are never listed, so they are not profiles either
        if is_hidden(name) {
            return Ok(None);
        }
        let dir = self.root.join(name);
        match fs::metadata(&dir) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::IoError(e)),
        }

        let entries = fs::read_dir(&dir)?;

        let mut record = ProfileRecord::new();
        for entry in entries {
            let entry = entry?;
            let key = entry.file_name().to_string_lossy().into_owned();
            if is_hidden(&key) {
                continue;
            }
            // fs::metadata follows the symlinks a mounted volume uses for its keys
            let path = entry.path();
            if !fs::metadata(&path)?.is_file() {
                continue;
            }
            let value = fs::read_to_string(&path).map_err(|e| {
                if e.kind() == ErrorKind::InvalidData {
                    StorageError::Decode {
                        profile: name.to_string(),
                        message: format!("{} is not valid UTF-8", key),
                    }
                } else {
                    StorageError::IoError(e)
                }
            })?;
            record.insert(key, strip_line_terminator(value));
        }
        Ok(Some(record))
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::IoError(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_hidden(&name) {
                continue;
            }
            if fs::metadata(entry.path())?.is_dir() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn put(&self, _name: &str, _record: &ProfileRecord) -> Result<(), StorageError> {
        Err(self.read_only())
    }

    fn remove(&self, _name: &str) -> Result<bool, StorageError> {
        Err(self.read_only())
    }
}
