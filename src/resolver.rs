//! Configuration Resolver
//!
//! Produces the validated cluster configuration for a provisioning request by
//! overlaying, in order: the compiled-in default, the stored `default` profile,
//! the requested named profile, and the caller's explicit values.
//!
//! The stored `default` profile is soft-missing (absence is not an error); a
//! requested named profile is hard-missing. A profile whose record is empty is
//! treated as absent. Failures are returned to the caller and never logged here.

use crate::cluster::{compiled_default, layer_from_record, ClusterConfig, ProfileField};
use crate::cluster::DEFAULT_PROFILE_NAME;
use crate::error::ResolveError;
use crate::store::{ProfileRecord, ProfileStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// How to treat a profile that is not in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Optional,
    Required,
}

/// Configuration layer that last wrote a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    CompiledDefault,
    DefaultProfile,
    NamedProfile(String),
    Explicit,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::CompiledDefault => write!(f, "compiled default"),
            Layer::DefaultProfile => write!(f, "profile '{}'", DEFAULT_PROFILE_NAME),
            Layer::NamedProfile(name) => write!(f, "profile '{}'", name),
            Layer::Explicit => write!(f, "explicit override"),
        }
    }
}

/// A resolved configuration together with the layer each field came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: ClusterConfig,
    pub provenance: BTreeMap<ProfileField, Layer>,
}

impl Resolution {
    fn start() -> Self {
        Self {
            config: compiled_default().clone(),
            provenance: ProfileField::ALL
                .iter()
                .map(|field| (*field, Layer::CompiledDefault))
                .collect(),
        }
    }

    fn apply(&mut self, layer: &ClusterConfig, source: Layer) {
        let written = self.config.overlay(layer);
        debug!(layer = %source, fields = written.len(), "Applied configuration layer");
        for field in written {
            self.provenance.insert(field, source.clone());
        }
    }
}

/// Resolves cluster configurations against a shared, read-only profile store.
#[derive(Clone)]
pub struct ConfigResolver {
    store: Arc<dyn ProfileStore>,
}

impl ConfigResolver {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Resolve the final configuration for `explicit`.
    ///
    /// `explicit.name` selects the named profile; `None` or an empty name
    /// consults only the `default` profile. Zero and empty fields of `explicit`
    /// are treated as unspecified, so an explicit value can never reset a field
    /// back to its default.
    pub fn resolve(&self, explicit: Option<&ClusterConfig>) -> Result<ClusterConfig, ResolveError> {
        self.resolve_explained(explicit)
            .map(|resolution| resolution.config)
    }

    /// Same as [`resolve`](Self::resolve), also reporting which layer set each field.
    pub fn resolve_explained(
        &self,
        explicit: Option<&ClusterConfig>,
    ) -> Result<Resolution, ResolveError> {
        let requested = explicit
            .map(|config| config.name.as_str())
            .filter(|name| !name.is_empty());

        let mut resolution = Resolution::start();

        if let Some(record) = self.read_profile(DEFAULT_PROFILE_NAME, Presence::Optional)? {
            let layer = layer_from_record(DEFAULT_PROFILE_NAME, &record)?;
            resolution.apply(&layer, Layer::DefaultProfile);
        }

        if let Some(name) = requested.filter(|name| *name != DEFAULT_PROFILE_NAME) {
            if let Some(record) = self.read_profile(name, Presence::Required)? {
                let layer = layer_from_record(name, &record)?;
                resolution.apply(&layer, Layer::NamedProfile(name.to_string()));
            }
        }

        if let Some(explicit) = explicit {
            resolution.apply(explicit, Layer::Explicit);
        }

        if let Some(name) = requested {
            resolution.config.name = name.to_string();
        }

        resolution.config.validate()?;
        Ok(resolution)
    }

    fn read_profile(
        &self,
        name: &str,
        presence: Presence,
    ) -> Result<Option<ProfileRecord>, ResolveError> {
        let record = self
            .store
            .get(name)
            .map_err(|source| ResolveError::Store {
                profile: name.to_string(),
                source,
            })?
            .filter(|record| !record.is_empty());

        match (record, presence) {
            (None, Presence::Required) => Err(ResolveError::ProfileNotFound(name.to_string())),
            (None, Presence::Optional) => {
                debug!(profile = name, "Optional profile not present");
                Ok(None)
            }
            (record, _) => Ok(record),
        }
    }
}
