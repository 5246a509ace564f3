//! ConfigLoader: assembles tool configuration from all sources.

use super::merge::merge_policy;
use super::sources::{environment, global_file, local_file};
use super::ToolConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

/// Loads [`ToolConfig`] with precedence (lowest to highest): defaults, global
/// file, local files in `dir`, environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a working directory.
    pub fn load(dir: &Path) -> Result<ToolConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder);

        let config: ToolConfig = builder.build()?.try_deserialize()?;
        debug!(backend = ?config.store.backend, "Loaded tool configuration");
        Ok(config)
    }

    /// Load configuration from a single explicit file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }
}
