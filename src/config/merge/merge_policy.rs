//! Merge rules: defaults, override order, conflict handling.

use super::super::DEFAULT_PROFILE_DIR;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Sources added afterwards override these in the order they are added.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("store.backend", "mounted")?
        .set_default("store.path", DEFAULT_PROFILE_DIR)
}
