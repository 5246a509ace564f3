//! Local config file source: clusterconf.toml and clusterconf.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Environment variable selecting the env-specific file.
pub const ENV_VAR: &str = "CLUSTERCONF_ENV";

/// Add local config files to builder.
/// Precedence: clusterconf.toml (base) then clusterconf.{CLUSTERCONF_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let env_name = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());

    let mut builder = builder;

    let base_config_path = dir.join("clusterconf.toml");
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    let env_config_path = dir.join(format!("clusterconf.{}.toml", env_name));
    if env_config_path.exists() {
        builder = builder.add_source(File::from(env_config_path).required(false));
    }

    Ok(builder)
}
