//! Environment source: CLUSTERCONF__STORE__BACKEND=sled, CLUSTERCONF__LOGGING__LEVEL=debug, ...

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const PREFIX: &str = "CLUSTERCONF";

/// Add environment overrides to builder. Highest precedence.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
