//! CLI route: single route table and run context. Dispatches to the resolver,
//! the profile store and presentation.

use crate::cli::parse::{Cli, Commands, OutputFormat, ProfileCommands};
use crate::cli::presentation::{
    format_profile_list_json, format_profile_list_text, format_profile_show_json,
    format_profile_show_text, format_resolution_json, format_resolution_text,
    format_resolution_toml, ProfileSummary,
};
use crate::cluster::{parse_count, ClusterConfig, ProfileField};
use crate::config::{ConfigLoader, ToolConfig};
use crate::error::{ApiError, ResolveError};
use crate::resolver::ConfigResolver;
use crate::store::{open_store, ProfileRecord, ProfileStore};
use std::sync::Arc;
use tracing::info;

/// Load tool configuration for a CLI invocation and fold in store flags.
///
/// `--config` replaces the default source discovery; `--store-backend` and
/// `--store-path` override whatever the files say.
pub fn load_tool_config(cli: &Cli) -> Result<ToolConfig, ApiError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load(&cli.dir)?,
    };
    if let Some(backend) = cli.store_backend {
        config.store.backend = backend;
    }
    if let Some(ref path) = cli.store_path {
        config.store.path = path.clone();
    }
    Ok(config)
}

/// Runtime context for CLI execution: the opened store and a resolver over it.
pub struct RunContext {
    store: Arc<dyn ProfileStore>,
    resolver: ConfigResolver,
}

impl RunContext {
    /// Validate configuration and open the configured store.
    pub fn new(config: &ToolConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        let store = open_store(&config.store)?;
        Ok(Self::with_store(store))
    }

    /// Build a context over an already opened store.
    pub fn with_store(store: Arc<dyn ProfileStore>) -> Self {
        let resolver = ConfigResolver::new(Arc::clone(&store));
        Self { store, resolver }
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Resolve {
                profile,
                master_count,
                worker_count,
                spark_master_config,
                spark_worker_config,
                explain,
                format,
            } => {
                let explicit = ClusterConfig {
                    name: profile.clone().unwrap_or_default(),
                    master_count: master_count.unwrap_or(0),
                    worker_count: worker_count.unwrap_or(0),
                    spark_master_config: spark_master_config.clone().unwrap_or_default(),
                    spark_worker_config: spark_worker_config.clone().unwrap_or_default(),
                };
                self.handle_resolve(&explicit, *explain, *format)
            }
            Commands::Profile { command } => match command {
                ProfileCommands::List { format } => self.handle_profile_list(*format),
                ProfileCommands::Show { name, format } => self.handle_profile_show(name, *format),
                ProfileCommands::Set { name, assignments } => {
                    self.handle_profile_set(name, assignments)
                }
                ProfileCommands::Remove { name, force } => self.handle_profile_remove(name, *force),
            },
        }
    }

    fn handle_resolve(
        &self,
        explicit: &ClusterConfig,
        explain: bool,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let resolution = self.resolver.resolve_explained(Some(explicit))?;
        info!(
            profile = %resolution.config.name,
            master_count = resolution.config.master_count,
            worker_count = resolution.config.worker_count,
            "Resolved cluster configuration"
        );
        match format {
            OutputFormat::Text => Ok(format_resolution_text(&resolution, explain)),
            OutputFormat::Json => format_resolution_json(&resolution, explain),
            OutputFormat::Toml => format_resolution_toml(&resolution, explain),
        }
    }

    fn handle_profile_list(&self, format: OutputFormat) -> Result<String, ApiError> {
        let mut profiles = Vec::new();
        for name in self.store.list()? {
            let field_count = self.store.get(&name)?.map(|r| r.len()).unwrap_or(0);
            profiles.push(ProfileSummary { name, field_count });
        }
        match format {
            OutputFormat::Json => format_profile_list_json(&profiles),
            _ => Ok(format_profile_list_text(&profiles)),
        }
    }

    fn handle_profile_show(&self, name: &str, format: OutputFormat) -> Result<String, ApiError> {
        let record = self
            .store
            .get(name)?
            .ok_or_else(|| ResolveError::ProfileNotFound(name.to_string()))?;
        match format {
            OutputFormat::Json => format_profile_show_json(name, &record),
            _ => Ok(format_profile_show_text(name, &record)),
        }
    }

    fn handle_profile_set(&self, name: &str, assignments: &[String]) -> Result<String, ApiError> {
        let mut updates = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            updates.push(parse_assignment(assignment)?);
        }

        let mut record = self.store.get(name)?.unwrap_or_else(ProfileRecord::new);
        for (field, value) in &updates {
            record.insert(field.key().to_string(), value.clone());
        }
        self.store.put(name, &record)?;
        info!(profile = name, fields = updates.len(), "Updated profile");

        let summary: Vec<String> = updates
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        Ok(format!("Updated profile '{}': {}", name, summary.join(", ")))
    }

    fn handle_profile_remove(&self, name: &str, force: bool) -> Result<String, ApiError> {
        if self.store.get(name)?.is_none() {
            return Err(ResolveError::ProfileNotFound(name.to_string()).into());
        }

        if !force {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt(format!("Remove profile '{}'?", name))
                .interact()
                .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;

            if !confirmed {
                return Ok("Removal cancelled".to_string());
            }
        }

        self.store.remove(name)?;
        info!(profile = name, "Removed profile");
        Ok(format!("Removed profile: {}", name))
    }
}

/// Parse `field=value`, accepting only recognized fields and integer counts.
fn parse_assignment(assignment: &str) -> Result<(ProfileField, String), ApiError> {
    let (key, value) = assignment.split_once('=').ok_or_else(|| {
        ApiError::InvalidArgument(format!("expected <field>=<value>, got '{}'", assignment))
    })?;
    let field = ProfileField::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = ProfileField::ALL.iter().map(|f| f.key()).collect();
        ApiError::InvalidArgument(format!(
            "unknown field '{}' (expected one of: {})",
            key,
            known.join(", ")
        ))
    })?;
    if field.is_count() && parse_count(value).is_none() {
        return Err(ApiError::InvalidArgument(format!(
            "{} expects an integer, got '{}'",
            field, value
        )));
    }
    Ok((field, value.to_string()))
}
