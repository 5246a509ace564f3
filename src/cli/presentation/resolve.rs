//! Resolve command presentation: resolved configuration with optional provenance.

use crate::cluster::ProfileField;
use crate::error::ApiError;
use crate::resolver::Resolution;
use comfy_table::Table;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

fn label(field: ProfileField) -> &'static str {
    match field {
        ProfileField::MasterCount => "masterCount",
        ProfileField::WorkerCount => "workerCount",
        ProfileField::SparkMasterConfig => "sparkMasterConfig",
        ProfileField::SparkWorkerConfig => "sparkWorkerConfig",
    }
}

pub fn format_resolution_text(resolution: &Resolution, explain: bool) -> String {
    let config = &resolution.config;
    if explain {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.set_header(vec!["Field", "Value", "Source"]);
        for field in ProfileField::ALL {
            let value = config.field_value(field);
            let source = resolution
                .provenance
                .get(&field)
                .map(|layer| layer.to_string())
                .unwrap_or_default();
            table.add_row(vec![label(field), display_value(&value), source.as_str()]);
        }
        return format!("Resolved cluster configuration: {}\n{}", config.name, table);
    }

    let mut output = format!("Resolved cluster configuration: {}\n", config.name);
    for field in ProfileField::ALL {
        let value = config.field_value(field);
        output.push_str(&format!(
            "  {:<19} {}\n",
            format!("{}:", label(field)),
            display_value(&value)
        ));
    }
    output
}

pub fn format_resolution_json(resolution: &Resolution, explain: bool) -> Result<String, ApiError> {
    let out = if explain {
        let provenance: serde_json::Map<String, serde_json::Value> = resolution
            .provenance
            .iter()
            .map(|(field, layer)| (label(*field).to_string(), json!(layer.to_string())))
            .collect();
        json!({ "config": resolution.config, "provenance": provenance })
    } else {
        json!(resolution.config)
    };
    serde_json::to_string_pretty(&out).map_err(|e| ApiError::Render(e.to_string()))
}

pub fn format_resolution_toml(resolution: &Resolution, explain: bool) -> Result<String, ApiError> {
    if !explain {
        return toml::to_string_pretty(&resolution.config)
            .map_err(|e| ApiError::Render(e.to_string()));
    }

    #[derive(Serialize)]
    struct Explained<'a> {
        config: &'a crate::cluster::ClusterConfig,
        provenance: BTreeMap<&'static str, String>,
    }

    let explained = Explained {
        config: &resolution.config,
        provenance: resolution
            .provenance
            .iter()
            .map(|(field, layer)| (label(*field), layer.to_string()))
            .collect(),
    };
    toml::to_string_pretty(&explained).map_err(|e| ApiError::Render(e.to_string()))
}
