//! Profile command presentation: list and show text/json.

use crate::cluster::ProfileField;
use crate::error::ApiError;
use crate::store::ProfileRecord;
use comfy_table::Table;
use serde_json::json;

/// One row of `profile list`.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub name: String,
    pub field_count: usize,
}

pub fn format_profile_list_text(profiles: &[ProfileSummary]) -> String {
    if profiles.is_empty() {
        return "No profiles found.\n\nUse 'clusterconf profile set <name> <field>=<value>' to add a profile."
            .to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Profile", "Fields"]);
    for profile in profiles {
        table.add_row(vec![profile.name.clone(), profile.field_count.to_string()]);
    }
    format!("{}\nTotal: {} profile(s)", table, profiles.len())
}

pub fn format_profile_list_json(profiles: &[ProfileSummary]) -> Result<String, ApiError> {
    let list: Vec<_> = profiles
        .iter()
        .map(|p| json!({ "name": p.name, "fields": p.field_count }))
        .collect();
    let out = json!({ "profiles": list, "total": profiles.len() });
    serde_json::to_string_pretty(&out).map_err(|e| ApiError::Render(e.to_string()))
}

pub fn format_profile_show_text(name: &str, record: &ProfileRecord) -> String {
    let mut output = format!("Profile: {}\n", name);
    if record.is_empty() {
        output.push_str("  (no fields; treated as absent)\n");
        return output;
    }
    for (key, value) in record {
        let note = if ProfileField::from_key(key).is_some() {
            ""
        } else {
            "  (ignored)"
        };
        output.push_str(&format!("  {:<18} {}{}\n", key, value, note));
    }
    output
}

pub fn format_profile_show_json(name: &str, record: &ProfileRecord) -> Result<String, ApiError> {
    let ignored: Vec<&String> = record
        .keys()
        .filter(|key| ProfileField::from_key(key).is_none())
        .collect();
    let out = json!({ "name": name, "fields": record, "ignored": ignored });
    serde_json::to_string_pretty(&out).map_err(|e| ApiError::Render(e.to_string()))
}
