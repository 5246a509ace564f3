//! CLI presentation: text, json and toml formatting for command results.

mod profile;
mod resolve;

pub use profile::{
    format_profile_list_json, format_profile_list_text, format_profile_show_json,
    format_profile_show_text, ProfileSummary,
};
pub use resolve::{format_resolution_json, format_resolution_text, format_resolution_toml};
