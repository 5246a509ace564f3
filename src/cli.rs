//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic; a single route table dispatches to the resolver and store.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands, OutputFormat, ProfileCommands};
pub use presentation::{
    format_profile_list_json, format_profile_list_text, format_profile_show_json,
    format_profile_show_text, format_resolution_json, format_resolution_text,
    format_resolution_toml, ProfileSummary,
};
pub use route::{load_tool_config, RunContext};
