//! Merge order for tool configuration sources.

pub mod merge_policy;
