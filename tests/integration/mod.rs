//! Integration tests for cluster configuration resolution

mod cli_commands;
mod resolver_layers;
mod store_backends;
