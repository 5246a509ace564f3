//! Integration tests for CLI commands

use super::test_utils::{write_mounted_profile, write_tool_config};
use clap::Parser;
use clusterconf::cli::{load_tool_config, Cli, Commands, OutputFormat, ProfileCommands, RunContext};
use clusterconf::config::StoreBackend;
use clusterconf::{ApiError, ResolveError};
use std::process::Command;
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<String, ApiError> {
    let cli = Cli::try_parse_from(args).unwrap();
    let config = load_tool_config(&cli)?;
    RunContext::new(&config)?.execute(&cli.command)
}

#[test]
fn test_store_flags_override_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tool.toml");
    write_tool_config(&config_file, "mounted", &temp_dir.path().join("profiles"));
    let db = temp_dir.path().join("profiles.db");

    let cli = Cli::try_parse_from([
        "clusterconf",
        "--config",
        config_file.to_str().unwrap(),
        "--store-backend",
        "sled",
        "--store-path",
        db.to_str().unwrap(),
        "resolve",
    ])
    .unwrap();
    let config = load_tool_config(&cli).unwrap();
    assert_eq!(config.store.backend, StoreBackend::Sled);
    assert_eq!(config.store.path, db);
}

#[test]
fn test_profile_set_then_resolve_with_sled() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tool.toml");
    write_tool_config(&config_file, "sled", &temp_dir.path().join("profiles.db"));
    let config_arg = config_file.to_str().unwrap();

    let output = run(&[
        "clusterconf",
        "--config",
        config_arg,
        "profile",
        "set",
        "large",
        "workercount=10",
        "sparkworkerconfig=big-workers",
    ])
    .unwrap();
    assert!(output.contains("Updated profile 'large'"));

    let output = run(&[
        "clusterconf",
        "--config",
        config_arg,
        "resolve",
        "--profile",
        "large",
        "--format",
        "json",
    ])
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["name"], "large");
    assert_eq!(json["masterCount"], 1);
    assert_eq!(json["workerCount"], 10);
    assert_eq!(json["sparkWorkerConfig"], "big-workers");

    let output = run(&["clusterconf", "--config", config_arg, "profile", "list", "--format", "json"])
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["profiles"][0]["name"], "large");

    let output = run(&[
        "clusterconf",
        "--config",
        config_arg,
        "profile",
        "remove",
        "large",
        "--force",
    ])
    .unwrap();
    assert_eq!(output, "Removed profile: large");

    let err = run(&["clusterconf", "--config", config_arg, "resolve", "--profile", "large"])
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Resolve(ResolveError::ProfileNotFound(_))
    ));
}

#[test]
fn test_profile_set_rejected_on_mounted_store() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tool.toml");
    write_tool_config(&config_file, "mounted", &temp_dir.path().join("profiles"));

    let err = run(&[
        "clusterconf",
        "--config",
        config_file.to_str().unwrap(),
        "profile",
        "set",
        "small",
        "workercount=2",
    ])
    .unwrap_err();
    assert!(matches!(err, ApiError::StorageError(_)));
}

#[test]
fn test_resolve_explain_with_mounted_profiles() {
    let temp_dir = TempDir::new().unwrap();
    let profiles = temp_dir.path().join("profiles");
    write_mounted_profile(&profiles, "default", &[("workercount", "3")]);
    write_mounted_profile(&profiles, "small", &[("sparkmasterconfig", "small-master")]);
    let config_file = temp_dir.path().join("tool.toml");
    write_tool_config(&config_file, "mounted", &profiles);

    let cli = Cli::try_parse_from([
        "clusterconf",
        "--config",
        config_file.to_str().unwrap(),
        "resolve",
        "--profile",
        "small",
        "--explain",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Resolve {
            explain: true,
            format: OutputFormat::Text,
            ..
        }
    ));
    let config = load_tool_config(&cli).unwrap();
    let output = RunContext::new(&config).unwrap().execute(&cli.command).unwrap();
    assert!(output.contains("Resolved cluster configuration: small"));
    assert!(output.contains("small-master"));
    assert!(output.contains("profile 'default'"));
    assert!(output.contains("profile 'small'"));
}

#[test]
fn test_profile_show_parses_subcommand() {
    let cli = Cli::try_parse_from(["clusterconf", "profile", "show", "gpu", "--format", "json"])
        .unwrap();
    match cli.command {
        Commands::Profile {
            command: ProfileCommands::Show { name, format },
        } => {
            assert_eq!(name, "gpu");
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("expected profile show"),
    }
}

#[test]
fn test_negative_worker_count_flag() {
    let cli = Cli::try_parse_from(["clusterconf", "resolve", "--worker-count", "-1"]).unwrap();
    match cli.command {
        Commands::Resolve { worker_count, .. } => assert_eq!(worker_count, Some(-1)),
        _ => panic!("expected resolve"),
    }
}

#[test]
fn test_binary_resolve_and_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let profiles = temp_dir.path().join("profiles");
    write_mounted_profile(&profiles, "default", &[("workercount", "4")]);
    let config_file = temp_dir.path().join("tool.toml");
    write_tool_config(&config_file, "mounted", &profiles);

    let bin = env!("CARGO_BIN_EXE_clusterconf");
    let output = Command::new(bin)
        .env_remove("CLUSTERCONF_LOG")
        .arg("--config")
        .arg(&config_file)
        .arg("resolve")
        .arg("--format")
        .arg("toml")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "resolve should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("workerCount = 4"), "stdout was: {}", stdout);

    let output = Command::new(bin)
        .arg("--config")
        .arg(&config_file)
        .arg("resolve")
        .arg("--master-count")
        .arg("2")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Cluster configuration must have a masterCount of 1"));

    let output = Command::new(bin)
        .arg("--config")
        .arg(&config_file)
        .arg("resolve")
        .arg("--profile")
        .arg("nonexistent")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nonexistent"));
}
