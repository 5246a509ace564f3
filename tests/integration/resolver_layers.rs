//! Integration tests for layered resolution against each store backend

use super::test_utils::{record, write_mounted_profile};
use clusterconf::{
    compiled_default, ClusterConfig, ConfigResolver, Layer, MemoryProfileStore,
    MountedProfileStore, ProfileField, ProfileStore, ResolveError, SledProfileStore,
    TopologyViolation,
};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_resolve_none_against_empty_sled_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledProfileStore::new(temp_dir.path()).unwrap();
    let resolver = ConfigResolver::new(Arc::new(store));

    let config = resolver.resolve(None).unwrap();
    assert_eq!(&config, compiled_default());
}

#[test]
fn test_full_stack_of_layers_with_sled() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledProfileStore::new(temp_dir.path()).unwrap();
    store
        .put(
            "default",
            &record(&[("workercount", "3"), ("sparkmasterconfig", "base-master")]),
        )
        .unwrap();
    store
        .put(
            "gpu",
            &record(&[("workercount", "8"), ("sparkworkerconfig", "gpu-workers")]),
        )
        .unwrap();
    let resolver = ConfigResolver::new(Arc::new(store));

    let explicit = ClusterConfig {
        name: "gpu".to_string(),
        spark_master_config: "tuned-master".to_string(),
        ..ClusterConfig::default()
    };
    let resolution = resolver.resolve_explained(Some(&explicit)).unwrap();

    assert_eq!(
        resolution.config,
        ClusterConfig {
            name: "gpu".to_string(),
            master_count: 1,
            worker_count: 8,
            spark_master_config: "tuned-master".to_string(),
            spark_worker_config: "gpu-workers".to_string(),
        }
    );
    assert_eq!(
        resolution.provenance[&ProfileField::WorkerCount],
        Layer::NamedProfile("gpu".to_string())
    );
    assert_eq!(
        resolution.provenance[&ProfileField::MasterCount],
        Layer::CompiledDefault
    );
}

#[test]
fn test_mounted_default_profile_overlay() {
    let temp_dir = TempDir::new().unwrap();
    write_mounted_profile(temp_dir.path(), "default", &[("workercount", "3")]);
    let resolver = ConfigResolver::new(Arc::new(MountedProfileStore::new(temp_dir.path())));

    let config = resolver.resolve(None).unwrap();
    assert_eq!(config.worker_count, 3);
    assert_eq!(config.master_count, 1);
    assert_eq!(config.name, "default");
}

#[test]
fn test_mounted_missing_named_profile() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::new(Arc::new(MountedProfileStore::new(temp_dir.path())));

    let err = resolver
        .resolve(Some(&ClusterConfig::named("nonexistent")))
        .unwrap_err();
    assert!(matches!(err, ResolveError::ProfileNotFound(_)));
    assert!(err.to_string().contains("nonexistent"));
}

#[test]
fn test_mounted_parse_error_names_profile_and_field() {
    let temp_dir = TempDir::new().unwrap();
    write_mounted_profile(temp_dir.path(), "broken", &[("mastercount", "abc")]);
    let resolver = ConfigResolver::new(Arc::new(MountedProfileStore::new(temp_dir.path())));

    let explicit = ClusterConfig {
        name: "broken".to_string(),
        master_count: 1,
        worker_count: 2,
        ..ClusterConfig::default()
    };
    let err = resolver.resolve(Some(&explicit)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("broken"));
    assert!(message.contains("mastercount"));
    assert!(matches!(
        err,
        ResolveError::ConfigParse {
            field: ProfileField::MasterCount,
            ..
        }
    ));
}

#[test]
fn test_parse_error_in_default_profile_blocks_named_profile() {
    let store = MemoryProfileStore::new()
        .with_profile("default", [("workercount", "many")])
        .with_profile("large", [("workercount", "10")]);
    let resolver = ConfigResolver::new(Arc::new(store));

    let err = resolver
        .resolve(Some(&ClusterConfig::named("large")))
        .unwrap_err();
    match err {
        ResolveError::ConfigParse { profile, field, .. } => {
            assert_eq!(profile, "default");
            assert_eq!(field, ProfileField::WorkerCount);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_explicit_master_count_always_rejected() {
    let store = MemoryProfileStore::new()
        .with_profile("default", [("workercount", "3")])
        .with_profile("large", [("workercount", "10")]);
    let resolver = ConfigResolver::new(Arc::new(store));

    for name in ["", "default", "large"] {
        let explicit = ClusterConfig {
            name: name.to_string(),
            master_count: 2,
            ..ClusterConfig::default()
        };
        let err = resolver.resolve(Some(&explicit)).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidConfiguration(TopologyViolation::MasterCountMustBeOne)
        ));
        assert_eq!(
            err.to_string(),
            "Cluster configuration must have a masterCount of 1"
        );
    }
}

#[test]
fn test_stored_master_count_rejected() {
    let store = MemoryProfileStore::new().with_profile("ha", [("mastercount", "3")]);
    let resolver = ConfigResolver::new(Arc::new(store));

    let err = resolver
        .resolve(Some(&ClusterConfig::named("ha")))
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::InvalidConfiguration(TopologyViolation::MasterCountMustBeOne)
    ));
}

#[test]
fn test_explicit_zero_cannot_reset_profile_value() {
    let store = MemoryProfileStore::new().with_profile("default", [("workercount", "3")]);
    let resolver = ConfigResolver::new(Arc::new(store));

    let explicit = ClusterConfig {
        worker_count: 0,
        ..ClusterConfig::default()
    };
    assert_eq!(resolver.resolve(Some(&explicit)).unwrap().worker_count, 3);
}

#[test]
fn test_concurrent_resolutions_share_store() {
    let store = MemoryProfileStore::new()
        .with_profile("default", [("workercount", "2")])
        .with_profile("large", [("workercount", "12")]);
    let resolver = ConfigResolver::new(Arc::new(store));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                let explicit = if i % 2 == 0 {
                    ClusterConfig::named("large")
                } else {
                    ClusterConfig::default()
                };
                resolver.resolve(Some(&explicit)).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let config = handle.join().unwrap();
        let expected = if i % 2 == 0 { 12 } else { 2 };
        assert_eq!(config.worker_count, expected);
    }
}

#[test]
fn test_mounted_stray_files_do_not_break_resolution() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("default"), "workercount=3\n").unwrap();
    std::fs::write(temp_dir.path().join("README"), "profiles live here\n").unwrap();
    let resolver = ConfigResolver::new(Arc::new(MountedProfileStore::new(temp_dir.path())));

    assert_eq!(&resolver.resolve(None).unwrap(), compiled_default());
    assert!(matches!(
        resolver.resolve(Some(&ClusterConfig::named("README"))),
        Err(ResolveError::ProfileNotFound(ref name)) if name == "README"
    ));
}

#[test]
fn test_mounted_volume_bookkeeping_is_not_a_profile() {
    let temp_dir = TempDir::new().unwrap();
    write_mounted_profile(temp_dir.path(), "..data", &[("workercount", "7")]);
    let resolver = ConfigResolver::new(Arc::new(MountedProfileStore::new(temp_dir.path())));

    assert!(matches!(
        resolver.resolve(Some(&ClusterConfig::named("..data"))),
        Err(ResolveError::ProfileNotFound(_))
    ));
}
