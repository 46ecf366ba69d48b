use std::path::PathBuf;

use serial_test::serial;
use temp_env::with_vars;

use super::*;

#[test]
#[serial]
fn default_config_should_use_fixed_embedded_constants() {
    let config = FirebirdConfig::default();

    assert_eq!(
        config.database.path,
        PathBuf::from("target/embedded-example.fdb")
    );
    assert_eq!(config.database.username, "sysdba");
    assert_eq!(config.database.charset, "utf-8");
    assert_eq!(config.native.library_dir, PathBuf::from("firebird"));
}

#[test]
#[serial]
fn new_should_merge_environment_overrides() {
    with_vars(
        vec![
            ("CONFIG_PATH", None),
            ("FIREBIRD__DATABASE__USERNAME", Some("tester")),
        ],
        || {
            let config = FirebirdConfig::new().unwrap();

            assert_eq!(config.database.username, "tester");
            // untouched fields keep their defaults
            assert_eq!(config.database.charset, "utf-8");
        },
    );
}

#[test]
#[serial]
fn config_path_file_should_override_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("embedded.toml");

    std::fs::write(
        &config_path,
        r#"
        [database]
        path = "/tmp/alt/alt.fdb"
        charset = "win1252"
        "#,
    )
    .unwrap();

    with_vars(
        vec![("CONFIG_PATH", Some(config_path.to_str().unwrap()))],
        || {
            let config = FirebirdConfig::new().unwrap();

            assert_eq!(config.database.path, PathBuf::from("/tmp/alt/alt.fdb"));
            assert_eq!(config.database.charset, "win1252");
            assert_eq!(config.database.username, "sysdba");
        },
    );
}

#[test]
fn validation_should_reject_empty_username() {
    let mut config = FirebirdConfig::default();
    config.database.username.clear();

    assert!(config.validate().is_err());
}

#[test]
fn validation_should_reject_empty_database_path() {
    let mut config = FirebirdConfig::default();
    config.database.path = PathBuf::new();

    assert!(config.validate().is_err());
}

#[test]
fn validation_should_accept_defaults() {
    assert!(FirebirdConfig::default().validate().is_ok());
}
