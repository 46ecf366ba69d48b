use super::*;
use crate::errors::ConfigurationError;
use crate::Error;

#[test]
fn should_create_missing_ancestors() {
    let tempdir = tempfile::tempdir().unwrap();
    let db_path = tempdir.path().join("a").join("b").join("example.fdb");

    ensure_parent_dir(&db_path).unwrap();

    assert!(db_path.parent().unwrap().is_dir());
}

#[test]
fn should_accept_existing_directory() {
    let tempdir = tempfile::tempdir().unwrap();
    let db_path = tempdir.path().join("example.fdb");

    ensure_parent_dir(&db_path).unwrap();
}

#[test]
fn should_reject_file_occupying_parent_path() {
    let tempdir = tempfile::tempdir().unwrap();
    let blocker = tempdir.path().join("blocker");
    std::fs::write(&blocker, b"occupied").unwrap();

    let err = ensure_parent_dir(&blocker.join("example.fdb")).unwrap_err();

    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::NotADirectory { .. })
    ));
}

#[test]
fn should_accept_bare_file_name() {
    ensure_parent_dir(std::path::Path::new("example.fdb")).unwrap();
}
