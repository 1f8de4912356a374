// tests/config_test.rs
use std::env;
use std::fs;
use std::io::Write;

use git_semver::config::{load_config, Config, LOCAL_CONFIG_FILE};
use git_semver::domain::Target;
use git_semver::GitSemverError;
use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[tags]
prefix = "release-"
pattern = "release-*"
semver_only = true

[output]
format = "x.y.z"
target = "patch"
guard = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.tags.prefix, "release-");
    assert_eq!(config.tags.pattern.as_deref(), Some("release-*"));
    assert!(config.tags.semver_only);
    assert_eq!(config.output.format.as_deref(), Some("x.y.z"));
    assert_eq!(config.output.target, Target::Patch);
    assert!(config.output.guard);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, GitSemverError::Config(_)));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[tags\nprefix = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[output]\ntarget = \"major\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).expect("Could not change to temp dir");
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = config.unwrap();
    assert_eq!(config.output.target, Target::Major);
    assert_eq!(config.tags.prefix, "v");
}

#[test]
fn test_default_values() {
    let config = Config::default();
    assert_eq!(config.tags.prefix, "v");
    assert_eq!(config.output.target, Target::Dev);
    assert!(!config.output.guard);
    assert!(config.output.format.is_none());
}
