//! Integration tests for configuration loading

use solix_export::config::load_config;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_config_roundtrip() {
    let file = write_config(
        r#"
[application]
log_level = "warn"

[export]
input_dir = "./captures"
output_dir = "./exports/my-account"
anonymize = true
skip_anonymize = ["api_sites.json", "api_devices.json"]
anonymize_keys = ["device_energy"]
report_path = "./substitutions.json"

[audit]
enabled = true
log_path = "./audit/run.log"
json_format = false

[logging]
local_enabled = true
local_path = "./logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert!(config.export.skips_anonymize("api_devices.json"));
    assert!(config.export.renames_keys("device_energy.json"));
    assert_eq!(
        config.export.report_path,
        Some(PathBuf::from("./substitutions.json"))
    );
    assert_eq!(config.audit.log_path, PathBuf::from("./audit/run.log"));
    assert!(!config.audit.json_format);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_substitution_in_paths() {
    std::env::set_var("SOLIX_IT_ACCOUNT", "alice");
    let file = write_config(
        r#"
[export]
input_dir = "./captures/${SOLIX_IT_ACCOUNT}"
output_dir = "./exports/${SOLIX_IT_ACCOUNT}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    std::env::remove_var("SOLIX_IT_ACCOUNT");

    assert_eq!(config.export.input_dir, PathBuf::from("./captures/alice"));
    assert_eq!(config.export.output_dir, PathBuf::from("./exports/alice"));
}

#[test]
fn test_missing_env_var_is_reported() {
    std::env::remove_var("SOLIX_IT_UNSET_ACCOUNT");
    let file = write_config(
        r#"
[export]
input_dir = "./captures"
output_dir = "./exports/${SOLIX_IT_UNSET_ACCOUNT}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("SOLIX_IT_UNSET_ACCOUNT"));
}

#[test]
fn test_missing_export_section_fails() {
    let file = write_config(
        r#"
[application]
log_level = "info"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_invalid_rotation_fails() {
    let file = write_config(
        r#"
[export]
input_dir = "./captures"
output_dir = "./exports"

[logging]
local_rotation = "weekly"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("local_rotation"));
}
