//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SolixConfig;
use crate::domain::errors::SolixError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SolixConfig
/// 4. Applies environment variable overrides (SOLIX_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use solix_export::config::loader::load_config;
///
/// let config = load_config("solix-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SolixConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SolixError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SolixError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SolixConfig = toml::from_str(&contents)
        .map_err(|e| SolixError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SolixError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SolixError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SolixError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SOLIX_* prefix
///
/// Environment variables follow the pattern: SOLIX_<SECTION>_<KEY>
/// For example: SOLIX_EXPORT_OUTPUT_DIR, SOLIX_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut SolixConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SOLIX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("SOLIX_EXPORT_INPUT_DIR") {
        config.export.input_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("SOLIX_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("SOLIX_EXPORT_ANONYMIZE") {
        config.export.anonymize = parse_bool_override("SOLIX_EXPORT_ANONYMIZE", &val)?;
    }
    if let Ok(val) = std::env::var("SOLIX_EXPORT_REPORT_PATH") {
        config.export.report_path = Some(PathBuf::from(val));
    }

    // Audit overrides
    config
        .audit
        .apply_env_overrides()
        .map_err(|e| SolixError::Configuration(format!("{e:#}")))?;

    // Logging overrides
    if let Ok(val) = std::env::var("SOLIX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool_override("SOLIX_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("SOLIX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SOLIX_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

/// Boolean overrides accept `true` or `false` only
fn parse_bool_override(name: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        SolixError::Configuration(format!(
            "Invalid {name} value '{value}'. Must be 'true' or 'false'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SOLIX_TEST_CAPTURE_DIR", "/data/captures");
        let input = "input_dir = \"${SOLIX_TEST_CAPTURE_DIR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "input_dir = \"/data/captures\"\n");
        std::env::remove_var("SOLIX_TEST_CAPTURE_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SOLIX_TEST_MISSING_VAR");
        let input = "output_dir = \"${SOLIX_TEST_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("SOLIX_TEST_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("SOLIX_TEST_COMMENTED_VAR");
        let input = "# output_dir = \"${SOLIX_TEST_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SOLIX_TEST_COMMENTED_VAR}"));
    }

    #[test]
    fn test_parse_bool_override() {
        assert!(parse_bool_override("SOLIX_EXPORT_ANONYMIZE", "true").unwrap());
        assert!(!parse_bool_override("SOLIX_EXPORT_ANONYMIZE", "false").unwrap());

        for value in ["no", "0", "off", ""] {
            let err = parse_bool_override("SOLIX_EXPORT_ANONYMIZE", value).unwrap_err();
            assert!(matches!(err, SolixError::Configuration(_)));
            assert!(err.to_string().contains("SOLIX_EXPORT_ANONYMIZE"));
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[export]
input_dir = "./captures"
output_dir = "./exports/me"
skip_anonymize = ["api_sites.json", "api_devices.json"]

[audit]
enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.export.input_dir, PathBuf::from("./captures"));
        assert_eq!(config.export.skip_anonymize.len(), 2);
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_load_config_invalid() {
        let toml_content = r#"
[export]
input_dir = "./same"
output_dir = "./same"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }
}
