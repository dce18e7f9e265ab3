//! Validate config command implementation
//!
//! This module implements the `validate-config` command.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Input Folder: {}", config.export.input_dir.display());
        println!("  Export Folder: {}", config.export.output_dir.display());
        println!("  Anonymize: {}", config.export.anonymize);
        println!("  Skip Anonymize: {:?}", config.export.skip_anonymize);
        println!("  Rename Keys In: {:?}", config.export.anonymize_keys);
        match &config.export.report_path {
            Some(path) => println!("  Substitution Report: {}", path.display()),
            None => println!("  Substitution Report: console only"),
        }
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        println!();
        Ok(0)
    }
}
