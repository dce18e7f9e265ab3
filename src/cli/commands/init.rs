//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "solix-export.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Solix Export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your capture and export folders", self.output);
                println!("  2. Validate configuration: solix-export validate-config");
                println!("  3. Run export: solix-export export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Solix Export Configuration File
# Anonymizing exporter for Solix cloud API responses

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[export]
# Folder with one captured API response per *.json file
input_dir = "./captures"
# Export folder receiving the sanitized documents
output_dir = "./exports/my-account"
# Replace serials, IDs, Bluetooth addresses and wifi names with random values
anonymize = true
# Documents written unchanged even when anonymize is on (file name or stem)
skip_anonymize = []
# Documents whose mapping keys are renamed when they are known identifiers
anonymize_keys = []
# Optional JSON file receiving the original -> substitute mapping.
# It holds original values; keep it out of the export folder.
# report_path = "./substitutions.json"

[audit]
enabled = true
log_path = "./audit/export.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
# daily, hourly or never
local_rotation = "daily"
"#
        .to_string()
    }
}
