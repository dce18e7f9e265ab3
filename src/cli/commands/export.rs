//! Export command implementation
//!
//! This module implements the `export` command: captured API responses are
//! sanitized and written into the export folder.

use crate::adapters::DirectorySource;
use crate::config::load_config;
use crate::core::export::{ExportCoordinator, ExportSummary};
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Override the folder holding the captured responses
    #[arg(long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Override the export folder
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write the responses without anonymization
    #[arg(long)]
    pub no_anonymize: bool,

    /// Write the substitution report (original values) to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(input) = &self.input {
            tracing::info!(input = %input.display(), "Overriding input folder from CLI");
            config.export.input_dir = input.clone();
        }
        if let Some(output) = &self.output {
            tracing::info!(output = %output.display(), "Overriding export folder from CLI");
            config.export.output_dir = output.clone();
        }
        if self.no_anonymize {
            tracing::info!("Disabling anonymization from CLI");
            config.export.anonymize = false;
        }
        if let Some(report) = &self.report {
            config.export.report_path = Some(report.clone());
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if !self.yes {
            println!("Export Configuration:");
            println!("  Input: {}", config.export.input_dir.display());
            println!("  Output: {}", config.export.output_dir.display());
            println!("  Anonymize: {}", config.export.anonymize);
            if !config.export.skip_anonymize.is_empty() {
                println!("  Skip Anonymize: {:?}", config.export.skip_anonymize);
            }
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        let source = DirectorySource::new(&config.export.input_dir);
        let coordinator = match ExportCoordinator::new(&config, Box::new(source), shutdown_signal)
        {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(5);
            }
        };

        println!("🚀 Starting export...");
        println!();

        let (summary, report) = match coordinator.run().await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        Self::print_summary(&summary);

        let mut report_failed = false;
        if !report.is_empty() {
            println!("{}", report.format_console());
            if let Some(path) = &config.export.report_path {
                match report.write_to_file(path) {
                    Ok(()) => println!("📝 Substitution report written to {}", path.display()),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to write substitution report");
                        eprintln!("Failed to write substitution report: {e}");
                        report_failed = true;
                    }
                }
            }
            println!();
        }

        let exit_code = if summary.interrupted {
            println!("⚠️  Export interrupted. Documents written so far are complete.");
            tracing::info!("Export interrupted by user signal");
            130
        } else if summary.is_successful() && !report_failed {
            println!("✅ Export completed successfully!");
            0
        } else {
            println!("⚠️  Export completed with failures");
            1
        };

        Ok(exit_code)
    }

    fn print_summary(summary: &ExportSummary) {
        println!();
        println!("📊 Export Summary:");
        println!("  Documents: {}", summary.total_documents);
        println!("  Written: {}", summary.written);
        println!("  Anonymized: {}", summary.anonymized);
        println!("  Skipped (empty): {}", summary.skipped_empty);
        println!("  Failed Writes: {}", summary.failed_writes);
        println!("  Fetch Errors: {}", summary.fetch_errors);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if !summary.errors.is_empty() {
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                println!("  - {:?}: {}", error.error_type, error.message);
                if let Some(context) = &error.context {
                    println!("    Context: {context}");
                }
            }
            println!();
        }
    }
}
