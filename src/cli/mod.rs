//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Solix Export - anonymizing exporter for Solix cloud API responses
#[derive(Parser, Debug)]
#[command(name = "solix-export")]
#[command(version, about, long_about = None)]
#[command(author = "Solix Export Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "solix-export.toml", env = "SOLIX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SOLIX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export captured API responses into an anonymized folder
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
