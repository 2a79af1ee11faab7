//! CLI argument structures
//!
//! This module defines the command-line interface of pipeline-inspect.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Extract the loading steps of a data pipeline for inspection
#[derive(Parser)]
#[command(name = "pipeline-inspect")]
#[command(about = "pipeline-inspect - Derive loading-only pipelines from data pipeline configs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (defaults to ./.pipeline-inspect.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the loading-only pipeline derived from a pipeline file
    Reduce {
        /// Pipeline document (YAML, JSON or TOML)
        file: PathBuf,

        /// Named pipeline to use (e.g. test_pipeline)
        #[arg(short = 'p', long)]
        pipeline: Option<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Show how every step of a pipeline is classified
    Classify {
        /// Pipeline document (YAML, JSON or TOML)
        file: PathBuf,

        /// Named pipeline to use (e.g. test_pipeline)
        #[arg(short = 'p', long)]
        pipeline: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract a field from a JSON result mapping
    Extract {
        /// JSON file holding the result mapping
        results: PathBuf,

        /// Field name to extract
        key: String,
    },

    /// List the effective loading kinds and wrapper kind
    Kinds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}
