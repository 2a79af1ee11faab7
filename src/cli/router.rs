//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::InspectConfig;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Commands, config: &InspectConfig) -> Result<()> {
    let registry = config.kinds.to_registry();

    match command {
        Commands::Reduce {
            file,
            pipeline,
            format,
        } => run_reduce_command(&registry, &file, pipeline.as_deref(), format),
        Commands::Classify {
            file,
            pipeline,
            json,
        } => run_classify_command(&registry, &file, pipeline.as_deref(), json),
        Commands::Extract { results, key } => run_extract_command(&results, &key),
        Commands::Kinds => run_kinds_command(&registry),
    }
}
