//! Reduce command implementation

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::PipelineDocument;
use crate::pipeline::{KindRegistry, Step};

/// Execute the reduce command
pub fn run_reduce_command(
    registry: &KindRegistry,
    file: &Path,
    pipeline: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let document = PipelineDocument::load(file)?;
    let steps = document.pipeline(pipeline)?;
    let reduced = registry.reduce(&steps)?;

    info!(
        "Kept {} of {} top-level steps from {}",
        reduced.len(),
        steps.len(),
        file.display()
    );

    print!("{}", render_steps(&reduced, format)?);
    Ok(())
}

/// Serialize a pipeline in the requested output format
pub fn render_steps(steps: &[Step], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(steps).context("Failed to serialize pipeline as YAML")
        }
        OutputFormat::Json => serde_json::to_string_pretty(steps)
            .map(|json| json + "\n")
            .context("Failed to serialize pipeline as JSON"),
    }
}
