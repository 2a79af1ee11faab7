//! Classify command implementation

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::PipelineDocument;
use crate::pipeline::{ClassifiedStep, KindRegistry};

/// Execute the classify command
pub fn run_classify_command(
    registry: &KindRegistry,
    file: &Path,
    pipeline: Option<&str>,
    json: bool,
) -> Result<()> {
    let document = PipelineDocument::load(file)?;
    let steps = document.pipeline(pipeline)?;
    let report = registry.classify_pipeline(&steps);

    if json {
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{output}");
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

/// One line per step, nested steps indented under their wrapper
pub fn format_report(report: &[ClassifiedStep]) -> String {
    let kind_width = report
        .iter()
        .map(|s| s.kind.len() + s.depth * 2)
        .max()
        .unwrap_or(0);

    report
        .iter()
        .map(|step| {
            let label = format!("{}{}", "  ".repeat(step.depth), step.kind);
            format!(
                "{:<8} {:<width$}  {}\n",
                step.position,
                label,
                step.class,
                width = kind_width
            )
        })
        .collect()
}
