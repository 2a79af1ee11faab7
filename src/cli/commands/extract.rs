//! Extract command implementation

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{helpers::file_not_found, ErrorCode, ErrorExt, InspectError};
use crate::pipeline::extract;

/// Execute the extract command
pub fn run_extract_command(results: &Path, key: &str) -> Result<()> {
    if !results.exists() {
        return Err(file_not_found(results).into());
    }
    let content =
        std::fs::read_to_string(results).to_config_error(ErrorCode::CONFIG_GENERIC, results)?;
    let mapping: Map<String, Value> =
        serde_json::from_str(&content).to_config_error(ErrorCode::CONFIG_INVALID_JSON, results)?;

    match extract(&mapping, key) {
        Some(value) => {
            println!("{}", render_value(value));
            Ok(())
        }
        None => Err(InspectError::other(format!(
            "'{}' is absent from {}",
            key,
            results.display()
        ))
        .into()),
    }
}

/// Strings print bare, everything else as compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
