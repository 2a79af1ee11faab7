//! Kinds command implementation

use anyhow::Result;

use crate::pipeline::KindRegistry;

/// Execute the kinds command
pub fn run_kinds_command(registry: &KindRegistry) -> Result<()> {
    println!("wrapper: {}", registry.wrapper_kind());
    println!("loading:");
    for kind in registry.loading_kinds() {
        println!("  - {kind}");
    }
    Ok(())
}
