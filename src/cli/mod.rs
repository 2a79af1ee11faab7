//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Command routing

pub mod args;
pub mod commands;
pub mod router;

pub use args::{Cli, Commands, OutputFormat};
pub use router::execute_command;
