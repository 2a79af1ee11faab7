//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `InspectError`: Shows user message always, the coded message in verbose mode
/// - For other errors: Shows the error and its chain in verbose mode
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::InspectError;

    error!("Fatal error: {}", error);

    let exit_code = if let Some(inspect_err) = error.downcast_ref::<InspectError>() {
        eprintln!("{}", inspect_err.user_message());

        if verbose >= 1 {
            eprintln!("\nDetails: {inspect_err}");
        }

        inspect_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}
