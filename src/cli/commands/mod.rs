//! Command implementation modules
//!
//! Each command is implemented as a separate module.

pub mod classify;
pub mod extract;
pub mod kinds;
pub mod reduce;

pub use classify::run_classify_command;
pub use extract::run_extract_command;
pub use kinds::run_kinds_command;
pub use reduce::run_reduce_command;
