//! # pipeline-inspect
//!
//! Derives a minimal "inspection" pipeline from a full training or
//! evaluation data pipeline: only the steps that load raw data and
//! annotations survive, wrapper steps are flattened in place.
//!
//! ## Usage
//!
//! ```bash
//! pipeline-inspect reduce configs/kitti.yaml --pipeline test_pipeline
//! ```
//!
//! ## Modules
//!
//! - `pipeline` - Step model, kind classification, reduction and field extraction
//! - `config` - Tool configuration and pipeline document loading
//! - `error` - Unified error type with numbered codes
//! - `app` - Logging and process-level setup for the binary
//! - `cli` - Command-line interface
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

pub use error::{InspectError, Result};
pub use pipeline::{classify, extract, reduce, KindRegistry, Step, StepClass, StepConfig};
