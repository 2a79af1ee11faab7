use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

/// The unified error type for pipeline-inspect
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A (sub-)pipeline reduced to zero loading steps
    #[error("[E{code:04}] The data pipeline must include a loading step: {message}")]
    EmptyLoadingPipeline {
        code: u16,
        message: String,
        /// Recursion depth at which the check failed (0 is the top level)
        depth: usize,
        /// Kind of the wrapper whose embedded pipeline was empty, if nested
        wrapper: Option<String>,
    },

    #[error("[E{code:04}] Malformed step at {position}: {message}")]
    MalformedStep {
        code: u16,
        message: String,
        /// Dotted position path, e.g. `2.transforms.0`
        position: String,
        kind: Option<String>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InspectError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn empty_loading_pipeline(depth: usize, wrapper: Option<String>) -> Self {
        let message = match &wrapper {
            Some(kind) => format!(
                "the sub-pipeline embedded in '{}' (depth {}) has no loading step",
                kind, depth
            ),
            None => "no loading step found in the pipeline".to_string(),
        };
        Self::EmptyLoadingPipeline {
            code: ErrorCode::PIPELINE_NO_LOADING_STEP,
            message,
            depth,
            wrapper,
        }
    }

    pub fn malformed_step(
        code: u16,
        position: impl Into<String>,
        kind: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedStep {
            code,
            message: message.into(),
            position: position.into(),
            kind,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Pipeline errors carry no source and are returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. } | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::EmptyLoadingPipeline { .. } | Self::MalformedStep { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::EmptyLoadingPipeline { message, .. }
            | Self::MalformedStep { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::EmptyLoadingPipeline { .. } => 3,
            Self::MalformedStep { .. } => 4,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::EmptyLoadingPipeline { code, .. }
            | Self::MalformedStep { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::EmptyLoadingPipeline { message, .. } => format!(
                "The data pipeline in your config file must include a loading step ({})",
                message
            ),
            Self::MalformedStep {
                message,
                position,
                kind,
                ..
            } => match kind {
                Some(k) => format!("Step {} ('{}') is malformed: {}", position, k, message),
                None => format!("Step {} is malformed: {}", position, message),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Whether the error was caused by the authored pipeline rather than I/O
    /// or configuration
    pub fn is_pipeline_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyLoadingPipeline { .. } | Self::MalformedStep { .. }
        )
    }
}

/// Type alias for Results using InspectError
pub type Result<T> = std::result::Result<T, InspectError>;
