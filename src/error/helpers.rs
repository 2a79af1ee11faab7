use super::{ErrorCode, InspectError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to InspectError with context
    fn to_inspect(self, context: impl Into<String>) -> Result<T, InspectError>;

    /// Convert to a configuration error tied to a file
    fn to_config_error(self, code: u16, path: &Path) -> Result<T, InspectError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_inspect(self, context: impl Into<String>) -> Result<T, InspectError> {
        self.map_err(|e| InspectError::other(context).with_source(e))
    }

    fn to_config_error(self, code: u16, path: &Path) -> Result<T, InspectError> {
        self.map_err(|e| {
            let e: Box<dyn std::error::Error + Send + Sync> = e.into();
            InspectError::config_with_code(code, e.to_string(), Some(path.to_path_buf()))
                .with_source(e)
        })
    }
}

/// Create a not found error for a configuration or pipeline file
pub fn file_not_found(path: &Path) -> InspectError {
    InspectError::config_with_code(
        ErrorCode::CONFIG_NOT_FOUND,
        format!("File not found: {}", path.display()),
        Some(path.to_path_buf()),
    )
}
