use super::InspectConfig;
use crate::error::{ErrorCode, InspectError, Result};

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_config(config: &InspectConfig) -> Result<()> {
        if let Some(log_level) = &config.log_level {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&log_level.as_str()) {
                return Err(invalid(format!(
                    "Invalid log level: {}. Must be one of: {:?}",
                    log_level, valid_levels
                )));
            }
        }

        let kinds = &config.kinds;
        if let Some(wrapper) = &kinds.wrapper {
            if wrapper.trim().is_empty() {
                return Err(invalid("Wrapper kind cannot be empty"));
            }
        }

        if kinds.loading.iter().any(|k| k.trim().is_empty()) {
            return Err(invalid("Loading kinds cannot be empty strings"));
        }

        let registry = kinds.to_registry();
        if registry.is_loading(registry.wrapper_kind()) {
            return Err(invalid(format!(
                "Kind '{}' cannot be both the wrapper kind and a loading kind",
                registry.wrapper_kind()
            )));
        }

        if registry.loading_kinds().next().is_none() {
            return Err(invalid(
                "No loading kinds configured; `replace_defaults` needs a non-empty `loading` list",
            ));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> InspectError {
    InspectError::config_with_code(ErrorCode::CONFIG_INVALID_VALUE, message, None)
}
