use crate::pipeline::{KindRegistry, BUILTIN_LOADING_KINDS, BUILTIN_WRAPPER_KIND};
use serde::{Deserialize, Serialize};

pub mod document;
pub mod loader;
pub mod validator;

pub use document::{DocumentFormat, PipelineDocument};
pub use loader::ConfigLoader;
pub use validator::ConfigValidator;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".pipeline-inspect.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InspectConfig {
    pub log_level: Option<String>,
    pub kinds: KindsConfig,
}

/// Overrides for the loading/wrapper kind taxonomy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct KindsConfig {
    /// Extra loading kinds (or the full set when `replace_defaults` is set)
    pub loading: Vec<String>,
    /// Wrapper kind override
    pub wrapper: Option<String>,
    /// Use `loading` instead of the built-in loading kinds
    pub replace_defaults: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            kinds: KindsConfig::default(),
        }
    }
}

impl InspectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        if let Ok(log_level) = std::env::var("PIPELINE_INSPECT_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        if let Ok(wrapper) = std::env::var("PIPELINE_INSPECT_WRAPPER_KIND") {
            self.kinds.wrapper = Some(wrapper);
        }

        if let Ok(kinds) = std::env::var("PIPELINE_INSPECT_LOADING_KINDS") {
            self.kinds.loading.extend(
                kinds
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string),
            );
        }
    }

    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

impl KindsConfig {
    /// Build the kind registry these overrides describe
    pub fn to_registry(&self) -> KindRegistry {
        let wrapper = self.wrapper.as_deref().unwrap_or(BUILTIN_WRAPPER_KIND);
        let mut registry = if self.replace_defaults {
            KindRegistry::with_kinds(std::iter::empty::<String>(), wrapper)
        } else {
            KindRegistry::with_kinds(BUILTIN_LOADING_KINDS.iter().copied(), wrapper)
        };
        for kind in &self.loading {
            registry.register_loading(kind.as_str());
        }
        registry
    }
}

#[cfg(test)]
mod tests;
