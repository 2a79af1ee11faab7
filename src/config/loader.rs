use super::{ConfigValidator, InspectConfig, DEFAULT_CONFIG_FILE};
use crate::error::{helpers::file_not_found, ErrorCode, ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Resolves and loads the tool configuration
///
/// Order: built-in defaults, then the config file (explicit path or
/// `.pipeline-inspect.toml` in the working directory), then environment
/// variables. The result is validated before it is returned.
pub struct ConfigLoader {
    working_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// The config file that `load` reads, if any
    ///
    /// An explicit path is returned as is, otherwise the default file when it
    /// exists in the working directory.
    pub fn config_file(&self, explicit_path: Option<&Path>) -> Option<PathBuf> {
        match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = self.working_dir.join(DEFAULT_CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        }
    }

    pub fn load(&self, explicit_path: Option<&Path>) -> Result<InspectConfig> {
        let mut config = match self.config_file(explicit_path) {
            Some(path) => {
                if !path.exists() {
                    return Err(file_not_found(&path));
                }
                Self::load_file(&path)?
            }
            None => InspectConfig::default(),
        };

        config.merge_env_vars();
        ConfigValidator::validate_config(&config)?;
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<InspectConfig> {
        let content =
            std::fs::read_to_string(path).to_config_error(ErrorCode::CONFIG_GENERIC, path)?;
        toml::from_str(&content).to_config_error(ErrorCode::CONFIG_INVALID_TOML, path)
    }
}
