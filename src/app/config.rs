//! Application configuration
//!
//! Process-level settings derived from the command line, as opposed to the
//! file-based [`InspectConfig`](crate::config::InspectConfig).

use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory, where the default config file is looked up
    pub working_dir: PathBuf,
    /// Explicit config file from `--config`
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
            config_path: None,
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Log filter for the given verbosity, `None` leaves the configured level
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            2 => Some("trace"),
            _ => Some("trace,serde_yaml=debug"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            config_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter() {
        let config = AppConfig::default();
        assert_eq!(config.verbosity_filter(), None);

        let config = AppConfig {
            verbose: 1,
            ..AppConfig::default()
        };
        assert_eq!(config.verbosity_filter(), Some("debug"));

        let config = AppConfig {
            verbose: 5,
            ..AppConfig::default()
        };
        assert_eq!(config.verbosity_filter(), Some("trace,serde_yaml=debug"));
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_working_dir(PathBuf::from("/data"))
            .with_config_path(Some(PathBuf::from("/data/inspect.toml")));
        assert_eq!(config.working_dir, PathBuf::from("/data"));
        assert_eq!(config.config_path, Some(PathBuf::from("/data/inspect.toml")));
    }
}
