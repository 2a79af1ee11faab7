use crate::error::{ErrorCode, ErrorExt, InspectError, Result};
use crate::pipeline::{Step, StepConfig};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::Path;

/// Serialization format of a pipeline document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension, YAML when unknown
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => DocumentFormat::Json,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    fn error_code(self) -> u16 {
        match self {
            DocumentFormat::Yaml => ErrorCode::CONFIG_INVALID_YAML,
            DocumentFormat::Json => ErrorCode::CONFIG_INVALID_JSON,
            DocumentFormat::Toml => ErrorCode::CONFIG_INVALID_TOML,
        }
    }
}

/// One or more named pipelines read from a config document
///
/// Accepts either a bare list of steps, stored as `pipeline`, or an object
/// whose `pipeline` / `*_pipeline` fields hold step lists. Other fields are
/// ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDocument {
    pipelines: BTreeMap<String, Vec<StepConfig>>,
}

impl PipelineDocument {
    pub const DEFAULT_PIPELINE: &'static str = "pipeline";

    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let parsed: std::result::Result<Self, Box<dyn std::error::Error + Send + Sync>> =
            match format {
                DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(Into::into),
                DocumentFormat::Json => serde_json::from_str(content).map_err(Into::into),
                DocumentFormat::Toml => toml::from_str(content).map_err(Into::into),
            };
        parsed.map_err(|e| {
            InspectError::config_with_code(format.error_code(), e.to_string(), None).with_source(e)
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(crate::error::helpers::file_not_found(path));
        }
        let content =
            std::fs::read_to_string(path).to_config_error(ErrorCode::CONFIG_GENERIC, path)?;
        let format = DocumentFormat::from_path(path);

        Self::parse(&content, format).map_err(|e| match e {
            InspectError::Config {
                code,
                message,
                source,
                ..
            } => InspectError::Config {
                code,
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pipelines.keys().map(String::as_str)
    }

    /// Steps of the named pipeline
    ///
    /// Without a name, `pipeline` is used, or the only pipeline in the
    /// document when there is exactly one.
    pub fn pipeline(&self, name: Option<&str>) -> Result<Vec<Step>> {
        let steps = match name {
            Some(name) => self.pipelines.get(name),
            None => self.pipelines.get(Self::DEFAULT_PIPELINE).or_else(|| {
                if self.pipelines.len() == 1 {
                    self.pipelines.values().next()
                } else {
                    None
                }
            }),
        };

        let steps = steps.ok_or_else(|| {
            let available: Vec<_> = self.names().collect();
            InspectError::config_with_code(
                ErrorCode::CONFIG_PIPELINE_NOT_FOUND,
                format!(
                    "Pipeline '{}' not found; available: {:?}",
                    name.unwrap_or(Self::DEFAULT_PIPELINE),
                    available
                ),
                None,
            )
        })?;

        Ok(steps.iter().cloned().map(Step::Described).collect())
    }
}

fn is_pipeline_field(name: &str) -> bool {
    name == PipelineDocument::DEFAULT_PIPELINE || name.ends_with("_pipeline")
}

/// Read each step of pipeline `name`, naming the first step that fails
fn parse_steps(
    name: &str,
    steps: Vec<serde_json::Value>,
) -> std::result::Result<Vec<StepConfig>, String> {
    steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            serde_json::from_value(step)
                .map_err(|e| format!("invalid step {index} in '{name}': {e}"))
        })
        .collect()
}

impl<'de> Deserialize<'de> for PipelineDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DocumentHelper {
            // Bare list of steps
            Steps(Vec<serde_json::Value>),
            // Object with one or more `*pipeline` fields
            Named(BTreeMap<String, serde_json::Value>),
        }

        let fields = match DocumentHelper::deserialize(deserializer)? {
            DocumentHelper::Steps(steps) => vec![(
                Self::DEFAULT_PIPELINE.to_string(),
                serde_json::Value::Array(steps),
            )],
            DocumentHelper::Named(fields) => fields.into_iter().collect(),
        };

        let pipelines = fields
            .into_iter()
            .filter_map(|(name, value)| match value {
                serde_json::Value::Array(steps) if is_pipeline_field(&name) => Some((name, steps)),
                _ => None,
            })
            .map(|(name, steps)| {
                parse_steps(&name, steps)
                    .map(|steps| (name, steps))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<std::result::Result<BTreeMap<_, _>, D::Error>>()?;

        if pipelines.is_empty() {
            return Err(serde::de::Error::custom(
                "document contains no pipeline (expected a step list or a `pipeline` field)",
            ));
        }

        Ok(Self { pipelines })
    }
}
