use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Parameter holding a wrapper step's embedded sub-pipeline
pub const TRANSFORMS_FIELD: &str = "transforms";

/// Declarative description of a single pipeline step
///
/// The kind is read from `type` (the dataset-config convention), or from
/// `kind` when there is no `type`. All other fields, `transforms` included,
/// are kept as opaque parameters. A `kind` field next to `type` is an
/// ordinary parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConfig {
    /// Transform kind, e.g. "LoadPointsFromFile"
    pub kind: String,

    /// Transform-specific parameters
    pub params: Map<String, Value>,
}

impl StepConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: Map::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_transforms(self, transforms: Vec<StepConfig>) -> Self {
        let inner: Vec<Value> = transforms.into_iter().map(Value::from).collect();
        self.with_param(TRANSFORMS_FIELD, inner)
    }

    /// The `transforms` parameter read as a step list
    ///
    /// `None` when the step has no `transforms`, an error when it holds
    /// something other than a list of step descriptions. Only wrapper steps
    /// are expected to carry one.
    pub fn transforms(&self) -> Option<serde_json::Result<Vec<StepConfig>>> {
        self.params
            .get(TRANSFORMS_FIELD)
            .map(|value| Vec::<StepConfig>::deserialize(value))
    }
}

impl From<StepConfig> for Value {
    fn from(config: StepConfig) -> Self {
        let mut map = Map::with_capacity(config.params.len() + 1);
        map.insert("type".to_string(), Value::String(config.kind));
        for (name, value) in config.params {
            if name != "type" {
                map.insert(name, value);
            }
        }
        Value::Object(map)
    }
}

impl Serialize for StepConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.params.len() + 1))?;
        map.serialize_entry("type", &self.kind)?;
        for (name, value) in self.params.iter().filter(|(name, _)| *name != "type") {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StepConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut params = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match params.remove("type") {
            Some(kind) => kind,
            None => params
                .remove("kind")
                .ok_or_else(|| de::Error::missing_field("type"))?,
        };

        match kind {
            Value::String(kind) => Ok(Self { kind, params }),
            other => Err(de::Error::custom(format!(
                "step `type` must be a string, found {other}"
            ))),
        }
    }
}

/// An already-built transform
///
/// Implementors identify themselves by kind. Wrapper transforms also expose
/// the pipeline they re-apply.
pub trait Transform: fmt::Debug + Send + Sync {
    fn kind(&self) -> &str;

    fn sub_pipeline(&self) -> Option<&[Step]> {
        None
    }
}

/// Shared handle to an instantiated transform
///
/// Two handles are equal when they point at the same transform.
#[derive(Clone)]
pub struct InstantiatedStep(Arc<dyn Transform>);

impl InstantiatedStep {
    pub fn new(transform: Arc<dyn Transform>) -> Self {
        Self(transform)
    }

    pub fn transform(&self) -> &dyn Transform {
        self.0.as_ref()
    }
}

impl fmt::Debug for InstantiatedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InstantiatedStep").field(&self.0).finish()
    }
}

impl PartialEq for InstantiatedStep {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// One step of a pipeline, in either representation form
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Described(StepConfig),
    Instantiated(InstantiatedStep),
}

impl Step {
    /// Wrap a transform value as an instantiated step
    pub fn instantiated<T: Transform + 'static>(transform: T) -> Self {
        Step::Instantiated(InstantiatedStep::new(Arc::new(transform)))
    }

    pub fn kind(&self) -> &str {
        match self {
            Step::Described(config) => &config.kind,
            Step::Instantiated(step) => step.transform().kind(),
        }
    }

    /// The embedded sub-pipeline, if this step carries one
    ///
    /// Described steps are converted on the fly and fail when `transforms`
    /// is not a step list. Instantiated wrappers lend their own pipeline.
    pub fn sub_pipeline(&self) -> Option<serde_json::Result<Cow<'_, [Step]>>> {
        match self {
            Step::Described(config) => config.transforms().map(|inner| {
                inner.map(|steps| Cow::Owned(steps.into_iter().map(Step::Described).collect()))
            }),
            Step::Instantiated(step) => step
                .transform()
                .sub_pipeline()
                .map(|inner| Ok(Cow::Borrowed(inner))),
        }
    }

    pub fn as_config(&self) -> Option<&StepConfig> {
        match self {
            Step::Described(config) => Some(config),
            Step::Instantiated(_) => None,
        }
    }
}

impl From<StepConfig> for Step {
    fn from(config: StepConfig) -> Self {
        Step::Described(config)
    }
}

// Instantiated steps serialize as a bare `{type: ...}` description since
// their parameters live inside the transform.
impl Serialize for Step {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Step::Described(config) => config.serialize(serializer),
            Step::Instantiated(step) => StepConfig::new(step.transform().kind()).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        StepConfig::deserialize(deserializer).map(Step::Described)
    }
}
