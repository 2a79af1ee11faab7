//! Step kind taxonomy and classification
//!
//! A [`KindRegistry`] holds the closed set of loading kinds and the single
//! wrapper kind. Classification only reads a step's kind; it never resolves
//! or runs the transform behind it.

use super::step::Step;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

/// Kinds that read raw data or annotations, plus the formatting steps that
/// materialize loaded fields for downstream consumers.
pub const BUILTIN_LOADING_KINDS: &[&str] = &[
    "LoadPointsFromFile",
    "LoadPointsFromMultiSweeps",
    "LoadImageFromFile",
    "LoadImageFromFileMono3D",
    "LoadMultiViewImageFromFiles",
    "LoadAnnotations3D",
    "PointSegClassMapping",
    "DefaultFormatBundle3D",
    "Collect3D",
];

/// Test-time multi-variant wrapper that embeds its own pipeline
pub const BUILTIN_WRAPPER_KIND: &str = "MultiScaleFlipAug3D";

/// Registry with the built-in taxonomy
pub static DEFAULT_REGISTRY: Lazy<KindRegistry> = Lazy::new(KindRegistry::new);

/// Three-valued result of classifying a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepClass {
    Loading,
    NotLoading,
    /// Composite step whose embedded pipeline must be reduced in its place
    Wrapper,
}

impl fmt::Display for StepClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepClass::Loading => "loading",
            StepClass::NotLoading => "not-loading",
            StepClass::Wrapper => "wrapper",
        };
        f.write_str(label)
    }
}

/// Closed set of loading kinds and the single recognized wrapper kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindRegistry {
    loading: BTreeSet<String>,
    wrapper: String,
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KindRegistry {
    /// Registry populated with the built-in loading kinds and wrapper kind
    pub fn new() -> Self {
        Self::with_kinds(BUILTIN_LOADING_KINDS.iter().copied(), BUILTIN_WRAPPER_KIND)
    }

    /// Registry with an explicit taxonomy and no built-ins
    pub fn with_kinds<I, S>(loading: I, wrapper: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loading: loading.into_iter().map(Into::into).collect(),
            wrapper: wrapper.into(),
        }
    }

    pub fn register_loading(&mut self, kind: impl Into<String>) -> &mut Self {
        self.loading.insert(kind.into());
        self
    }

    pub fn set_wrapper(&mut self, kind: impl Into<String>) -> &mut Self {
        self.wrapper = kind.into();
        self
    }

    pub fn loading_kinds(&self) -> impl Iterator<Item = &str> {
        self.loading.iter().map(String::as_str)
    }

    pub fn wrapper_kind(&self) -> &str {
        &self.wrapper
    }

    pub fn is_loading(&self, kind: &str) -> bool {
        self.loading.contains(kind)
    }

    pub fn is_wrapper(&self, kind: &str) -> bool {
        self.wrapper == kind
    }

    /// Classify a kind: wrapper first, then loading, everything else is
    /// not loading.
    pub fn classify_kind(&self, kind: &str) -> StepClass {
        let class = if self.is_wrapper(kind) {
            StepClass::Wrapper
        } else if self.is_loading(kind) {
            StepClass::Loading
        } else {
            StepClass::NotLoading
        };
        trace!(kind, %class, "classified step");
        class
    }

    pub fn classify(&self, step: &Step) -> StepClass {
        self.classify_kind(step.kind())
    }
}

/// Classify a step against the built-in taxonomy
pub fn classify(step: &Step) -> StepClass {
    DEFAULT_REGISTRY.classify(step)
}
