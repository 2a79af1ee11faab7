//! Loading pipeline reduction
//!
//! Walks a pipeline, keeps loading steps in order, splices the reduced
//! contents of wrapper steps in their place and drops everything else.
//! Every level, including each wrapper's embedded pipeline, must keep at
//! least one step.
//!
//! # Examples
//!
//! ```
//! use pipeline_inspect::pipeline::{reduce, Step, StepConfig};
//!
//! let pipeline: Vec<Step> = ["LoadPointsFromFile", "PointShuffle", "Collect3D"]
//!     .into_iter()
//!     .map(|kind| StepConfig::new(kind).into())
//!     .collect();
//!
//! let loading = reduce(&pipeline).unwrap();
//! let kinds: Vec<_> = loading.iter().map(|s| s.kind()).collect();
//! assert_eq!(kinds, ["LoadPointsFromFile", "Collect3D"]);
//! ```

use super::kinds::{KindRegistry, StepClass, DEFAULT_REGISTRY};
use super::step::Step;
use crate::error::{ErrorCode, InspectError, Result};
use tracing::debug;

/// Reduce a pipeline with the built-in kind taxonomy
pub fn reduce(pipeline: &[Step]) -> Result<Vec<Step>> {
    DEFAULT_REGISTRY.reduce(pipeline)
}

/// Where in the step tree a reduction level sits
struct Level<'a> {
    depth: usize,
    /// Position path of the enclosing wrapper, empty at the top
    prefix: String,
    wrapper: Option<&'a str>,
}

impl Level<'_> {
    fn position(&self, index: usize) -> String {
        if self.prefix.is_empty() {
            index.to_string()
        } else {
            format!("{}.{}", self.prefix, index)
        }
    }
}

impl KindRegistry {
    /// Keep only the loading-related steps of `pipeline`
    ///
    /// Fails with `EmptyLoadingPipeline` when this pipeline, or the pipeline
    /// embedded in any wrapper step, has no loading step, and with
    /// `MalformedStep` for a blank kind or a wrapper without an embedded
    /// pipeline.
    pub fn reduce(&self, pipeline: &[Step]) -> Result<Vec<Step>> {
        let root = Level {
            depth: 0,
            prefix: String::new(),
            wrapper: None,
        };
        let reduced = self.reduce_level(pipeline, &root)?;
        debug!(
            input = pipeline.len(),
            kept = reduced.len(),
            "reduced pipeline to its loading steps"
        );
        Ok(reduced)
    }

    fn reduce_level(&self, pipeline: &[Step], level: &Level<'_>) -> Result<Vec<Step>> {
        let mut loading = Vec::new();

        for (index, step) in pipeline.iter().enumerate() {
            let kind = step.kind();
            if kind.trim().is_empty() {
                return Err(InspectError::malformed_step(
                    ErrorCode::PIPELINE_MALFORMED_STEP,
                    level.position(index),
                    None,
                    "step kind is empty",
                ));
            }

            match self.classify(step) {
                StepClass::Loading => {
                    debug!(kind, depth = level.depth, "keeping loading step");
                    loading.push(step.clone());
                }
                StepClass::Wrapper => {
                    let position = level.position(index);
                    let inner = match step.sub_pipeline() {
                        Some(Ok(inner)) => inner,
                        Some(Err(e)) => {
                            return Err(InspectError::malformed_step(
                                ErrorCode::PIPELINE_MISSING_SUB_PIPELINE,
                                position,
                                Some(kind.to_string()),
                                format!("wrapper `transforms` is not a step list: {e}"),
                            ))
                        }
                        None => {
                            return Err(InspectError::malformed_step(
                                ErrorCode::PIPELINE_MISSING_SUB_PIPELINE,
                                position,
                                Some(kind.to_string()),
                                "wrapper step has no embedded `transforms` pipeline",
                            ))
                        }
                    };
                    let nested = Level {
                        depth: level.depth + 1,
                        prefix: format!("{}.transforms", position),
                        wrapper: Some(kind),
                    };
                    let flattened = self.reduce_level(&inner, &nested)?;
                    debug!(
                        kind,
                        depth = level.depth,
                        spliced = flattened.len(),
                        "flattening wrapper step"
                    );
                    loading.extend(flattened);
                }
                StepClass::NotLoading => {
                    debug!(kind, depth = level.depth, "dropping step");
                }
            }
        }

        if loading.is_empty() {
            return Err(InspectError::empty_loading_pipeline(
                level.depth,
                level.wrapper.map(str::to_string),
            ));
        }
        Ok(loading)
    }
}
