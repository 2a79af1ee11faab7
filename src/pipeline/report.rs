//! Per-step classification report
//!
//! Unlike [`KindRegistry::reduce`], building a report never fails: it lists
//! every step, nested ones included, with the class it was given.

use super::kinds::{KindRegistry, StepClass};
use super::step::Step;
use serde::Serialize;

/// One line of a classification report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedStep {
    /// Dotted position path, e.g. `4.transforms.1`
    pub position: String,
    pub kind: String,
    pub class: StepClass,
    pub depth: usize,
}

impl KindRegistry {
    /// Classify every step of `pipeline` in depth-first order
    pub fn classify_pipeline(&self, pipeline: &[Step]) -> Vec<ClassifiedStep> {
        let mut report = Vec::new();
        self.collect(pipeline, "", 0, &mut report);
        report
    }

    fn collect(&self, pipeline: &[Step], prefix: &str, depth: usize, out: &mut Vec<ClassifiedStep>) {
        for (index, step) in pipeline.iter().enumerate() {
            let position = if prefix.is_empty() {
                index.to_string()
            } else {
                format!("{prefix}.{index}")
            };
            let class = self.classify(step);
            out.push(ClassifiedStep {
                position: position.clone(),
                kind: step.kind().to_string(),
                class,
                depth,
            });

            if class == StepClass::Wrapper {
                if let Some(Ok(inner)) = step.sub_pipeline() {
                    self.collect(&inner, &format!("{position}.transforms"), depth + 1, out);
                }
            }
        }
    }
}
