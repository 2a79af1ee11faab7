//! Loading pipeline extraction
//!
//! - `step` - step representations (declarative and instantiated)
//! - `kinds` - loading/wrapper kind taxonomy and the step classifier
//! - `reduce` - reduction of a pipeline to its loading steps
//! - `report` - per-step classification listing
//! - `extract` - field lookup in pipeline result mappings

pub mod extract;
pub mod kinds;
pub mod reduce;
pub mod report;
pub mod step;

pub use extract::extract;
pub use kinds::{
    classify, KindRegistry, StepClass, BUILTIN_LOADING_KINDS, BUILTIN_WRAPPER_KIND,
    DEFAULT_REGISTRY,
};
pub use reduce::reduce;
pub use report::ClassifiedStep;
pub use step::{InstantiatedStep, Step, StepConfig, Transform};
