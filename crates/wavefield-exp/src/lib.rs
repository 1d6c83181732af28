//! Scenario classification and aggregate validation passes.

#![deny(missing_docs)]

pub mod catalog;
mod classify;
mod hash;
mod plan;
mod render;
mod report;
mod run;
mod scenario;
mod serde;
mod summary;
mod verdict;

pub use catalog::{reference_catalog, DEFAULT_HIGHLIGHTS};
pub use classify::{Band, ClassificationRule, Classifier, RatioRange};
pub use hash::stable_hash_string;
pub use plan::{load_plan, ValidationPlan};
pub use render::render_text;
pub use report::{
    FailedScenario, ScenarioEvaluation, ScenarioRecord, SkippedScenario, ValidationReport,
    REPORT_SCHEMA,
};
pub use run::{evaluate_scenario, run_validation, HarnessConfig, RunOpts, ScenarioOutcome};
pub use scenario::{shuffled, Scenario, SkipReason, Validation};
pub use summary::RunSummary;
pub use verdict::{Verdict, VerdictBasis, VerdictPolicy, VerdictRule};

pub use crate::serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
