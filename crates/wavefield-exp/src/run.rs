use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wavefield_core::errors::{ErrorInfo, WfError};
use wavefield_core::ModelConfig;
use wavefield_force::compose_force;

use crate::classify::Classifier;
use crate::report::{
    build_provenance, FailedScenario, ScenarioEvaluation, SkippedScenario, ValidationReport,
    REPORT_SCHEMA,
};
use crate::scenario::{Scenario, Validation};
use crate::summary::RunSummary;
use crate::verdict::VerdictPolicy;

/// Everything that parameterises a pass besides the scenarios themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HarnessConfig {
    /// Constants and correction parameters fed to the composer.
    #[serde(default)]
    pub model: ModelConfig,
    /// Ratio bands, tightest first.
    #[serde(default)]
    pub classifier: Classifier,
    /// Priority-ordered verdict thresholds.
    #[serde(default)]
    pub verdicts: VerdictPolicy,
}

impl HarnessConfig {
    /// Validates the model configuration and both rule lists.
    pub fn validate(&self) -> Result<(), WfError> {
        self.model.validate()?;
        self.classifier.validate()?;
        self.verdicts.validate()
    }
}

/// Options governing pass execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOpts {
    /// Number of scenarios evaluated in parallel; 1 runs serially.
    #[serde(default = "RunOpts::default_concurrency")]
    pub concurrency: usize,
}

impl RunOpts {
    const fn default_concurrency() -> usize {
        1
    }
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            concurrency: Self::default_concurrency(),
        }
    }
}

/// Outcome of a single scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    /// Composed and classified.
    Evaluated(ScenarioEvaluation),
    /// Rejected by the mass filter before composition.
    Skipped(SkippedScenario),
    /// The composer returned an error.
    Failed(FailedScenario),
}

/// Filters, composes and classifies one scenario. `index` is one-based.
pub fn evaluate_scenario(
    index: usize,
    scenario: &Scenario,
    harness: &HarnessConfig,
) -> ScenarioOutcome {
    let scenario = match scenario.validate() {
        Validation::Ready(scenario) => scenario,
        Validation::Skipped(reason) => {
            warn!(scenario = %scenario.name, ?reason, "scenario skipped");
            return ScenarioOutcome::Skipped(SkippedScenario {
                index,
                name: scenario.name.clone(),
                reason,
            });
        }
    };
    match compose_force(
        scenario.mass_a,
        scenario.mass_b,
        scenario.separation,
        &harness.model,
    ) {
        Ok(breakdown) => {
            let ratio = breakdown.ratio();
            let band = harness.classifier.classify(ratio);
            debug!(scenario = %scenario.name, ratio, ?band, "scenario evaluated");
            ScenarioOutcome::Evaluated(ScenarioEvaluation {
                index,
                name: scenario.name.clone(),
                ratio,
                band,
                breakdown,
            })
        }
        Err(error) => {
            warn!(scenario = %scenario.name, %error, "scenario failed");
            ScenarioOutcome::Failed(FailedScenario {
                index,
                name: scenario.name.clone(),
                error,
            })
        }
    }
}

/// Runs one pass over `scenarios` and aggregates the classifications.
///
/// Invalid configuration aborts before any scenario is evaluated; per-scenario
/// failures are recorded and never abort the pass.
#[tracing::instrument(skip(scenarios, harness, opts), fields(scenarios = scenarios.len()))]
pub fn run_validation(
    scenarios: &[Scenario],
    harness: &HarnessConfig,
    opts: &RunOpts,
) -> Result<ValidationReport, WfError> {
    harness.validate()?;
    let provenance = build_provenance(scenarios, harness)?;
    let outcomes = evaluate_all(scenarios, harness, opts)?;

    let mut evaluations = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = Vec::new();
    for outcome in outcomes {
        match outcome {
            ScenarioOutcome::Evaluated(evaluation) => evaluations.push(evaluation),
            ScenarioOutcome::Skipped(entry) => skipped.push(entry),
            ScenarioOutcome::Failed(entry) => failed.push(entry),
        }
    }

    let summary = RunSummary::from_bands(
        evaluations.iter().map(|evaluation| evaluation.band),
        skipped.len(),
        failed.len(),
        &harness.verdicts,
    );
    info!(
        total = summary.total,
        success = summary.success_count,
        skipped = summary.skipped,
        failed = summary.failed,
        verdict = ?summary.verdict,
        "validation pass complete"
    );

    Ok(ValidationReport {
        schema_version: REPORT_SCHEMA,
        provenance,
        evaluations,
        skipped,
        failed,
        summary,
    })
}

fn evaluate_all(
    scenarios: &[Scenario],
    harness: &HarnessConfig,
    opts: &RunOpts,
) -> Result<Vec<ScenarioOutcome>, WfError> {
    if opts.concurrency <= 1 {
        return Ok(scenarios
            .iter()
            .enumerate()
            .map(|(idx, scenario)| evaluate_scenario(idx + 1, scenario, harness))
            .collect());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.concurrency)
        .build()
        .map_err(|err| WfError::Config(ErrorInfo::new("thread-pool", err.to_string())))?;
    let mut ordered: Vec<(usize, ScenarioOutcome)> = pool.install(|| {
        scenarios
            .par_iter()
            .enumerate()
            .map(|(idx, scenario)| (idx, evaluate_scenario(idx + 1, scenario, harness)))
            .collect()
    });
    ordered.sort_by_key(|(idx, _)| *idx);
    Ok(ordered.into_iter().map(|(_, outcome)| outcome).collect())
}
