use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wavefield_core::errors::WfError;
use wavefield_core::{RunProvenance, SchemaVersion};
use wavefield_force::ForceBreakdown;

use crate::classify::Band;
use crate::hash::stable_hash_string;
use crate::run::HarnessConfig;
use crate::scenario::{Scenario, SkipReason};
use crate::summary::RunSummary;

/// Schema version of [`ValidationReport`].
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// A processed scenario with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvaluation {
    /// One-based position in the input corpus.
    pub index: usize,
    /// Scenario name.
    pub name: String,
    /// `total_force / newton_force`.
    pub ratio: f64,
    /// Band assigned to `ratio`.
    pub band: Band,
    /// Every intermediate term of the composition.
    pub breakdown: ForceBreakdown,
}

impl ScenarioEvaluation {
    /// Interchange row for this evaluation.
    pub fn record(&self) -> ScenarioRecord {
        ScenarioRecord {
            name: self.name.clone(),
            ratio: self.ratio,
            total_force: self.breakdown.total_force,
            newton_force: self.breakdown.newton_force,
        }
    }
}

/// Row consumed by downstream reporting; the column names are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Scenario name.
    #[serde(rename = "Test_Name")]
    pub name: String,
    /// Total-to-Newtonian force ratio.
    #[serde(rename = "Ratio_WF_Newton")]
    pub ratio: f64,
    /// Corrected total force in newtons.
    #[serde(rename = "Force_Total")]
    pub total_force: f64,
    /// Newtonian baseline in newtons.
    #[serde(rename = "Force_Newton")]
    pub newton_force: f64,
}

impl ScenarioRecord {
    /// Column headers in interchange order.
    pub const COLUMNS: [&'static str; 4] =
        ["Test_Name", "Ratio_WF_Newton", "Force_Total", "Force_Newton"];
}

/// A scenario excluded by the mass filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedScenario {
    /// One-based position in the input corpus.
    pub index: usize,
    /// Scenario name.
    pub name: String,
    /// Which mass failed the filter.
    pub reason: SkipReason,
}

/// A scenario whose evaluation raised an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedScenario {
    /// One-based position in the input corpus.
    pub index: usize,
    /// Scenario name.
    pub name: String,
    /// Error raised by the composer.
    pub error: WfError,
}

/// Complete result of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Always [`REPORT_SCHEMA`] for reports built by this crate.
    pub schema_version: SchemaVersion,
    /// Hashes of the corpus and configuration that produced the report.
    pub provenance: RunProvenance,
    /// Classified scenarios in corpus order.
    pub evaluations: Vec<ScenarioEvaluation>,
    /// Scenarios rejected by the mass filter.
    pub skipped: Vec<SkippedScenario>,
    /// Scenarios whose composition failed.
    pub failed: Vec<FailedScenario>,
    /// Aggregate counts and verdict.
    pub summary: RunSummary,
}

impl ValidationReport {
    /// Interchange rows for every processed scenario, in corpus order.
    pub fn records(&self) -> Vec<ScenarioRecord> {
        self.evaluations.iter().map(ScenarioEvaluation::record).collect()
    }

    /// Looks up an evaluation by scenario name.
    pub fn evaluation(&self, name: &str) -> Option<&ScenarioEvaluation> {
        self.evaluations.iter().find(|evaluation| evaluation.name == name)
    }

    /// Canonical hash of the report payload.
    pub fn report_hash(&self) -> Result<String, WfError> {
        stable_hash_string(self)
    }
}

pub(crate) fn build_provenance(
    scenarios: &[Scenario],
    harness: &HarnessConfig,
) -> Result<RunProvenance, WfError> {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        "wavefield-exp".to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    Ok(RunProvenance {
        corpus_hash: stable_hash_string(&scenarios)?,
        config_hash: stable_hash_string(&harness.model)?,
        rules_hash: stable_hash_string(&(&harness.classifier, &harness.verdicts))?,
        tool_versions,
    })
}
