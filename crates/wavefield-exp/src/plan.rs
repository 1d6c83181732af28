use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wavefield_core::errors::{ErrorInfo, WfError};

use crate::catalog::reference_catalog;
use crate::report::ValidationReport;
use crate::run::{run_validation, HarnessConfig, RunOpts};
use crate::scenario::Scenario;
use crate::serde::from_yaml_slice;

/// YAML-loadable description of a validation pass.
///
/// Every section is optional; an empty document runs the reference catalog
/// with default constants and rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationPlan {
    /// Model, classification and verdict configuration.
    #[serde(default)]
    pub harness: HarnessConfig,
    /// Execution options.
    #[serde(default)]
    pub run: RunOpts,
    /// Scenarios to evaluate; defaults to the reference catalog.
    #[serde(default = "reference_catalog")]
    pub scenarios: Vec<Scenario>,
}

impl Default for ValidationPlan {
    fn default() -> Self {
        Self {
            harness: HarnessConfig::default(),
            run: RunOpts::default(),
            scenarios: reference_catalog(),
        }
    }
}

impl ValidationPlan {
    /// Executes the plan.
    pub fn execute(&self) -> Result<ValidationReport, WfError> {
        run_validation(&self.scenarios, &self.harness, &self.run)
    }
}

/// Reads and parses a plan file.
pub fn load_plan(path: &Path) -> Result<ValidationPlan, WfError> {
    let bytes = fs::read(path).map_err(|err| {
        WfError::Serde(
            ErrorInfo::new("plan-read", "failed to read validation plan")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    let plan: ValidationPlan = from_yaml_slice(&bytes)?;
    plan.harness.validate()?;
    Ok(plan)
}
