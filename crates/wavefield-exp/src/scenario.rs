use serde::{Deserialize, Serialize};
use wavefield_core::RngHandle;

/// One named mass pair at a fixed separation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display label, e.g. `Earth-Moon`.
    pub name: String,
    /// First mass in kilograms.
    pub mass_a: f64,
    /// Second mass in kilograms.
    pub mass_b: f64,
    /// Centre-to-centre distance in metres.
    pub separation: f64,
}

/// Why a scenario was left out of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// `mass_a` was zero, negative or NaN.
    NonPositiveMassA,
    /// `mass_b` was zero, negative or NaN.
    NonPositiveMassB,
}

/// Result of the pre-evaluation filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation<'a> {
    /// The scenario may be composed.
    Ready(&'a Scenario),
    /// The scenario is excluded from every count.
    Skipped(SkipReason),
}

impl Scenario {
    /// Creates a scenario from its literal inputs.
    pub fn new(name: impl Into<String>, mass_a: f64, mass_b: f64, separation: f64) -> Self {
        Self {
            name: name.into(),
            mass_a,
            mass_b,
            separation,
        }
    }

    /// Filters out non-positive masses.
    ///
    /// Separation is not checked here: a bad separation is a domain failure
    /// reported by the composer, not a skip.
    pub fn validate(&self) -> Validation<'_> {
        if !(self.mass_a > 0.0) {
            Validation::Skipped(SkipReason::NonPositiveMassA)
        } else if !(self.mass_b > 0.0) {
            Validation::Skipped(SkipReason::NonPositiveMassB)
        } else {
            Validation::Ready(self)
        }
    }
}

/// Returns a deterministic permutation of `scenarios` for the given seed.
pub fn shuffled(scenarios: &[Scenario], seed: u64) -> Vec<Scenario> {
    let mut out = scenarios.to_vec();
    RngHandle::substream(seed, 0).shuffle(&mut out);
    out
}
