use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::Band;
use crate::verdict::{Verdict, VerdictPolicy};

/// Aggregate counts and verdict of a validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Scenarios per band; every band is present, possibly with zero.
    pub counts: BTreeMap<Band, usize>,
    /// Processed scenarios (excludes skipped and failed ones).
    pub total: usize,
    /// Scenarios in a success band.
    pub success_count: usize,
    /// `success_count / total`, or `0.0` for an empty pass.
    pub success_rate: f64,
    /// Outcome of the verdict rules.
    pub verdict: Verdict,
    /// Scenarios left out by the mass filter.
    pub skipped: usize,
    /// Scenarios whose evaluation failed.
    pub failed: usize,
}

impl RunSummary {
    /// Derives the summary purely from the band assignments.
    pub fn from_bands<I>(bands: I, skipped: usize, failed: usize, policy: &VerdictPolicy) -> Self
    where
        I: IntoIterator<Item = Band>,
    {
        let mut counts: BTreeMap<Band, usize> = Band::ALL.iter().map(|band| (*band, 0)).collect();
        for band in bands {
            *counts.entry(band).or_insert(0) += 1;
        }
        Self::from_counts(counts, skipped, failed, policy)
    }

    /// Builds the summary from per-band counts.
    pub fn from_counts(
        mut counts: BTreeMap<Band, usize>,
        skipped: usize,
        failed: usize,
        policy: &VerdictPolicy,
    ) -> Self {
        for band in Band::ALL {
            counts.entry(band).or_insert(0);
        }
        let total: usize = counts.values().sum();
        let success_count: usize = counts
            .iter()
            .filter(|(band, _)| band.is_success())
            .map(|(_, count)| *count)
            .sum();
        let success_rate = if total == 0 {
            0.0
        } else {
            success_count as f64 / total as f64
        };
        let perfect = counts.get(&Band::Perfect).copied().unwrap_or(0);
        let verdict = policy.decide(perfect, success_count, total);
        Self {
            counts,
            total,
            success_count,
            success_rate,
            verdict,
            skipped,
            failed,
        }
    }

    /// Count for a single band.
    pub fn count(&self, band: Band) -> usize {
        self.counts.get(&band).copied().unwrap_or(0)
    }
}
