use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use wavefield_core::errors::{ErrorInfo, WfError};

/// Ordered severity scale for a total-to-baseline force ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Band {
    /// Ratio within the tightest window around 1.
    Perfect,
    /// Ratio within the second window.
    Excellent,
    /// Ratio within the widest accepted window.
    Good,
    /// Anything else, including zero and NaN ratios.
    Poor,
}

impl Band {
    /// All bands in severity order.
    pub const ALL: [Band; 4] = [Band::Perfect, Band::Excellent, Band::Good, Band::Poor];

    /// Whether the band counts towards the success count.
    pub fn is_success(self) -> bool {
        !matches!(self, Band::Poor)
    }

    /// Upper-case label used in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Band::Perfect => "PERFECT",
            Band::Excellent => "EXCELLENT",
            Band::Good => "GOOD",
            Band::Poor => "POOR",
        }
    }
}

/// Closed interval `[min, max]` of accepted ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRange {
    /// Smallest accepted ratio.
    pub min: f64,
    /// Largest accepted ratio.
    pub max: f64,
}

impl RatioRange {
    /// Creates an inclusive range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns whether `ratio` lies within the inclusive range. NaN never does.
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.min && ratio <= self.max
    }
}

/// Assigns `band` to every ratio inside `range`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Band assigned on a match.
    pub band: Band,
    /// Accepted ratios.
    pub range: RatioRange,
}

/// Priority-ordered rule list; the first containing rule wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    /// Rules from tightest to widest.
    #[serde(default = "Classifier::default_rules")]
    pub rules: Vec<ClassificationRule>,
    /// Band for ratios no rule contains.
    #[serde(default = "Classifier::default_fallback")]
    pub fallback: Band,
}

impl Classifier {
    fn default_rules() -> Vec<ClassificationRule> {
        vec![
            ClassificationRule {
                band: Band::Perfect,
                range: RatioRange::new(0.9, 1.1),
            },
            ClassificationRule {
                band: Band::Excellent,
                range: RatioRange::new(0.8, 1.2),
            },
            ClassificationRule {
                band: Band::Good,
                range: RatioRange::new(0.5, 2.0),
            },
        ]
    }

    const fn default_fallback() -> Band {
        Band::Poor
    }

    /// Returns the band of the first rule containing `ratio`.
    pub fn classify(&self, ratio: f64) -> Band {
        self.rules
            .iter()
            .find(|rule| rule.range.contains(ratio))
            .map(|rule| rule.band)
            .unwrap_or(self.fallback)
    }

    /// Rejects an empty rule list, non-finite or inverted ranges, duplicate
    /// bands, and rules that reuse the fallback band.
    pub fn validate(&self) -> Result<(), WfError> {
        if self.rules.is_empty() {
            return Err(WfError::Config(ErrorInfo::new(
                "empty-classifier",
                "at least one classification rule is required",
            )));
        }
        let mut seen = BTreeSet::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            let RatioRange { min, max } = rule.range;
            if !min.is_finite() || !max.is_finite() {
                return Err(WfError::Config(
                    rule_error("non-finite-ratio-range", "range bounds must be finite", idx)
                        .with_context("min", min.to_string())
                        .with_context("max", max.to_string()),
                ));
            }
            if min > max {
                return Err(WfError::Config(
                    rule_error("invalid-ratio-range", "range must satisfy min <= max", idx)
                        .with_context("min", min.to_string())
                        .with_context("max", max.to_string()),
                ));
            }
            if rule.band == self.fallback {
                return Err(WfError::Config(rule_error(
                    "fallback-band-in-rules",
                    "the fallback band cannot also be a rule",
                    idx,
                )));
            }
            if !seen.insert(rule.band) {
                return Err(WfError::Config(rule_error(
                    "duplicate-band",
                    "each band may appear in at most one rule",
                    idx,
                )));
            }
        }
        Ok(())
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: Self::default_rules(),
            fallback: Self::default_fallback(),
        }
    }
}

fn rule_error(code: &str, message: &str, idx: usize) -> ErrorInfo {
    ErrorInfo::new(code, message).with_context("rule", idx.to_string())
}
