use serde::{Deserialize, Serialize};
use wavefield_core::errors::{ErrorInfo, WfError};

/// Categorical outcome of a whole validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Nearly every scenario classified as PERFECT.
    FullyValidated,
    /// Nearly every scenario classified as a success.
    StronglyValidated,
    /// A clear majority classified as a success.
    Confirmed,
    /// Nothing stronger applies.
    NeedsImprovement,
}

impl Verdict {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::FullyValidated => "FULLY VALIDATED",
            Verdict::StronglyValidated => "STRONGLY VALIDATED",
            Verdict::Confirmed => "CONFIRMED",
            Verdict::NeedsImprovement => "NEEDS IMPROVEMENT",
        }
    }
}

/// Which count a verdict rule compares against the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictBasis {
    /// Number of PERFECT scenarios.
    Perfect,
    /// Number of successful scenarios.
    Success,
}

/// `verdict` applies when `count(basis) >= min_share * total`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictRule {
    /// Verdict returned on a match.
    pub verdict: Verdict,
    /// Count the share is computed from.
    pub basis: VerdictBasis,
    /// Required share of the processed total, in `[0, 1]`.
    pub min_share: f64,
}

/// Priority-ordered verdict rules; the first satisfied rule wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictPolicy {
    /// Rules in strict priority order.
    #[serde(default = "VerdictPolicy::default_rules")]
    pub rules: Vec<VerdictRule>,
    /// Verdict for passes no rule accepts, including empty passes.
    #[serde(default = "VerdictPolicy::default_fallback")]
    pub fallback: Verdict,
}

impl VerdictPolicy {
    fn default_rules() -> Vec<VerdictRule> {
        vec![
            VerdictRule {
                verdict: Verdict::FullyValidated,
                basis: VerdictBasis::Perfect,
                min_share: 0.8,
            },
            VerdictRule {
                verdict: Verdict::StronglyValidated,
                basis: VerdictBasis::Success,
                min_share: 0.8,
            },
            VerdictRule {
                verdict: Verdict::Confirmed,
                basis: VerdictBasis::Success,
                min_share: 0.6,
            },
        ]
    }

    const fn default_fallback() -> Verdict {
        Verdict::NeedsImprovement
    }

    /// Evaluates the rules against the pass counts.
    ///
    /// An empty pass never matches a rule and yields the fallback.
    pub fn decide(&self, perfect: usize, success: usize, total: usize) -> Verdict {
        if total == 0 {
            return self.fallback;
        }
        let total = total as f64;
        self.rules
            .iter()
            .find(|rule| {
                let count = match rule.basis {
                    VerdictBasis::Perfect => perfect,
                    VerdictBasis::Success => success,
                };
                count as f64 >= rule.min_share * total
            })
            .map(|rule| rule.verdict)
            .unwrap_or(self.fallback)
    }

    /// Rejects shares outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), WfError> {
        for (idx, rule) in self.rules.iter().enumerate() {
            if !(0.0..=1.0).contains(&rule.min_share) {
                return Err(WfError::Config(
                    ErrorInfo::new("invalid-verdict-share", "min_share must lie in [0, 1]")
                        .with_context("rule", idx.to_string())
                        .with_context("min_share", rule.min_share.to_string()),
                ));
            }
        }
        Ok(())
    }
}

impl Default for VerdictPolicy {
    fn default() -> Self {
        Self {
            rules: Self::default_rules(),
            fallback: Self::default_fallback(),
        }
    }
}
