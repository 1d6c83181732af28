//! Resonance between the probe and material wavelengths.

use serde::{Deserialize, Serialize};

/// Deviation below which a wavelength ratio counts as a strong resonance.
pub const STRONG_DEVIATION: f64 = 0.1;
/// Deviation below which a wavelength ratio counts as a moderate resonance.
pub const MODERATE_DEVIATION: f64 = 0.5;

/// Discrete resonance strength between a probe and a material wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resonance {
    /// Material wavelength is zero; no resonance is possible.
    None,
    /// Ratio is far from any integer.
    Weak,
    /// Ratio lies within half a unit of an integer.
    Moderate,
    /// Ratio lies within a tenth of an integer.
    Strong,
}

impl Resonance {
    /// Classifies the ratio `lambda_probe / lambda_material`.
    ///
    /// Both comparisons are strict, so a deviation of exactly 0.1 or 0.5
    /// falls into the weaker band.
    pub fn between(lambda_probe: f64, lambda_material: f64) -> Self {
        if lambda_material == 0.0 {
            return Resonance::None;
        }
        let ratio = lambda_probe / lambda_material;
        let deviation = (ratio - ratio.round()).abs();
        if deviation < STRONG_DEVIATION {
            Resonance::Strong
        } else if deviation < MODERATE_DEVIATION {
            Resonance::Moderate
        } else {
            Resonance::Weak
        }
    }

    /// Numeric strength used as a wavelength weight.
    pub fn strength(self) -> f64 {
        match self {
            Resonance::None => 0.0,
            Resonance::Weak => 0.1,
            Resonance::Moderate => 0.5,
            Resonance::Strong => 1.0,
        }
    }
}

/// Resonance strength in `{0, 0.1, 0.5, 1.0}`.
pub fn resonance_factor(lambda_probe: f64, lambda_material: f64) -> f64 {
    Resonance::between(lambda_probe, lambda_material).strength()
}
