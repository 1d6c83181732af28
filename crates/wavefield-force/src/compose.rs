//! Newtonian baseline plus wavelength correction.

use serde::{Deserialize, Serialize};
use wavefield_core::errors::{ensure_finite, ErrorInfo, WfError};
use wavefield_core::{ModelConfig, PhysicalConstants};

use crate::corrector::{check_separation, correction, FieldTrace};
use crate::wavelength::PhysicalObject;

/// Every force term computed for one mass pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    /// `newton_force + correction_force`.
    pub total_force: f64,
    /// Inverse-square baseline `G·m1·m2/r²`.
    pub newton_force: f64,
    /// Correction term after both suppression factors.
    pub correction_force: f64,
    /// Interaction force between the two induced field energies.
    pub em_field_product: f64,
    /// Interaction force after the α² suppression only.
    pub alpha_suppressed_force: f64,
    /// Per-object intermediate values.
    pub traces: [FieldTrace; 2],
}

impl ForceBreakdown {
    /// Ratio of total to baseline force, `0.0` if the baseline is not positive.
    pub fn ratio(&self) -> f64 {
        if self.newton_force > 0.0 {
            self.total_force / self.newton_force
        } else {
            0.0
        }
    }
}

/// Inverse-square gravitational force between two masses.
pub fn newton_force(
    mass1: f64,
    mass2: f64,
    separation: f64,
    constants: &PhysicalConstants,
) -> Result<f64, WfError> {
    let separation = check_separation(separation)?;
    Ok(constants.gravitational * mass1 * mass2 / (separation * separation))
}

/// Combines the Newtonian baseline with the wavelength correction.
///
/// Masses must be finite and positive and the separation finite and
/// positive, otherwise a [`WfError::Domain`] is returned. Any non-finite
/// force term fails with [`WfError::NonFinite`].
pub fn compose_force(
    mass1: f64,
    mass2: f64,
    separation: f64,
    config: &ModelConfig,
) -> Result<ForceBreakdown, WfError> {
    check_mass("mass1", mass1)?;
    check_mass("mass2", mass2)?;
    let newton_force = newton_force(mass1, mass2, separation, &config.constants)?;

    let first = PhysicalObject::from_mass(mass1, &config.constants);
    let second = PhysicalObject::from_mass(mass2, &config.constants);
    let terms = correction(&first, &second, separation, config)?;

    let newton_force = ensure_finite("newton_force", newton_force)?;
    let correction_force = ensure_finite("correction_force", terms.correction_force)?;
    let total_force = ensure_finite("total_force", newton_force + correction_force)?;

    Ok(ForceBreakdown {
        total_force,
        newton_force,
        correction_force,
        em_field_product: terms.em_field_product,
        alpha_suppressed_force: terms.alpha_suppressed_force,
        traces: terms.traces,
    })
}

pub(crate) fn check_mass(label: &str, mass: f64) -> Result<(), WfError> {
    if mass.is_finite() && mass > 0.0 {
        return Ok(());
    }
    Err(WfError::Domain(
        ErrorInfo::new("non-positive-mass", format!("{label} must be finite and > 0"))
            .with_context(label, mass.to_string())
            .with_hint("filter scenarios with Scenario::validate before composing"),
    ))
}
