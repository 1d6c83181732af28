//! Corrected gravitational field of a single mass.

use wavefield_core::errors::{ensure_finite, WfError};
use wavefield_core::ModelConfig;

use crate::compose::check_mass;
use crate::corrector::check_separation;
use crate::wavelength::PhysicalObject;

/// Gravitational field strength of a single mass at `distance`.
///
/// `g = G·m/r² · (1 + k·λ(m)/r)` where `k` is
/// [`CorrectionParams::field_coefficient`](wavefield_core::CorrectionParams).
pub fn gravitational_field(mass: f64, distance: f64, config: &ModelConfig) -> Result<f64, WfError> {
    check_mass("mass", mass)?;
    let distance = check_separation(distance)?;
    let g_newton = config.constants.gravitational * mass / (distance * distance);
    let object = PhysicalObject::from_mass(mass, &config.constants);
    let correction = 1.0 + config.correction.field_coefficient * object.wavelength / distance;
    ensure_finite("gravitational_field", g_newton * correction)
}
