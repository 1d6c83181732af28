//! Per-object field traces and the suppressed correction force.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use wavefield_core::errors::{ErrorInfo, WfError};
use wavefield_core::ModelConfig;

use crate::resonance::Resonance;
use crate::velocity::{blended_speed, velocity_deficit};
use crate::wavelength::PhysicalObject;

/// Per-object intermediate values of the correction chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldTrace {
    /// Wavelength derived from the object's rest energy.
    pub wavelength: f64,
    /// Resonance of the object against the probe wavelength.
    pub resonance: Resonance,
    /// Resonance- and density-weighted wavelength contribution.
    pub existing_wavelength: f64,
    /// Modified propagation speed.
    pub speed: f64,
    /// Velocity deficit `c - speed`.
    pub deficit: f64,
    /// Induced field energy `ε₀ · deficit²`.
    pub field_energy: f64,
}

impl FieldTrace {
    /// Traces one object from its wavelength through resonance, blended speed
    /// and velocity deficit to the induced field energy.
    pub fn for_object(object: &PhysicalObject, config: &ModelConfig) -> Self {
        let c = config.constants.speed_of_light;
        let probe = config.correction.probe_wavelength;
        let resonance = Resonance::between(probe, object.wavelength);
        let existing_wavelength =
            object.wavelength * resonance.strength() * config.correction.density_factor;
        let speed = blended_speed(probe, existing_wavelength, c);
        let deficit = velocity_deficit(speed, c);
        Self {
            wavelength: object.wavelength,
            resonance,
            existing_wavelength,
            speed,
            deficit,
            field_energy: config.constants.vacuum_permittivity * deficit * deficit,
        }
    }
}

/// Output of the field-energy corrector for a pair of objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionTerms {
    /// Traces for the first and second object.
    pub traces: [FieldTrace; 2],
    /// Interaction force between the two induced field energies.
    pub em_field_product: f64,
    /// `em_field_product · α²`.
    pub alpha_suppressed_force: f64,
    /// `alpha_suppressed_force · em_fraction`, the term added to Newton.
    pub correction_force: f64,
}

/// Computes the correction force between two objects at `separation`.
pub fn correction(
    first: &PhysicalObject,
    second: &PhysicalObject,
    separation: f64,
    config: &ModelConfig,
) -> Result<CorrectionTerms, WfError> {
    let separation = check_separation(separation)?;
    let traces = [
        FieldTrace::for_object(first, config),
        FieldTrace::for_object(second, config),
    ];
    let epsilon_0 = config.constants.vacuum_permittivity;
    let em_field_product = (traces[0].field_energy * traces[1].field_energy)
        / (4.0 * PI * epsilon_0 * separation * separation);
    let alpha = config.constants.fine_structure;
    let alpha_suppressed_force = em_field_product * alpha * alpha;
    let correction_force = alpha_suppressed_force * config.correction.em_fraction;
    Ok(CorrectionTerms {
        traces,
        em_field_product,
        alpha_suppressed_force,
        correction_force,
    })
}

pub(crate) fn check_separation(separation: f64) -> Result<f64, WfError> {
    if separation.is_finite() && separation > 0.0 {
        Ok(separation)
    } else {
        Err(WfError::Domain(
            ErrorInfo::new(
                "non-positive-separation",
                "separation must be finite and strictly positive",
            )
            .with_context("separation", separation.to_string()),
        ))
    }
}
