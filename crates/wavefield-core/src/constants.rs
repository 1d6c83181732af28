//! Physical constants and correction parameters consumed by the force model.
//!
//! Nothing here is global state: every computation receives a [`ModelConfig`]
//! by reference, so alternative values can be substituted per run.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, WfError};

/// Speed of light in vacuum (m/s), CODATA 2018.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Planck constant (J·s), CODATA 2018.
pub const PLANCK: f64 = 6.626_070_15e-34;
/// Newtonian constant of gravitation (m³/(kg·s²)), CODATA 2018.
pub const GRAVITATIONAL: f64 = 6.674_30e-11;
/// Vacuum electric permittivity (F/m), CODATA 2018.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;
/// Fine-structure constant, CODATA 2018.
pub const FINE_STRUCTURE: f64 = 7.297_352_569_3e-3;

/// Fundamental constants used by every stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Nominal propagation speed `c`.
    #[serde(default = "PhysicalConstants::default_speed_of_light")]
    pub speed_of_light: f64,
    /// Planck constant `h`.
    #[serde(default = "PhysicalConstants::default_planck")]
    pub planck: f64,
    /// Gravitational constant `G`.
    #[serde(default = "PhysicalConstants::default_gravitational")]
    pub gravitational: f64,
    /// Vacuum permittivity `ε₀`.
    #[serde(default = "PhysicalConstants::default_vacuum_permittivity")]
    pub vacuum_permittivity: f64,
    /// Fine-structure constant `α`.
    #[serde(default = "PhysicalConstants::default_fine_structure")]
    pub fine_structure: f64,
}

impl PhysicalConstants {
    const fn default_speed_of_light() -> f64 {
        SPEED_OF_LIGHT
    }

    const fn default_planck() -> f64 {
        PLANCK
    }

    const fn default_gravitational() -> f64 {
        GRAVITATIONAL
    }

    const fn default_vacuum_permittivity() -> f64 {
        VACUUM_PERMITTIVITY
    }

    const fn default_fine_structure() -> f64 {
        FINE_STRUCTURE
    }

    /// Returns `h·c`, the numerator of the energy to wavelength law.
    pub fn hc(&self) -> f64 {
        self.planck * self.speed_of_light
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            speed_of_light: Self::default_speed_of_light(),
            planck: Self::default_planck(),
            gravitational: Self::default_gravitational(),
            vacuum_permittivity: Self::default_vacuum_permittivity(),
            fine_structure: Self::default_fine_structure(),
        }
    }
}

/// Literal parameters of the correction chain.
///
/// `density_factor` and `em_fraction` carry no derivation; they are inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionParams {
    /// Probe wavelength every object is compared against (visible light).
    #[serde(default = "CorrectionParams::default_probe_wavelength")]
    pub probe_wavelength: f64,
    /// Scale applied to a resonance-weighted wavelength to obtain the
    /// existing-wavelength contribution.
    #[serde(default = "CorrectionParams::default_density_factor")]
    pub density_factor: f64,
    /// Electromagnetic mass fraction applied after the α² suppression.
    #[serde(default = "CorrectionParams::default_em_fraction")]
    pub em_fraction: f64,
    /// Coefficient of the wavelength term in the single-mass field strength.
    #[serde(default = "CorrectionParams::default_field_coefficient")]
    pub field_coefficient: f64,
}

impl CorrectionParams {
    fn default_probe_wavelength() -> f64 {
        500e-9
    }

    fn default_density_factor() -> f64 {
        1e-30
    }

    fn default_em_fraction() -> f64 {
        0.58 / 938.3
    }

    fn default_field_coefficient() -> f64 {
        1e-40
    }
}

impl Default for CorrectionParams {
    fn default() -> Self {
        Self {
            probe_wavelength: Self::default_probe_wavelength(),
            density_factor: Self::default_density_factor(),
            em_fraction: Self::default_em_fraction(),
            field_coefficient: Self::default_field_coefficient(),
        }
    }
}

/// Complete configuration of the force model for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelConfig {
    /// Fundamental constants.
    #[serde(default)]
    pub constants: PhysicalConstants,
    /// Correction chain literals.
    #[serde(default)]
    pub correction: CorrectionParams,
}

impl ModelConfig {
    /// Checks that every constant is finite and strictly positive and that
    /// every correction literal is finite and non-negative.
    pub fn validate(&self) -> Result<(), WfError> {
        let positive = [
            ("speed_of_light", self.constants.speed_of_light),
            ("planck", self.constants.planck),
            ("gravitational", self.constants.gravitational),
            ("vacuum_permittivity", self.constants.vacuum_permittivity),
            ("fine_structure", self.constants.fine_structure),
            ("probe_wavelength", self.correction.probe_wavelength),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(config_error(name, value, "must be finite and > 0"));
            }
        }
        let non_negative = [
            ("density_factor", self.correction.density_factor),
            ("em_fraction", self.correction.em_fraction),
            ("field_coefficient", self.correction.field_coefficient),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(config_error(name, value, "must be finite and >= 0"));
            }
        }
        Ok(())
    }
}

fn config_error(name: &str, value: f64, requirement: &str) -> WfError {
    WfError::Config(
        ErrorInfo::new("invalid-model-config", format!("{name} {requirement}"))
            .with_context("parameter", name)
            .with_context("value", value.to_string()),
    )
}
