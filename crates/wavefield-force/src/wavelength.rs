//! Rest energy and characteristic wavelength of a mass.

use serde::{Deserialize, Serialize};
use wavefield_core::PhysicalConstants;

/// Characteristic wavelength `h·c / energy`.
///
/// Non-positive energies map to `0.0`, the vacuum case, rather than an error.
pub fn wavelength_from_energy(energy: f64, constants: &PhysicalConstants) -> f64 {
    if energy > 0.0 {
        constants.hc() / energy
    } else {
        0.0
    }
}

/// Rest energy `m·c²`.
pub fn rest_energy(mass: f64, constants: &PhysicalConstants) -> f64 {
    mass * constants.speed_of_light * constants.speed_of_light
}

/// A mass with its derived rest energy and wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalObject {
    /// Mass in kilograms.
    pub mass: f64,
    /// Rest energy in joules.
    pub energy: f64,
    /// Characteristic wavelength in metres.
    pub wavelength: f64,
}

impl PhysicalObject {
    /// Builds the object for a literal mass.
    pub fn from_mass(mass: f64, constants: &PhysicalConstants) -> Self {
        let energy = rest_energy(mass, constants);
        Self {
            mass,
            energy,
            wavelength: wavelength_from_energy(energy, constants),
        }
    }

    /// Builds the object for a known rest energy, recovering `m = E/c²`.
    pub fn from_energy(energy: f64, constants: &PhysicalConstants) -> Self {
        let c = constants.speed_of_light;
        Self {
            mass: energy / (c * c),
            energy,
            wavelength: wavelength_from_energy(energy, constants),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacuum_has_zero_wavelength() {
        let constants = PhysicalConstants::default();
        assert_eq!(wavelength_from_energy(0.0, &constants), 0.0);
        assert_eq!(wavelength_from_energy(-1.0, &constants), 0.0);
    }

    #[test]
    fn negative_mass_object_has_zero_wavelength() {
        let constants = PhysicalConstants::default();
        let object = PhysicalObject::from_mass(-1.0, &constants);
        assert!(object.energy < 0.0);
        assert_eq!(object.wavelength, 0.0);
    }
}
