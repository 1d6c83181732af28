//! Reference scenario table spanning particle to astronomical scales.

use crate::scenario::Scenario;

/// Proton rest mass (kg), CODATA 2018.
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;
/// Electron rest mass (kg), CODATA 2018.
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;
/// Joules per electron-volt as used for the tabulated rest energies.
pub const ELECTRON_VOLT: f64 = 1.602e-19;
/// Electron rest energy, 0.511 MeV.
pub const ELECTRON_REST_ENERGY: f64 = 0.511e6 * ELECTRON_VOLT;
/// Proton rest energy, 938.3 MeV.
pub const PROTON_REST_ENERGY: f64 = 938.3e6 * ELECTRON_VOLT;

/// Scenario names whose full breakdown is shown by [`crate::render_text`] by default.
pub const DEFAULT_HIGHLIGHTS: [&str; 4] =
    ["Earth-Moon", "Proton-Proton", "Human-Human", "Electron-Proton"];

const TABLE: [(&str, f64, f64, f64); 30] = [
    // particle
    ("Proton-Proton", PROTON_MASS, PROTON_MASS, 1e-15),
    ("Electron-Electron", ELECTRON_MASS, ELECTRON_MASS, 1e-10),
    ("Proton-Electron", PROTON_MASS, ELECTRON_MASS, 1e-12),
    ("Neutron-Neutron", 1.675e-27, 1.675e-27, 1e-15),
    ("Muon-Muon", 1.884e-28, 1.884e-28, 1e-12),
    // atomic / molecular
    ("Hydrogen-Hydrogen", 1.674e-27, 1.674e-27, 1e-9),
    ("Carbon-Carbon", 1.994e-26, 1.994e-26, 1e-9),
    ("Molecule-Molecule", 1e-25, 1e-25, 1e-8),
    ("DNA-DNA", 1e-21, 1e-21, 1e-8),
    ("Virus-Virus", 1e-19, 1e-19, 1e-7),
    // laboratory
    ("Gram-Gram", 1e-3, 1e-3, 1e-2),
    ("Apple-Apple", 0.2, 0.2, 0.1),
    ("Book-Book", 1.0, 1.0, 0.3),
    ("Human-Human", 70.0, 70.0, 1.0),
    ("Car-Car", 1500.0, 1500.0, 10.0),
    // geological
    ("Boulder-Boulder", 1e6, 1e6, 100.0),
    ("Building-Building", 1e8, 1e8, 1000.0),
    ("Mountain-Mountain", 1e12, 1e12, 10_000.0),
    ("City-City", 1e14, 1e14, 50_000.0),
    ("Island-Island", 1e16, 1e16, 100_000.0),
    // astronomical
    ("Asteroid-Asteroid", 1e18, 1e18, 1e6),
    ("Moon-Moon", 7.342e22, 7.342e22, 3.844e8),
    ("Earth-Moon", 5.972e24, 7.342e22, 3.844e8),
    ("Earth-Earth", 5.972e24, 5.972e24, 1.496e11),
    ("Sun-Earth", 1.989e30, 5.972e24, 1.496e11),
    // mixed
    ("Human-Earth", 70.0, 5.972e24, 6.371e6),
    ("Satellite-Earth", 1000.0, 5.972e24, 7e6),
    ("Electron-Proton", ELECTRON_MASS, PROTON_MASS, 5.29e-11),
    ("Atom-Planet", 1e-26, 1e24, 1e6),
    ("Quantum-Macro", 1e-30, 1e10, 1e3),
];

/// The thirty reference scenarios in their canonical order.
pub fn reference_catalog() -> Vec<Scenario> {
    TABLE
        .iter()
        .map(|&(name, mass_a, mass_b, separation)| Scenario::new(name, mass_a, mass_b, separation))
        .collect()
}
