//! Wavelength-corrected gravitational force pipeline.
//!
//! Stages run strictly in order: rest energy to wavelength, resonance against
//! a probe wavelength, blended propagation speed, induced field energy,
//! suppressed correction force, and finally the sum with the Newtonian
//! baseline.

#![deny(missing_docs)]

pub mod compose;
pub mod corrector;
pub mod field;
pub mod resonance;
pub mod velocity;
pub mod wavelength;

pub use compose::{compose_force, newton_force, ForceBreakdown};
pub use corrector::{correction, CorrectionTerms, FieldTrace};
pub use field::gravitational_field;
pub use resonance::{resonance_factor, Resonance};
pub use velocity::{blended_speed, velocity_deficit};
pub use wavelength::{rest_energy, wavelength_from_energy, PhysicalObject};
