#![deny(missing_docs)]
#![doc = "Core error surface, physical constants and configuration for the wavefield harness."]

pub mod constants;
pub mod errors;
pub mod provenance;
pub mod rng;

pub use constants::{CorrectionParams, ModelConfig, PhysicalConstants};
pub use errors::{ensure_finite, ErrorInfo, WfError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
