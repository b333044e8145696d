//! # Beam Calculations
//!
//! Internal forces of a simply-supported beam and the section design search
//! built on top of them. Every calculation is a pure function of its
//! inputs:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / `*Outcome` - Results (JSON-serializable)
//! - `fn(input, ...) -> CalcResult<...>` - the calculation itself
//!
//! ## Available Calculations
//!
//! - [`sampling`] - Sample grid along the span
//! - [`load_cases`] - Uniform and triangular load evaluators
//! - [`moving_load`] - Envelope of a travelling point load
//! - [`design`] - Lightest-section search and single-section check

pub mod design;
pub mod load_cases;
pub mod moving_load;
pub mod sampling;

// Re-export commonly used types
pub use design::{check_section, evaluate_design, CandidateCheck, DesignInput, DesignOutcome, DesignResult};
pub use load_cases::{triangular_load, uniform_load, InternalForces};
pub use moving_load::{moving_load_envelope, sweep_positions};
pub use sampling::{linspace, SampleGrid};
