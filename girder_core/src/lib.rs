//! # girder_core - Steel Girder Design Engine
//!
//! `girder_core` computes bending moment and shear lines of a simply-supported
//! steel beam under self-weight, a triangular superimposed dead load and a
//! moving point load, and selects the lightest rolled section whose elastic
//! bending stress stays within the yield strength.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Outcomes**: "no section fits" is a result, not an error
//!
//! ## Quick Start
//!
//! ```rust
//! use girder_core::{evaluate_design, ipe_catalog, AnalysisSettings, DesignInput, SteelGrade};
//!
//! let input = DesignInput::new(5.86, 16.0, 19.0, SteelGrade::S235);
//! let outcome = evaluate_design(&input, ipe_catalog()?, &AnalysisSettings::default())?;
//!
//! if let Some(result) = outcome.selected() {
//!     println!("{}: η = {:.3}", result.section.name, result.utilization);
//! }
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&outcome)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Sampling, load cases, moving-load envelope, design search
//! - [`equations`] - Closed-form beam formulas
//! - [`loads`] - Load types and the ULS combination
//! - [`materials`] - Steel grades and section catalogs
//! - [`settings`] - Numerical settings of a run
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Loading settings and catalogs from disk

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{check_section, evaluate_design, DesignInput, DesignOutcome, DesignResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_catalog, load_settings};
pub use materials::{ipe_catalog, SectionCatalog, SteelGrade, SteelSection};
pub use settings::AnalysisSettings;
