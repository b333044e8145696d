//! Load types and the ULS load combination
//!
//! # Overview
//!
//! - [`LoadType`] - Self-weight (G), superimposed (ΔG) and moving (Q) loads
//! - [`LoadCombination`] - Partial factors applied to each load type
//!
//! # Example
//!
//! ```
//! use girder_core::loads::{LoadCombination, LoadType, GAMMA_G, GAMMA_Q};
//!
//! let uls = LoadCombination::fundamental();
//! assert_eq!(uls.get_factor(LoadType::Superimposed), GAMMA_G);
//! assert_eq!(uls.get_factor(LoadType::Moving), GAMMA_Q);
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{LoadCombination, GAMMA_G, GAMMA_Q};
pub use load_types::LoadType;
