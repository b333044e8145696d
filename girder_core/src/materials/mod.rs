//! # Materials and Sections
//!
//! Steel grades and the rolled-section catalog used by the design search.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::materials::{ipe_catalog, SteelGrade};
//!
//! let fy = SteelGrade::S235.yield_strength_mpa();
//! let lightest = &ipe_catalog().unwrap().sections()[0];
//! println!("{} with f_y = {} MPa", lightest.name, fy);
//! ```

pub mod sections;
pub mod steel;

pub use sections::{ipe_catalog, SectionCatalog, SteelSection};
pub use steel::SteelGrade;
