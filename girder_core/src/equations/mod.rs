//! # Structural Mechanics Equations
//!
//! Pointwise closed-form formulas used by the load-case evaluators.
//! Keeping them in one place makes them easy to check against a
//! textbook table.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (reactions, shear, moment)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Reactions**: Positive upward (resisting gravity)

pub mod beam;

pub use beam::{
    point_load_moment,
    point_load_reactions,
    point_load_shear,
    triangular_load_max_moment,
    triangular_load_moment,
    triangular_load_reactions,
    triangular_load_shear,
    uniform_load_moment,
    uniform_load_reactions,
    uniform_load_shear,
};
