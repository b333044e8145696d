//! Load type definitions
//!
//! The three actions on a girder: its own weight, the superimposed
//! finishing load, and a single travelling point load.

use serde::{Deserialize, Serialize};

/// Load types acting on the beam
///
/// # Example
/// ```
/// use girder_core::loads::LoadType;
///
/// assert_eq!(LoadType::SelfWeight.code(), "G");
/// assert!(LoadType::Superimposed.is_permanent());
/// assert!(!LoadType::Moving.is_permanent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// G - Self-weight of the section, uniform over the span
    SelfWeight,
    /// ΔG - Superimposed dead load, triangular from 0 at the left support
    Superimposed,
    /// Q - Travelling point load (imposed, variable)
    Moving,
}

impl LoadType {
    /// All load types in combination order
    pub const ALL: [LoadType; 3] = [LoadType::SelfWeight, LoadType::Superimposed, LoadType::Moving];

    /// Symbol used in combination equations
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::SelfWeight => "G",
            LoadType::Superimposed => "ΔG",
            LoadType::Moving => "Q",
        }
    }

    /// Human readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::SelfWeight => "Self-weight",
            LoadType::Superimposed => "Superimposed dead load (triangular)",
            LoadType::Moving => "Moving point load",
        }
    }

    /// Permanent actions take γ_G, variable ones γ_Q
    pub fn is_permanent(&self) -> bool {
        matches!(self, LoadType::SelfWeight | LoadType::Superimposed)
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
