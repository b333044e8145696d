//! Ultimate limit state load combination
//!
//! One fundamental combination is used for the stress check:
//!
//! ```text
//! E_d = γ_G·(G + ΔG) + γ_Q·Q      γ_G = 1.35, γ_Q = 1.5
//! ```
//!
//! The factors are fixed; they are not part of the analysis settings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;

/// Partial factor for permanent actions
pub const GAMMA_G: f64 = 1.35;

/// Partial factor for variable actions
pub const GAMMA_Q: f64 = 1.5;

/// A load combination with a factor for each load type
///
/// # Example
/// ```
/// use girder_core::loads::{LoadCombination, LoadType};
///
/// let uls = LoadCombination::fundamental();
/// assert_eq!(uls.get_factor(LoadType::SelfWeight), 1.35);
/// assert_eq!(uls.get_factor(LoadType::Moving), 1.5);
/// let e_d = uls.combine(&[(LoadType::Superimposed, 10.0), (LoadType::Moving, 10.0)]);
/// assert!((e_d - 28.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "ULS")
    pub name: String,

    /// Human-readable equation for display
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new, empty load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// The fundamental ULS combination used by the design search
    pub fn fundamental() -> Self {
        LoadType::ALL.iter().fold(
            LoadCombination::new("ULS", "1.35·(G + ΔG) + 1.5·Q"),
            |combo, &load_type| {
                let factor = if load_type.is_permanent() { GAMMA_G } else { GAMMA_Q };
                combo.with_factor(load_type, factor)
            },
        )
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Factored sum of individual load effects
    pub fn combine(&self, effects: &[(LoadType, f64)]) -> f64 {
        effects
            .iter()
            .map(|(load_type, effect)| self.get_factor(*load_type) * effect)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fundamental_factors() {
        let uls = LoadCombination::fundamental();
        assert_eq!(uls.name, "ULS");
        assert_eq!(uls.get_factor(LoadType::SelfWeight), GAMMA_G);
        assert_eq!(uls.get_factor(LoadType::Superimposed), GAMMA_G);
        assert_eq!(uls.get_factor(LoadType::Moving), GAMMA_Q);
    }

    #[test]
    fn test_missing_factor_is_zero() {
        let combo = LoadCombination::new("Dead only", "G").with_factor(LoadType::SelfWeight, 1.0);
        assert_eq!(combo.get_factor(LoadType::Moving), 0.0);
        assert_eq!(combo.combine(&[(LoadType::SelfWeight, 2.0), (LoadType::Moving, 50.0)]), 2.0);
    }

    #[test]
    fn test_combine() {
        // 1.35 * (1 + 20) + 1.5 * 30 = 28.35 + 45 = 73.35
        let uls = LoadCombination::fundamental();
        let total = uls.combine(&[
            (LoadType::SelfWeight, 1.0),
            (LoadType::Superimposed, 20.0),
            (LoadType::Moving, 30.0),
        ]);
        assert_relative_eq!(total, 73.35, epsilon = 1e-12);
    }
}
