//! Load-case evaluators
//!
//! Each evaluator maps a span, a load magnitude and a set of sample
//! positions to the bending moment and shear at those positions. They are
//! pure and do not validate their inputs; positions outside `[0, L]` give
//! formula values with no physical meaning.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::calculations::load_cases::uniform_load;
//!
//! let forces = uniform_load(6.0, 10.0, &[0.0, 3.0, 6.0]);
//! assert_eq!(forces.moment_knm, vec![0.0, 45.0, 0.0]);
//! assert_eq!(forces.shear_kn, vec![30.0, 0.0, -30.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    triangular_load_moment, triangular_load_shear, uniform_load_moment, uniform_load_shear,
};

/// Bending moment and shear sampled along the span
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    /// Moment at each sample position (kNm)
    pub moment_knm: Vec<f64>,

    /// Shear at each sample position (kN)
    pub shear_kn: Vec<f64>,
}

impl InternalForces {
    /// Evaluate `moment` and `shear` at every position.
    pub fn sample<M, V>(positions: &[f64], moment: M, shear: V) -> Self
    where
        M: Fn(f64) -> f64,
        V: Fn(f64) -> f64,
    {
        InternalForces {
            moment_knm: positions.iter().map(|&x| moment(x)).collect(),
            shear_kn: positions.iter().map(|&x| shear(x)).collect(),
        }
    }

    /// All-zero forces for `len` samples
    pub fn zeros(len: usize) -> Self {
        InternalForces {
            moment_knm: vec![0.0; len],
            shear_kn: vec![0.0; len],
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.moment_knm.len()
    }

    /// True when no samples are held
    pub fn is_empty(&self) -> bool {
        self.moment_knm.is_empty()
    }

    /// Largest moment magnitude
    pub fn max_abs_moment(&self) -> f64 {
        self.moment_knm.iter().fold(0.0, |acc, m| acc.max(m.abs()))
    }

    /// Largest shear magnitude
    pub fn max_abs_shear(&self) -> f64 {
        self.shear_kn.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

/// Internal forces of a full-span uniform load `q` (kN/m).
///
/// - V(x) = qL/2 - qx
/// - M(x) = (qx/2)(L - x)
pub fn uniform_load(span_m: f64, q_kn_per_m: f64, positions: &[f64]) -> InternalForces {
    InternalForces::sample(
        positions,
        |x| uniform_load_moment(q_kn_per_m, span_m, x),
        |x| uniform_load_shear(q_kn_per_m, span_m, x),
    )
}

/// Internal forces of a triangular load rising from 0 at x = 0 to
/// `q_max` (kN/m) at x = L.
///
/// - V(x) = q_max·L/6 - q_max·x²/(2L)
/// - M(x) = q_max·L/6·x - q_max·x³/(6L)
pub fn triangular_load(span_m: f64, q_max_kn_per_m: f64, positions: &[f64]) -> InternalForces {
    InternalForces::sample(
        positions,
        |x| triangular_load_moment(q_max_kn_per_m, span_m, x),
        |x| triangular_load_shear(q_max_kn_per_m, span_m, x),
    )
}
