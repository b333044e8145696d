//! # Unit Types
//!
//! Lightweight newtype wrappers for the SI units used in beam design.
//! They serialize as bare numbers and carry the two unit conversions of the
//! design check (self-weight and bending stress).
//!
//! ## Units
//!
//! - Line load: kilonewtons per metre (kN/m)
//! - Moment: kilonewton-metres (kNm)
//! - Stress: megapascals (MPa = N/mm²)
//! - Section modulus: cubic centimetres (cm³)
//! - Mass per length: kilograms per metre (kg/m)
//!
//! ## Example
//!
//! ```rust
//! use girder_core::units::{CubicCentimeters, KgPerMeter, KiloNewtonMeters};
//!
//! let self_weight = KgPerMeter(36.1).to_line_load(9.81);
//! assert!((self_weight.0 - 0.354).abs() < 1e-3);
//!
//! let stress = KiloNewtonMeters(90.0).bending_stress(CubicCentimeters(429.0));
//! assert!((stress.0 - 209.8).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

/// Newtons per kilonewton
const N_PER_KN: f64 = 1000.0;

/// kNm / cm³ to N/mm²: 1 kNm = 10⁶ Nmm, 1 cm³ = 10³ mm³
const KNM_PER_CM3_TO_MPA: f64 = 1000.0;

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerMeter(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Elastic section modulus in cubic centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCentimeters(pub f64);

/// Mass per unit length in kilograms per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerMeter(pub f64);

impl KgPerMeter {
    /// Weight of the member as a line load: m·g / 1000 (kN/m)
    pub fn to_line_load(self, gravity_m_per_s2: f64) -> KnPerMeter {
        KnPerMeter(self.0 * gravity_m_per_s2 / N_PER_KN)
    }
}

impl KiloNewtonMeters {
    /// Elastic bending stress σ = M / W
    pub fn bending_stress(self, modulus: CubicCentimeters) -> Megapascals {
        Megapascals(self.0 / modulus.0 * KNM_PER_CM3_TO_MPA)
    }
}

impl Megapascals {
    /// Utilization of this stress against a resistance (σ_Ed / f_y)
    pub fn ratio_to(self, resistance: Megapascals) -> f64 {
        self.0 / resistance.0
    }
}

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(KnPerMeter);
impl_value!(KiloNewtonMeters);
impl_value!(Megapascals);
impl_value!(CubicCentimeters);
impl_value!(KgPerMeter);
