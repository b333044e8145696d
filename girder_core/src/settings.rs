//! # Analysis Settings
//!
//! Numerical knobs of an evaluation run: how finely the span is sampled,
//! how finely the moving load is swept, and the gravitational constant used
//! for self-weight. Partial safety factors are not settings; they
//! are fixed constants in [`loads`](crate::loads).
//!
//! Settings deserialize from TOML with every field optional:
//!
//! ```toml
//! sample_count = 400
//! sweeps_per_meter = 20.0
//! ```
//!
//! ## Example
//!
//! ```rust
//! use girder_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::from_toml_str("sweeps_per_meter = 20.0", "inline").unwrap();
//! assert_eq!(settings.sample_count, 200);
//! assert_eq!(settings.sweeps_per_meter, 20.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Default number of sample positions along the span
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Default moving-load sweep resolution (positions per metre)
pub const DEFAULT_SWEEPS_PER_METER: f64 = 10.0;

/// Standard gravity used for self-weight (m/s²)
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Upper limit on sample positions along the span
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Upper limit on moving-load stops, `floor(L·r) + 1`, for one run
pub const MAX_SWEEP_POSITIONS: usize = 100_000;

/// Settings for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of sample positions, including both supports
    pub sample_count: usize,

    /// Moving-load sweep positions per metre of span
    pub sweeps_per_meter: f64,

    /// Gravitational acceleration (m/s²)
    pub gravity_m_per_s2: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sweeps_per_meter: DEFAULT_SWEEPS_PER_METER,
            gravity_m_per_s2: DEFAULT_GRAVITY,
        }
    }
}

impl AnalysisSettings {
    /// Validate settings.
    pub fn validate(&self) -> CalcResult<()> {
        if self.sample_count < 2 {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                "At least two samples are needed to cover both supports",
            ));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                format!("At most {} samples are supported", MAX_SAMPLE_COUNT),
            ));
        }
        require_positive("sweeps_per_meter", self.sweeps_per_meter)?;
        require_positive("gravity_m_per_s2", self.gravity_m_per_s2)?;
        Ok(())
    }

    /// Number of moving-load stops for `span_m`, checked against
    /// [`MAX_SWEEP_POSITIONS`].
    ///
    /// The count is formed in floating point, so huge spans are rejected
    /// instead of wrapping.
    pub fn sweep_count(&self, span_m: f64) -> CalcResult<usize> {
        let count = (span_m * self.sweeps_per_meter).floor().max(0.0) + 1.0;
        if !(count <= MAX_SWEEP_POSITIONS as f64) {
            return Err(CalcError::invalid_input(
                "sweeps_per_meter",
                self.sweeps_per_meter.to_string(),
                format!(
                    "A span of {} m needs {} load positions, at most {} are supported",
                    span_m, count, MAX_SWEEP_POSITIONS
                ),
            ));
        }
        Ok(count as usize)
    }

    /// Set the sample count (builder pattern)
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the sweep resolution (builder pattern)
    pub fn with_sweeps_per_meter(mut self, sweeps_per_meter: f64) -> Self {
        self.sweeps_per_meter = sweeps_per_meter;
        self
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str, source_name: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings =
            toml::from_str(text).map_err(|e| CalcError::parse_error(source_name, e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}
