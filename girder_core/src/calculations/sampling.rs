//! Sample grid along the span
//!
//! Every load case of one evaluation is sampled on the same grid so that
//! per-sample arrays can be superposed index by index.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::settings::MAX_SAMPLE_COUNT;

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// The last value is pinned to `end` so the far support is hit exactly.
/// `n == 1` yields `[start]`, `n == 0` an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Uniformly spaced sample positions covering `[0, L]`
///
/// Deserialization rebuilds the grid through [`SampleGrid::new`], so a
/// stored grid with fewer than two positions is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredGrid")]
pub struct SampleGrid {
    /// Span length (m)
    pub span_m: f64,

    positions: Vec<f64>,
}

impl SampleGrid {
    /// Build a grid of `count` positions from 0 to `span_m`.
    pub fn new(span_m: f64, count: usize) -> CalcResult<Self> {
        require_positive("span_m", span_m)?;
        if !(2..=MAX_SAMPLE_COUNT).contains(&count) {
            return Err(CalcError::invalid_input(
                "sample_count",
                count.to_string(),
                format!("Between 2 and {} samples are needed to cover both supports", MAX_SAMPLE_COUNT),
            ));
        }
        Ok(SampleGrid {
            span_m,
            positions: linspace(0.0, span_m, count),
        })
    }

    /// Sample positions (m)
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a validated grid
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Spacing between neighbouring samples (m)
    pub fn spacing(&self) -> f64 {
        self.span_m / (self.positions.len() - 1) as f64
    }
}

/// Serialized form of a grid
#[derive(Deserialize)]
struct StoredGrid {
    span_m: f64,
    positions: Vec<f64>,
}

impl TryFrom<StoredGrid> for SampleGrid {
    type Error = CalcError;

    fn try_from(stored: StoredGrid) -> CalcResult<Self> {
        SampleGrid::new(stored.span_m, stored.positions.len())
    }
}
