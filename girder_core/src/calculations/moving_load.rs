//! Moving point-load envelope
//!
//! A single point load `Q` travels across the span. Its position is
//! discretized into `floor(L·r) + 1` evenly spaced stops over `[0, L]`, where
//! `r` is the sweep resolution in stops per metre. At every sample position
//! the envelope keeps the largest |M| and |V| seen over all stops.
//!
//! The maxima are pointwise: the envelope at two different positions
//! generally comes from two different load positions. Accuracy is bounded by
//! the stop spacing; the peak moment approaches the exact QL/4 as `r` grows.
//!
//! Cost is O(stops × samples). The stop count is capped by
//! [`MAX_SWEEP_POSITIONS`](crate::settings::MAX_SWEEP_POSITIONS); a span and
//! resolution that would exceed it are rejected.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::calculations::moving_load::moving_load_envelope;
//! use girder_core::calculations::sampling::linspace;
//! use girder_core::settings::AnalysisSettings;
//!
//! let positions = linspace(0.0, 4.0, 41);
//! let envelope = moving_load_envelope(4.0, 10.0, &positions, &AnalysisSettings::default()).unwrap();
//! // Midspan sample, load stop exactly at midspan: QL/4
//! assert!((envelope.moment_knm[20] - 10.0).abs() < 1e-9);
//! ```

use crate::calculations::load_cases::InternalForces;
use crate::calculations::sampling::linspace;
use crate::equations::beam::{point_load_moment, point_load_shear};
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// Load stops for a sweep over a span at the resolution in `settings`.
///
/// Always contains at least one stop (x = 0).
pub fn sweep_positions(span_m: f64, settings: &AnalysisSettings) -> CalcResult<Vec<f64>> {
    let count = settings.sweep_count(span_m)?;
    Ok(linspace(0.0, span_m, count))
}

/// Envelope of |M| and |V| for point load `load_kn` swept over the span.
///
/// Every value in the result is non-negative. A zero load gives all zeros.
pub fn moving_load_envelope(
    span_m: f64,
    load_kn: f64,
    positions: &[f64],
    settings: &AnalysisSettings,
) -> CalcResult<InternalForces> {
    let mut envelope = InternalForces::zeros(positions.len());

    for a in sweep_positions(span_m, settings)? {
        for (i, &x) in positions.iter().enumerate() {
            let m = point_load_moment(load_kn, a, span_m, x).abs();
            let v = point_load_shear(load_kn, a, span_m, x).abs();
            envelope.moment_knm[i] = envelope.moment_knm[i].max(m);
            envelope.shear_kn[i] = envelope.shear_kn[i].max(v);
        }
    }

    Ok(envelope)
}
