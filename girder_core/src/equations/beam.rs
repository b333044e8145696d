//! # Simply-Supported Beam Formulas
//!
//! Closed-form internal forces for a simply-supported beam with a pin at
//! the left support (x = 0) and a roller at the right support (x = L).
//!
//! ## Notation
//!
//! - `l` = Span length (m)
//! - `x` = Position along beam from left support (m)
//! - `a` = Point load position from left support (m)
//! - `p` = Point load magnitude (kN)
//! - `w` = Uniform load intensity (kN/m)
//! - `w_max` = Peak intensity of a triangular load at x = L (kN/m)
//! - `R1` = Left reaction, `R2` = Right reaction
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Shear: Positive when left side up relative to right
//! - Reactions: Positive upward
//!
//! Positions outside `[0, L]` are not checked; callers pass in-span samples.

// =============================================================================
// UNIFORM LOAD FORMULAS
// =============================================================================

/// Reactions for a full-span uniform load w on span L
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓  w
///    ─────────────────
///    △               △
///   R1 ←─────L─────→ R2
/// ```
///
/// - R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Shear at x for a full-span uniform load
///
/// - V(x) = wL/2 - wx
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = uniform_load_reactions(w, l);
    r1 - w * x
}

/// Moment at x for a full-span uniform load
///
/// - M(x) = (wx/2)(L - x)
/// - M_max = wL²/8 at x = L/2
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    (w * x / 2.0) * (l - x)
}

// =============================================================================
// TRIANGULAR LOAD FORMULAS
// Load rises linearly from 0 at the left support to w_max at the right support
// =============================================================================

/// Reactions for a triangular load rising from 0 (x = 0) to w_max (x = L)
///
/// ```text
///                  ↓  w_max
///              ↓ ↓ ↓
///        ↓ ↓ ↓ ↓ ↓ ↓
///    ─────────────────
///    △               △
///   R1 ←─────L─────→ R2
/// ```
///
/// Total load W = w_max·L/2 acts at the centroid 2L/3, so
/// - R1 = w_max·L/6
/// - R2 = w_max·L/3
#[inline]
pub fn triangular_load_reactions(w_max: f64, l: f64) -> (f64, f64) {
    (w_max * l / 6.0, w_max * l / 3.0)
}

/// Shear at x for the triangular load
///
/// - V(x) = R1 - w_max·x²/(2L)
#[inline]
pub fn triangular_load_shear(w_max: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = triangular_load_reactions(w_max, l);
    r1 - w_max * x * x / (2.0 * l)
}

/// Moment at x for the triangular load
///
/// - M(x) = R1·x - w_max·x³/(6L)
/// - M_max = w_max·L²/(9√3) at x = L/√3
#[inline]
pub fn triangular_load_moment(w_max: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = triangular_load_reactions(w_max, l);
    r1 * x - w_max * x.powi(3) / (6.0 * l)
}

/// Peak moment of the triangular load, w_max·L²/(9√3)
#[inline]
pub fn triangular_load_max_moment(w_max: f64, l: f64) -> f64 {
    w_max * l * l / (9.0 * 3.0_f64.sqrt())
}

// =============================================================================
// POINT LOAD FORMULAS
// Concentrated load P at distance 'a' from the left support
// =============================================================================

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Shear at x for point load P at position a
///
/// - V(x) = R1       for x ≤ a
/// - V(x) = R1 - P   for x > a
///
/// A sample exactly under the load takes the left-hand value.
#[inline]
pub fn point_load_shear(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1
    } else {
        r1 - p
    }
}

/// Moment at x for point load P at position a
///
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
///
/// Maximum moment occurs under the load, Pa(L-a)/L, which peaks at PL/4
/// when the load sits at midspan.
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_uniform_load() {
        // 6 m span, 10 kN/m
        let (r1, r2) = uniform_load_reactions(10.0, 6.0);
        assert_relative_eq!(r1, 30.0);
        assert_relative_eq!(r2, 30.0);

        assert_relative_eq!(uniform_load_shear(10.0, 6.0, 0.0), 30.0);
        assert_abs_diff_eq!(uniform_load_shear(10.0, 6.0, 3.0), 0.0);
        assert_relative_eq!(uniform_load_shear(10.0, 6.0, 6.0), -30.0);

        // wL²/8 = 10 * 36 / 8 = 45
        assert_relative_eq!(uniform_load_moment(10.0, 6.0, 3.0), 45.0);
        assert_eq!(uniform_load_moment(10.0, 6.0, 0.0), 0.0);
        assert_eq!(uniform_load_moment(10.0, 6.0, 6.0), 0.0);
    }

    #[test]
    fn test_triangular_load_reactions() {
        // 6 m span, 12 kN/m peak: total 36 kN, R1 = 12, R2 = 24
        let (r1, r2) = triangular_load_reactions(12.0, 6.0);
        assert_relative_eq!(r1, 12.0);
        assert_relative_eq!(r2, 24.0);
        assert_relative_eq!(r1 + r2, 12.0 * 6.0 / 2.0);

        // Shear at the right support equals -R2
        assert_relative_eq!(triangular_load_shear(12.0, 6.0, 6.0), -24.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triangular_load_moment() {
        let l = 6.0;
        assert_eq!(triangular_load_moment(12.0, l, 0.0), 0.0);
        assert_abs_diff_eq!(triangular_load_moment(12.0, l, l), 0.0, epsilon = 1e-12);

        let x_peak = l / 3.0_f64.sqrt();
        assert_relative_eq!(
            triangular_load_moment(12.0, l, x_peak),
            triangular_load_max_moment(12.0, l),
            epsilon = 1e-12
        );
        // Shear vanishes at the peak
        assert_abs_diff_eq!(triangular_load_shear(12.0, l, x_peak), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_load() {
        // 10 m span, 100 kN at 3 m: R1 = 70, R2 = 30
        let (r1, r2) = point_load_reactions(100.0, 3.0, 10.0);
        assert_relative_eq!(r1, 70.0);
        assert_relative_eq!(r2, 30.0);

        assert_relative_eq!(point_load_shear(100.0, 3.0, 10.0, 3.0), 70.0);
        assert_relative_eq!(point_load_shear(100.0, 3.0, 10.0, 3.5), -30.0);

        // Under the load: R1 * a = 210
        assert_relative_eq!(point_load_moment(100.0, 3.0, 10.0, 3.0), 210.0);
        assert_abs_diff_eq!(point_load_moment(100.0, 3.0, 10.0, 10.0), 0.0, epsilon = 1e-12);

        // Midspan: PL/4
        assert_relative_eq!(point_load_moment(100.0, 5.0, 10.0, 5.0), 250.0);
    }

    #[test]
    fn test_point_load_at_supports() {
        // Load on the left support goes straight into R1
        assert_relative_eq!(point_load_shear(50.0, 0.0, 4.0, 0.0), 50.0);
        assert_relative_eq!(point_load_shear(50.0, 0.0, 4.0, 1.0), 0.0);
        assert_eq!(point_load_moment(50.0, 0.0, 4.0, 2.0), 0.0);

        // Load on the right support: no internal moment anywhere
        assert_eq!(point_load_moment(50.0, 4.0, 4.0, 2.0), 0.0);
    }
}
