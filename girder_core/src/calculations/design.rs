//! # Section Design Search
//!
//! Picks the lightest section from a catalog whose elastic bending stress
//! under the ULS combination stays within the yield strength.
//!
//! For every candidate, lightest first:
//!
//! 1. Self-weight g_k = m·g/1000 (kN/m)
//! 2. Internal forces of g_k (uniform), ΔG (triangular) and Q (moving
//!    envelope) on a shared sample grid
//! 3. M_Ed(x) = 1.35·(M_G + M_ΔG) + 1.5·M_Q
//!    V_Ed(x) = 1.35·(|V_G| + |V_ΔG|) + 1.5·V_Q
//! 4. σ_Ed = max M_Ed / W_y
//! 5. η = σ_Ed / f_y, accepted when η ≤ 1.0
//!
//! The first accepted candidate ends the search. If none is accepted the
//! outcome says so explicitly; no fallback section is ever returned.
//!
//! The shear line adds the enveloped moving-load shear to the pointwise
//! permanent shears. That mixes a worst case over all load positions with
//! values of a single state, which is conservative but not a matched worst
//! case.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::calculations::design::{evaluate_design, DesignInput};
//! use girder_core::materials::{ipe_catalog, SteelGrade};
//! use girder_core::settings::AnalysisSettings;
//!
//! let input = DesignInput::new(5.86, 16.0, 19.0, SteelGrade::S235);
//! let outcome = evaluate_design(&input, ipe_catalog().unwrap(), &AnalysisSettings::default()).unwrap();
//!
//! let result = outcome.selected().expect("an IPE section should fit");
//! assert_eq!(result.section.name, "IPE 270");
//! assert!(result.utilization <= 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculations::load_cases::{triangular_load, uniform_load, InternalForces};
use crate::calculations::moving_load::moving_load_envelope;
use crate::calculations::sampling::SampleGrid;
use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::loads::{LoadCombination, LoadType};
use crate::materials::{SectionCatalog, SteelGrade, SteelSection};
use crate::settings::AnalysisSettings;
use crate::units::{KiloNewtonMeters, Megapascals};

/// Input parameters for a beam design run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 5.86,
///   "superimposed_peak_kn_per_m": 16.0,
///   "moving_load_kn": 19.0,
///   "yield_strength_mpa": 235.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Span between supports (m)
    pub span_m: f64,

    /// Peak of the triangular superimposed dead load at the right support (kN/m)
    pub superimposed_peak_kn_per_m: f64,

    /// Magnitude of the travelling point load (kN)
    pub moving_load_kn: f64,

    /// Yield strength of the steel (MPa)
    pub yield_strength_mpa: f64,
}

impl DesignInput {
    /// Create an input using the nominal yield strength of `grade`
    pub fn new(span_m: f64, superimposed_peak_kn_per_m: f64, moving_load_kn: f64, grade: SteelGrade) -> Self {
        DesignInput {
            span_m,
            superimposed_peak_kn_per_m,
            moving_load_kn,
            yield_strength_mpa: grade.yield_strength_mpa(),
        }
    }

    /// Override the yield strength (builder pattern)
    pub fn with_yield_strength(mut self, yield_strength_mpa: f64) -> Self {
        self.yield_strength_mpa = yield_strength_mpa;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_non_negative("superimposed_peak_kn_per_m", self.superimposed_peak_kn_per_m)?;
        require_non_negative("moving_load_kn", self.moving_load_kn)?;
        require_positive("yield_strength_mpa", self.yield_strength_mpa)?;
        Ok(())
    }
}

/// Full result of checking one section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "section": { "name": "IPE 270", "mass_kg_per_m": 36.1, "wy_cm3": 429.0 },
///   "combination": "1.35·(G + ΔG) + 1.5·Q",
///   "self_weight_kn_per_m": 0.354,
///   "max_moment_knm": 90.69,
///   "max_moment_position_m": 3.24,
///   "max_shear_kn": 71.60,
///   "max_shear_position_m": 5.86,
///   "stress_mpa": 211.4,
///   "yield_strength_mpa": 235.0,
///   "utilization": 0.90,
///   "positions_m": [0.0, 0.0294, "..."],
///   "moment_knm": [0.0, 1.29, "..."],
///   "shear_kn": [51.2, 51.1, "..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// The checked section
    pub section: SteelSection,

    /// Equation of the load combination used
    pub combination: String,

    /// Self-weight g_k of the section (kN/m), for hand checks
    pub self_weight_kn_per_m: f64,

    /// Governing design moment max M_Ed (kNm)
    pub max_moment_knm: f64,

    /// Position of the governing moment (m from left support)
    pub max_moment_position_m: f64,

    /// Governing design shear max V_Ed (kN)
    pub max_shear_kn: f64,

    /// Position of the governing shear (m from left support)
    pub max_shear_position_m: f64,

    /// Bending stress σ_Ed = M_Ed / W_y (MPa)
    pub stress_mpa: f64,

    /// Yield strength f_y the stress was compared with (MPa)
    pub yield_strength_mpa: f64,

    /// Utilization η = σ_Ed / f_y
    ///
    /// Must be ≤ 1.0 to pass.
    pub utilization: f64,

    /// Sample positions (m)
    pub positions_m: Vec<f64>,

    /// Design moment M_Ed at each sample (kNm)
    pub moment_knm: Vec<f64>,

    /// Design shear V_Ed at each sample (kN)
    pub shear_kn: Vec<f64>,
}

impl DesignResult {
    /// Check if the stress check passes (η ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.utilization <= 1.0
    }

    /// Utilization in percent
    pub fn utilization_percent(&self) -> f64 {
        self.utilization * 100.0
    }
}

/// One line of the search log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateCheck {
    /// Section name
    pub name: String,

    /// Mass per metre (kg/m)
    pub mass_kg_per_m: f64,

    /// Governing design moment (kNm)
    pub max_moment_knm: f64,

    /// Bending stress (MPa)
    pub stress_mpa: f64,

    /// Utilization η
    pub utilization: f64,

    /// Whether η ≤ 1.0
    pub passes: bool,
}

impl From<&DesignResult> for CandidateCheck {
    fn from(result: &DesignResult) -> Self {
        CandidateCheck {
            name: result.section.name.clone(),
            mass_kg_per_m: result.section.mass_kg_per_m,
            max_moment_knm: result.max_moment_knm,
            stress_mpa: result.stress_mpa,
            utilization: result.utilization,
            passes: result.passes(),
        }
    }
}

/// Outcome of a design search.
///
/// Serializes with a `status` discriminator:
///
/// ```json
/// { "status": "NoFeasibleSection", "candidates_checked": 18, "lowest_utilization": 1.42, "checks": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum DesignOutcome {
    /// The lightest passing section was found
    Selected {
        /// Result of the selected section
        result: DesignResult,
        /// Every candidate checked, in search order, ending with the selected one
        checks: Vec<CandidateCheck>,
    },

    /// No section in the catalog passes the check
    NoFeasibleSection {
        /// Number of candidates evaluated (the whole catalog)
        candidates_checked: usize,
        /// Lowest utilization seen, `None` for an empty catalog
        lowest_utilization: Option<f64>,
        /// Every candidate checked, in search order
        checks: Vec<CandidateCheck>,
    },
}

impl DesignOutcome {
    /// The selected result, if any
    pub fn selected(&self) -> Option<&DesignResult> {
        match self {
            DesignOutcome::Selected { result, .. } => Some(result),
            DesignOutcome::NoFeasibleSection { .. } => None,
        }
    }

    /// Consume the outcome, keeping the selected result
    pub fn into_selected(self) -> Option<DesignResult> {
        match self {
            DesignOutcome::Selected { result, .. } => Some(result),
            DesignOutcome::NoFeasibleSection { .. } => None,
        }
    }

    /// True when a section was selected
    pub fn is_feasible(&self) -> bool {
        matches!(self, DesignOutcome::Selected { .. })
    }

    /// Search log in order
    pub fn checks(&self) -> &[CandidateCheck] {
        match self {
            DesignOutcome::Selected { checks, .. } => checks,
            DesignOutcome::NoFeasibleSection { checks, .. } => checks,
        }
    }
}

/// Load effects that do not depend on the candidate section.
struct SharedEffects {
    grid: SampleGrid,
    superimposed: InternalForces,
    moving: InternalForces,
    combination: LoadCombination,
}

impl SharedEffects {
    fn new(input: &DesignInput, settings: &AnalysisSettings) -> CalcResult<Self> {
        let grid = SampleGrid::new(input.span_m, settings.sample_count)?;
        let superimposed = triangular_load(input.span_m, input.superimposed_peak_kn_per_m, grid.positions());
        let moving = moving_load_envelope(input.span_m, input.moving_load_kn, grid.positions(), settings)?;
        Ok(SharedEffects {
            grid,
            superimposed,
            moving,
            combination: LoadCombination::fundamental(),
        })
    }

    fn evaluate(&self, section: &SteelSection, input: &DesignInput, gravity_m_per_s2: f64) -> DesignResult {
        let positions = self.grid.positions();
        let g_k = section.self_weight(gravity_m_per_s2).value();
        let dead = uniform_load(input.span_m, g_k, positions);

        let moment_knm: Vec<f64> = (0..positions.len())
            .map(|i| {
                self.combination.combine(&[
                    (LoadType::SelfWeight, dead.moment_knm[i]),
                    (LoadType::Superimposed, self.superimposed.moment_knm[i]),
                    (LoadType::Moving, self.moving.moment_knm[i]),
                ])
            })
            .collect();

        let shear_kn: Vec<f64> = (0..positions.len())
            .map(|i| {
                self.combination.combine(&[
                    (LoadType::SelfWeight, dead.shear_kn[i].abs()),
                    (LoadType::Superimposed, self.superimposed.shear_kn[i].abs()),
                    (LoadType::Moving, self.moving.shear_kn[i]),
                ])
            })
            .collect();

        let (moment_index, max_moment_knm) = arg_max(&moment_knm);
        let (shear_index, max_shear_kn) = arg_max(&shear_kn);

        let stress = KiloNewtonMeters(max_moment_knm).bending_stress(section.modulus());
        let utilization = stress.ratio_to(Megapascals(input.yield_strength_mpa));

        DesignResult {
            section: section.clone(),
            combination: self.combination.equation.clone(),
            self_weight_kn_per_m: g_k,
            max_moment_knm,
            max_moment_position_m: positions[moment_index],
            max_shear_kn,
            max_shear_position_m: positions[shear_index],
            stress_mpa: stress.value(),
            yield_strength_mpa: input.yield_strength_mpa,
            utilization,
            positions_m: positions.to_vec(),
            moment_knm,
            shear_kn,
        }
    }
}

/// Index and value of the first maximum. The slice is never empty here.
fn arg_max(values: &[f64]) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, v)| if v > best.1 { (i, v) } else { best })
}

/// Search `catalog` for the lightest section passing the stress check.
///
/// This is a pure function: identical inputs give identical outcomes.
///
/// # Returns
///
/// * `Ok(DesignOutcome::Selected { .. })` - first passing section, lightest first
/// * `Ok(DesignOutcome::NoFeasibleSection { .. })` - nothing passes (or the catalog is empty)
/// * `Err(CalcError)` - invalid input or settings
pub fn evaluate_design(
    input: &DesignInput,
    catalog: &SectionCatalog,
    settings: &AnalysisSettings,
) -> CalcResult<DesignOutcome> {
    input.validate()?;
    settings.validate()?;

    let shared = SharedEffects::new(input, settings)?;
    let mut checks = Vec::with_capacity(catalog.len());

    for section in catalog {
        let result = shared.evaluate(section, input, settings.gravity_m_per_s2);
        let check = CandidateCheck::from(&result);
        debug!(
            section = %check.name,
            max_moment_knm = check.max_moment_knm,
            stress_mpa = check.stress_mpa,
            utilization = check.utilization,
            "checked section"
        );
        checks.push(check);

        if result.passes() {
            info!(
                section = %result.section.name,
                utilization = result.utilization,
                candidates_checked = checks.len(),
                "selected section"
            );
            return Ok(DesignOutcome::Selected { result, checks });
        }
    }

    let lowest_utilization = checks.iter().map(|c| c.utilization).reduce(f64::min);
    warn!(
        candidates_checked = checks.len(),
        lowest_utilization = ?lowest_utilization,
        "no section satisfies the stress check"
    );
    Ok(DesignOutcome::NoFeasibleSection {
        candidates_checked: checks.len(),
        lowest_utilization,
        checks,
    })
}

/// Check a single named section without searching.
///
/// Returns the full result whether or not the section passes, so a caller
/// can show why a particular profile is overstressed.
pub fn check_section(
    input: &DesignInput,
    catalog: &SectionCatalog,
    section_name: &str,
    settings: &AnalysisSettings,
) -> CalcResult<DesignResult> {
    input.validate()?;
    settings.validate()?;
    let section = catalog.lookup(section_name)?;

    let shared = SharedEffects::new(input, settings)?;
    Ok(shared.evaluate(section, input, settings.gravity_m_per_s2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::materials::ipe_catalog;
    use approx::assert_relative_eq;

    fn reference_input() -> DesignInput {
        DesignInput::new(5.86, 16.0, 19.0, SteelGrade::S235)
    }

    fn synthetic_catalog() -> SectionCatalog {
        // Governing moment for the test input is roughly 90 kNm, so at
        // 235 MPa only a modulus above ~390 cm³ passes.
        SectionCatalog::new(vec![
            SteelSection::new("Weak-1", 10.0, 100.0),
            SteelSection::new("Weak-2", 20.0, 250.0),
            SteelSection::new("Strong-3", 30.0, 500.0),
            SteelSection::new("Strong-4", 40.0, 800.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_reference_scenario_selects_ipe_270() {
        let outcome = evaluate_design(&reference_input(), ipe_catalog().unwrap(), &AnalysisSettings::default()).unwrap();
        let result = outcome.selected().unwrap();

        assert_eq!(result.section.name, "IPE 270");
        assert!(result.passes());
        assert_relative_eq!(result.utilization, 0.8996, epsilon = 1e-3);
        assert_relative_eq!(result.max_moment_knm, 90.694, epsilon = 1e-2);
        assert_relative_eq!(result.stress_mpa, result.max_moment_knm / 429.0 * 1000.0, epsilon = 1e-9);

        // IPE 80 .. IPE 270 were all checked, only the last passes
        assert_eq!(outcome.checks().len(), 10);
        assert!(outcome.checks()[..9].iter().all(|c| !c.passes));
        assert_eq!(outcome.checks()[8].name, "IPE 240");
    }

    #[test]
    fn test_higher_grade_selects_lighter_section() {
        let input = reference_input().with_yield_strength(SteelGrade::S355.yield_strength_mpa());
        let outcome = evaluate_design(&input, ipe_catalog().unwrap(), &AnalysisSettings::default()).unwrap();
        assert_eq!(outcome.selected().unwrap().section.name, "IPE 240");
    }

    #[test]
    fn test_arrays_are_aligned_with_grid() {
        let settings = AnalysisSettings::default().with_sample_count(77);
        let outcome = evaluate_design(&reference_input(), ipe_catalog().unwrap(), &settings).unwrap();
        let result = outcome.into_selected().unwrap();

        assert_eq!(result.positions_m.len(), 77);
        assert_eq!(result.moment_knm.len(), 77);
        assert_eq!(result.shear_kn.len(), 77);
        assert_eq!(result.positions_m[0], 0.0);
        assert_eq!(result.positions_m[76], 5.86);
    }

    #[test]
    fn test_design_arrays_are_non_negative() {
        let result = check_section(&reference_input(), ipe_catalog().unwrap(), "IPE 270", &AnalysisSettings::default()).unwrap();
        assert!(result.moment_knm.iter().all(|&m| m >= 0.0));
        assert!(result.shear_kn.iter().all(|&v| v >= 0.0));
        assert_eq!(result.moment_knm[0], 0.0);
    }

    #[test]
    fn test_first_passing_candidate_wins() {
        let outcome = evaluate_design(&reference_input(), &synthetic_catalog(), &AnalysisSettings::default()).unwrap();
        let result = outcome.selected().unwrap();
        assert_eq!(result.section.name, "Strong-3");
        assert_eq!(outcome.checks().len(), 3);
        assert!(!outcome.checks()[0].passes);
        assert!(!outcome.checks()[1].passes);
        assert!(outcome.checks()[2].passes);
    }

    #[test]
    fn test_search_follows_mass_not_insertion_order() {
        let catalog = SectionCatalog::new(vec![
            SteelSection::new("Heavy", 80.0, 1500.0),
            SteelSection::new("Light", 30.0, 500.0),
        ])
        .unwrap();
        let outcome = evaluate_design(&reference_input(), &catalog, &AnalysisSettings::default()).unwrap();
        assert_eq!(outcome.selected().unwrap().section.name, "Light");
    }

    #[test]
    fn test_no_feasible_section() {
        let catalog = SectionCatalog::new(vec![
            SteelSection::new("Tiny-1", 5.0, 10.0),
            SteelSection::new("Tiny-2", 6.0, 20.0),
        ])
        .unwrap();
        let outcome = evaluate_design(&reference_input(), &catalog, &AnalysisSettings::default()).unwrap();

        assert!(!outcome.is_feasible());
        assert!(outcome.selected().is_none());
        match outcome {
            DesignOutcome::NoFeasibleSection {
                candidates_checked,
                lowest_utilization,
                checks,
            } => {
                assert_eq!(candidates_checked, 2);
                assert_eq!(checks.len(), 2);
                let lowest = lowest_utilization.unwrap();
                assert!(lowest > 1.0);
                assert_eq!(lowest, checks[1].utilization);
            }
            other => panic!("expected no feasible section, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = SectionCatalog::new(Vec::new()).unwrap();
        let outcome = evaluate_design(&reference_input(), &catalog, &AnalysisSettings::default()).unwrap();
        assert_eq!(
            outcome,
            DesignOutcome::NoFeasibleSection {
                candidates_checked: 0,
                lowest_utilization: None,
                checks: Vec::new(),
            }
        );
    }

    #[test]
    fn test_zero_loads_give_self_weight_only() {
        let input = DesignInput::new(5.86, 0.0, 0.0, SteelGrade::S235);
        let outcome = evaluate_design(&input, ipe_catalog().unwrap(), &AnalysisSettings::default()).unwrap();
        let result = outcome.selected().unwrap();

        assert_eq!(result.section.name, "IPE 80");
        assert!(result.moment_knm.iter().all(|m| m.is_finite()));
        // 1.35 · g_k · L² / 8, sampled close to midspan
        let expected = 1.35 * result.self_weight_kn_per_m * 5.86 * 5.86 / 8.0;
        assert_relative_eq!(result.max_moment_knm, expected, max_relative = 1e-4);
    }

    #[test]
    fn test_shear_combination() {
        let input = reference_input();
        let settings = AnalysisSettings::default();
        let result = check_section(&input, ipe_catalog().unwrap(), "IPE 270", &settings).unwrap();

        // At x = 0: dead and triangular shears are their left reactions,
        // the moving envelope is the full load Q.
        let g_k = result.self_weight_kn_per_m;
        let expected = 1.35 * (g_k * 5.86 / 2.0 + 16.0 * 5.86 / 6.0) + 1.5 * 19.0;
        assert_relative_eq!(result.shear_kn[0], expected, epsilon = 1e-9);
    }

    #[test]
    fn test_determinism() {
        let settings = AnalysisSettings::default();
        let first = evaluate_design(&reference_input(), ipe_catalog().unwrap(), &settings).unwrap();
        let second = evaluate_design(&reference_input(), ipe_catalog().unwrap(), &settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_section_reports_failure() {
        let result = check_section(&reference_input(), ipe_catalog().unwrap(), "ipe 200", &AnalysisSettings::default()).unwrap();
        assert_eq!(result.section.name, "IPE 200");
        assert!(!result.passes());
        assert!(result.utilization_percent() > 100.0);

        let err = check_section(&reference_input(), ipe_catalog().unwrap(), "HEB 300", &AnalysisSettings::default()).unwrap_err();
        assert_eq!(err, CalcError::section_not_found("HEB 300"));
    }

    #[test]
    fn test_invalid_inputs() {
        let catalog = ipe_catalog().unwrap();
        let settings = AnalysisSettings::default();

        let cases = [
            (reference_input().with_yield_strength(0.0), "yield_strength_mpa"),
            (DesignInput::new(0.0, 16.0, 19.0, SteelGrade::S235), "span_m"),
            (DesignInput::new(-5.86, 16.0, 19.0, SteelGrade::S235), "span_m"),
            (DesignInput::new(5.86, -1.0, 19.0, SteelGrade::S235), "superimposed_peak_kn_per_m"),
            (DesignInput::new(5.86, 16.0, -19.0, SteelGrade::S235), "moving_load_kn"),
            (DesignInput::new(f64::NAN, 16.0, 19.0, SteelGrade::S235), "span_m"),
        ];

        for (input, expected_field) in cases {
            match evaluate_design(&input, catalog, &settings) {
                Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected invalid input for {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_huge_span_is_rejected_not_truncated() {
        let catalog = ipe_catalog().unwrap();
        let settings = AnalysisSettings::default();

        for span_m in [1.0e8, 1.0e19] {
            let input = DesignInput::new(span_m, 16.0, 19.0, SteelGrade::S235);
            match evaluate_design(&input, catalog, &settings) {
                Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "sweeps_per_meter"),
                other => panic!("expected sweeps_per_meter rejection for {span_m} m, got {other:?}"),
            }
            let err = check_section(&input, catalog, "IPE 270", &settings).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }

        // A coarser sweep brings a long span back under the limit
        let input = DesignInput::new(20_000.0, 0.0, 0.0, SteelGrade::S235);
        let coarse = settings.with_sweeps_per_meter(1.0).with_sample_count(11);
        assert!(evaluate_design(&input, catalog, &coarse).is_ok());
    }

    #[test]
    fn test_invalid_settings() {
        let settings = AnalysisSettings::default().with_sweeps_per_meter(-1.0);
        let err = evaluate_design(&reference_input(), ipe_catalog().unwrap(), &settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = evaluate_design(&reference_input(), &synthetic_catalog(), &AnalysisSettings::default()).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"status\":\"Selected\""));
        assert!(json.contains("\"utilization\""));

        let roundtrip: DesignOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.selected().unwrap().section.name, "Strong-3");
    }
}
