//! # Girder CLI Application
//!
//! Command line front end for the steel girder design engine. Collects the
//! span and loads, runs the design search (or a single-section check) and
//! prints the result as a summary with a sampled M/V table, or as JSON.
//!
//! ```text
//! girder --span 5.86 --superimposed 16 --moving 19 --grade S235
//! girder --span 7.2 --fy 275 --catalog hea_sections.toml --json
//! girder --check "IPE 240"
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use girder_core::calculations::design::{check_section, evaluate_design, DesignInput, DesignOutcome, DesignResult};
use girder_core::errors::{CalcError, CalcResult};
use girder_core::file_io::{load_catalog, load_settings};
use girder_core::loads::{LoadCombination, LoadType};
use girder_core::materials::{ipe_catalog, SectionCatalog, SteelGrade};
use girder_core::settings::AnalysisSettings;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "girder",
    about = "Selects the lightest steel section for a simply supported girder"
)]
struct Options {
    /// Span L between supports (m)
    #[structopt(long, default_value = "5.86")]
    span: f64,

    /// Peak of the triangular superimposed dead load Δg at the right support (kN/m)
    #[structopt(long, default_value = "16.0")]
    superimposed: f64,

    /// Moving point load Q (kN)
    #[structopt(long, default_value = "19.0")]
    moving: f64,

    /// Steel grade (S235 or S355)
    #[structopt(long, default_value = "S235")]
    grade: String,

    /// Yield strength in MPa, overrides --grade
    #[structopt(long)]
    fy: Option<f64>,

    /// Section catalog TOML file (default: embedded IPE series)
    #[structopt(long, parse(from_os_str))]
    catalog: Option<PathBuf>,

    /// Analysis settings TOML file
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Check this section only instead of searching
    #[structopt(long)]
    check: Option<String>,

    /// Print the result as JSON
    #[structopt(long)]
    json: bool,

    /// Rows of the sampled M/V table
    #[structopt(long, default_value = "11")]
    table_rows: usize,
}

fn main() -> ExitCode {
    let options = Options::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(&options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::from(2)
        }
    }
}

/// Returns whether a passing section was found.
fn run(options: &Options) -> CalcResult<bool> {
    let input = design_input(options)?;
    let settings = match &options.config {
        Some(path) => load_settings(path)?,
        None => AnalysisSettings::default(),
    };
    let custom_catalog;
    let catalog: &SectionCatalog = match &options.catalog {
        Some(path) => {
            custom_catalog = load_catalog(path)?;
            &custom_catalog
        }
        None => ipe_catalog()?,
    };
    debug!(?input, ?settings, series = %catalog.series, sections = catalog.len(), "starting run");

    if let Some(name) = &options.check {
        let result = check_section(&input, catalog, name, &settings)?;
        if options.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(&input, &result, "SECTION CHECK", options.table_rows);
        }
        return Ok(result.passes());
    }

    let outcome = evaluate_design(&input, catalog, &settings)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome.is_feasible());
    }

    match &outcome {
        DesignOutcome::Selected { result, checks } => {
            print_result(&input, result, "GIRDER DESIGN RESULTS", options.table_rows);
            println!();
            println!("Candidates checked: {}", checks.len());
            for check in checks {
                println!(
                    "  {:<10} {:>6.1} kg/m  η = {:.3} {}",
                    check.name,
                    check.mass_kg_per_m,
                    check.utilization,
                    status_icon(check.passes)
                );
            }
        }
        DesignOutcome::NoFeasibleSection {
            candidates_checked,
            lowest_utilization,
            ..
        } => {
            println!("No section found.");
            println!("  Candidates checked: {}", candidates_checked);
            if let Some(eta) = lowest_utilization {
                println!("  Lowest utilization: {:.3}", eta);
            }
        }
    }

    Ok(outcome.is_feasible())
}

fn design_input(options: &Options) -> CalcResult<DesignInput> {
    let input = match options.fy {
        Some(fy) => DesignInput::new(options.span, options.superimposed, options.moving, SteelGrade::S235)
            .with_yield_strength(fy),
        None => {
            let grade = SteelGrade::from_str_flexible(&options.grade)?;
            DesignInput::new(options.span, options.superimposed, options.moving, grade)
        }
    };
    input.validate()?;
    if options.table_rows == 1 {
        return Err(CalcError::invalid_input(
            "table_rows",
            "1",
            "Use 0 to hide the table or at least 2 rows",
        ));
    }
    Ok(input)
}

fn print_result(input: &DesignInput, result: &DesignResult, title: &str, table_rows: usize) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:         L  = {:.2} m", input.span_m);
    println!("  Superimposed: Δg = {:.2} kN/m (triangular peak)", input.superimposed_peak_kn_per_m);
    println!("  Moving load:  Q  = {:.2} kN", input.moving_load_kn);
    println!("  Yield:        f_y = {:.0} MPa", result.yield_strength_mpa);
    println!("  Combination:  {}", result.combination);
    for line in action_lines(&LoadCombination::fundamental()) {
        println!("    {}", line);
    }
    println!();
    println!("Section: {} ({:.1} kg/m, W_y = {:.0} cm³)",
        result.section.name,
        result.section.mass_kg_per_m,
        result.section.wy_cm3
    );
    println!("  Self-weight g = {:.4} kN/m", result.self_weight_kn_per_m);
    println!();
    println!("Demand:");
    println!("  M_Ed = {:.2} kNm at x = {:.2} m", result.max_moment_knm, result.max_moment_position_m);
    println!("  V_Ed = {:.2} kN at x = {:.2} m", result.max_shear_kn, result.max_shear_position_m);
    println!();
    println!("Capacity Check:");
    println!("  Bending: {:.2} ({:.1}/{:.0} MPa) {}",
        result.utilization,
        result.stress_mpa,
        result.yield_strength_mpa,
        status_icon(result.passes())
    );
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {} (η = {:.1}%)",
        if result.passes() { "PASS" } else { "FAIL" },
        result.utilization_percent()
    );
    println!("═══════════════════════════════════════");

    if table_rows >= 2 {
        println!();
        println!("{:>8}  {:>10}  {:>10}", "x [m]", "M_Ed [kNm]", "V_Ed [kN]");
        for i in table_indices(result.positions_m.len(), table_rows) {
            println!(
                "{:>8.3}  {:>10.2}  {:>10.2}",
                result.positions_m[i], result.moment_knm[i], result.shear_kn[i]
            );
        }
    }
}

/// One line per load type: symbol, description and partial factor.
fn action_lines(combination: &LoadCombination) -> Vec<String> {
    LoadType::ALL
        .iter()
        .map(|&load_type| {
            format!(
                "{:<3} {:<36} γ = {:.2}",
                load_type.code(),
                load_type.description(),
                combination.get_factor(load_type)
            )
        })
        .collect()
}

/// Evenly spread indices into `len` samples, first and last included.
fn table_indices(len: usize, rows: usize) -> Vec<usize> {
    match len {
        0 => return Vec::new(),
        1 => return vec![0],
        _ => {}
    }
    let rows = rows.clamp(2, len);
    let mut indices: Vec<usize> = (0..rows)
        .map(|r| (r as f64 * (len - 1) as f64 / (rows - 1) as f64).round() as usize)
        .collect();
    indices.dedup();
    indices
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indices() {
        assert_eq!(table_indices(200, 11).len(), 11);
        assert_eq!(table_indices(200, 11)[0], 0);
        assert_eq!(table_indices(200, 11)[10], 199);
        assert_eq!(table_indices(5, 20), vec![0, 1, 2, 3, 4]);
        assert_eq!(table_indices(1, 3), vec![0]);
        assert!(table_indices(0, 3).is_empty());
    }

    #[test]
    fn test_action_lines() {
        let lines = action_lines(&LoadCombination::fundamental());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("G"));
        assert!(lines[0].contains("Self-weight") && lines[0].ends_with("γ = 1.35"));
        assert!(lines[1].contains("Superimposed dead load (triangular)"));
        assert!(lines[2].contains("Moving point load") && lines[2].ends_with("γ = 1.50"));
    }

    #[test]
    fn test_design_input_from_options() {
        let options = Options::from_iter(["girder", "--grade", "S355", "--span", "6.0"]);
        let input = design_input(&options).unwrap();
        assert_eq!(input.yield_strength_mpa, 355.0);
        assert_eq!(input.span_m, 6.0);

        let options = Options::from_iter(["girder", "--grade", "S355", "--fy", "275"]);
        assert_eq!(design_input(&options).unwrap().yield_strength_mpa, 275.0);

        let options = Options::from_iter(["girder", "--grade", "S460"]);
        assert_eq!(design_input(&options).unwrap_err().error_code(), "GRADE_NOT_FOUND");

        let options = Options::from_iter(["girder", "--span", "0"]);
        assert_eq!(design_input(&options).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_default_run_finds_section() {
        let options = Options::from_iter(["girder", "--json"]);
        assert!(run(&options).unwrap());

        let options = Options::from_iter(["girder", "--check", "IPE 200", "--json"]);
        assert!(!run(&options).unwrap());
    }
}
