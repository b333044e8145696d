//! # File I/O Module
//!
//! Reads the two kinds of input files the front ends accept: analysis
//! settings and custom section catalogs, both TOML. Nothing is ever written;
//! design results are not persisted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use girder_core::file_io::{load_catalog, load_settings};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("girder.toml")).unwrap();
//! let catalog = load_catalog(Path::new("hea_sections.toml")).unwrap();
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::materials::SectionCatalog;
use crate::settings::AnalysisSettings;

/// Load analysis settings from a TOML file.
pub fn load_settings(path: &Path) -> CalcResult<AnalysisSettings> {
    let contents = read_text(path)?;
    AnalysisSettings::from_toml_str(&contents, &path.display().to_string())
}

/// Load a section catalog from a TOML file.
///
/// The catalog is sorted by mass on load, like any other catalog.
pub fn load_catalog(path: &Path) -> CalcResult<SectionCatalog> {
    let contents = read_text(path)?;
    SectionCatalog::from_toml_str(&contents, &path.display().to_string())
}

fn read_text(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    Ok(contents)
}
