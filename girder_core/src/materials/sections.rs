//! Steel Section Catalog
//!
//! Section candidates for the design search and the catalog that orders
//! them. A catalog is always held in ascending order of mass per metre, so
//! "first passing candidate" and "lightest passing candidate" coincide no
//! matter how the source table was ordered.
//!
//! ## Data Source
//!
//! The reference IPE series (IPE 80 to IPE 600) is embedded from
//! `data/ipe_sections.toml` and parsed once on first use. Custom catalogs
//! use the same TOML layout:
//!
//! ```toml
//! series = "Custom"
//!
//! [[sections]]
//! name = "HEA 200"
//! mass_kg_per_m = 42.3
//! wy_cm3 = 389.0
//! ```
//!
//! ## Example
//!
//! ```rust
//! use girder_core::materials::sections::{ipe_catalog, SectionCatalog, SteelSection};
//!
//! let ipe = ipe_catalog().unwrap();
//! assert_eq!(ipe.len(), 18);
//! assert_eq!(ipe.lookup("ipe270").unwrap().wy_cm3, 429.0);
//!
//! let custom = SectionCatalog::new(vec![
//!     SteelSection::new("Heavy", 50.0, 600.0),
//!     SteelSection::new("Light", 10.0, 60.0),
//! ]).unwrap();
//! assert_eq!(custom.sections()[0].name, "Light");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{CubicCentimeters, KgPerMeter, KnPerMeter};

/// Embedded reference table
const IPE_TOML: &str = include_str!("../../data/ipe_sections.toml");

static IPE_CATALOG: Lazy<CalcResult<SectionCatalog>> =
    Lazy::new(|| SectionCatalog::from_toml_str(IPE_TOML, "ipe_sections.toml"));

/// Reference IPE catalog, parsed on first access.
pub fn ipe_catalog() -> CalcResult<&'static SectionCatalog> {
    (*IPE_CATALOG).as_ref().map_err(Clone::clone)
}

/// A standard rolled section as far as the bending check is concerned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSection {
    /// Designation (e.g., "IPE 270")
    pub name: String,

    /// Nominal mass per metre (kg/m)
    pub mass_kg_per_m: f64,

    /// Elastic section modulus about the strong axis, W_y (cm³)
    pub wy_cm3: f64,
}

impl SteelSection {
    /// Create a new section record
    pub fn new(name: impl Into<String>, mass_kg_per_m: f64, wy_cm3: f64) -> Self {
        SteelSection {
            name: name.into(),
            mass_kg_per_m,
            wy_cm3,
        }
    }

    /// Validate the record.
    pub fn validate(&self) -> CalcResult<()> {
        if self.name.trim().is_empty() {
            return Err(CalcError::invalid_input("name", "\"\"", "Section name must not be empty"));
        }
        if !self.mass_kg_per_m.is_finite() || self.mass_kg_per_m <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("{}.mass_kg_per_m", self.name),
                self.mass_kg_per_m.to_string(),
                "Mass per metre must be positive",
            ));
        }
        if !self.wy_cm3.is_finite() || self.wy_cm3 <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("{}.wy_cm3", self.name),
                self.wy_cm3.to_string(),
                "Section modulus must be positive",
            ));
        }
        Ok(())
    }

    /// Mass per metre as a unit value
    pub fn mass(&self) -> KgPerMeter {
        KgPerMeter(self.mass_kg_per_m)
    }

    /// Section modulus as a unit value
    pub fn modulus(&self) -> CubicCentimeters {
        CubicCentimeters(self.wy_cm3)
    }

    /// Self-weight line load g_k (kN/m)
    pub fn self_weight(&self, gravity_m_per_s2: f64) -> KnPerMeter {
        self.mass().to_line_load(gravity_m_per_s2)
    }
}

impl std::fmt::Display for SteelSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.1} kg/m, Wy={:.1} cm³)",
            self.name, self.mass_kg_per_m, self.wy_cm3
        )
    }
}

/// Ordered collection of section candidates, lightest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionCatalog {
    /// Series or table name (e.g., "IPE")
    pub series: String,

    sections: Vec<SteelSection>,
}

/// On-disk layout of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    series: String,
    #[serde(default)]
    sections: Vec<SteelSection>,
}

impl SectionCatalog {
    /// Build a catalog, validating every entry and sorting by mass.
    ///
    /// The sort is stable: sections with equal mass keep the order given.
    pub fn new(sections: Vec<SteelSection>) -> CalcResult<Self> {
        Self::with_series("", sections)
    }

    /// Build a named catalog.
    pub fn with_series(series: impl Into<String>, mut sections: Vec<SteelSection>) -> CalcResult<Self> {
        for section in &sections {
            section.validate()?;
        }
        sections.sort_by(|a, b| a.mass_kg_per_m.total_cmp(&b.mass_kg_per_m));
        Ok(SectionCatalog {
            series: series.into(),
            sections,
        })
    }

    /// Parse a catalog from TOML text.
    ///
    /// `source_name` only labels parse errors (file name or "embedded").
    pub fn from_toml_str(text: &str, source_name: &str) -> CalcResult<Self> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|e| CalcError::parse_error(source_name, e.to_string()))?;
        Self::with_series(file.series, file.sections)
    }

    /// Sections in search order
    pub fn sections(&self) -> &[SteelSection] {
        &self.sections
    }

    /// Iterate sections in search order
    pub fn iter(&self) -> std::slice::Iter<'_, SteelSection> {
        self.sections.iter()
    }

    /// Look up a section by name.
    ///
    /// Matching ignores case and whitespace, so "ipe270" finds "IPE 270".
    pub fn lookup(&self, name: &str) -> CalcResult<&SteelSection> {
        let key = normalize_name(name);
        self.sections
            .iter()
            .find(|s| normalize_name(&s.name) == key)
            .ok_or_else(|| CalcError::section_not_found(name))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionCatalog {
    type Item = &'a SteelSection;
    type IntoIter = std::slice::Iter<'a, SteelSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
