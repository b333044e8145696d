//! Structural Steel Grades (EN 10025)
//!
//! Nominal yield strengths for the hot-rolled grades offered by the design
//! tool. Values are for nominal thickness t ≤ 40 mm.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// Structural steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// f_y = 235 MPa
    S235,
    /// f_y = 355 MPa
    S355,
}

impl SteelGrade {
    /// All grades for selection lists
    pub const ALL: [SteelGrade; 2] = [SteelGrade::S235, SteelGrade::S355];

    /// Grade designation (e.g., "S235")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S355 => "S355",
        }
    }

    /// Nominal yield strength f_y
    pub fn yield_strength(&self) -> Megapascals {
        match self {
            SteelGrade::S235 => Megapascals(235.0),
            SteelGrade::S355 => Megapascals(355.0),
        }
    }

    /// Nominal yield strength f_y in MPa
    pub fn yield_strength_mpa(&self) -> f64 {
        self.yield_strength().value()
    }

    /// Parse from common spellings ("S235", "s 235", "S235JR", "235")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        let digits = normalized.trim_start_matches('S');
        if digits.starts_with("235") {
            Ok(SteelGrade::S235)
        } else if digits.starts_with("355") {
            Ok(SteelGrade::S355)
        } else {
            Err(CalcError::grade_not_found(s))
        }
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteelGrade::from_str_flexible(s)
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_strengths() {
        assert_eq!(SteelGrade::S235.yield_strength_mpa(), 235.0);
        assert_eq!(SteelGrade::S355.yield_strength_mpa(), 355.0);
    }

    #[test]
    fn test_grade_parsing() {
        assert_eq!(SteelGrade::from_str_flexible("S235").unwrap(), SteelGrade::S235);
        assert_eq!(SteelGrade::from_str_flexible("s 355").unwrap(), SteelGrade::S355);
        assert_eq!(SteelGrade::from_str_flexible("S235JR").unwrap(), SteelGrade::S235);
        assert_eq!("355".parse::<SteelGrade>().unwrap(), SteelGrade::S355);

        let err = SteelGrade::from_str_flexible("S460").unwrap_err();
        assert_eq!(err.error_code(), "GRADE_NOT_FOUND");
    }

    #[test]
    fn test_grade_serialization() {
        let json = serde_json::to_string(&SteelGrade::S355).unwrap();
        assert_eq!(json, "\"S355\"");
        let roundtrip: SteelGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, SteelGrade::S355);
    }

    #[test]
    fn test_display() {
        assert_eq!(SteelGrade::S235.to_string(), "S235");
        assert_eq!(SteelGrade::ALL.len(), 2);
    }
}
