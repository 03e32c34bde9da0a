//! Hot-rolled structural steel grades (AS/NZS 3679.1)
//!
//! Yield stress depends on the thickness of the plate element, so a single
//! section can carry different flange and web yield stresses.

use serde::{Deserialize, Serialize};

/// Anything that can supply strength properties to a section.
pub trait SteelMaterial {
    /// Yield stress fy (MPa) for an element of the given thickness (mm)
    fn yield_stress(&self, thickness_mm: f64) -> f64;

    /// Tensile strength fu (MPa)
    fn tensile_strength(&self) -> f64;
}

/// Steel grade for hot-rolled sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SteelGrade {
    /// Grade 300
    #[default]
    #[serde(rename = "300")]
    Grade300,
    /// Grade 350
    #[serde(rename = "350")]
    Grade350,
}

impl SteelGrade {
    /// All grades for selection
    pub const ALL: [SteelGrade; 2] = [SteelGrade::Grade300, SteelGrade::Grade350];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Grade300 => "AS/NZS 3679.1-300",
            SteelGrade::Grade350 => "AS/NZS 3679.1-350",
        }
    }
}

impl SteelMaterial for SteelGrade {
    fn yield_stress(&self, thickness_mm: f64) -> f64 {
        match self {
            SteelGrade::Grade300 => {
                if thickness_mm <= 11.0 {
                    320.0
                } else if thickness_mm <= 17.0 {
                    300.0
                } else {
                    280.0
                }
            }
            SteelGrade::Grade350 => {
                if thickness_mm <= 11.0 {
                    360.0
                } else if thickness_mm <= 40.0 {
                    340.0
                } else {
                    330.0
                }
            }
        }
    }

    fn tensile_strength(&self) -> f64 {
        match self {
            SteelGrade::Grade300 => 440.0,
            SteelGrade::Grade350 => 480.0,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_300_thickness_bands() {
        let g = SteelGrade::Grade300;
        assert_eq!(g.yield_stress(5.0), 320.0);
        assert_eq!(g.yield_stress(11.0), 320.0);
        assert_eq!(g.yield_stress(11.5), 300.0);
        assert_eq!(g.yield_stress(17.0), 300.0);
        assert_eq!(g.yield_stress(25.0), 280.0);
    }

    #[test]
    fn test_grade_350_thickness_bands() {
        let g = SteelGrade::Grade350;
        assert_eq!(g.yield_stress(10.0), 360.0);
        assert_eq!(g.yield_stress(20.0), 340.0);
        assert_eq!(g.yield_stress(50.0), 330.0);
        assert_eq!(g.tensile_strength(), 480.0);
    }

    #[test]
    fn test_yield_never_increases_with_thickness() {
        for grade in SteelGrade::ALL {
            let mut previous = f64::INFINITY;
            for t in [4.0, 8.0, 12.0, 16.0, 20.0, 32.0, 45.0, 60.0] {
                let fy = grade.yield_stress(t);
                assert!(fy <= previous);
                previous = fy;
            }
        }
    }

    #[test]
    fn test_grade_serialization() {
        let json = serde_json::to_string(&SteelGrade::Grade350).unwrap();
        assert_eq!(json, "\"350\"");
        let grade: SteelGrade = serde_json::from_str("\"300\"").unwrap();
        assert_eq!(grade, SteelGrade::Grade300);
    }
}
