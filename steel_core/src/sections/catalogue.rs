//! Section Catalogue
//!
//! Tabulated properties for standard hot-rolled sections, so a member can be
//! defined by designation alone. The built-in set covers a selection of
//! Australian universal beams; the full range is expected to come from an
//! external property table.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::sections::builtin_sections;
//!
//! let db = builtin_sections();
//! let entry = db.lookup("310ub40.4").unwrap();
//! assert_eq!(entry.designation, "310UB40.4");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{IGeometry, SectionProperties, SectionShape, SteelSection};
use crate::codes::DesignCode;
use crate::errors::{CalcError, CalcResult};
use crate::materials::SteelMaterial;

/// A catalogued section before a steel grade is applied
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    /// Designation, e.g. "310UB40.4"
    pub designation: String,
    /// Shape family and plate geometry
    pub shape: SectionShape,
    /// Tabulated properties
    pub properties: SectionProperties,
}

/// Sections indexed by uppercase designation
#[derive(Debug, Clone, Default)]
pub struct SectionDb {
    entries: HashMap<String, CatalogueEntry>,
}

impl SectionDb {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, replacing any with the same designation
    pub fn insert(&mut self, entry: CatalogueEntry) {
        self.entries.insert(entry.designation.to_uppercase(), entry);
    }

    /// Look up a section by designation (case-insensitive)
    pub fn lookup(&self, designation: &str) -> CalcResult<&CatalogueEntry> {
        self.entries
            .get(&designation.trim().to_uppercase())
            .ok_or_else(|| CalcError::section_not_found(designation))
    }

    /// Build a design section from a catalogued entry and a steel grade
    pub fn section(&self, designation: &str, grade: impl SteelMaterial, code: DesignCode) -> CalcResult<SteelSection> {
        let entry = self.lookup(designation)?;
        Ok(SteelSection::from_grade(
            entry.designation.clone(),
            entry.shape.clone(),
            entry.properties,
            &grade,
            code,
        ))
    }

    /// All designations, sorted
    pub fn designations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.designation.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of catalogued sections
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BUILTIN: Lazy<SectionDb> = Lazy::new(|| {
    let mut db = SectionDb::new();

    // designation, mass, d, bf, tf, tw, r1, Ag, Ix, Zx, Sx, rx, Iy, Zy, Sy, ry, J, Iw, kf
    let universal_beams = [
        ("250UB25.7", 25.7, 248.0, 124.0, 8.0, 5.0, 12.0, 3270.0, 35.4e6, 285e3, 319e3, 104.0, 2.55e6, 41.1e3, 63.2e3, 27.9, 70.4e3, 37.3e9, 0.916),
        ("310UB40.4", 40.4, 304.0, 165.0, 10.2, 6.1, 11.4, 5210.0, 86.4e6, 569e3, 633e3, 129.0, 7.65e6, 92.7e3, 142e3, 38.3, 157e3, 165e9, 0.949),
        ("410UB53.7", 53.7, 403.0, 178.0, 10.9, 7.6, 11.4, 6890.0, 188e6, 933e3, 1060e3, 165.0, 10.3e6, 115e3, 180e3, 38.6, 233e3, 394e9, 0.907),
        ("460UB74.6", 74.6, 457.0, 190.0, 14.5, 9.1, 11.4, 9520.0, 335e6, 1460e3, 1660e3, 188.0, 16.6e6, 175e3, 272e3, 41.8, 530e3, 818e9, 0.947),
        ("530UB92.4", 92.4, 533.0, 209.0, 15.6, 10.2, 14.0, 11800.0, 554e6, 2080e3, 2370e3, 217.0, 23.8e6, 228e3, 355e3, 44.9, 775e3, 1590e9, 0.928),
    ];

    for (designation, mass, d, bf, tf, tw, r, area, ixx, zxx, sxx, rx, iyy, zyy, syy, ry, j, iw, kf) in universal_beams {
        db.insert(CatalogueEntry {
            designation: designation.to_string(),
            shape: SectionShape::UniversalBeam(IGeometry::new(d, bf, tf, tw, r)),
            properties: SectionProperties {
                area_mm2: area,
                mass_kgm: Some(mass),
                ixx_mm4: ixx,
                zxx_mm3: zxx,
                sxx_mm3: sxx,
                rx_mm: rx,
                iyy_mm4: iyy,
                zyy_mm3: zyy,
                syy_mm3: syy,
                ry_mm: ry,
                j_mm4: j,
                iw_mm6: iw,
                kf,
            },
        });
    }

    db
});

/// Built-in catalogue of selected universal beams
pub fn builtin_sections() -> &'static SectionDb {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SteelGrade;
    use crate::sections::{Axis, Compactness};

    #[test]
    fn test_builtin_lookup() {
        let db = builtin_sections();
        assert_eq!(db.len(), 5);
        assert!(!db.is_empty());

        let entry = db.lookup("460UB74.6").unwrap();
        assert_eq!(entry.properties.mass_kgm, Some(74.6));
        assert_eq!(entry.shape.geometry().tf_mm, 14.5);

        let lower = db.lookup(" 460ub74.6 ").unwrap();
        assert_eq!(entry.designation, lower.designation);
    }

    #[test]
    fn test_unknown_designation() {
        let err = builtin_sections().lookup("999UB1").unwrap_err();
        assert_eq!(err, CalcError::section_not_found("999UB1"));
    }

    #[test]
    fn test_catalogue_is_consistent() {
        let db = builtin_sections();
        for name in db.designations() {
            let section = db.section(name, SteelGrade::Grade300, DesignCode::default()).unwrap();
            assert!(section.validate().is_ok(), "{}", name);
            assert!(section.properties.sxx_mm3 > section.properties.zxx_mm3, "{}", name);
            assert!(section.properties.syy_mm3 > section.properties.zyy_mm3, "{}", name);
        }
    }

    #[test]
    fn test_catalogued_beams_are_compact_about_x() {
        let db = builtin_sections();
        for name in db.designations() {
            let section = db.section(name, SteelGrade::Grade300, DesignCode::default()).unwrap();
            assert_eq!(section.classify_bending(Axis::X).compactness, Compactness::Compact, "{}", name);
        }
    }

    #[test]
    fn test_310ub40_capacity() {
        let section = builtin_sections()
            .section("310UB40.4", SteelGrade::Grade300, DesignCode::default())
            .unwrap();
        // Both elements ≤ 11 mm: fy = 320, Ze = Sx
        assert_eq!(section.fy_min(), 320.0);
        assert!((section.section_moment_capacity(Axis::X) - 320.0 * 633e3 / 1e6).abs() < 1e-9);
    }
}
