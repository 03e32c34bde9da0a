//! # Steel Sections
//!
//! Cross-section geometry, section properties and the section capacity engine.
//!
//! A [`SteelSection`] pairs a shape (the plate-element geometry, which differs
//! per shape family) with thirteen scalar section properties and the yield
//! stresses of its flange and web. The classification and effective modulus
//! logic in [`capacity`] only talks to the shape through [`PlateElements`].
//!
//! All dimensions are in millimetres and stresses in MPa, so that
//! `fy × Z / 1e6` gives a moment in kNm.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::sections::{builtin_sections, Axis};
//! use steel_core::materials::SteelGrade;
//! use steel_core::codes::DesignCode;
//!
//! let section = builtin_sections()
//!     .section("310UB40.4", SteelGrade::Grade300, DesignCode::as4100_1998())
//!     .unwrap();
//!
//! let phi_ms = section.factored_section_moment_capacity(Axis::X);
//! assert!(phi_ms > 150.0 && phi_ms < 200.0);
//! ```

pub mod capacity;
pub mod catalogue;
pub mod i_section;

pub use capacity::{Axis, BendingClassification, Compactness};
pub use catalogue::{builtin_sections, SectionDb};
pub use i_section::IGeometry;

use serde::{Deserialize, Serialize};

use crate::codes::{DesignCode, ResidualStress};
use crate::errors::{CalcError, CalcResult};
use crate::materials::SteelMaterial;

/// Shape-specific plate element geometry.
///
/// Each shape family derives its own flange and web ratios; everything that
/// classifies or reduces a section works only through this trait.
pub trait PlateElements {
    /// Clear depth of the web d1 (mm)
    fn web_depth(&self) -> f64;

    /// Unscaled web width-to-thickness ratio
    fn web_slenderness(&self) -> f64;

    /// Unscaled flange outstand width-to-thickness ratio
    fn flange_slenderness(&self) -> f64;

    /// Flange thickness tf (mm)
    fn flange_thickness(&self) -> f64;

    /// Web thickness tw (mm)
    fn web_thickness(&self) -> f64;

    /// Number of webs nw
    fn web_count(&self) -> f64;

    /// Residual stress class used for the plate slenderness limits
    fn residual_stress(&self) -> ResidualStress;
}

/// Supported shape families.
///
/// ## JSON
///
/// ```json
/// { "shape": "UniversalBeam", "d_mm": 304.0, "bf_mm": 165.0, "tf_mm": 10.2, "tw_mm": 6.1, "r_mm": 11.4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum SectionShape {
    /// Hot-rolled universal beam or column
    UniversalBeam(IGeometry),
    /// Welded I-section built up from plate
    WeldedBeam(IGeometry),
}

impl SectionShape {
    /// I-section geometry shared by every variant
    pub fn geometry(&self) -> &IGeometry {
        match self {
            SectionShape::UniversalBeam(g) | SectionShape::WeldedBeam(g) => g,
        }
    }

    /// Display name
    pub fn family_name(&self) -> &'static str {
        match self {
            SectionShape::UniversalBeam(_) => "Universal Beam",
            SectionShape::WeldedBeam(_) => "Welded Beam",
        }
    }
}

impl PlateElements for SectionShape {
    fn web_depth(&self) -> f64 {
        self.geometry().web_depth()
    }

    fn web_slenderness(&self) -> f64 {
        self.geometry().web_slenderness()
    }

    fn flange_slenderness(&self) -> f64 {
        self.geometry().flange_slenderness()
    }

    fn flange_thickness(&self) -> f64 {
        self.geometry().tf_mm
    }

    fn web_thickness(&self) -> f64 {
        self.geometry().tw_mm
    }

    fn web_count(&self) -> f64 {
        1.0
    }

    fn residual_stress(&self) -> ResidualStress {
        match self {
            SectionShape::UniversalBeam(_) => ResidualStress::HotRolled,
            SectionShape::WeldedBeam(_) => ResidualStress::HeavilyWelded,
        }
    }
}

/// Section properties, either tabulated or computed from geometry.
///
/// Z is the elastic modulus and S the plastic modulus, following the
/// AS 4100 convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Gross area Ag (mm²)
    pub area_mm2: f64,
    /// Mass per metre (kg/m), where known
    #[serde(default)]
    pub mass_kgm: Option<f64>,
    /// Second moment of area about x (mm⁴)
    pub ixx_mm4: f64,
    /// Elastic section modulus about x (mm³)
    pub zxx_mm3: f64,
    /// Plastic section modulus about x (mm³)
    pub sxx_mm3: f64,
    /// Radius of gyration about x (mm)
    pub rx_mm: f64,
    /// Second moment of area about y (mm⁴)
    pub iyy_mm4: f64,
    /// Elastic section modulus about y (mm³)
    pub zyy_mm3: f64,
    /// Plastic section modulus about y (mm³)
    pub syy_mm3: f64,
    /// Radius of gyration about y (mm)
    pub ry_mm: f64,
    /// Torsion constant J (mm⁴)
    pub j_mm4: f64,
    /// Warping constant Iw (mm⁶)
    pub iw_mm6: f64,
    /// Form factor kf
    pub kf: f64,
}

/// A steel cross-section ready for capacity checks.
///
/// Immutable after construction; members borrow it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSection {
    /// Designation, e.g. "310UB40.4"
    pub name: String,
    /// Shape family and plate geometry
    pub shape: SectionShape,
    /// Tabulated section properties
    pub properties: SectionProperties,
    /// Flange yield stress fyf (MPa)
    pub fyf_mpa: f64,
    /// Web yield stress fyw (MPa)
    pub fyw_mpa: f64,
    /// Design code supplying slenderness limits and φ
    #[serde(default)]
    pub code: DesignCode,
}

impl SteelSection {
    /// Create a section with explicit flange and web yield stresses.
    pub fn new(
        name: impl Into<String>,
        shape: SectionShape,
        properties: SectionProperties,
        fyf_mpa: f64,
        fyw_mpa: f64,
        code: DesignCode,
    ) -> Self {
        SteelSection {
            name: name.into(),
            shape,
            properties,
            fyf_mpa,
            fyw_mpa,
            code,
        }
    }

    /// Create a section whose yield stresses follow a steel grade and the
    /// thickness of each element.
    pub fn from_grade(
        name: impl Into<String>,
        shape: SectionShape,
        properties: SectionProperties,
        grade: &impl SteelMaterial,
        code: DesignCode,
    ) -> Self {
        let fyf_mpa = grade.yield_stress(shape.flange_thickness());
        let fyw_mpa = grade.yield_stress(shape.web_thickness());
        SteelSection::new(name, shape, properties, fyf_mpa, fyw_mpa, code)
    }

    /// Check that geometry, properties and yield stresses are usable.
    pub fn validate(&self) -> CalcResult<()> {
        self.shape.geometry().validate()?;

        let positive = [
            ("area_mm2", self.properties.area_mm2),
            ("zxx_mm3", self.properties.zxx_mm3),
            ("sxx_mm3", self.properties.sxx_mm3),
            ("zyy_mm3", self.properties.zyy_mm3),
            ("syy_mm3", self.properties.syy_mm3),
            ("fyf_mpa", self.fyf_mpa),
            ("fyw_mpa", self.fyw_mpa),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("{} must be positive", field),
                ));
            }
        }
        Ok(())
    }

    /// Governing yield stress for section capacity, min(fyf, fyw)
    pub fn fy_min(&self) -> f64 {
        self.fyf_mpa.min(self.fyw_mpa)
    }
}

impl PlateElements for SteelSection {
    fn web_depth(&self) -> f64 {
        self.shape.web_depth()
    }

    fn web_slenderness(&self) -> f64 {
        self.shape.web_slenderness()
    }

    fn flange_slenderness(&self) -> f64 {
        self.shape.flange_slenderness()
    }

    fn flange_thickness(&self) -> f64 {
        self.shape.flange_thickness()
    }

    fn web_thickness(&self) -> f64 {
        self.shape.web_thickness()
    }

    fn web_count(&self) -> f64 {
        self.shape.web_count()
    }

    fn residual_stress(&self) -> ResidualStress {
        self.shape.residual_stress()
    }
}

impl std::fmt::Display for SteelSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, fyf={:.0} MPa, fyw={:.0} MPa)",
            self.name,
            self.shape.family_name(),
            self.fyf_mpa,
            self.fyw_mpa
        )
    }
}
