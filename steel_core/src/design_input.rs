//! # Member Design Input
//!
//! Loads a flexural member definition from JSON and runs both engines over
//! it: the section capacity checks about each axis, and the per-segment
//! member evaluation.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "label": "B1 level 2",
//!   "section": { "designation": "410UB53.7" },
//!   "grade": "300",
//!   "length_mm": 8000.0,
//!   "restraints": [
//!     { "type": "F", "position": 0.0 },
//!     { "type": "L", "position": 0.5 },
//!     { "type": "F", "position": 1.0 }
//!   ],
//!   "load_positions": ["WS", "WS"],
//!   "moment_diagram": { "samples": [
//!     { "position": 0.0, "moment": 0.0 },
//!     { "position": 0.5, "moment": 120.0 },
//!     { "position": 1.0, "moment": 0.0 }
//!   ] }
//! }
//! ```
//!
//! `section` may instead be an inline section with `name`, `shape` and
//! `properties`, and optionally `fyf_mpa`/`fyw_mpa` (otherwise taken from
//! the grade). `alpha_m_overrides` is an optional array with one value per
//! segment.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::{as4100_ref, DesignCode};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{SteelGrade, SteelMaterial};
use crate::member::{LoadPosition, Member, MomentDiagram, Restraint, SegmentCapacity};
use crate::sections::{builtin_sections, Axis, Compactness, PlateElements, SectionProperties, SectionShape, SteelSection};

/// Current schema version for member design files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Section reference in a design file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionSpec {
    /// A section from the built-in catalogue
    Catalogue {
        /// Designation, e.g. "310UB40.4"
        designation: String,
    },
    /// A fully described section
    Inline {
        name: String,
        shape: SectionShape,
        properties: SectionProperties,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fyf_mpa: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fyw_mpa: Option<f64>,
    },
}

impl SectionSpec {
    /// Resolve to a design section
    pub fn resolve(&self, grade: SteelGrade, code: DesignCode) -> CalcResult<SteelSection> {
        let section = match self {
            SectionSpec::Catalogue { designation } => builtin_sections().section(designation, grade, code)?,
            SectionSpec::Inline {
                name,
                shape,
                properties,
                fyf_mpa,
                fyw_mpa,
            } => SteelSection::new(
                name.clone(),
                shape.clone(),
                *properties,
                fyf_mpa.unwrap_or_else(|| grade.yield_stress(shape.flange_thickness())),
                fyw_mpa.unwrap_or_else(|| grade.yield_stress(shape.web_thickness())),
                code,
            ),
        };
        section.validate()?;
        Ok(section)
    }
}

/// A flexural member to check, as read from a design file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDesignInput {
    /// Schema version
    pub version: String,
    /// Free-text label
    #[serde(default)]
    pub label: String,
    /// Section used for the member
    pub section: SectionSpec,
    /// Steel grade, used where yield stresses are not given
    #[serde(default)]
    pub grade: SteelGrade,
    /// Member length (mm)
    pub length_mm: f64,
    /// Restraints in any order
    pub restraints: Vec<Restraint>,
    /// One load position per segment
    pub load_positions: Vec<LoadPosition>,
    /// Design bending moment diagram over the member
    pub moment_diagram: MomentDiagram,
    /// Optional α_m per segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_m_overrides: Option<Vec<f64>>,
}

/// Section capacity about one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCapacity {
    pub axis: Axis,
    pub compactness: Compactness,
    /// Governing element slenderness λs
    pub slenderness: f64,
    /// Effective section modulus Ze (mm³)
    pub ze_mm3: f64,
    /// Ms (kNm)
    pub ms_knm: f64,
    /// φMs (kNm)
    pub phi_ms_knm: f64,
}

impl AxisCapacity {
    fn evaluate(section: &SteelSection, axis: Axis) -> Self {
        let classification = section.classify_bending(axis);
        AxisCapacity {
            axis,
            compactness: classification.compactness,
            slenderness: classification.slenderness,
            ze_mm3: section.effective_modulus(axis),
            ms_knm: section.section_moment_capacity(axis),
            phi_ms_knm: section.factored_section_moment_capacity(axis),
        }
    }

    /// One-line summary with clause references
    pub fn summary(&self) -> String {
        format!(
            "{}-axis: {} (λs = {:.1}, {})  Ze = {:.0} mm³ {}  Ms = {:.1} kNm  φMs = {:.1} kNm {}",
            self.axis,
            self.compactness,
            self.slenderness,
            as4100_ref::PLATE_SLENDERNESS,
            self.ze_mm3,
            as4100_ref::EFFECTIVE_MODULUS,
            self.ms_knm,
            self.phi_ms_knm,
            as4100_ref::SECTION_CAPACITY,
        )
    }
}

/// Results for one member design file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDesignResult {
    pub label: String,
    /// Section summary, e.g. "410UB53.7 (Universal Beam, fyf=320 MPa, fyw=320 MPa)"
    pub section: String,
    pub major_axis: AxisCapacity,
    pub minor_axis: AxisCapacity,
    pub segments: Vec<SegmentCapacity>,
}

impl MemberDesignInput {
    /// Resolve the section and evaluate the member
    pub fn evaluate(&self) -> CalcResult<MemberDesignResult> {
        let section = self.section.resolve(self.grade, DesignCode::default())?;
        debug!(label = %self.label, section = %section.name, "evaluating member design");

        let member = Member::new(&section, self.length_mm, self.restraints.iter().copied())?;
        let segments = member.calc_phi_mbx(
            &self.moment_diagram,
            &self.load_positions,
            self.alpha_m_overrides.as_deref(),
        )?;

        Ok(MemberDesignResult {
            label: self.label.clone(),
            section: section.to_string(),
            major_axis: AxisCapacity::evaluate(&section, Axis::X),
            minor_axis: AxisCapacity::evaluate(&section, Axis::Y),
            segments,
        })
    }
}

/// Parse a member design from a JSON string
pub fn parse_design_input(json: &str) -> CalcResult<MemberDesignInput> {
    let input: MemberDesignInput = serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid member design JSON: {}", e),
    })?;
    validate_version(&input.version)?;
    Ok(input)
}

/// Load a member design from a file
pub fn load_design_input(path: &Path) -> CalcResult<MemberDesignInput> {
    let mut file = File::open(path).map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let input: MemberDesignInput = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;
    validate_version(&input.version)?;
    Ok(input)
}

/// Validate that a file version is compatible with the current schema
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    match (file_parts.first(), current_parts.first()) {
        (Some(file_major), Some(current_major)) if file_major == current_major => {}
        _ => return Err(mismatch()),
    }

    // 0.x: a newer minor version may carry fields we don't understand
    if current_parts[0] == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
