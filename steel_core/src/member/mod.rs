//! # Member Segmentation & Restraint Engine
//!
//! A [`Member`] borrows a section, has a length, and holds its restraints
//! sorted by position. Every evaluation rebuilds the [`Segment`]s from the
//! current restraints and the bending moment diagram supplied with the call;
//! nothing is cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::member::{LoadPosition, Member, MomentDiagram, Restraint, RestraintType};
//! use steel_core::sections::builtin_sections;
//! use steel_core::materials::SteelGrade;
//! use steel_core::codes::DesignCode;
//!
//! let section = builtin_sections()
//!     .section("410UB53.7", SteelGrade::Grade300, DesignCode::as4100_1998())
//!     .unwrap();
//!
//! let member = Member::new(&section, 8000.0, vec![
//!     Restraint::new(RestraintType::Fixed, 0.0).unwrap(),
//!     Restraint::new(RestraintType::Lateral, 0.5).unwrap(),
//!     Restraint::new(RestraintType::Fixed, 1.0).unwrap(),
//! ]).unwrap();
//!
//! let bmd = MomentDiagram::from_pairs(&[(0.0, 0.0), (0.5, 120.0), (1.0, 0.0)]).unwrap();
//! let loads = [LoadPosition::WithinShearCentre, LoadPosition::WithinShearCentre];
//!
//! let results = member.calc_phi_mbx(&bmd, &loads, None).unwrap();
//! assert_eq!(results.len(), 2);
//! assert!((results[0].length_mm - 4000.0).abs() < 1e-9);
//! ```

pub mod diagram;
pub mod segment;

pub use diagram::{MomentDiagram, MomentSample};
pub use segment::{calc_alpha_m, EffectiveLength, LoadPosition, RestraintPair, Segment, ALPHA_M_MAX};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::as4100_ref;
use crate::errors::{CalcError, CalcResult};
use crate::sections::{Axis, SteelSection};

/// How a cross-section is held against twist and lateral movement.
///
/// Variant order defines the canonical order of a [`RestraintPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RestraintType {
    /// Fully restrained
    #[serde(rename = "F")]
    Fixed,
    /// Partially restrained
    #[serde(rename = "P")]
    Partial,
    /// Rotationally restrained
    #[serde(rename = "R")]
    Rotational,
    /// Laterally restrained
    #[serde(rename = "L")]
    Lateral,
    /// Unrestrained
    #[serde(rename = "U")]
    Unrestrained,
}

impl RestraintType {
    /// All restraint types
    pub const ALL: [RestraintType; 5] = [
        RestraintType::Fixed,
        RestraintType::Partial,
        RestraintType::Rotational,
        RestraintType::Lateral,
        RestraintType::Unrestrained,
    ];

    /// One-letter code
    pub fn code(&self) -> char {
        match self {
            RestraintType::Fixed => 'F',
            RestraintType::Partial => 'P',
            RestraintType::Rotational => 'R',
            RestraintType::Lateral => 'L',
            RestraintType::Unrestrained => 'U',
        }
    }

    /// Parse a one-letter code
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'F' => Some(RestraintType::Fixed),
            'P' => Some(RestraintType::Partial),
            'R' => Some(RestraintType::Rotational),
            'L' => Some(RestraintType::Lateral),
            'U' => Some(RestraintType::Unrestrained),
            _ => None,
        }
    }
}

impl FromStr for RestraintType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => RestraintType::from_code(c).ok_or_else(|| CalcError::invalid_restraint_code(s)),
            _ => Err(CalcError::invalid_restraint_code(s)),
        }
    }
}

impl std::fmt::Display for RestraintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A restraint at a relative position along a member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Restraint {
    #[serde(rename = "type")]
    kind: RestraintType,
    position: f64,
}

impl Restraint {
    /// Create a restraint; the position must lie in [0, 1]
    pub fn new(kind: RestraintType, position: f64) -> CalcResult<Self> {
        let restraint = Restraint { kind, position };
        restraint.validate()?;
        Ok(restraint)
    }

    /// Restraint type
    pub fn kind(&self) -> RestraintType {
        self.kind
    }

    /// Relative position along the member
    pub fn position(&self) -> f64 {
        self.position
    }

    fn validate(&self) -> CalcResult<()> {
        if !(0.0..=1.0).contains(&self.position) {
            return Err(CalcError::invalid_input(
                "restraint.position",
                self.position.to_string(),
                "Restraint position must lie between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Per-segment result of a member moment capacity evaluation.
///
/// `phi_ms_knm` is the design section capacity about x. The member buckling
/// reduction keyed by `effective_length_mm` and `alpha_m` is not applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCapacity {
    /// Segment index, start to end along the member
    pub index: usize,
    /// Relative position of the start restraint
    pub start_position: f64,
    /// Relative position of the end restraint
    pub end_position: f64,
    /// Restraint pair code, e.g. "FL"
    pub restraints: String,
    /// Physical length (mm)
    pub length_mm: f64,
    /// Load position tag
    pub load_position: LoadPosition,
    /// Moment modification factor
    pub alpha_m: f64,
    /// True when α_m was supplied by the caller
    pub alpha_m_overridden: bool,
    /// Twist restraint factor
    pub k_t: f64,
    /// Load height factor
    pub k_l: f64,
    /// Lateral rotation restraint factor
    pub k_r: f64,
    /// Effective length le (mm)
    pub effective_length_mm: f64,
    /// Design section moment capacity φMsx (kNm)
    pub phi_ms_knm: f64,
}

impl SegmentCapacity {
    /// Formatted breakdown with clause references
    pub fn summary(&self) -> String {
        format!(
            "Segment {} ({:.3} to {:.3}, {}, load {})\n\
             ------------------------------------------------\n\
             l     = {:>9.0} mm\n\
             α_m   = {:>9.3}      {}{}\n\
             k_t   = {:>9.3}      {}\n\
             k_l   = {:>9.2}      {}\n\
             k_r   = {:>9.2}      {}\n\
             le    = {:>9.0} mm   {}\n\
             φMsx  = {:>9.1} kNm  {}",
            self.index,
            self.start_position,
            self.end_position,
            self.restraints,
            self.load_position,
            self.length_mm,
            self.alpha_m,
            as4100_ref::ALPHA_M,
            if self.alpha_m_overridden { " (given)" } else { "" },
            self.k_t,
            as4100_ref::K_T,
            self.k_l,
            as4100_ref::K_L,
            self.k_r,
            as4100_ref::K_R,
            self.effective_length_mm,
            as4100_ref::EFFECTIVE_LENGTH,
            self.phi_ms_knm,
            as4100_ref::SECTION_CAPACITY,
        )
    }
}

/// A flexural member with lateral/torsional restraints
#[derive(Debug, Clone)]
pub struct Member<'a> {
    section: &'a SteelSection,
    length_mm: f64,
    restraints: Vec<Restraint>,
}

impl<'a> Member<'a> {
    /// Create a member. Restraints may be given in any order.
    pub fn new(
        section: &'a SteelSection,
        length_mm: f64,
        restraints: impl IntoIterator<Item = Restraint>,
    ) -> CalcResult<Self> {
        if !(length_mm > 0.0) || !length_mm.is_finite() {
            return Err(CalcError::invalid_input(
                "length_mm",
                length_mm.to_string(),
                "Member length must be positive",
            ));
        }

        let mut member = Member {
            section,
            length_mm,
            restraints: Vec::new(),
        };
        for restraint in restraints {
            member.add_restraint(restraint)?;
        }
        Ok(member)
    }

    /// Add a restraint, keeping the list sorted by position.
    ///
    /// The sort is stable, so restraints sharing a position keep their
    /// insertion order.
    pub fn add_restraint(&mut self, restraint: Restraint) -> CalcResult<()> {
        restraint.validate()?;
        self.restraints.push(restraint);
        self.restraints.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(())
    }

    /// Restraints in position order
    pub fn restraints(&self) -> &[Restraint] {
        &self.restraints
    }

    /// Section this member is made from
    pub fn section(&self) -> &SteelSection {
        self.section
    }

    /// Total length (mm)
    pub fn length_mm(&self) -> f64 {
        self.length_mm
    }

    /// Number of segments the current restraints define
    pub fn segment_count(&self) -> usize {
        self.restraints.len().saturating_sub(1)
    }

    /// Split the member into segments between consecutive restraints.
    ///
    /// `load_positions` and, if given, `alpha_m_overrides` need one entry per
    /// segment. A length mismatch fails before any segment is built.
    pub fn segment(
        &self,
        load_positions: &[LoadPosition],
        bmd: &MomentDiagram,
        alpha_m_overrides: Option<&[f64]>,
    ) -> CalcResult<Vec<Segment>> {
        if self.restraints.len() < 2 {
            return Err(CalcError::invalid_input(
                "restraints",
                self.restraints.len().to_string(),
                "At least two restraints are needed to form a segment",
            ));
        }

        let expected = self.segment_count();
        if load_positions.len() != expected {
            return Err(CalcError::arity_mismatch("load_positions", expected, load_positions.len()));
        }
        if let Some(overrides) = alpha_m_overrides {
            if overrides.len() != expected {
                return Err(CalcError::arity_mismatch("alpha_m_overrides", expected, overrides.len()));
            }
            if let Some(bad) = overrides.iter().find(|v| !(**v > 0.0) || !v.is_finite()) {
                return Err(CalcError::invalid_input(
                    "alpha_m_overrides",
                    bad.to_string(),
                    "Overrides must be positive",
                ));
            }
        }

        debug!(
            section = %self.section.name,
            length_mm = self.length_mm,
            segments = expected,
            "segmenting member"
        );

        self.restraints
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let (start, end) = (pair[0], pair[1]);
                if end.position <= start.position {
                    return Err(CalcError::invalid_input(
                        "restraints",
                        format!("{} at {}", end.kind, end.position),
                        "Consecutive restraints must not share a position",
                    ));
                }
                let alpha_m_override = alpha_m_overrides.map(|o| o[i]);
                Segment::new(i, self.length_mm, start, end, load_positions[i], bmd, alpha_m_override)
            })
            .collect()
    }

    /// Evaluate every segment: α_m, effective length, and the design section
    /// capacity about x. Results are in segment order along the member.
    pub fn calc_phi_mbx(
        &self,
        bmd: &MomentDiagram,
        load_positions: &[LoadPosition],
        alpha_m_overrides: Option<&[f64]>,
    ) -> CalcResult<Vec<SegmentCapacity>> {
        let segments = self.segment(load_positions, bmd, alpha_m_overrides)?;
        let phi_ms_knm = self.section.factored_section_moment_capacity(Axis::X);

        segments
            .iter()
            .map(|segment| {
                let le = segment.calc_effective_length(self.section)?;
                debug!(
                    segment = segment.index(),
                    alpha_m = segment.alpha_m(),
                    le_mm = le.length_mm,
                    "segment evaluated"
                );
                Ok(SegmentCapacity {
                    index: segment.index(),
                    start_position: segment.start().position(),
                    end_position: segment.end().position(),
                    restraints: segment.restraint_pair().code(),
                    length_mm: segment.length_mm(),
                    load_position: segment.load_position(),
                    alpha_m: segment.alpha_m(),
                    alpha_m_overridden: segment.alpha_m_overridden(),
                    k_t: le.k_t,
                    k_l: le.k_l,
                    k_r: le.k_r,
                    effective_length_mm: le.length_mm,
                    phi_ms_knm,
                })
            })
            .collect()
    }
}
