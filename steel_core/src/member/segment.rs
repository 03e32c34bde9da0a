//! # Segments
//!
//! A segment is the part of a member between two consecutive restraints. It
//! is the unit over which the moment modification factor α_m and the
//! effective length are worked out (AS 4100 5.6).
//!
//! ## Effective Length (AS 4100 5.6.3)
//!
//! ```text
//! le = kt · kl · kr · l
//! ```
//!
//! | Restraints      | kt                                   |
//! |-----------------|--------------------------------------|
//! | FF, FL, LL, FU  | 1.0                                  |
//! | FP, PL, PU      | 1 + (d1/l)(tf/2tw)³ / nw             |
//! | PP              | 1 + 2(d1/l)(tf/2tw)³ / nw            |

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::diagram::MomentDiagram;
use super::{Restraint, RestraintType};
use crate::errors::{CalcError, CalcResult};
use crate::sections::PlateElements;

/// Upper bound on α_m
pub const ALPHA_M_MAX: f64 = 2.5;

/// Where the load is applied within a segment and over the section depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadPosition {
    /// Load within the segment at the shear centre
    #[serde(rename = "WS")]
    WithinShearCentre,
    /// Load at a segment end at the shear centre
    #[serde(rename = "ES")]
    EndShearCentre,
    /// Load within the segment on the top flange
    #[serde(rename = "WT")]
    WithinTopFlange,
    /// Load at a segment end on the top flange
    #[serde(rename = "ET")]
    EndTopFlange,
}

impl LoadPosition {
    /// All load positions
    pub const ALL: [LoadPosition; 4] = [
        LoadPosition::WithinShearCentre,
        LoadPosition::EndShearCentre,
        LoadPosition::WithinTopFlange,
        LoadPosition::EndTopFlange,
    ];

    /// Two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            LoadPosition::WithinShearCentre => "WS",
            LoadPosition::EndShearCentre => "ES",
            LoadPosition::WithinTopFlange => "WT",
            LoadPosition::EndTopFlange => "ET",
        }
    }

    /// True when the load acts on the top flange
    pub fn is_top_flange(&self) -> bool {
        matches!(self, LoadPosition::WithinTopFlange | LoadPosition::EndTopFlange)
    }
}

impl FromStr for LoadPosition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WS" => Ok(LoadPosition::WithinShearCentre),
            "ES" => Ok(LoadPosition::EndShearCentre),
            "WT" => Ok(LoadPosition::WithinTopFlange),
            "ET" => Ok(LoadPosition::EndTopFlange),
            _ => Err(CalcError::invalid_load_position(s)),
        }
    }
}

impl std::fmt::Display for LoadPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unordered pair of restraint types at the two ends of a segment.
///
/// Stored in canonical order, so (F, P) and (P, F) compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RestraintPair {
    low: RestraintType,
    high: RestraintType,
}

impl RestraintPair {
    /// Pair two restraint types in either order
    pub fn new(a: RestraintType, b: RestraintType) -> Self {
        if a <= b {
            RestraintPair { low: a, high: b }
        } else {
            RestraintPair { low: b, high: a }
        }
    }

    /// Canonical two-letter code, e.g. "FP"
    pub fn code(&self) -> String {
        format!("{}{}", self.low.code(), self.high.code())
    }

    /// True when either end is unrestrained
    pub fn has_unrestrained_end(&self) -> bool {
        self.high == RestraintType::Unrestrained
    }

    /// Twist restraint factor kt.
    ///
    /// `d1` is the clear web depth and `length` the segment length, both mm.
    pub fn twist_factor(&self, section: &impl PlateElements, length: f64) -> CalcResult<f64> {
        use RestraintType::*;

        let partial_term = || {
            let d1 = section.web_depth();
            let tf = section.flange_thickness();
            let tw = section.web_thickness();
            (d1 / length) * (tf / 2.0 / tw).powi(3) / section.web_count()
        };

        match (self.low, self.high) {
            (Fixed, Fixed) | (Fixed, Lateral) | (Lateral, Lateral) | (Fixed, Unrestrained) => Ok(1.0),
            (Fixed, Partial) | (Partial, Lateral) | (Partial, Unrestrained) => Ok(1.0 + partial_term()),
            (Partial, Partial) => Ok(1.0 + 2.0 * partial_term()),
            _ => Err(CalcError::invalid_restraint_code(self.code())),
        }
    }

    /// Load height factor kl
    pub fn load_height_factor(&self, load: LoadPosition) -> f64 {
        if !load.is_top_flange() {
            1.0
        } else if self.has_unrestrained_end() {
            2.0
        } else if load == LoadPosition::WithinTopFlange {
            1.4
        } else {
            1.0
        }
    }
}

impl FromStr for RestraintPair {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => {
                let a = RestraintType::from_code(a).ok_or_else(|| CalcError::invalid_restraint_code(s))?;
                let b = RestraintType::from_code(b).ok_or_else(|| CalcError::invalid_restraint_code(s))?;
                Ok(RestraintPair::new(a, b))
            }
            _ => Err(CalcError::invalid_restraint_code(s)),
        }
    }
}

impl std::fmt::Display for RestraintPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Effective length of a segment and the factors that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveLength {
    /// Twist restraint factor
    pub k_t: f64,
    /// Load height factor
    pub k_l: f64,
    /// Lateral rotation restraint factor
    pub k_r: f64,
    /// Effective length le (mm)
    pub length_mm: f64,
}

/// Moment modification factor for a segment's moment distribution.
///
/// ```text
/// α_m = min(2.5, 1.7·M*m / √(M2² + M3² + M4²))
/// ```
///
/// M2..M4 are the moments at the quarter points of the diagram's span and
/// M*m the largest moment magnitude anywhere in it. A vanishing denominator
/// is reported as a numeric domain failure; callers who know α_m for such a
/// distribution should supply it as an override instead.
pub fn calc_alpha_m(diagram: &MomentDiagram) -> CalcResult<f64> {
    let start = diagram.start();
    let span = diagram.span();

    let m2 = diagram.moment_at(start + 0.25 * span);
    let m3 = diagram.moment_at(start + 0.5 * span);
    let m4 = diagram.moment_at(start + 0.75 * span);
    let m_max = diagram.max_abs_moment();

    let denominator = (m2 * m2 + m3 * m3 + m4 * m4).sqrt();
    if !(denominator > 0.0) || !denominator.is_finite() {
        return Err(CalcError::numeric_domain(
            "alpha_m",
            format!("quarter-point moments ({}, {}, {}) give a zero denominator", m2, m3, m4),
        ));
    }

    let alpha_m = (1.7 * m_max / denominator).min(ALPHA_M_MAX);
    trace!(m2, m3, m4, m_max, alpha_m, "alpha_m from moment distribution");
    Ok(alpha_m)
}

/// Portion of a member between two consecutive restraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    index: usize,
    length_mm: f64,
    start: Restraint,
    end: Restraint,
    load_position: LoadPosition,
    diagram: MomentDiagram,
    alpha_m: f64,
    alpha_m_overridden: bool,
}

impl Segment {
    /// Build a segment from its bounding restraints.
    ///
    /// `member_diagram` is sliced to the restraint positions. α_m is taken
    /// from `alpha_m_override` when given (capped at 2.5), otherwise derived
    /// from the sliced diagram.
    pub(crate) fn new(
        index: usize,
        member_length_mm: f64,
        start: Restraint,
        end: Restraint,
        load_position: LoadPosition,
        member_diagram: &MomentDiagram,
        alpha_m_override: Option<f64>,
    ) -> CalcResult<Self> {
        let diagram = member_diagram.slice(start.position(), end.position())?;
        let (alpha_m, alpha_m_overridden) = match alpha_m_override {
            Some(value) => (value.min(ALPHA_M_MAX), true),
            None => (calc_alpha_m(&diagram)?, false),
        };

        Ok(Segment {
            index,
            length_mm: member_length_mm * (end.position() - start.position()),
            start,
            end,
            load_position,
            diagram,
            alpha_m,
            alpha_m_overridden,
        })
    }

    /// Position of this segment along the member, from 0
    pub fn index(&self) -> usize {
        self.index
    }

    /// Physical length (mm)
    pub fn length_mm(&self) -> f64 {
        self.length_mm
    }

    /// Restraint at the start of the segment
    pub fn start(&self) -> &Restraint {
        &self.start
    }

    /// Restraint at the end of the segment
    pub fn end(&self) -> &Restraint {
        &self.end
    }

    /// Load position tag
    pub fn load_position(&self) -> LoadPosition {
        self.load_position
    }

    /// Bending moment diagram confined to this segment
    pub fn diagram(&self) -> &MomentDiagram {
        &self.diagram
    }

    /// Moment modification factor
    pub fn alpha_m(&self) -> f64 {
        self.alpha_m
    }

    /// True when α_m came from a caller override
    pub fn alpha_m_overridden(&self) -> bool {
        self.alpha_m_overridden
    }

    /// Restraint types at both ends, order-insensitive
    pub fn restraint_pair(&self) -> RestraintPair {
        RestraintPair::new(self.start.kind(), self.end.kind())
    }

    /// Recompute α_m from this segment's own diagram
    pub fn calc_alpha_m(&self) -> CalcResult<f64> {
        calc_alpha_m(&self.diagram)
    }

    /// Effective length of this segment (AS 4100 5.6.3).
    ///
    /// kr is held at 1.0; lateral rotation restraint is not credited.
    pub fn calc_effective_length(&self, section: &impl PlateElements) -> CalcResult<EffectiveLength> {
        let pair = self.restraint_pair();
        let k_t = pair.twist_factor(section, self.length_mm)?;
        let k_l = pair.load_height_factor(self.load_position);
        let k_r = 1.0;

        let effective = EffectiveLength {
            k_t,
            k_l,
            k_r,
            length_mm: k_t * k_l * k_r * self.length_mm,
        };
        trace!(segment = self.index, pair = %pair, k_t, k_l, le_mm = effective.length_mm, "effective length");
        Ok(effective)
    }
}
