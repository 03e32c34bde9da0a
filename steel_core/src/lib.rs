//! # steel_core - Steel Member Design Engine
//!
//! `steel_core` checks hot-rolled and welded I-sections in bending to
//! AS 4100. It has two engines:
//!
//! - **Section capacity**: plate element slenderness, compactness
//!   classification, effective section modulus and φMs about either axis.
//! - **Member segmentation**: splits a member at its restraints, slices the
//!   bending moment diagram per segment, and derives α_m and the effective
//!   length of each segment.
//!
//! All inputs and outputs implement Serialize/Deserialize, and every failure
//! comes back as a structured [`CalcError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use steel_core::codes::DesignCode;
//! use steel_core::materials::SteelGrade;
//! use steel_core::member::{LoadPosition, Member, MomentDiagram, Restraint, RestraintType};
//! use steel_core::sections::{builtin_sections, Axis};
//!
//! let section = builtin_sections()
//!     .section("310UB40.4", SteelGrade::Grade300, DesignCode::default())
//!     .unwrap();
//! println!("φMsx = {:.1} kNm", section.factored_section_moment_capacity(Axis::X));
//!
//! let member = Member::new(&section, 6000.0, vec![
//!     Restraint::new(RestraintType::Fixed, 0.0).unwrap(),
//!     Restraint::new(RestraintType::Fixed, 1.0).unwrap(),
//! ]).unwrap();
//! let bmd = MomentDiagram::from_pairs(&[(0.0, 0.0), (0.5, 90.0), (1.0, 0.0)]).unwrap();
//! let segments = member.calc_phi_mbx(&bmd, &[LoadPosition::WithinTopFlange], None).unwrap();
//! assert_eq!(segments[0].k_l, 1.4);
//! ```
//!
//! ## Modules
//!
//! - [`sections`] - Section geometry, catalogue and section capacity
//! - [`member`] - Restraints, segments, α_m and effective length
//! - [`codes`] - Code provisions (slenderness limits, φ)
//! - [`materials`] - Steel grades
//! - [`design_input`] - JSON member design files
//! - [`errors`] - Structured error types

pub mod codes;
pub mod design_input;
pub mod errors;
pub mod materials;
pub mod member;
pub mod sections;

// Re-export commonly used types at crate root for convenience
pub use design_input::{load_design_input, parse_design_input, MemberDesignInput, MemberDesignResult};
pub use errors::{CalcError, CalcResult};
pub use member::{LoadPosition, Member, MomentDiagram, Restraint, RestraintType, SegmentCapacity};
pub use sections::{Axis, SteelSection};
