//! # Materials
//!
//! Steel grades supplying yield stress and tensile strength to section
//! construction. The capacity engines only ever see the resulting scalars.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::{SteelGrade, SteelMaterial};
//!
//! let grade = SteelGrade::Grade300;
//! assert_eq!(grade.yield_stress(7.8), 320.0);
//! assert_eq!(grade.yield_stress(14.5), 300.0);
//! assert_eq!(grade.tensile_strength(), 440.0);
//! ```

pub mod steel_grade;

pub use steel_grade::{SteelGrade, SteelMaterial};
