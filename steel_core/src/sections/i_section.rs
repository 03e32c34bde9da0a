//! Doubly-symmetric I-section plate geometry (universal and welded beams)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Plate dimensions of an I-section (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IGeometry {
    /// Overall depth d
    pub d_mm: f64,
    /// Flange width bf
    pub bf_mm: f64,
    /// Flange thickness tf
    pub tf_mm: f64,
    /// Web thickness tw
    pub tw_mm: f64,
    /// Root radius (rolled) or fillet weld leg (welded)
    pub r_mm: f64,
}

impl IGeometry {
    /// Create an I-section geometry
    pub fn new(d_mm: f64, bf_mm: f64, tf_mm: f64, tw_mm: f64, r_mm: f64) -> Self {
        IGeometry {
            d_mm,
            bf_mm,
            tf_mm,
            tw_mm,
            r_mm,
        }
    }

    /// Depth of the web between flanges, d - 2·tf
    pub fn web_depth(&self) -> f64 {
        self.d_mm - 2.0 * self.tf_mm
    }

    /// Web slenderness dw / tw
    pub fn web_slenderness(&self) -> f64 {
        self.web_depth() / self.tw_mm
    }

    /// Flange outstand slenderness (bf - tw) / (2·tf)
    pub fn flange_slenderness(&self) -> f64 {
        (self.bf_mm - self.tw_mm) / (2.0 * self.tf_mm)
    }

    /// Reject geometry the slenderness ratios cannot be formed from
    pub fn validate(&self) -> CalcResult<()> {
        let dims = [
            ("d_mm", self.d_mm),
            ("bf_mm", self.bf_mm),
            ("tf_mm", self.tf_mm),
            ("tw_mm", self.tw_mm),
        ];
        for (field, value) in dims {
            if !(value > 0.0) || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Plate dimensions must be positive",
                ));
            }
        }
        if self.r_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "r_mm",
                self.r_mm.to_string(),
                "Root radius cannot be negative",
            ));
        }
        if self.web_depth() <= 0.0 {
            return Err(CalcError::invalid_input(
                "d_mm",
                self.d_mm.to_string(),
                "Depth must exceed both flange thicknesses",
            ));
        }
        if self.bf_mm <= self.tw_mm {
            return Err(CalcError::invalid_input(
                "bf_mm",
                self.bf_mm.to_string(),
                "Flange must be wider than the web",
            ));
        }
        Ok(())
    }
}
