//! Bending Moment Diagrams
//!
//! A diagram is an ordered list of (relative position, moment) samples over
//! the member. Between samples the moment is linear; outside the sampled
//! range it is held at the end value.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Tolerance for the diagram end positions
const POSITION_TOLERANCE: f64 = 1e-9;

/// One sample of a bending moment diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentSample {
    /// Relative position along the member, 0 to 1
    pub position: f64,
    /// Bending moment (kNm)
    pub moment: f64,
}

impl MomentSample {
    /// Create a sample
    pub fn new(position: f64, moment: f64) -> Self {
        MomentSample { position, moment }
    }
}

/// Bending moment diagram with strictly increasing positions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentDiagram {
    samples: Vec<MomentSample>,
}

impl MomentDiagram {
    /// Create a member diagram.
    ///
    /// Requires at least two finite samples whose positions increase strictly
    /// from 0 to 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steel_core::member::{MomentDiagram, MomentSample};
    ///
    /// let bmd = MomentDiagram::new(vec![
    ///     MomentSample::new(0.0, 0.0),
    ///     MomentSample::new(0.5, 100.0),
    ///     MomentSample::new(1.0, 0.0),
    /// ]).unwrap();
    /// assert_eq!(bmd.moment_at(0.25), 50.0);
    /// ```
    pub fn new(samples: Vec<MomentSample>) -> CalcResult<Self> {
        if samples.len() < 2 {
            return Err(CalcError::invalid_input(
                "moment_diagram",
                format!("{} samples", samples.len()),
                "At least two samples are required",
            ));
        }

        for sample in &samples {
            if !sample.position.is_finite() || !sample.moment.is_finite() {
                return Err(CalcError::invalid_input(
                    "moment_diagram",
                    format!("({}, {})", sample.position, sample.moment),
                    "Samples must be finite",
                ));
            }
        }

        for pair in samples.windows(2) {
            if pair[1].position <= pair[0].position {
                return Err(CalcError::invalid_input(
                    "moment_diagram",
                    format!("{} then {}", pair[0].position, pair[1].position),
                    "Positions must be strictly increasing",
                ));
            }
        }

        let first = samples[0].position;
        let last = samples[samples.len() - 1].position;
        if first.abs() > POSITION_TOLERANCE || (last - 1.0).abs() > POSITION_TOLERANCE {
            return Err(CalcError::invalid_input(
                "moment_diagram",
                format!("[{}, {}]", first, last),
                "Diagram must span relative positions 0 to 1",
            ));
        }

        Ok(MomentDiagram { samples })
    }

    /// Create a member diagram from (position, moment) pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> CalcResult<Self> {
        Self::new(pairs.iter().map(|&(p, m)| MomentSample::new(p, m)).collect())
    }

    /// Samples in position order
    pub fn samples(&self) -> &[MomentSample] {
        &self.samples
    }

    /// First sampled position
    pub fn start(&self) -> f64 {
        self.samples[0].position
    }

    /// Last sampled position
    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1].position
    }

    /// Positional span covered by the samples
    pub fn span(&self) -> f64 {
        self.end() - self.start()
    }

    /// Linearly interpolated moment at a relative position.
    ///
    /// Positions before the first or after the last sample take that
    /// sample's moment.
    pub fn moment_at(&self, position: f64) -> f64 {
        let first = &self.samples[0];
        let last = &self.samples[self.samples.len() - 1];
        if position <= first.position {
            return first.moment;
        }
        if position >= last.position {
            return last.moment;
        }

        // First sample strictly beyond the position; 1 ≤ upper < len here
        let upper = self.samples.partition_point(|s| s.position <= position);
        let a = &self.samples[upper - 1];
        let b = &self.samples[upper];
        a.moment + (b.moment - a.moment) * (position - a.position) / (b.position - a.position)
    }

    /// Largest moment magnitude over all samples
    pub fn max_abs_moment(&self) -> f64 {
        self.samples.iter().map(|s| s.moment.abs()).fold(0.0, f64::max)
    }

    /// Portion of the diagram between two positions.
    ///
    /// The result starts and ends with interpolated values at `start` and
    /// `end`, keeping every original sample strictly between them. Positions
    /// stay relative to the whole member. `start` must lie strictly before
    /// `end`.
    pub fn slice(&self, start: f64, end: f64) -> CalcResult<MomentDiagram> {
        if !(start < end) {
            return Err(CalcError::invalid_input(
                "moment_diagram.slice",
                format!("[{}, {}]", start, end),
                "Slice start must lie before its end",
            ));
        }

        let mut samples = Vec::with_capacity(self.samples.len() + 2);
        samples.push(MomentSample::new(start, self.moment_at(start)));
        samples.extend(
            self.samples
                .iter()
                .filter(|s| s.position > start && s.position < end)
                .copied(),
        );
        samples.push(MomentSample::new(end, self.moment_at(end)));
        Ok(MomentDiagram { samples })
    }
}

impl<'de> Deserialize<'de> for MomentDiagram {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            samples: Vec<MomentSample>,
        }

        let raw = Raw::deserialize(deserializer)?;
        MomentDiagram::new(raw.samples).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MomentDiagram {
        MomentDiagram::from_pairs(&[(0.0, 0.0), (0.4, 80.0), (1.0, -40.0)]).unwrap()
    }

    #[test]
    fn test_interpolation() {
        let bmd = triangle();
        assert_eq!(bmd.moment_at(0.0), 0.0);
        assert!((bmd.moment_at(0.2) - 40.0).abs() < 1e-9);
        assert_eq!(bmd.moment_at(0.4), 80.0);
        assert!((bmd.moment_at(0.7) - 20.0).abs() < 1e-9);
        assert_eq!(bmd.moment_at(1.0), -40.0);
    }

    #[test]
    fn test_interpolation_clamps_outside_range() {
        let bmd = triangle();
        assert_eq!(bmd.moment_at(-0.5), 0.0);
        assert_eq!(bmd.moment_at(1.5), -40.0);
    }

    #[test]
    fn test_slice_keeps_interior_samples() {
        let bmd = triangle();
        let sub = bmd.slice(0.2, 0.7).unwrap();
        let positions: Vec<f64> = sub.samples().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.2, 0.4, 0.7]);
        assert!((sub.samples()[0].moment - 40.0).abs() < 1e-9);
        assert!((sub.samples()[2].moment - 20.0).abs() < 1e-9);
        assert!((sub.span() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_slice_on_sample_boundary_does_not_duplicate() {
        let bmd = triangle();
        let sub = bmd.slice(0.0, 0.4).unwrap();
        let positions: Vec<f64> = sub.samples().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.4]);
        assert_eq!(sub.max_abs_moment(), 80.0);
    }

    #[test]
    fn test_slice_rejects_empty_or_reversed_range() {
        let bmd = triangle();
        let err = bmd.slice(0.7, 0.2).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(bmd.slice(0.5, 0.5).is_err());
        assert!(bmd.slice(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_max_abs_moment_uses_magnitude() {
        let bmd = MomentDiagram::from_pairs(&[(0.0, -120.0), (1.0, 60.0)]).unwrap();
        assert_eq!(bmd.max_abs_moment(), 120.0);
    }

    #[test]
    fn test_rejects_unordered_positions() {
        let err = MomentDiagram::from_pairs(&[(0.0, 0.0), (0.6, 1.0), (0.5, 2.0), (1.0, 0.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(MomentDiagram::from_pairs(&[(0.0, 0.0), (0.5, 1.0), (0.5, 2.0), (1.0, 0.0)]).is_err());
    }

    #[test]
    fn test_rejects_partial_span_and_short_diagrams() {
        assert!(MomentDiagram::from_pairs(&[(0.1, 0.0), (1.0, 0.0)]).is_err());
        assert!(MomentDiagram::from_pairs(&[(0.0, 0.0), (0.9, 0.0)]).is_err());
        assert!(MomentDiagram::from_pairs(&[(0.0, 0.0)]).is_err());
        assert!(MomentDiagram::from_pairs(&[(0.0, f64::NAN), (1.0, 0.0)]).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: MomentDiagram =
            serde_json::from_str(r#"{"samples":[{"position":0.0,"moment":1.0},{"position":1.0,"moment":2.0}]}"#).unwrap();
        assert_eq!(ok.samples().len(), 2);

        let bad = serde_json::from_str::<MomentDiagram>(
            r#"{"samples":[{"position":1.0,"moment":1.0},{"position":0.0,"moment":2.0}]}"#,
        );
        assert!(bad.is_err());
    }
}
