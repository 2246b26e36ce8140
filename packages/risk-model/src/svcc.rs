//! Severity / Vulnerability / Criticality / Countermeasure gauge.
//!
//! `((severity + vulnerability * 10 + criticality) / 3) * (10 / countermeasure)`,
//! clamped into 0..=100.

use crate::input::RiskInputs;
use serde::Serialize;

pub const MAX_SCORE: f64 = 100.0;
pub const GREEN_CEILING: f64 = 30.0;
pub const YELLOW_CEILING: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SvccColor {
    /// Resilient
    Green,
    /// Exposed
    Yellow,
    /// Critical
    Red,
}

impl SvccColor {
    /// Band boundaries belong to the lower band.
    pub fn from_score(score: f64) -> Self {
        if score <= GREEN_CEILING {
            SvccColor::Green
        } else if score <= YELLOW_CEILING {
            SvccColor::Yellow
        } else {
            SvccColor::Red
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvccScore {
    pub score: f64,
    pub color: SvccColor,
}

impl SvccScore {
    pub fn compute(inputs: &RiskInputs, vulnerability: f64) -> Self {
        let v_scaled = vulnerability * 10.0;
        let impact = (inputs.severity + v_scaled + inputs.criticality) / 3.0;
        // countermeasure is clamped to >= 1
        let raw = impact * (10.0 / inputs.countermeasure);
        let score = raw.clamp(0.0, MAX_SCORE);

        Self {
            score,
            color: SvccColor::from_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SvccColor::from_score(0.0), SvccColor::Green);
        assert_eq!(SvccColor::from_score(30.0), SvccColor::Green);
        assert_eq!(SvccColor::from_score(30.01), SvccColor::Yellow);
        assert_eq!(SvccColor::from_score(70.0), SvccColor::Yellow);
        assert_eq!(SvccColor::from_score(70.01), SvccColor::Red);
        assert_eq!(SvccColor::from_score(100.0), SvccColor::Red);
    }

    #[test]
    fn test_defaults_score() {
        // (5 + 2 + 5) / 3 * (10 / 3)
        let svcc = SvccScore::compute(&RiskInputs::default(), 0.20);
        assert!((svcc.score - 13.333_333).abs() < 1e-5);
        assert_eq!(svcc.color, SvccColor::Green);
    }

    #[test]
    fn test_score_stays_in_range_at_extremes() {
        let worst = RiskInputs {
            severity: 10.0,
            criticality: 10.0,
            countermeasure: 1.0,
            ..RiskInputs::default()
        };
        let svcc = SvccScore::compute(&worst, 1.0);
        assert_eq!(svcc.score, MAX_SCORE);
        assert_eq!(svcc.color, SvccColor::Red);

        let best = RiskInputs {
            severity: 1.0,
            criticality: 1.0,
            countermeasure: 5.0,
            ..RiskInputs::default()
        };
        let svcc = SvccScore::compute(&best, 0.0);
        assert!(svcc.score >= 0.0 && svcc.score <= MAX_SCORE);
        assert_eq!(svcc.color, SvccColor::Green);
    }

    #[test]
    fn test_color_serializes_as_name() {
        assert_eq!(serde_json::to_string(&SvccColor::Yellow).unwrap(), "\"Yellow\"");
    }
}
