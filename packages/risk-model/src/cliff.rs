use crate::matrix::{self, ResistanceStrength, ThreatCapability};
use serde::Serialize;

/// One point of the capability cliff chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CliffPoint {
    pub tcap: ThreatCapability,
    pub probability: f64,
    pub label: String,
}

/// Success probability of every capability tier against a fixed resistance.
pub fn cliff_series(rs: ResistanceStrength) -> Vec<CliffPoint> {
    ThreatCapability::all()
        .map(|tcap| CliffPoint {
            tcap,
            probability: matrix::vulnerability(tcap, rs),
            label: tcap.to_string(),
        })
        .collect()
}
