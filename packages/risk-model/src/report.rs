use crate::cliff::{cliff_series, CliffPoint};
use crate::error::InputError;
use crate::fair::FairAnalysis;
use crate::input::RiskInputs;
use crate::svcc::{SvccColor, SvccScore};
use serde::Serialize;

/// Full response of a calculation: the clamped inputs echoed back plus results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub inputs: RiskInputs,
    pub results: RiskResults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskResults {
    pub vulnerability: f64,
    pub lef: f64,
    pub primary_loss: f64,
    pub secondary_loss: f64,
    pub single_loss_expectancy: f64,
    pub ale: f64,
    pub cliff_data: Vec<CliffPoint>,
    pub svcc: SvccSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvccSummary {
    pub score: f64,
    pub color: SvccColor,
}

/// Run both models over already-clamped inputs.
///
/// Rounding happens here and only here: lef to 4 places, ale and the SVCC
/// score to 2. The color band is picked from the unrounded score. Every
/// figure in a returned report is finite.
pub fn calculate(inputs: RiskInputs) -> Result<RiskReport, InputError> {
    let fair = FairAnalysis::compute(&inputs)?;
    let svcc = SvccScore::compute(&inputs, fair.vulnerability);

    Ok(RiskReport {
        inputs,
        results: RiskResults {
            vulnerability: fair.vulnerability,
            lef: round_to(fair.lef, 4),
            primary_loss: fair.primary_loss,
            secondary_loss: fair.secondary_loss,
            single_loss_expectancy: fair.single_loss_expectancy,
            ale: round_to(fair.ale, 2),
            cliff_data: cliff_series(inputs.rs),
            svcc: SvccSummary {
                score: round_to(svcc.score, 2),
                color: svcc.color,
            },
        },
    })
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    // huge magnitudes have no fractional part left to round
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RiskPayload;
    use serde_json::json;

    fn report_for(body: serde_json::Value) -> RiskReport {
        let map = body.as_object().cloned().unwrap();
        calculate(RiskInputs::try_from(RiskPayload::from(map)).unwrap()).unwrap()
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123_456, 4), 0.1235);
        assert_eq!(round_to(148_500.000_000_000_03, 2), 148_500.0);
        assert_eq!(round_to(-2.346, 2), -2.35);
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
    }

    #[test]
    fn test_reference_scenario() {
        let report = report_for(json!({ "tcap": 5, "rs": 1, "asset_value": 100000, "tef": 1 }));
        let results = &report.results;

        assert_eq!(results.vulnerability, 0.99);
        assert_eq!(results.lef, 0.99);
        assert_eq!(results.primary_loss, 100_000.0);
        assert_eq!(results.secondary_loss, 50_000.0);
        assert_eq!(results.single_loss_expectancy, 150_000.0);
        assert_eq!(results.ale, 148_500.0);
        assert_eq!(results.cliff_data.len(), 5);
    }

    #[test]
    fn test_out_of_range_tcap_matches_top_tier() {
        let clamped = report_for(json!({ "tcap": 9, "rs": 2 }));
        let top = report_for(json!({ "tcap": 5, "rs": 2 }));

        assert_eq!(clamped, top);
        assert_eq!(clamped.inputs.tcap.get(), 5);
    }

    #[test]
    fn test_lef_rounded_to_four_places() {
        let report = report_for(json!({ "tcap": 3, "rs": 3, "tef": 0.123_456 }));
        // 0.123456 * 0.20
        assert_eq!(report.results.lef, 0.0247);
    }

    #[test]
    fn test_overflowing_loss_is_rejected() {
        let map = json!({ "tcap": 5, "rs": 1, "asset_value": 1e308, "tef": 10 })
            .as_object()
            .cloned()
            .unwrap();
        let err = calculate(RiskInputs::try_from(RiskPayload::from(map)).unwrap()).unwrap_err();

        assert_eq!(err.field(), "tef");
    }

    #[test]
    fn test_report_json_shape() {
        let report = report_for(json!({}));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["inputs"]["tcap"], 3);
        assert_eq!(value["inputs"]["rs"], 3);
        assert_eq!(value["inputs"]["countermeasure"], 3.0);
        assert_eq!(value["results"]["svcc"]["color"], "Green");
        assert_eq!(value["results"]["svcc"]["score"], 13.33);
        assert_eq!(value["results"]["cliff_data"][0]["label"], "TCap 1");
        assert_eq!(value["results"]["cliff_data"][4]["tcap"], 5);
    }
}
