use crate::error::ApiError;
use axum::{extract::rejection::JsonRejection, Json};
use risk_model::{RiskInputs, RiskPayload, RiskReport};
use serde_json::{Map, Value};

/// Only JSON objects are accepted; arrays and scalars are rejected by the
/// extractor before any field is looked at.
pub async fn calculate_risk(
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<RiskReport>, ApiError> {
    let Json(body) = body?;
    let inputs = RiskInputs::try_from(RiskPayload::from(body))?;
    let report = risk_model::calculate(inputs)?;

    tracing::debug!(
        tcap = inputs.tcap.get(),
        rs = inputs.rs.get(),
        ale = report.results.ale,
        svcc = report.results.svcc.score,
        "risk calculated"
    );

    Ok(Json(report))
}
