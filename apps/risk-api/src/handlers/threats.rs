use axum::Json;
use std::collections::BTreeMap;

pub async fn get_threat_defaults() -> Json<BTreeMap<&'static str, u8>> {
    Json(risk_model::default_threats())
}
