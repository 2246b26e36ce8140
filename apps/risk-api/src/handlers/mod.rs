use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

pub mod calculate;
pub mod threats;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/threat-defaults", get(threats::get_threat_defaults))
        .route("/api/calculate", post(calculate::calculate_risk))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
