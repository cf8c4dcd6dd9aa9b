use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::main_lib::AppState;

#[derive(Serialize)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "StockShare API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

pub fn root_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(root))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
