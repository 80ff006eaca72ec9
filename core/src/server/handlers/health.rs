use axum::Json;
use serde::Serialize;

use crate::classify::MimeCategory;

#[derive(Serialize)]
pub(in crate::server) struct HealthResponse {
    ok: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[derive(Serialize)]
pub(in crate::server) struct InfoResponse {
    version: &'static str,
    labels: [MimeCategory; 4],
}

pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION"),
        labels: MimeCategory::ALL,
    })
}
