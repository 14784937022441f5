//! Admin surface: trigger a refresh, inspect the build report.

use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::dto::{RefreshResponse, ReportResponse};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/refresh", post(refresh))
        .route("/report", get(report))
}

/// POST /admin/refresh - Rebuild the snapshot from the live sources
pub async fn refresh(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.refresh().await;
    Json(RefreshResponse::from_snapshot(&snapshot)).into_response()
}

/// GET /admin/report - Build report of the snapshot currently served
pub async fn report(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let snapshot = services.snapshot();
    Json(ReportResponse::from_snapshot(&snapshot)).into_response()
}
