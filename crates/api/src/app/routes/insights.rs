//! Insight bundles computed at snapshot build time.

use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::services::AppServices;

/// GET /insights/users - User insight bundle
pub async fn user_insights(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    Json(snapshot.user_insights()).into_response()
}

/// GET /insights/products - Product insight bundle
pub async fn product_insights(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    Json(snapshot.product_insights()).into_response()
}
