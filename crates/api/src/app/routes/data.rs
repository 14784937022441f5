//! Read access to the normalized collections.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};

use storelens_core::EntityKind;

use crate::app::{errors, services::AppServices};

/// GET /data/:entity_type - One normalized collection, as entity envelopes
pub async fn get_entities(
    Extension(services): Extension<Arc<AppServices>>,
    Path(entity_type): Path<String>,
) -> axum::response::Response {
    let kind = match errors::parse_entity_kind(&entity_type) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let snapshot = services.snapshot();
    match kind {
        EntityKind::Product => Json(snapshot.products()).into_response(),
        EntityKind::User => Json(snapshot.users()).into_response(),
        EntityKind::Transaction => Json(snapshot.transactions()).into_response(),
    }
}
