use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storelens_core::EntityKind;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_entity_kind(s: &str) -> Result<EntityKind, axum::response::Response> {
    s.parse::<EntityKind>().map_err(|_| {
        let kinds: Vec<&str> = EntityKind::ALL.iter().map(|kind| kind.as_str()).collect();
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_entity_type",
            format!("Invalid entity type. Choose from: {}", kinds.join(", ")),
        )
    })
}
