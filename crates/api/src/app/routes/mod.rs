use axum::{routing::get, Router};

pub mod admin;
pub mod data;
pub mod insights;
pub mod system;

/// Router for every endpoint except the health probe.
pub fn router() -> Router {
    Router::new()
        .route("/data/:entity_type", get(data::get_entities))
        .route("/insights/users", get(insights::user_insights))
        .route("/insights/products", get(insights::product_insights))
        .nest("/admin", admin::router())
}
