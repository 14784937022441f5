use std::path::PathBuf;
use std::sync::Arc;

use storelens_api::app::services::AppServices;
use storelens_sources::{DataSource, HttpSource, SourceConfig};

#[tokio::main]
async fn main() {
    storelens_observability::init();

    let config = SourceConfig::from_env();
    let source: Arc<dyn DataSource> = match HttpSource::new(config) {
        Ok(source) => Arc::new(source),
        Err(err) => {
            tracing::error!("Failed to build HTTP client: {}", err);
            std::process::exit(1);
        }
    };

    let snapshot_dir = std::env::var("STORELENS_SNAPSHOT_DIR")
        .ok()
        .map(PathBuf::from);
    let services = Arc::new(AppServices::new(source, snapshot_dir));

    let snapshot = services.refresh().await;
    tracing::info!(
        "Serving snapshot with {} products, {} users, {} transactions",
        snapshot.products().len(),
        snapshot.users().len(),
        snapshot.transactions().len(),
    );

    let app = storelens_api::app::build_app(services);

    let addr = std::env::var("STORELENS_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
