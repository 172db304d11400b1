use std::{future::Future, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;
use service::storage::JsonFileBookStore;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the app around the JSON data file named in `cfg`, seeding it if missing.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let store = JsonFileBookStore::open(&cfg.storage.data_file).await?;
    info!(data_file = %store.path().display(), "book store ready");
    let state = AppState::new(Arc::new(store), cfg.server.expose_errors());
    Ok(routes::build_router(state, build_cors()))
}

/// Serve with an explicit configuration; returns once `shutdown` resolves
/// and in-flight requests have finished.
pub async fn run_with_config<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, mode = ?cfg.server.mode, "starting libros server");
    println!("Servidor corriendo en http://{}", addr);
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
