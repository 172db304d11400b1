pub mod books;

use axum::{
    extract::OriginalUri,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{ErrorBody, Health, Welcome};

use crate::errors::panic_responder;
use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Endpoint index")))]
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome::default())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// 404 for any unmatched path or method, naming the requested URL.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorBody>) {
    let requested = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::with_message(
            "Ruta no encontrada",
            format!("La ruta {requested} no existe en este servidor"),
        )),
    )
}

/// Build the full application router: index, health, API docs and the book endpoints.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(welcome).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route("/api-docs/openapi.json", get(openapi_json).fallback(not_found));

    let books = Router::new()
        .route(
            "/api/libros",
            get(books::list_books).post(books::create_book).fallback(not_found),
        )
        .route(
            "/api/libros/:id",
            get(books::get_book).delete(books::delete_book).fallback(not_found),
        );

    let expose_errors = state.expose_errors;
    public
        .merge(books)
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_responder(expose_errors)))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
