use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::ServiceError;
use tracing::error;

const INTERNAL_ERROR: &str = "Error interno del servidor";
const GENERIC_MESSAGE: &str = "Algo salió mal";

/// Handler error. Service failures keep their own status and message;
/// anything else becomes the generic 500 body.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    Internal { detail: String, expose: bool },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>, expose: bool) -> Self {
        Self::Internal { detail: detail.into(), expose }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self::Service(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(e) => {
                let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(ErrorBody::new(e.to_string()))).into_response()
            }
            ApiError::Internal { detail, expose } => internal_error_response(&detail, expose),
        }
    }
}

/// `500 {"error": "Error interno del servidor", "message": ...}`.
pub fn internal_error_response(detail: &str, expose: bool) -> Response {
    error!(error = %detail, "unexpected error");
    let message = if expose { detail } else { GENERIC_MESSAGE };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::with_message(INTERNAL_ERROR, message)),
    )
        .into_response()
}

/// Panic handler for `CatchPanicLayer`: a panicking handler still answers
/// with the generic 500 body and the server keeps running.
pub fn panic_responder(expose: bool) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |panic: Box<dyn Any + Send + 'static>| {
        let detail = if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "handler panicked".to_string()
        };
        internal_error_response(&detail, expose)
    }
}
