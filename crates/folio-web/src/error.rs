use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use folio_core::FolioError;

use crate::render;

/// A page handler could not assemble its content. The visitor gets a generic
/// 500 page with the trace id that was logged alongside the cause.
#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn page_error_response(err: FolioError, operation: &str, site_title: &str) -> Response {
    let payload = err.to_payload(operation, None);
    tracing::error!(
        trace_id = %payload.trace_id,
        code = err.code(),
        operation,
        error = %err,
        "page rendering failed"
    );
    let message = if err.is_content_error() {
        "A content file on this site could not be read."
    } else {
        "The page could not be loaded."
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::error_page(site_title, message, &payload.trace_id)),
    )
        .into_response()
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn asset_error_response(err: FolioError, operation: &str, path: Option<String>) -> Response {
    let status = status_for_folio_error(&err);
    let payload = err.to_payload(operation, path);
    if status.is_server_error() {
        tracing::error!(trace_id = %payload.trace_id, code = err.code(), error = %err, "asset request failed");
    } else {
        tracing::debug!(code = err.code(), error = %err, "asset request rejected");
    }
    (status, Json(payload)).into_response()
}

fn status_for_folio_error(err: &FolioError) -> StatusCode {
    match err {
        FolioError::PathTraversal(_) => StatusCode::BAD_REQUEST,
        FolioError::NotFound(_) => StatusCode::NOT_FOUND,
        FolioError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND
        }
        FolioError::MalformedJson { .. }
        | FolioError::NotAnObject(_)
        | FolioError::Config(_)
        | FolioError::Toml(_)
        | FolioError::Walk(_)
        | FolioError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
