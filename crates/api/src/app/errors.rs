use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use shopfront_core::CatalogError;

use crate::render::Templates;

/// Status code for a catalog error.
pub fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
        CatalogError::InvariantViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn catalog_error_to_response(
    templates: &Templates,
    err: CatalogError,
    fragment: bool,
) -> Response {
    let status = status_for(&err);
    let (title, message) = match &err {
        CatalogError::NotFound(_) => {
            ("Not found", "The page you asked for does not exist.".to_string())
        }
        CatalogError::Validation(msg) => ("Bad request", msg.clone()),
        CatalogError::InvariantViolation(_) => {
            tracing::error!(error = %err, "catalog invariant violated");
            ("Server error", "Something went wrong on our side.".to_string())
        }
    };
    html_error(templates, status, title, &message, fragment)
}

/// Error page; its shape depends on the fragment header, so it varies on it.
pub fn html_error(
    templates: &Templates,
    status: StatusCode,
    title: &str,
    message: &str,
    fragment: bool,
) -> Response {
    match templates.render_error(status.as_u16(), title, message, fragment) {
        Ok(body) => (status, [(header::VARY, "HX-Request")], Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render error page");
            (
                status,
                [
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                    (header::VARY, "HX-Request"),
                ],
                format!("{} {title}", status.as_u16()),
            )
                .into_response()
        }
    }
}

pub fn render_failed(templates: &Templates, err: &minijinja::Error, fragment: bool) -> Response {
    tracing::error!(error = %err, "template rendering failed");
    html_error(
        templates,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server error",
        "Something went wrong on our side.",
        fragment,
    )
}
