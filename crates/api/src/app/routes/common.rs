use axum::http::header;
use axum::response::{Html, IntoResponse, Response};

use shopfront_core::CatalogResult;
use shopfront_catalog::ViewResponse;

use crate::app::errors;
use crate::app::services::AppServices;

/// Render a handler outcome, or its error page.
///
/// Successful responses vary on the fragment header so caches keep full pages
/// and fragments apart.
pub fn respond(
    services: &AppServices,
    outcome: CatalogResult<ViewResponse>,
    fragment: bool,
) -> Response {
    let view = match outcome {
        Ok(view) => view,
        Err(e) => return errors::catalog_error_to_response(&services.templates, e, fragment),
    };

    match services.templates.render(&view) {
        Ok(body) => ([(header::VARY, "HX-Request")], Html(body)).into_response(),
        Err(e) => errors::render_failed(&services.templates, &e, fragment),
    }
}
