use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::context::HxRequest;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps each request in an `http.request` span and logs its outcome.
pub async fn request_tracing(req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7().to_string();
    let fragment = HxRequest::from_headers(req.headers()).is_fragment();

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        fragment,
    );

    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
