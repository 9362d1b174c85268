//! Per-request context derived from headers.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderName, request::Parts},
};

/// Header the front end sets on partial-page requests.
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// Whether the request asks for an HTML fragment instead of a full page.
///
/// Only the header's presence matters; its value is ignored. Header names
/// are case-insensitive, so `HX-Request` and `hx-request` are the same.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl HxRequest {
    pub fn from_headers(headers: &axum::http::HeaderMap) -> Self {
        Self(headers.contains_key(HX_REQUEST))
    }

    pub fn is_fragment(self) -> bool {
        self.0
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
