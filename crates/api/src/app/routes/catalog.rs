use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::Response,
};

use shopfront_catalog::{ListingRequest, QueryParams, handle_listing};

use crate::app::routes::common::respond;
use crate::app::services::AppServices;
use crate::context::HxRequest;

pub async fn catalog_index(
    Extension(services): Extension<Arc<AppServices>>,
    HxRequest(fragment): HxRequest,
    Query(params): Query<QueryParams>,
) -> Response {
    list(&services, None, params, fragment)
}

pub async fn catalog_category(
    Extension(services): Extension<Arc<AppServices>>,
    HxRequest(fragment): HxRequest,
    Path(category_slug): Path<String>,
    Query(params): Query<QueryParams>,
) -> Response {
    list(&services, Some(category_slug), params, fragment)
}

fn list(
    services: &AppServices,
    category_slug: Option<String>,
    params: QueryParams,
    fragment: bool,
) -> Response {
    let request = ListingRequest {
        category_slug,
        params,
        fragment,
    };
    respond(services, handle_listing(&*services.store, &request), fragment)
}
