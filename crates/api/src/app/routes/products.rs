use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Response,
};

use shopfront_catalog::handle_detail;

use crate::app::routes::common::respond;
use crate::app::services::AppServices;
use crate::context::HxRequest;

pub async fn product_detail(
    Extension(services): Extension<Arc<AppServices>>,
    HxRequest(fragment): HxRequest,
    Path(slug): Path<String>,
) -> Response {
    respond(&services, handle_detail(&*services.store, &slug, fragment), fragment)
}
