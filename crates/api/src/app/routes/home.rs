use std::sync::Arc;

use axum::{extract::Extension, response::Response};

use shopfront_catalog::handle_home;

use crate::app::routes::common::respond;
use crate::app::services::AppServices;
use crate::context::HxRequest;

pub async fn home(
    Extension(services): Extension<Arc<AppServices>>,
    HxRequest(fragment): HxRequest,
) -> Response {
    let view = handle_home(&*services.store, fragment);
    respond(&services, Ok(view), fragment)
}
