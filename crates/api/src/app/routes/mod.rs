use axum::{Router, routing::get};

pub mod catalog;
pub mod common;
pub mod home;
pub mod products;
pub mod system;

/// Router for all storefront pages (read-only).
pub fn router() -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/catalog", get(catalog::catalog_index))
        .route("/catalog/", get(catalog::catalog_index))
        .route("/catalog/:category_slug/", get(catalog::catalog_category))
        .route("/product/:slug/", get(products::product_detail))
}
