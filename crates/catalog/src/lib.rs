//! Catalog domain module.
//!
//! This crate contains the storefront's browsing rules: the entity model, the
//! product query view, the filter registry, and the home/listing/detail
//! handlers together with their content negotiation. Everything here is
//! deterministic logic over a [`CatalogStore`] (no IO, no HTTP, no templates).

pub mod detail;
pub mod filters;
pub mod home;
pub mod listing;
pub mod model;
pub mod negotiate;
pub mod params;
pub mod query;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use detail::{DetailContext, RELATED_PRODUCTS_LIMIT, build_detail_context, handle_detail};
pub use filters::{FilterParams, ProductFilter};
pub use home::{HomeContext, build_home_context, handle_home};
pub use listing::{
    ListingContext, ListingRequest, SearchIntent, build_listing_context, handle_listing,
};
pub use model::{Category, Price, Product, Size};
pub use negotiate::ListingView;
pub use params::QueryParams;
pub use query::{ProductOrder, ProductQuery, SortDirection};
pub use store::CatalogStore;
pub use view::{EmptyContext, Fragment, Page, Template, TemplateContext, ViewResponse};
