//! Catalog store abstraction consumed by the request handlers.

use std::sync::Arc;

use crate::model::{Category, Product, Size};
use crate::query::ProductQuery;

/// Read-only access to the catalog.
///
/// Implementations own their synchronization; handlers call these methods
/// from any request thread.
pub trait CatalogStore: Send + Sync {
    fn list_categories(&self) -> Vec<Category>;
    fn list_sizes(&self) -> Vec<Size>;
    fn get_category_by_slug(&self, slug: &str) -> Option<Category>;
    fn get_product_by_slug(&self, slug: &str) -> Option<Product>;
    /// All products, in store default order (ascending identifier).
    fn query_products(&self) -> ProductQuery;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn list_categories(&self) -> Vec<Category> {
        (**self).list_categories()
    }

    fn list_sizes(&self) -> Vec<Size> {
        (**self).list_sizes()
    }

    fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        (**self).get_category_by_slug(slug)
    }

    fn get_product_by_slug(&self, slug: &str) -> Option<Product> {
        (**self).get_product_by_slug(slug)
    }

    fn query_products(&self) -> ProductQuery {
        (**self).query_products()
    }
}
