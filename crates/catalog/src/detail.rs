//! Product detail page.

use serde::Serialize;

use shopfront_core::{CatalogError, CatalogResult};

use crate::model::{Category, Product};
use crate::negotiate;
use crate::store::CatalogStore;
use crate::view::ViewResponse;

/// Maximum number of related products shown on a detail page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct DetailContext {
    pub product: Product,
    pub categories: Vec<Category>,
    pub related_products: Vec<Product>,
    /// Slug of the product's own category.
    pub current_category: String,
}

pub fn build_detail_context<S>(store: &S, slug: &str) -> CatalogResult<DetailContext>
where
    S: CatalogStore + ?Sized,
{
    let product = store.get_product_by_slug(slug).ok_or_else(|| {
        tracing::debug!(slug, "unknown product slug");
        CatalogError::not_found(format!("product {slug:?}"))
    })?;

    let categories = store.list_categories();
    let current_category = categories
        .iter()
        .find(|c| c.id == product.category)
        .map(|c| c.slug.clone())
        .ok_or_else(|| {
            CatalogError::invariant(format!(
                "product {:?} references unknown category {}",
                product.slug, product.category
            ))
        })?;

    let related_products = store
        .query_products()
        .filter(|p| p.category == product.category)
        .exclude(|p| p.id == product.id)
        .limit(RELATED_PRODUCTS_LIMIT)
        .into_vec();

    Ok(DetailContext {
        product,
        categories,
        related_products,
        current_category,
    })
}

pub fn handle_detail<S>(store: &S, slug: &str, fragment: bool) -> CatalogResult<ViewResponse>
where
    S: CatalogStore + ?Sized,
{
    let context = build_detail_context(store, slug)?;
    Ok(negotiate::detail(fragment, context))
}
