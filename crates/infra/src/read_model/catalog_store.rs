use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use shopfront_catalog::{CatalogStore, Category, Product, ProductQuery, Size};
use shopfront_core::{CategoryId, ProductId, SizeId};

#[derive(Debug, Default)]
struct CatalogTables {
    categories: BTreeMap<CategoryId, Category>,
    sizes: BTreeMap<SizeId, Size>,
    products: BTreeMap<ProductId, Product>,
    category_slugs: HashMap<String, CategoryId>,
    product_slugs: HashMap<String, ProductId>,
}

/// In-memory catalog store for dev/tests.
///
/// Tables are keyed by identifier, so every listing comes back in ascending
/// identifier order (the store default order). Upserts replace by id and keep
/// the slug indexes in step.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<CatalogTables>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_category(&self, category: Category) {
        if let Ok(mut t) = self.inner.write() {
            let old_slug = t.categories.get(&category.id).map(|old| old.slug.clone());
            if let Some(slug) = old_slug {
                t.category_slugs.remove(&slug);
            }
            t.category_slugs.insert(category.slug.clone(), category.id);
            t.categories.insert(category.id, category);
        }
    }

    pub fn upsert_size(&self, size: Size) {
        if let Ok(mut t) = self.inner.write() {
            t.sizes.insert(size.id, size);
        }
    }

    pub fn upsert_product(&self, product: Product) {
        if let Ok(mut t) = self.inner.write() {
            let old_slug = t.products.get(&product.id).map(|old| old.slug.clone());
            if let Some(slug) = old_slug {
                t.product_slugs.remove(&slug);
            }
            t.product_slugs.insert(product.slug.clone(), product.id);
            t.products.insert(product.id, product);
        }
    }

    pub fn product_count(&self) -> usize {
        self.inner.read().map(|t| t.products.len()).unwrap_or(0)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn list_categories(&self) -> Vec<Category> {
        match self.inner.read() {
            Ok(t) => t.categories.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn list_sizes(&self) -> Vec<Size> {
        match self.inner.read() {
            Ok(t) => t.sizes.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        let t = self.inner.read().ok()?;
        let id = t.category_slugs.get(slug)?;
        t.categories.get(id).cloned()
    }

    fn get_product_by_slug(&self, slug: &str) -> Option<Product> {
        let t = self.inner.read().ok()?;
        let id = t.product_slugs.get(slug)?;
        t.products.get(id).cloned()
    }

    fn query_products(&self) -> ProductQuery {
        match self.inner.read() {
            Ok(t) => t.products.values().cloned().collect(),
            Err(_) => ProductQuery::default(),
        }
    }
}
