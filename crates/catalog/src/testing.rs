//! Fixtures shared by the unit tests in this crate.

use chrono::{DateTime, TimeZone, Utc};

use shopfront_core::{CategoryId, ProductId, SizeId};

use crate::model::{Category, Price, Product, Size};
use crate::query::ProductQuery;
use crate::store::CatalogStore;

/// Deterministic timestamp: `n` hours after a fixed epoch.
pub fn ts(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::hours(n)
}

pub fn product(id: i64, slug: &str, category: i64, created_at: DateTime<Utc>) -> Product {
    Product {
        id: ProductId::new(id),
        name: slug.replace('-', " "),
        slug: slug.to_string(),
        description: String::new(),
        price: Price::from_cents(1000),
        color: "black".to_string(),
        category: CategoryId::new(category),
        created_at,
        sizes: vec![],
    }
}

pub fn product_with(
    id: i64,
    slug: &str,
    color: &str,
    price: &str,
    sizes: &[&str],
    created_at: DateTime<Utc>,
) -> Product {
    Product {
        color: color.to_string(),
        price: price.parse().unwrap(),
        sizes: sizes
            .iter()
            .enumerate()
            .map(|(i, name)| Size {
                id: SizeId::new(i as i64 + 1),
                name: name.to_string(),
            })
            .collect(),
        ..product(id, slug, 1, created_at)
    }
}

/// Vec-backed store; default order is ascending id.
#[derive(Debug, Clone, Default)]
pub struct VecStore {
    pub categories: Vec<Category>,
    pub sizes: Vec<Size>,
    pub products: Vec<Product>,
}

impl VecStore {
    pub fn category(&self, slug: &str) -> &Category {
        self.categories.iter().find(|c| c.slug == slug).unwrap()
    }
}

impl CatalogStore for VecStore {
    fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn list_sizes(&self) -> Vec<Size> {
        self.sizes.clone()
    }

    fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        self.categories.iter().find(|c| c.slug == slug).cloned()
    }

    fn get_product_by_slug(&self, slug: &str) -> Option<Product> {
        self.products.iter().find(|p| p.slug == slug).cloned()
    }

    fn query_products(&self) -> ProductQuery {
        let mut products = self.products.clone();
        products.sort_by_key(|p| p.id);
        ProductQuery::new(products)
    }
}

/// Three categories; `shoes` holds six products, one of them `blue-sneaker`.
pub fn shoe_store() -> VecStore {
    let categories = vec![
        Category { id: CategoryId::new(1), name: "Shoes".into(), slug: "shoes".into() },
        Category { id: CategoryId::new(2), name: "Shirts".into(), slug: "shirts".into() },
        Category { id: CategoryId::new(3), name: "Hats".into(), slug: "hats".into() },
    ];
    let sizes: Vec<Size> = ["41", "42", "43", "M", "XL"]
        .iter()
        .enumerate()
        .map(|(i, name)| Size { id: SizeId::new(i as i64 + 1), name: name.to_string() })
        .collect();
    let size = |name: &str| sizes.iter().find(|s| s.name == name).cloned().unwrap();

    // (slug, name, description, price, color, category, sizes)
    type Row = (
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        i64,
        &'static [&'static str],
    );
    let rows: [Row; 9] = [
        ("blue-sneaker", "Blue Sneaker", "Canvas sneaker", "59.90", "Blue", 1, &["41", "42"]),
        ("black-derby", "Black Derby", "Red-soled derby", "120.00", "Black", 1, &["42", "43"]),
        ("white-runner", "White Runner", "Running shoe", "89", "white", 1, &["41"]),
        ("black-redline-runner", "Redline Runner", "Fast trainer", "99.00", "BLACK", 1, &["42"]),
        ("red-loafer", "Red Loafer", "Suede loafer", "75", "Red", 1, &["43"]),
        ("brown-boot", "Brown Boot", "Winter boot", "150", "Brown", 1, &["42", "43"]),
        ("red-shirt", "Red Shirt", "Cotton tee", "25", "red", 2, &["M", "XL"]),
        ("black-shirt", "Black Shirt", "Red stitching", "45", "Black", 2, &["M"]),
        ("black-cap", "Black Cap", "Baseball cap", "19.99", "black", 3, &[]),
    ];

    let products = rows
        .iter()
        .zip(1..)
        .map(|(&(slug, name, description, price, color, category, size_names), id)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
            price: price.parse().unwrap(),
            color: color.to_string(),
            category: CategoryId::new(category),
            created_at: ts(id),
            sizes: size_names.iter().map(|n| size(*n)).collect(),
        })
        .collect();

    VecStore { categories, sizes, products }
}
