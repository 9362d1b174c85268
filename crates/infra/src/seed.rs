//! JSON seed fixtures for the in-memory catalog.
//!
//! Products name their category by slug and their sizes by name; loading
//! resolves both and rejects fixtures that would break slug uniqueness.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use shopfront_catalog::{Category, Price, Product, Size};
use shopfront_core::{CategoryId, ProductId, SizeId};

use crate::read_model::InMemoryCatalogStore;

/// Demo catalog compiled into the binary.
pub const EMBEDDED_SEED: &str = include_str!("../fixtures/demo_catalog.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind} slug {slug:?}")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("duplicate {kind} name {name:?}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },

    #[error("product {product:?} references unknown category {category:?}")]
    UnknownCategory { product: String, category: String },

    #[error("product {product:?} references unknown size {size:?}")]
    UnknownSize { product: String, size: String },
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    categories: Vec<Category>,
    #[serde(default)]
    sizes: Vec<Size>,
    products: Vec<SeedProduct>,
}

#[derive(Debug, Deserialize)]
struct SeedProduct {
    id: ProductId,
    name: String,
    slug: String,
    #[serde(default)]
    description: String,
    price: Price,
    color: String,
    category: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    sizes: Vec<String>,
}

pub fn load_seed_file(path: &Path) -> Result<InMemoryCatalogStore, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_seed(&raw)?;
    tracing::info!(path = %path.display(), products = store.product_count(), "loaded catalog seed");
    Ok(store)
}

pub fn load_embedded_seed() -> Result<InMemoryCatalogStore, SeedError> {
    let store = parse_seed(EMBEDDED_SEED)?;
    tracing::info!(products = store.product_count(), "loaded embedded demo catalog");
    Ok(store)
}

pub fn parse_seed(raw: &str) -> Result<InMemoryCatalogStore, SeedError> {
    let seed: SeedFile = serde_json::from_str(raw)?;

    let mut category_ids: HashMap<String, CategoryId> = HashMap::new();
    let mut seen_category_ids = HashSet::new();
    for c in &seed.categories {
        if !seen_category_ids.insert(c.id) {
            return Err(SeedError::DuplicateId { kind: "category", id: c.id.get() });
        }
        if category_ids.insert(c.slug.clone(), c.id).is_some() {
            return Err(SeedError::DuplicateSlug { kind: "category", slug: c.slug.clone() });
        }
    }

    let mut sizes_by_name: HashMap<&str, &Size> = HashMap::new();
    let mut seen_size_ids: HashSet<SizeId> = HashSet::new();
    for s in &seed.sizes {
        if !seen_size_ids.insert(s.id) {
            return Err(SeedError::DuplicateId { kind: "size", id: s.id.get() });
        }
        if sizes_by_name.insert(s.name.as_str(), s).is_some() {
            return Err(SeedError::DuplicateName { kind: "size", name: s.name.clone() });
        }
    }

    let mut product_slugs = HashSet::new();
    let mut product_ids = HashSet::new();
    let mut products = Vec::with_capacity(seed.products.len());
    for p in &seed.products {
        if !product_ids.insert(p.id) {
            return Err(SeedError::DuplicateId { kind: "product", id: p.id.get() });
        }
        if !product_slugs.insert(p.slug.as_str()) {
            return Err(SeedError::DuplicateSlug { kind: "product", slug: p.slug.clone() });
        }

        let category = *category_ids
            .get(&p.category)
            .ok_or_else(|| SeedError::UnknownCategory {
                product: p.slug.clone(),
                category: p.category.clone(),
            })?;

        let sizes = p
            .sizes
            .iter()
            .map(|name| {
                sizes_by_name
                    .get(name.as_str())
                    .map(|s| (*s).clone())
                    .ok_or_else(|| SeedError::UnknownSize {
                        product: p.slug.clone(),
                        size: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        products.push(Product {
            id: p.id,
            name: p.name.clone(),
            slug: p.slug.clone(),
            description: p.description.clone(),
            price: p.price,
            color: p.color.clone(),
            category,
            created_at: p.created_at,
            sizes,
        });
    }

    let store = InMemoryCatalogStore::new();
    for c in &seed.categories {
        store.upsert_category(c.clone());
    }
    for s in &seed.sizes {
        store.upsert_size(s.clone());
    }
    for p in products {
        store.upsert_product(p);
    }
    Ok(store)
}
