//! Product query view.
//!
//! A `ProductQuery` is an immutable snapshot of products. Every operation
//! consumes the view and yields a new, narrower (or reordered) one, so filter
//! steps compose left to right without touching the store.

use crate::model::Product;

/// Sortable product fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProductOrder {
    Id,
    Name,
    Price,
    CreatedAt,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    products: Vec<Product>,
}

impl ProductQuery {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Stable sort: products that compare equal keep their current relative order.
    pub fn order_by(mut self, order: ProductOrder, direction: SortDirection) -> Self {
        self.products.sort_by(|a, b| {
            let ord = match order {
                ProductOrder::Id => a.id.cmp(&b.id),
                ProductOrder::Name => a.name.cmp(&b.name),
                ProductOrder::Price => a.price.cmp(&b.price),
                ProductOrder::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        self
    }

    /// Keep products matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&Product) -> bool,
    {
        Self {
            products: self.products.into_iter().filter(|p| predicate(p)).collect(),
        }
    }

    /// Drop products matching `predicate`.
    pub fn exclude<P>(self, predicate: P) -> Self
    where
        P: Fn(&Product) -> bool,
    {
        self.filter(|p| !predicate(p))
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.products.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn into_vec(self) -> Vec<Product> {
        self.products
    }
}

impl FromIterator<Product> for ProductQuery {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
