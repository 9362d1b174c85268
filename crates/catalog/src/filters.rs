//! Filter registry: recognized query parameters and the predicate each one applies.

use serde::Serialize;

use shopfront_core::{CatalogError, CatalogResult};

use crate::model::Price;
use crate::query::ProductQuery;

/// A registered product filter, keyed by its query-parameter name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProductFilter {
    /// Case-insensitive exact match on color.
    Color,
    /// Price greater than or equal to the value.
    MinPrice,
    /// Price less than or equal to the value.
    MaxPrice,
    /// At least one size named exactly the value.
    Size,
}

impl ProductFilter {
    /// Registry in declared order. Filters are applied in this order.
    pub const ALL: [ProductFilter; 4] = [
        ProductFilter::Color,
        ProductFilter::MinPrice,
        ProductFilter::MaxPrice,
        ProductFilter::Size,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ProductFilter::Color => "color",
            ProductFilter::MinPrice => "min_price",
            ProductFilter::MaxPrice => "max_price",
            ProductFilter::Size => "size",
        }
    }

    /// Narrow `query` by this filter.
    ///
    /// Price filters fail with `CatalogError::Validation` when `value` is not a
    /// non-negative decimal amount.
    pub fn apply(self, query: ProductQuery, value: &str) -> CatalogResult<ProductQuery> {
        let narrowed = match self {
            ProductFilter::Color => {
                let wanted = value.to_lowercase();
                query.filter(|p| p.color.to_lowercase() == wanted)
            }
            ProductFilter::MinPrice => {
                let min = self.parse_price(value)?;
                query.filter(|p| p.price >= min)
            }
            ProductFilter::MaxPrice => {
                let max = self.parse_price(value)?;
                query.filter(|p| p.price <= max)
            }
            ProductFilter::Size => query.filter(|p| p.has_size(value)),
        };
        Ok(narrowed)
    }

    fn parse_price(self, value: &str) -> CatalogResult<Price> {
        value.parse::<Price>().map_err(|_| {
            CatalogError::validation(format!(
                "{} must be a non-negative decimal amount, got {value:?}",
                self.key()
            ))
        })
    }
}

/// Raw filter values echoed back to templates.
///
/// Every registered key plus `q` is always present; absent parameters are
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterParams {
    color: String,
    min_price: String,
    max_price: String,
    size: String,
    q: String,
}

impl FilterParams {
    pub fn get(&self, filter: ProductFilter) -> &str {
        match filter {
            ProductFilter::Color => &self.color,
            ProductFilter::MinPrice => &self.min_price,
            ProductFilter::MaxPrice => &self.max_price,
            ProductFilter::Size => &self.size,
        }
    }

    pub fn set(&mut self, filter: ProductFilter, value: impl Into<String>) {
        let slot = match filter {
            ProductFilter::Color => &mut self.color,
            ProductFilter::MinPrice => &mut self.min_price,
            ProductFilter::MaxPrice => &mut self.max_price,
            ProductFilter::Size => &mut self.size,
        };
        *slot = value.into();
    }

    pub fn query(&self) -> &str {
        &self.q
    }

    pub fn set_query(&mut self, q: impl Into<String>) {
        self.q = q.into();
    }

    /// All five `(key, value)` pairs: registry order, then `q`.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        ProductFilter::ALL
            .into_iter()
            .map(move |f| (f.key(), self.get(f)))
            .chain(std::iter::once(("q", self.q.as_str())))
    }
}
