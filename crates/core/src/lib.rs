//! `shopfront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and
//! the layers around it (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::{CategoryId, ProductId, SizeId};
