//! Catalog service trait
//!
//! The app layer only sees this trait, so the remote client and the in-memory
//! catalog used in tests are interchangeable.

use storefront_core::prelude::*;
use storefront_core::{Product, ProductListResponse, ProductQuery};

/// Catalog read operations
///
/// Implement the `Send` variant [`ProductApi`]; [`LocalProductApi`] comes for free.
#[trait_variant::make(ProductApi: Send)]
pub trait LocalProductApi {
    /// Fetch one page of products matching the query (merged over defaults)
    async fn fetch_products(&self, query: ProductQuery) -> Result<ProductListResponse>;

    /// Fetch a single product by slug
    ///
    /// Fails with `Error::InvalidArgument` for an empty slug and
    /// `Error::NotFound` when no product has that slug.
    async fn fetch_product_by_slug(&self, slug: &str) -> Result<Product>;
}
