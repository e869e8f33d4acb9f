//! Test utilities for catalog types
//!
//! Provides product fixtures and [`FakeCatalog`], an in-memory
//! implementation of [`ProductApi`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde::Serialize;
use storefront_core::prelude::*;
use storefront_core::{
    Category, PaginationInfo, Product, ProductListParams, ProductListResponse, ProductQuery,
    Variant,
};

use crate::service::ProductApi;

/// Creates a test product in the "Electronics" category with one variant.
///
/// # Arguments
/// * `slug` - Product slug (also used to derive the id and sku)
/// * `name` - Display name
/// * `price` - Whole-unit price
/// * `stock` - Stock quantity
pub fn test_product(slug: &str, name: &str, price: i64, stock: u32) -> Product {
    let created = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).single().unwrap_or_default();
    let id = format!("prod-{slug}");
    Product {
        id: id.clone(),
        sku: slug.to_uppercase(),
        slug: slug.to_string(),
        name: name.to_string(),
        description: format!("{name} from a verified supplier"),
        price,
        image_url: format!("https://img.example/{slug}.png"),
        stock_quantity: stock,
        category_id: "cat-electronics".to_string(),
        category: Category {
            id: "cat-electronics".to_string(),
            name: "Electronics".to_string(),
            description: "Gadgets and devices".to_string(),
            created_at: Some(created),
            updated_at: Some(created),
        },
        variants: vec![Variant {
            id: format!("{id}-storage"),
            name: "Storage".to_string(),
            value: "128GB".to_string(),
            product_id: id,
            created_at: Some(created),
            updated_at: Some(created),
        }],
        created_at: created,
        updated_at: created,
        rating: None,
        review_count: None,
        verified: None,
    }
}

/// `count` products named `"{prefix} {n}"` priced 100, 200, ...
pub fn test_products(prefix: &str, count: usize) -> Vec<Product> {
    (1..=count)
        .map(|n| {
            let slug = format!("{}-{n}", prefix.to_lowercase().replace(' ', "-"));
            test_product(&slug, &format!("{prefix} {n}"), n as i64 * 100, 10)
        })
        .collect()
}

/// Wrap a payload in the tRPC response envelope
pub fn envelope<T: Serialize>(payload: &T) -> String {
    serde_json::json!({ "result": { "data": { "json": payload } } }).to_string()
}

/// In-memory catalog with the remote API's filtering and pagination
#[derive(Debug, Clone, Default)]
pub struct FakeCatalog {
    products: Arc<Vec<Product>>,
    failing: Arc<AtomicBool>,
    list_calls: Arc<AtomicUsize>,
    slug_calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
            ..Default::default()
        }
    }

    /// Make every subsequent call fail with a transport error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn slug_calls(&self) -> usize {
        self.slug_calls.load(Ordering::SeqCst)
    }

    fn check_failing(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::http("connection refused"));
        }
        Ok(())
    }

    fn list(&self, params: &ProductListParams) -> ProductListResponse {
        let needle = params.search.to_lowercase();
        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .filter(|p| p.price >= params.min_price && p.price <= params.max_price)
            .collect();

        let limit = params.limit.max(1);
        let total = matching.len() as u32;
        let pages = total.div_ceil(limit);
        let skip = (params.page.max(1) - 1) as usize * limit as usize;

        ProductListResponse {
            products: matching
                .into_iter()
                .skip(skip)
                .take(limit as usize)
                .cloned()
                .collect(),
            pagination: PaginationInfo {
                page: params.page,
                limit,
                total,
                pages,
            },
        }
    }
}

impl ProductApi for FakeCatalog {
    async fn fetch_products(&self, query: ProductQuery) -> Result<ProductListResponse> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        Ok(self.list(&ProductListParams::merged(&query)))
    }

    async fn fetch_product_by_slug(&self, slug: &str) -> Result<Product> {
        self.slug_calls.fetch_add(1, Ordering::SeqCst);
        if slug.trim().is_empty() {
            return Err(Error::invalid_argument("product slug must not be empty"));
        }
        self.check_failing()?;
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("product '{slug}'")))
    }
}
