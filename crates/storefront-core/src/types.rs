//! Catalog domain types shared across the storefront crates
//!
//! Field names follow the remote API's camelCase wire format. The client never
//! mutates these values; they are received, displayed and dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE};

/// Stock at or below this quantity (and above zero) shows the low-stock badge
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A catalog product as returned by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Price in whole currency units
    pub price: i64,
    pub image_url: String,
    pub stock_quantity: u32,
    pub category_id: String,
    pub category: Category,
    #[serde(default)]
    pub variants: Vec<Variant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Average rating (0-5), only rendered when the API supplies it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,

    /// Verified-supplier flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Whether the "Only N left" badge applies
    pub fn is_low_stock(&self) -> bool {
        self.is_in_stock() && self.stock_quantity <= LOW_STOCK_THRESHOLD
    }

    /// Location of this product's detail page
    pub fn location(&self) -> String {
        format!("/product/{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product specification entry (name/value pair)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub value: String,
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination metadata. Trusted as supplied by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub pages: u32,
}

impl PaginationInfo {
    pub fn has_multiple_pages(&self) -> bool {
        self.pages > 1
    }
}

/// Complete input for `product.list`
///
/// Key order matters: the serialized JSON is the request's `input` parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub min_price: i64,
    pub max_price: i64,
}

impl Default for ProductListParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl ProductListParams {
    /// Merge a partial query over the defaults
    pub fn merged(query: &ProductQuery) -> Self {
        let defaults = Self::default();
        Self {
            page: query.page.unwrap_or(defaults.page),
            limit: query.limit.unwrap_or(defaults.limit),
            search: query.search.clone().unwrap_or(defaults.search),
            min_price: query.min_price.unwrap_or(defaults.min_price),
            max_price: query.max_price.unwrap_or(defaults.max_price),
        }
    }
}

/// Partial `product.list` request; absent fields take the defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: PaginationInfo,
}

impl ProductListResponse {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": "p-1",
        "sku": "PH-001",
        "slug": "phone-x",
        "name": "Phone X",
        "description": "A capable phone",
        "price": 1299,
        "imageUrl": "https://img.example/phone-x.png",
        "stockQuantity": 4,
        "categoryId": "c-1",
        "createdAt": "2024-01-05T10:00:00.000Z",
        "updatedAt": "2024-02-01T08:30:00.000Z",
        "category": {
            "id": "c-1",
            "name": "Phones",
            "description": "Mobile phones",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        },
        "variants": [
            {"id": "v-1", "name": "Storage", "value": "128GB", "productId": "p-1",
             "createdAt": "2024-01-05T10:00:00.000Z", "updatedAt": "2024-01-05T10:00:00.000Z"},
            {"id": "v-2", "name": "Color", "value": "Black", "productId": "p-1"}
        ]
    }"#;

    fn product_with_stock(stock: u32) -> Product {
        let mut product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        product.stock_quantity = stock;
        product
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.slug, "phone-x");
        assert_eq!(product.image_url, "https://img.example/phone-x.png");
        assert_eq!(product.stock_quantity, 4);
        assert_eq!(product.category.name, "Phones");
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[0].name, "Storage");
        assert!(product.variants[1].created_at.is_none());
        assert!(product.rating.is_none());
        assert!(product.verified.is_none());
    }

    #[test]
    fn test_variants_keep_order() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let names: Vec<_> = product.variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Storage", "Color"]);
    }

    #[test]
    fn test_low_stock_boundaries() {
        assert!(product_with_stock(5).is_low_stock());
        assert!(product_with_stock(1).is_low_stock());
        assert!(!product_with_stock(6).is_low_stock());
        assert!(!product_with_stock(0).is_low_stock());
    }

    #[test]
    fn test_in_stock() {
        assert!(!product_with_stock(0).is_in_stock());
        assert!(product_with_stock(1).is_in_stock());
    }

    #[test]
    fn test_product_location() {
        assert_eq!(product_with_stock(1).location(), "/product/phone-x");
    }

    #[test]
    fn test_params_serialize_in_key_order() {
        let params = ProductListParams {
            page: 2,
            limit: 12,
            search: "phone".into(),
            min_price: 0,
            max_price: 2000,
        };
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"page":2,"limit":12,"search":"phone","minPrice":0,"maxPrice":2000}"#
        );
    }

    #[test]
    fn test_params_merged_over_defaults() {
        let query = ProductQuery {
            page: Some(3),
            search: Some("lamp".into()),
            ..Default::default()
        };
        let params = ProductListParams::merged(&query);
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(params.search, "lamp");
        assert_eq!(params.min_price, 0);
        assert_eq!(params.max_price, 2000);
    }

    #[test]
    fn test_pagination_has_multiple_pages() {
        let single = PaginationInfo {
            page: 1,
            limit: 12,
            total: 3,
            pages: 1,
        };
        assert!(!single.has_multiple_pages());
        let many = PaginationInfo { pages: 2, ..single };
        assert!(many.has_multiple_pages());
    }
}
