//! # storefront-core - Core Domain Types
//!
//! Foundation crate for the storefront. Provides domain types, error handling,
//! logging setup, the pagination window algorithm, filter state and the
//! location (query string) codec.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Product`], [`Category`], [`Variant`] - Catalog entities owned by the remote API
//! - [`PaginationInfo`] - Pagination metadata supplied by the API
//! - [`ProductListParams`], [`ProductQuery`] - Full and partial list requests
//! - [`ProductListResponse`] - List payload
//!
//! ### Pagination (`pagination`)
//! - [`visible_pages()`] - Bounded window of page numbers around the current page
//! - [`PageWindow`] - Window plus edge affordances (first/last, ellipses)
//!
//! ### Filters and Locations (`filter`, `route`)
//! - [`FilterState`], [`FilterChange`] - Search text, price bounds and page position
//! - [`Route`] - Catalog or product location, convertible to/from a shareable string
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use storefront_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod pagination;
pub mod price;
pub mod route;
pub mod types;

/// Prelude for common imports used throughout all storefront crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use filter::{
    FilterChange, FilterState, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE,
};
pub use pagination::{
    max_visible_for_width, showing_range, visible_pages, PageWindow, MAX_VISIBLE_NARROW,
    MAX_VISIBLE_WIDE, NARROW_VIEWPORT_WIDTH,
};
pub use price::format_price;
pub use route::Route;
pub use types::{
    Category, PaginationInfo, Product, ProductListParams, ProductListResponse, ProductQuery,
    Variant, LOW_STOCK_THRESHOLD,
};
