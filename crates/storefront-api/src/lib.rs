//! # storefront-api - Remote Catalog Client
//!
//! Talks to the catalog's tRPC-style HTTP API. Two procedures are used:
//! `product.list` (filtered, paginated listing) and `product.getBySlug`.
//!
//! Depends on [`storefront_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`ApiClient`] - `reqwest`-backed client for the remote API
//! - [`ProductApi`] / [`LocalProductApi`] - Service trait implemented by the client
//!   and by the in-memory catalog used in tests
//! - [`trpc`] - Request URL encoding and response envelope decoding

pub mod client;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod trpc;

pub use client::{ApiClient, ApiClientBuilder, DEFAULT_API_URL};
pub use service::{LocalProductApi, ProductApi};
