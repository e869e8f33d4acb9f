//! HTTP client for the remote catalog API

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_core::prelude::*;
use storefront_core::{Product, ProductListParams, ProductListResponse, ProductQuery};

use crate::service::ProductApi;
use crate::trpc::{self, SlugInput, PRODUCT_BY_SLUG, PRODUCT_LIST};

/// Production catalog endpoint
pub const DEFAULT_API_URL: &str = "https://pesona-api.onrender.com/trpc";

/// Builder for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Per-request timeout. Requests never time out unless this is set.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(ApiClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Client for `product.list` and `product.getBySlug`
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a query procedure and unwrap its envelope
    async fn query<I, T>(&self, procedure: &str, input: &I) -> Result<T>
    where
        I: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = trpc::procedure_url(&self.base_url, procedure, input)?;
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!("{} request failed: {}", procedure, e);
            Error::http(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with {}", procedure, status);
            return Err(Error::http_status(status.as_u16(), procedure));
        }

        let body = response.text().await.map_err(|e| {
            warn!("{} body could not be read: {}", procedure, e);
            Error::http(e.to_string())
        })?;

        trpc::decode_envelope(&body).with_context(|| format!("decoding {procedure} response"))
    }
}

impl ProductApi for ApiClient {
    async fn fetch_products(&self, query: ProductQuery) -> Result<ProductListResponse> {
        let params = ProductListParams::merged(&query);
        let response: ProductListResponse = self.query(PRODUCT_LIST, &params).await?;
        debug!(
            "Fetched {} products (page {}/{}, total {})",
            response.products.len(),
            response.pagination.page,
            response.pagination.pages,
            response.pagination.total
        );
        Ok(response)
    }

    async fn fetch_product_by_slug(&self, slug: &str) -> Result<Product> {
        if slug.trim().is_empty() {
            return Err(Error::invalid_argument("product slug must not be empty"));
        }

        let product: Option<Product> = self
            .query(PRODUCT_BY_SLUG, &SlugInput { slug })
            .await?;

        product.ok_or_else(|| {
            info!("No product with slug {:?}", slug);
            Error::not_found(format!("product '{slug}'"))
        })
    }
}
