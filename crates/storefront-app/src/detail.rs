//! Product detail page state
//!
//! Every failure, including "no such slug", lands in `NotFound`.

use storefront_core::Product;

use crate::request::{RequestId, RequestTracker};

/// Message toasted when a detail fetch fails
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load product details. Please try again later.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    #[default]
    Loading,
    Found(Box<Product>),
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub slug: String,
    pub phase: DetailPhase,
    tracker: RequestTracker,
}

impl DetailState {
    /// Enter `Loading` for `slug` and issue a request id
    pub fn begin_fetch(&mut self, slug: impl Into<String>) -> RequestId {
        self.slug = slug.into();
        self.phase = DetailPhase::Loading;
        self.tracker.begin()
    }

    /// Returns `false` for stale results
    pub fn apply_found(&mut self, id: RequestId, product: Product) -> bool {
        if !self.tracker.finish(id) {
            return false;
        }
        self.phase = DetailPhase::Found(Box::new(product));
        true
    }

    /// Returns `false` for stale results
    pub fn apply_failed(&mut self, id: RequestId) -> bool {
        if !self.tracker.finish(id) {
            return false;
        }
        self.phase = DetailPhase::NotFound;
        true
    }

    pub fn product(&self) -> Option<&Product> {
        match &self.phase {
            DetailPhase::Found(product) => Some(product),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Loading
    }

    /// "Start Order" is only available for a found, in-stock product
    pub fn can_start_order(&self) -> bool {
        self.product().is_some_and(|p| p.is_in_stock())
    }
}
