//! Catalog listing page state
//!
//! ```text
//!            filter/page change
//!   ┌──────────────────────────────────┐
//!   ▼                                  │
//! Loading ──ok, products──▶ Loaded ────┤
//!   │    ──ok, none──────▶ Empty  ─────┤
//!   └────failure─────────▶ Error  ─────┘
//! ```
//!
//! The last successful response survives both new loads and failures so the
//! previous results stay on screen.

use storefront_core::{showing_range, FilterState, PaginationInfo, Product, ProductListResponse};

use crate::request::{RequestId, RequestTracker};

/// Message shown (and toasted) when a listing fetch fails
pub const LISTING_ERROR_MESSAGE: &str = "Failed to load products. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingPhase {
    #[default]
    Loading,
    /// At least one product on the page
    Loaded,
    Empty,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct ListingState {
    /// Filters of the most recently requested page
    pub filters: FilterState,
    pub phase: ListingPhase,
    /// Last successfully loaded response
    pub response: Option<ProductListResponse>,
    /// Details of the last failure, while in `Error`
    pub error: Option<String>,
    /// Highlighted product card
    pub selected: usize,
    tracker: RequestTracker,
}

impl ListingState {
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    /// Enter `Loading` for `filters` and issue a request id
    pub fn begin_fetch(&mut self, filters: FilterState) -> RequestId {
        self.filters = filters;
        self.phase = ListingPhase::Loading;
        self.error = None;
        self.tracker.begin()
    }

    /// Apply a successful response. Returns `false` for stale results.
    pub fn apply_loaded(&mut self, id: RequestId, response: ProductListResponse) -> bool {
        if !self.tracker.finish(id) {
            return false;
        }
        self.phase = if response.is_empty() {
            ListingPhase::Empty
        } else {
            ListingPhase::Loaded
        };
        self.selected = 0;
        self.response = Some(response);
        true
    }

    /// Apply a failure, keeping the previous response. Returns `false` for stale results.
    pub fn apply_failed(&mut self, id: RequestId, error: String) -> bool {
        if !self.tracker.finish(id) {
            return false;
        }
        self.phase = ListingPhase::Error;
        self.error = Some(error);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListingPhase::Loading
    }

    pub fn products(&self) -> &[Product] {
        self.response
            .as_ref()
            .map(|r| r.products.as_slice())
            .unwrap_or_default()
    }

    pub fn pagination(&self) -> Option<&PaginationInfo> {
        self.response.as_ref().map(|r| &r.pagination)
    }

    /// Page the server answered with; the requested page before any load.
    /// The two differ when the server clamps an out-of-range page.
    pub fn current_page(&self) -> u32 {
        self.pagination()
            .map(|p| p.page)
            .filter(|&page| page > 0)
            .unwrap_or(self.filters.page)
    }

    /// Total page count of the last response (0 before any load)
    pub fn total_pages(&self) -> u32 {
        self.pagination().map(|p| p.pages).unwrap_or(0)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.products().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// `(first, last, total)` for "Showing a - b of N products"
    pub fn showing(&self) -> Option<(u32, u32, u32)> {
        self.pagination().map(|p| {
            let (first, last) = showing_range(p);
            (first, last, p.total)
        })
    }
}
