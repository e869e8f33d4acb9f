//! Filter state and its query-string form
//!
//! [`FilterState`] is the single source of truth for what the catalog shows.
//! Its query-string encoding is what makes a catalog location shareable.

use std::fmt;

use url::form_urlencoded;

use crate::types::ProductQuery;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_MIN_PRICE: i64 = 0;
pub const DEFAULT_MAX_PRICE: i64 = 2000;

/// Query keys, in serialization order
const KEY_PAGE: &str = "page";
const KEY_LIMIT: &str = "limit";
const KEY_SEARCH: &str = "search";
const KEY_MIN_PRICE: &str = "minPrice";
const KEY_MAX_PRICE: &str = "maxPrice";

/// Search text, price bounds and page position of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub min_price: i64,
    pub max_price: i64,
    /// 1-based, never below 1
    pub page: u32,
    pub limit: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A partial update of the filter fields (never the page)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChange {
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl FilterChange {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn price_range(min: i64, max: i64) -> Self {
        Self {
            min_price: Some(min),
            max_price: Some(max),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }
}

impl FilterState {
    /// Default filters with a custom page size and price limits
    pub fn with_defaults(limit: u32, min_price: i64, max_price: i64) -> Self {
        Self {
            limit: limit.max(1),
            min_price,
            max_price,
            ..Default::default()
        }
    }

    /// Merge a filter change; any change sends the user back to page 1
    pub fn apply(&self, change: FilterChange) -> Self {
        Self {
            search: change.search.unwrap_or_else(|| self.search.clone()),
            min_price: change.min_price.unwrap_or(self.min_price),
            max_price: change.max_price.unwrap_or(self.max_price),
            page: 1,
            limit: self.limit,
        }
    }

    /// Move to another page, keeping every filter
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Reset search and price bounds to `defaults`, back to page 1
    pub fn cleared(&self, defaults: &FilterState) -> Self {
        Self {
            search: defaults.search.clone(),
            min_price: defaults.min_price,
            max_price: defaults.max_price,
            page: 1,
            limit: self.limit,
        }
    }

    /// Whether search or price bounds differ from `defaults`
    pub fn is_filtered(&self, defaults: &FilterState) -> bool {
        !self.search.is_empty()
            || self.min_price != defaults.min_price
            || self.max_price != defaults.max_price
    }

    pub fn to_query(&self) -> ProductQuery {
        ProductQuery {
            page: Some(self.page),
            limit: Some(self.limit),
            search: Some(self.search.clone()),
            min_price: Some(self.min_price),
            max_price: Some(self.max_price),
        }
    }

    /// Encode as `page=..&limit=..&search=..&minPrice=..&maxPrice=..`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(KEY_PAGE, &self.page.to_string())
            .append_pair(KEY_LIMIT, &self.limit.to_string())
            .append_pair(KEY_SEARCH, &self.search)
            .append_pair(KEY_MIN_PRICE, &self.min_price.to_string())
            .append_pair(KEY_MAX_PRICE, &self.max_price.to_string())
            .finish()
    }

    /// Parse a query string (with or without a leading `?`) over the standard defaults
    pub fn from_query_string(query: &str) -> Self {
        Self::from_query_string_with(query, &Self::default())
    }

    /// Parse a query string, taking missing or malformed values from `defaults`
    pub fn from_query_string_with(query: &str, defaults: &FilterState) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = defaults.clone();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                KEY_PAGE => {
                    state.page = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|p| *p >= 1)
                        .unwrap_or(1);
                }
                KEY_LIMIT => {
                    state.limit = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|l| *l >= 1)
                        .unwrap_or(defaults.limit);
                }
                KEY_SEARCH => state.search = value.into_owned(),
                KEY_MIN_PRICE => {
                    state.min_price = value.trim().parse().unwrap_or(defaults.min_price);
                }
                KEY_MAX_PRICE => {
                    state.max_price = value.trim().parse().unwrap_or(defaults.max_price);
                }
                _ => {}
            }
        }

        state
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
