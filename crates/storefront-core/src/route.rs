//! Locations: the shareable string form of what the storefront shows
//!
//! A location is either the catalog (`/?page=2&limit=12&search=phone&...`) or a
//! product detail page (`/product/<slug>`). Full URLs are accepted too; only
//! the path and query are read.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::filter::FilterState;

/// Base used to resolve relative locations
const LOCATION_BASE: &str = "http://storefront.local/";

/// Characters escaped inside a slug path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog(FilterState),
    Product { slug: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::Catalog(FilterState::default())
    }
}

impl Route {
    pub fn product(slug: impl Into<String>) -> Self {
        Route::Product { slug: slug.into() }
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self, Route::Catalog(_))
    }

    /// Parse a location over the standard filter defaults
    pub fn parse(location: &str) -> Self {
        Self::parse_with(location, &FilterState::default())
    }

    /// Parse a location, seeding catalog filters from `defaults`
    ///
    /// Anything that is not `/product/<slug>` resolves to the catalog.
    pub fn parse_with(location: &str, defaults: &FilterState) -> Self {
        let location = location.trim();
        let url = match Url::parse(LOCATION_BASE).and_then(|base| base.join(location)) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Unreadable location {:?} ({}), showing catalog", location, e);
                return Route::Catalog(defaults.clone());
            }
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        if let ["product", slug] = segments.as_slice() {
            let slug = percent_decode_str(slug).decode_utf8_lossy().into_owned();
            return Route::Product { slug };
        }

        if !segments.is_empty() {
            tracing::debug!("Unknown path {:?}, showing catalog", url.path());
        }

        Route::Catalog(FilterState::from_query_string_with(
            url.query().unwrap_or_default(),
            defaults,
        ))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Catalog(filters) => write!(f, "/?{}", filters.to_query_string()),
            Route::Product { slug } => {
                write!(f, "/product/{}", utf8_percent_encode(slug, SEGMENT))
            }
        }
    }
}
