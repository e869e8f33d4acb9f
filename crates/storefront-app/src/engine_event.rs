//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use storefront_core::PaginationInfo;

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The current location changed
    LocationChanged { location: String },

    /// A catalog page finished loading (with or without products)
    CatalogLoaded {
        location: String,
        product_count: usize,
        pagination: PaginationInfo,
    },

    /// A catalog fetch failed
    CatalogFailed { location: String, error: String },

    /// A product detail page finished loading
    ProductLoaded {
        slug: String,
        name: String,
        in_stock: bool,
    },

    /// A product could not be loaded
    ProductNotFound { slug: String },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event type name for logging and serialization
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::LocationChanged { .. } => "location_changed",
            EngineEvent::CatalogLoaded { .. } => "catalog_loaded",
            EngineEvent::CatalogFailed { .. } => "catalog_failed",
            EngineEvent::ProductLoaded { .. } => "product_loaded",
            EngineEvent::ProductNotFound { .. } => "product_not_found",
            EngineEvent::Shutdown => "shutdown",
        }
    }

    /// Whether this event settles a page load
    pub fn is_load_outcome(&self) -> bool {
        matches!(
            self,
            EngineEvent::CatalogLoaded { .. }
                | EngineEvent::CatalogFailed { .. }
                | EngineEvent::ProductLoaded { .. }
                | EngineEvent::ProductNotFound { .. }
        )
    }
}
