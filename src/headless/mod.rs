//! Headless mode - NDJSON event output instead of the TUI
//!
//! Resolves the requested location once and prints what happened to stdout,
//! one JSON object per line. Useful for scripts and smoke tests against a
//! live API.
//!
//! # Example Output
//!
//! ```json
//! {"event":"catalog_loaded","location":"/?page=2&limit=12&search=phone&minPrice=0&maxPrice=2000","product_count":8,"total":20,"page":2,"pages":2,"timestamp":1760544000000}
//! {"event":"product_not_found","slug":"ghost","timestamp":1760544000000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use storefront_app::EngineEvent;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A catalog page loaded, possibly with no products
    CatalogLoaded {
        location: String,
        product_count: usize,
        total: u32,
        page: u32,
        pages: u32,
        timestamp: i64,
    },

    ProductLoaded {
        slug: String,
        name: String,
        in_stock: bool,
        timestamp: i64,
    },

    ProductNotFound { slug: String, timestamp: i64 },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current time in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Map an engine event; events with no headless counterpart give `None`
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::CatalogLoaded {
                location,
                product_count,
                pagination,
            } => Some(Self::CatalogLoaded {
                location: location.clone(),
                product_count: *product_count,
                total: pagination.total,
                page: pagination.page,
                pages: pagination.pages,
                timestamp,
            }),
            EngineEvent::CatalogFailed { error, .. } => Some(Self::Error {
                message: error.clone(),
                fatal: false,
                timestamp,
            }),
            EngineEvent::ProductLoaded {
                slug,
                name,
                in_stock,
            } => Some(Self::ProductLoaded {
                slug: slug.clone(),
                name: name.clone(),
                in_stock: *in_stock,
                timestamp,
            }),
            EngineEvent::ProductNotFound { slug } => Some(Self::ProductNotFound {
                slug: slug.clone(),
                timestamp,
            }),
            EngineEvent::LocationChanged { .. } | EngineEvent::Shutdown => None,
        }
    }
}
