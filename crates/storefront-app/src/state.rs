//! Application state (Model in TEA pattern)

use std::time::Duration;

use storefront_core::{max_visible_for_width, visible_pages, FilterState, PageWindow, Route};

use crate::config::{Settings, ThemeMode};
use crate::detail::DetailState;
use crate::filter_form::FilterForm;
use crate::history::History;
use crate::listing::ListingState;
use crate::toast::ToastQueue;

/// Which page the current location shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Product,
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Product grid, pagination or detail page
    #[default]
    Browse,
    /// Filter sidebar form
    Sidebar,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Current location
    pub route: Route,

    pub history: History,

    pub listing: ListingState,

    pub detail: DetailState,

    pub filter_form: FilterForm,

    pub ui_mode: UiMode,

    /// Process-wide notification queue
    pub toasts: ToastQueue,

    pub theme: ThemeMode,

    /// Terminal width in columns
    pub viewport_width: u16,

    /// What "Clear all filters" and "Reset All" restore
    pub filter_defaults: FilterState,

    quitting: bool,
}

impl AppState {
    /// Create state for `initial`. Nothing is fetched until the first `Reload`.
    pub fn new(settings: Settings, initial: Route) -> Self {
        let filter_defaults = settings.filter_defaults();

        let listing_filters = match &initial {
            Route::Catalog(filters) => filters.clone(),
            Route::Product { .. } => filter_defaults.clone(),
        };

        let mut filter_form = FilterForm::new(&filter_defaults, settings.catalog.price_step);
        filter_form.sync_from(&listing_filters);

        Self {
            route: initial.clone(),
            history: History::new(initial),
            listing: ListingState::new(listing_filters),
            detail: DetailState::default(),
            filter_form,
            ui_mode: UiMode::Browse,
            toasts: ToastQueue::new(Duration::from_millis(settings.ui.toast_duration_ms)),
            theme: settings.ui.theme,
            viewport_width: u16::MAX,
            filter_defaults,
            quitting: false,
            settings,
        }
    }

    pub fn page(&self) -> Page {
        match self.route {
            Route::Catalog(_) => Page::Catalog,
            Route::Product { .. } => Page::Product,
        }
    }

    /// Shareable string form of the current location
    pub fn location(&self) -> String {
        self.route.to_string()
    }

    /// Pagination window for the current viewport, once a listing has loaded
    pub fn page_window(&self) -> Option<PageWindow> {
        let pagination = self.listing.pagination()?;
        let max_visible = max_visible_for_width(self.viewport_width, self.settings.ui.narrow_width);
        Some(visible_pages(
            self.listing.current_page(),
            pagination.pages,
            max_visible,
        ))
    }

    pub fn is_filtered(&self) -> bool {
        self.listing.filters.is_filtered(&self.filter_defaults)
    }

    pub fn currency(&self) -> &str {
        &self.settings.catalog.currency
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), Route::default())
    }
}
