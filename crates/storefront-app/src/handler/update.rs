//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use storefront_core::prelude::*;
use storefront_core::{format_price, Route};

use crate::detail::DETAIL_ERROR_MESSAGE;
use crate::filter_form::FormField;
use crate::listing::LISTING_ERROR_MESSAGE;
use crate::message::Message;
use crate::state::{AppState, Page, UiMode};

use super::{keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.expire(Instant::now());
            UpdateResult::none()
        }

        Message::Resize { width, .. } => {
            state.viewport_width = width;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::navigate(state, route),
        Message::HistoryBack => navigation::history_back(state),
        Message::HistoryForward => navigation::history_forward(state),
        Message::Reload => navigation::load_current(state),

        Message::BackToProducts => {
            let filters = state.listing.filters.clone();
            navigation::show_catalog(state, filters)
        }

        // ─────────────────────────────────────────────────────────
        // Catalog
        // ─────────────────────────────────────────────────────────
        Message::ApplyFilter(change) => {
            if change.is_empty() {
                return UpdateResult::none();
            }
            let filters = state.listing.filters.apply(change);
            navigation::show_catalog(state, filters)
        }

        Message::ClearFilters => {
            let filters = state.listing.filters.cleared(&state.filter_defaults);
            state.filter_form.sync_from(&filters);
            navigation::show_catalog(state, filters)
        }

        Message::GoToPage(page) => navigation::go_to_page(state, page),

        Message::NextPage => match state.page_window() {
            Some(window) if window.has_next() => navigation::go_to_page(state, window.current + 1),
            _ => UpdateResult::none(),
        },

        Message::PreviousPage => match state.page_window() {
            Some(window) if window.has_previous() => {
                navigation::go_to_page(state, window.current - 1)
            }
            _ => UpdateResult::none(),
        },

        Message::FirstPage => navigation::go_to_page(state, 1),

        Message::LastPage => {
            let last = state.listing.total_pages();
            navigation::go_to_page(state, last)
        }

        Message::SelectNextProduct => {
            state.listing.select_next();
            UpdateResult::none()
        }

        Message::SelectPreviousProduct => {
            state.listing.select_previous();
            UpdateResult::none()
        }

        Message::OpenSelectedProduct => match state.listing.selected_product() {
            Some(product) => {
                let route = Route::product(product.slug.clone());
                navigation::navigate(state, route)
            }
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Filter Sidebar
        // ─────────────────────────────────────────────────────────
        Message::FocusSidebar => {
            if state.page() == Page::Catalog {
                state.filter_form.sync_from(&state.listing.filters);
                state.filter_form.focus = FormField::Search;
                state.ui_mode = UiMode::Sidebar;
            }
            UpdateResult::none()
        }

        Message::SidebarInput { text } => {
            state.filter_form.search = text;
            UpdateResult::none()
        }

        Message::SidebarFocusNext => {
            state.filter_form.focus_next();
            UpdateResult::none()
        }

        Message::SidebarFocusPrev => {
            state.filter_form.focus_prev();
            UpdateResult::none()
        }

        Message::SidebarAdjust(steps) => {
            state.filter_form.adjust(steps);
            UpdateResult::none()
        }

        Message::SidebarSubmit => {
            if state.filter_form.focus == FormField::Reset {
                return UpdateResult::message(Message::SidebarReset);
            }
            state.ui_mode = UiMode::Browse;
            UpdateResult::message(Message::ApplyFilter(state.filter_form.to_change()))
        }

        Message::SidebarReset => {
            state.filter_form.reset();
            state.ui_mode = UiMode::Browse;
            UpdateResult::message(Message::ApplyFilter(state.filter_form.to_change()))
        }

        Message::SidebarCancel => {
            state.filter_form.sync_from(&state.listing.filters);
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail Page
        // ─────────────────────────────────────────────────────────
        Message::ContactSupplier => {
            if let Some(product) = state.detail.product() {
                let description = format!("Your inquiry about {} was sent", product.name);
                state.toasts.info("Supplier contacted", description);
            }
            UpdateResult::none()
        }

        Message::StartOrder => {
            if !state.detail.can_start_order() {
                debug!("Start Order ignored: product unavailable");
                return UpdateResult::none();
            }
            if let Some(product) = state.detail.product() {
                let description = format!(
                    "{} at {}",
                    product.name,
                    format_price(product.price, &state.settings.catalog.currency)
                );
                state.toasts.info("Order started", description);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Results
        // ─────────────────────────────────────────────────────────
        Message::ProductsLoaded {
            request_id,
            response,
        } => {
            let count = response.products.len();
            if state.listing.apply_loaded(request_id, response) {
                info!("Catalog loaded: {} products ({})", count, state.route);
            } else {
                debug!("Dropping stale product list {}", request_id);
            }
            UpdateResult::none()
        }

        Message::ProductsFailed { request_id, error } => {
            if state.listing.apply_failed(request_id, error.clone()) {
                error!("Error fetching products: {}", error);
                state.toasts.error(LISTING_ERROR_MESSAGE);
            } else {
                debug!("Dropping stale product list failure {}", request_id);
            }
            UpdateResult::none()
        }

        Message::ProductLoaded {
            request_id,
            product,
        } => {
            let slug = product.slug.clone();
            if state.detail.apply_found(request_id, *product) {
                info!("Product loaded: {}", slug);
            } else {
                debug!("Dropping stale product {}", request_id);
            }
            UpdateResult::none()
        }

        Message::ProductFailed { request_id, error } => {
            if state.detail.apply_failed(request_id) {
                error!("Error fetching product {:?}: {}", state.detail.slug, error);
                state.toasts.error(DETAIL_ERROR_MESSAGE);
            } else {
                debug!("Dropping stale product failure {}", request_id);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // UI Context
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            UpdateResult::none()
        }

        Message::DismissToast => {
            state.toasts.dismiss_latest();
            UpdateResult::none()
        }
    }
}
