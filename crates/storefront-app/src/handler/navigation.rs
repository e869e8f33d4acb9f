//! Location changes
//!
//! Every filter, page or product change goes through [`navigate`], which
//! records the location and issues the fetch for it.

use storefront_core::prelude::*;
use storefront_core::{FilterState, Route};

use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Visit `route`, pushing it onto the history
pub fn navigate(state: &mut AppState, route: Route) -> UpdateResult {
    state.history.push(route.clone());
    state.route = route;
    debug!("Location: {}", state.route);
    load_current(state)
}

/// Issue the fetch for the current location
pub fn load_current(state: &mut AppState) -> UpdateResult {
    match state.route.clone() {
        Route::Catalog(filters) => {
            if state.ui_mode != UiMode::Sidebar {
                state.filter_form.sync_from(&filters);
            }
            let query = filters.to_query();
            let request_id = state.listing.begin_fetch(filters);
            UpdateResult::action(UpdateAction::FetchProducts { request_id, query })
        }
        Route::Product { slug } => {
            state.ui_mode = UiMode::Browse;
            let request_id = state.detail.begin_fetch(slug.clone());
            UpdateResult::action(UpdateAction::FetchProduct { request_id, slug })
        }
    }
}

/// Show a catalog page with `filters`
pub fn show_catalog(state: &mut AppState, filters: FilterState) -> UpdateResult {
    navigate(state, Route::Catalog(filters))
}

/// Go to `page` of the current result set, if it exists
pub fn go_to_page(state: &mut AppState, page: u32) -> UpdateResult {
    let total = state.listing.total_pages();
    if page < 1 || page == state.listing.filters.page || (total > 0 && page > total) {
        return UpdateResult::none();
    }
    let filters = state.listing.filters.with_page(page);
    show_catalog(state, filters)
}

pub fn history_back(state: &mut AppState) -> UpdateResult {
    match state.history.back().cloned() {
        Some(route) => {
            state.route = route;
            load_current(state)
        }
        None => UpdateResult::none(),
    }
}

pub fn history_forward(state: &mut AppState) -> UpdateResult {
    match state.history.forward().cloned() {
        Some(route) => {
            state.route = route;
            load_current(state)
        }
        None => UpdateResult::none(),
    }
}
