//! Tests for handler module

use super::*;
use crate::detail::{DetailPhase, DETAIL_ERROR_MESSAGE};
use crate::filter_form::FormField;
use crate::input_key::InputKey;
use crate::listing::{ListingPhase, LISTING_ERROR_MESSAGE};
use crate::message::Message;
use crate::state::{AppState, Page, UiMode};
use crate::toast::ToastVariant;
use storefront_api::test_utils::{test_product, test_products};
use storefront_core::{FilterChange, PaginationInfo, Product, ProductListResponse, Route};

fn products_request(result: &UpdateResult) -> (RequestId, ProductQuery) {
    match &result.action {
        Some(UpdateAction::FetchProducts { request_id, query }) => (*request_id, query.clone()),
        other => panic!("expected FetchProducts, got {other:?}"),
    }
}

fn product_request(result: &UpdateResult) -> (RequestId, String) {
    match &result.action {
        Some(UpdateAction::FetchProduct { request_id, slug }) => (*request_id, slug.clone()),
        other => panic!("expected FetchProduct, got {other:?}"),
    }
}

/// One page of a `total`-product result set
fn page_response(page: u32, limit: u32, total: u32) -> ProductListResponse {
    let skipped = (page - 1) * limit;
    let count = total.saturating_sub(skipped).min(limit);
    ProductListResponse {
        products: test_products("Phone", count as usize),
        pagination: PaginationInfo {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        },
    }
}

/// Answer the fetch in `result` with the matching page of `total` products
fn answer(state: &mut AppState, result: &UpdateResult, total: u32) {
    let (request_id, query) = products_request(result);
    let response = page_response(query.page.unwrap_or(1), query.limit.unwrap_or(12), total);
    update(
        state,
        Message::ProductsLoaded {
            request_id,
            response,
        },
    );
}

/// State with the first catalog page of `total` products loaded
fn loaded_catalog(total: u32) -> AppState {
    let mut state = AppState::default();
    let result = update(&mut state, Message::Reload);
    answer(&mut state, &result, total);
    state
}

/// State showing `product` on its detail page
fn detail_page(product: Product) -> AppState {
    let mut state = loaded_catalog(20);
    let result = update(&mut state, Message::Navigate(Route::product(product.slug.clone())));
    let (request_id, _) = product_request(&result);
    update(
        &mut state,
        Message::ProductLoaded {
            request_id,
            product: Box::new(product),
        },
    );
    state
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::default();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::default();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_catalog_pagination_keys() {
    let state = AppState::default();
    assert!(matches!(
        handle_key(&state, InputKey::Right),
        Some(Message::NextPage)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('[')),
        Some(Message::PreviousPage)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::GoToPage(3))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::End),
        Some(Message::LastPage)
    ));
}

#[test]
fn test_slash_opens_sidebar() {
    let state = AppState::default();
    assert!(matches!(
        handle_key(&state, InputKey::Char('/')),
        Some(Message::FocusSidebar)
    ));
}

#[test]
fn test_product_page_keys() {
    let state = AppState::new(Default::default(), Route::product("lamp"));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::BackToProducts)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('o')),
        Some(Message::StartOrder)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('s')),
        Some(Message::ContactSupplier)
    ));
    // Pagination keys do nothing on the detail page
    assert!(handle_key(&state, InputKey::Right).is_none());
}

#[test]
fn test_sidebar_typing_builds_search_text() {
    let mut state = AppState::default();
    update(&mut state, Message::FocusSidebar);
    state.filter_form.search = "lam".into();

    match handle_key(&state, InputKey::Char('p')) {
        Some(Message::SidebarInput { text }) => assert_eq!(text, "lamp"),
        other => panic!("expected SidebarInput, got {other:?}"),
    }
    match handle_key(&state, InputKey::Backspace) {
        Some(Message::SidebarInput { text }) => assert_eq!(text, "la"),
        other => panic!("expected SidebarInput, got {other:?}"),
    }
    // 'q' is text here, not quit
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::SidebarInput { .. })
    ));
    match handle_key(&state, InputKey::Delete) {
        Some(Message::SidebarInput { text }) => assert!(text.is_empty()),
        other => panic!("expected SidebarInput, got {other:?}"),
    }
}

#[test]
fn test_sidebar_arrows_adjust_price_fields() {
    let mut state = AppState::default();
    update(&mut state, Message::FocusSidebar);
    state.filter_form.focus = FormField::MaxPrice;

    assert!(matches!(
        handle_key(&state, InputKey::Left),
        Some(Message::SidebarAdjust(-1))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::PageUp),
        Some(Message::SidebarAdjust(10))
    ));
}

#[test]
fn test_reversed_price_limits_in_settings_do_not_break_sliders() {
    let mut settings = crate::config::Settings::default();
    settings.catalog.min_price = 500;
    settings.catalog.max_price = 100;
    let defaults = settings.filter_defaults();
    let mut state = AppState::new(settings, Route::Catalog(defaults));

    update(&mut state, Message::FocusSidebar);
    update(&mut state, Message::SidebarFocusNext);
    update(&mut state, Message::SidebarAdjust(1));
    assert_eq!(state.filter_form.focus, FormField::MinPrice);
    assert_eq!(state.filter_form.min_price, 110);

    update(&mut state, Message::SidebarFocusNext);
    update(&mut state, Message::SidebarAdjust(1));
    assert_eq!(state.filter_form.max_price, 500);
    assert_eq!(
        (state.filter_form.limit_min, state.filter_form.limit_max),
        (100, 500)
    );
}

// ─────────────────────────────────────────────────────────
// Listing
// ─────────────────────────────────────────────────────────

#[test]
fn test_reload_issues_fetch_for_location() {
    let mut state = AppState::new(
        Default::default(),
        Route::parse("/?search=phone&page=2&limit=8"),
    );
    let result = update(&mut state, Message::Reload);
    let (_, query) = products_request(&result);

    assert_eq!(query.page, Some(2));
    assert_eq!(query.limit, Some(8));
    assert_eq!(query.search.as_deref(), Some("phone"));
    assert!(state.listing.is_loading());
}

#[test]
fn test_loaded_and_empty_phases() {
    let state = loaded_catalog(20);
    assert_eq!(state.listing.phase, ListingPhase::Loaded);
    assert_eq!(state.listing.products().len(), 12);

    let state = loaded_catalog(0);
    assert_eq!(state.listing.phase, ListingPhase::Empty);
    assert!(state.page_window().is_some_and(|w| w.is_empty()));
}

#[test]
fn test_apply_filter_resets_page_and_records_location() {
    let mut state = loaded_catalog(40);
    let result = update(&mut state, Message::GoToPage(3));
    answer(&mut state, &result, 40);
    let history_len = state.history.len();

    let result = update(&mut state, Message::ApplyFilter(FilterChange::search("phone")));
    let (_, query) = products_request(&result);

    assert_eq!(query.page, Some(1));
    assert_eq!(query.search.as_deref(), Some("phone"));
    assert_eq!(state.history.len(), history_len + 1);
    assert!(state.location().contains("search=phone"));
    assert!(state.location().contains("page=1"));
}

#[test]
fn test_empty_filter_change_is_ignored() {
    let mut state = loaded_catalog(20);
    let result = update(&mut state, Message::ApplyFilter(FilterChange::default()));
    assert!(result.action.is_none());
}

#[test]
fn test_go_to_page_preserves_filters() {
    let mut state = loaded_catalog(20);
    let result = update(
        &mut state,
        Message::ApplyFilter(FilterChange::price_range(100, 900)),
    );
    answer(&mut state, &result, 30);

    let result = update(&mut state, Message::GoToPage(2));
    let (_, query) = products_request(&result);
    assert_eq!(query.page, Some(2));
    assert_eq!(query.min_price, Some(100));
    assert_eq!(query.max_price, Some(900));
}

#[test]
fn test_go_to_page_out_of_range_is_ignored() {
    let mut state = loaded_catalog(20);
    assert!(update(&mut state, Message::GoToPage(1)).action.is_none());
    assert!(update(&mut state, Message::GoToPage(3)).action.is_none());
    assert!(update(&mut state, Message::GoToPage(0)).action.is_none());
}

#[test]
fn test_next_page_stops_at_last_page() {
    let mut state = loaded_catalog(20);
    let result = update(&mut state, Message::NextPage);
    answer(&mut state, &result, 20);
    assert_eq!(state.listing.filters.page, 2);

    assert!(update(&mut state, Message::NextPage).action.is_none());
    assert!(update(&mut state, Message::PreviousPage).action.is_some());
}

#[test]
fn test_last_page_jumps_to_end() {
    let mut state = loaded_catalog(100);
    let result = update(&mut state, Message::LastPage);
    let (_, query) = products_request(&result);
    assert_eq!(query.page, Some(9));
}

#[test]
fn test_narrow_viewport_shrinks_page_window() {
    let mut state = loaded_catalog(120);
    assert_eq!(state.page_window().map(|w| w.len()), Some(5));

    update(
        &mut state,
        Message::Resize {
            width: 80,
            height: 24,
        },
    );
    assert_eq!(state.page_window().map(|w| w.len()), Some(3));
}

#[test]
fn test_stale_listing_response_is_dropped() {
    let mut state = loaded_catalog(40);
    let slow = update(&mut state, Message::GoToPage(2));
    let fast = update(&mut state, Message::GoToPage(3));

    answer(&mut state, &fast, 40);
    answer(&mut state, &slow, 40);

    assert_eq!(state.listing.filters.page, 3);
    assert_eq!(state.listing.pagination().map(|p| p.page), Some(3));
}

#[test]
fn test_listing_error_keeps_products_and_toasts() {
    let mut state = loaded_catalog(20);
    let result = update(&mut state, Message::NextPage);
    let (request_id, _) = products_request(&result);

    update(
        &mut state,
        Message::ProductsFailed {
            request_id,
            error: "connection refused".into(),
        },
    );

    assert_eq!(state.listing.phase, ListingPhase::Error);
    assert_eq!(state.listing.products().len(), 12);
    let toast = state.toasts.visible().last().cloned();
    assert!(toast.is_some_and(|t| t.variant == ToastVariant::Destructive
        && t.description.as_deref() == Some(LISTING_ERROR_MESSAGE)));
}

#[test]
fn test_clear_filters_restores_defaults() {
    let mut state = AppState::new(
        Default::default(),
        Route::parse("/?search=phone&minPrice=100&maxPrice=500&page=3"),
    );
    assert!(state.is_filtered());

    let result = update(&mut state, Message::ClearFilters);
    let (_, query) = products_request(&result);

    assert_eq!(query.search.as_deref(), Some(""));
    assert_eq!(query.page, Some(1));
    assert!(!state.is_filtered());
    assert_eq!(state.filter_form.search, "");
}

#[test]
fn test_open_selected_product() {
    let mut state = loaded_catalog(20);
    update(&mut state, Message::SelectNextProduct);

    let result = update(&mut state, Message::OpenSelectedProduct);
    let (_, slug) = product_request(&result);

    assert_eq!(slug, "phone-2");
    assert_eq!(state.page(), Page::Product);
    assert_eq!(state.location(), "/product/phone-2");
}

// ─────────────────────────────────────────────────────────
// Filter Sidebar
// ─────────────────────────────────────────────────────────

#[test]
fn test_sidebar_submit_applies_form() {
    let mut state = loaded_catalog(20);
    update(&mut state, Message::FocusSidebar);
    assert_eq!(state.ui_mode, UiMode::Sidebar);

    update(
        &mut state,
        Message::SidebarInput {
            text: "  lamp ".into(),
        },
    );
    let result = update(&mut state, Message::SidebarSubmit);

    assert_eq!(state.ui_mode, UiMode::Browse);
    match result.message {
        Some(Message::ApplyFilter(change)) => assert_eq!(change.search.as_deref(), Some("lamp")),
        other => panic!("expected ApplyFilter, got {other:?}"),
    }
}

#[test]
fn test_sidebar_submit_on_reset_button_resets() {
    let mut state = loaded_catalog(20);
    update(&mut state, Message::FocusSidebar);
    state.filter_form.focus = FormField::Reset;

    let result = update(&mut state, Message::SidebarSubmit);
    assert!(matches!(result.message, Some(Message::SidebarReset)));

    state.filter_form.search = "phone".into();
    let result = update(&mut state, Message::SidebarReset);
    assert!(!state.filter_form.is_active());
    assert!(matches!(result.message, Some(Message::ApplyFilter(_))));
}

#[test]
fn test_sidebar_cancel_discards_edits() {
    let mut state = loaded_catalog(20);
    update(&mut state, Message::FocusSidebar);
    update(
        &mut state,
        Message::SidebarInput {
            text: "draft".into(),
        },
    );

    let result = update(&mut state, Message::SidebarCancel);
    assert!(result.action.is_none());
    assert_eq!(state.ui_mode, UiMode::Browse);
    assert_eq!(state.filter_form.search, "");
}

// ─────────────────────────────────────────────────────────
// Detail Page
// ─────────────────────────────────────────────────────────

#[test]
fn test_detail_not_found_toasts() {
    let mut state = loaded_catalog(20);
    let result = update(&mut state, Message::Navigate(Route::product("nonexistent")));
    let (request_id, slug) = product_request(&result);
    assert_eq!(slug, "nonexistent");
    assert!(state.detail.is_loading());

    update(
        &mut state,
        Message::ProductFailed {
            request_id,
            error: "not found".into(),
        },
    );

    assert_eq!(state.detail.phase, DetailPhase::NotFound);
    let toast = state.toasts.visible().last().cloned();
    assert!(toast.is_some_and(|t| t.description.as_deref() == Some(DETAIL_ERROR_MESSAGE)));
}

#[test]
fn test_start_order_disabled_when_out_of_stock() {
    let mut state = detail_page(test_product("desk-lamp", "Desk Lamp", 45, 0));
    update(&mut state, Message::StartOrder);
    assert!(state.toasts.is_empty());

    let mut state = detail_page(test_product("desk-lamp", "Desk Lamp", 45, 3));
    update(&mut state, Message::StartOrder);
    let toast = state.toasts.visible().last().cloned();
    assert!(toast.is_some_and(|t| t.title == "Order started"
        && t.description.as_deref() == Some("Desk Lamp at $45")));
}

#[test]
fn test_contact_supplier_toasts() {
    let mut state = detail_page(test_product("desk-lamp", "Desk Lamp", 45, 0));
    update(&mut state, Message::ContactSupplier);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn test_back_to_products_keeps_listing_filters() {
    let mut state = loaded_catalog(20);
    let result = update(&mut state, Message::GoToPage(2));
    answer(&mut state, &result, 20);
    update(&mut state, Message::Navigate(Route::product("phone-1")));

    let result = update(&mut state, Message::BackToProducts);
    let (_, query) = products_request(&result);
    assert_eq!(query.page, Some(2));
    assert_eq!(state.page(), Page::Catalog);
}

// ─────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────

#[test]
fn test_back_and_forward_refetch_without_pushing() {
    let mut state = loaded_catalog(20);
    update(&mut state, Message::Navigate(Route::product("phone-1")));
    let history_len = state.history.len();

    let result = update(&mut state, Message::HistoryBack);
    products_request(&result);
    assert_eq!(state.page(), Page::Catalog);

    let result = update(&mut state, Message::HistoryForward);
    let (_, slug) = product_request(&result);
    assert_eq!(slug, "phone-1");
    assert_eq!(state.history.len(), history_len);
}

#[test]
fn test_back_at_start_does_nothing() {
    let mut state = AppState::default();
    let result = update(&mut state, Message::HistoryBack);
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// UI Context
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme() {
    let mut state = AppState::default();
    let initial = state.theme;
    update(&mut state, Message::ToggleTheme);
    assert_ne!(state.theme, initial);
    update(&mut state, Message::ToggleTheme);
    assert_eq!(state.theme, initial);
}

#[test]
fn test_dismiss_toast() {
    let mut state = AppState::default();
    state.toasts.error("boom");
    update(&mut state, Message::DismissToast);
    assert!(state.toasts.is_empty());
}
