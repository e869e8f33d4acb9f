//! Main render/view function (View in TEA pattern)


use chrono::Datelike;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use storefront_app::listing::LISTING_ERROR_MESSAGE;
use storefront_app::state::{AppState, Page, UiMode};
use storefront_app::ListingPhase;

use super::{layout, widgets};
use crate::theme::{styles, Palette};

pub const HERO_TITLE: &str = "Discover Amazing Products";
pub const HERO_TAGLINE: &str = "Find the best deals from verified suppliers worldwide";

pub const EMPTY_TITLE: &str = "No products found";
pub const EMPTY_MESSAGE: &str =
    "Try adjusting your search criteria or filters to find what you're looking for.";

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    view_with_year(frame, state, chrono::Local::now().year());
}

/// [`view`] with the copyright year fixed
fn view_with_year(frame: &mut Frame, state: &AppState, year: i32) {
    let area = frame.area();
    let p = Palette::for_mode(state.theme);

    frame.render_widget(Block::default().style(Style::default().bg(p.background)), area);

    let areas = layout::create(area);
    let location = state.location();

    frame.render_widget(
        widgets::MainHeader::new(p, &location, state.page()).currency(state.currency()),
        areas.header,
    );

    match state.page() {
        Page::Catalog => render_catalog(frame, areas.body, area.height, state, p),
        Page::Product => frame.render_widget(
            widgets::ProductDetailView::new(&state.detail, p).currency(state.currency()),
            areas.body,
        ),
    }

    frame.render_widget(widgets::Footer::new(p, year), areas.footer);

    frame.render_widget(widgets::ToastStack::new(state.toasts.visible(), p), area);
}

fn render_catalog(
    frame: &mut Frame,
    body: Rect,
    screen_height: u16,
    state: &AppState,
    p: &Palette,
) {
    let listing = &state.listing;
    let wide = frame.area().width >= state.settings.ui.narrow_width;
    let sidebar_focused = state.ui_mode == UiMode::Sidebar;
    let show_pagination = listing.total_pages() > 1 && !listing.is_loading();

    let areas =
        layout::create_catalog(body, screen_height, wide, sidebar_focused, show_pagination);

    if areas.hero.height > 0 {
        render_hero(frame, areas.hero, p);
    }

    if areas.stacked && !sidebar_focused {
        frame.render_widget(
            widgets::FilterSummary::new(&state.filter_form, p).currency(state.currency()),
            areas.sidebar,
        );
    } else {
        frame.render_widget(
            widgets::FilterSidebar::new(&state.filter_form, p)
                .currency(state.currency())
                .focused(sidebar_focused),
            areas.sidebar,
        );
    }

    render_results_header(frame, areas.results_header, state, p);

    let mut grid = areas.grid;
    if listing.phase == ListingPhase::Error {
        let [banner, rest] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(grid);
        render_error_banner(frame, banner, p);
        grid = rest;
    }

    match listing.phase {
        ListingPhase::Empty => render_empty_state(frame, grid, p),
        ListingPhase::Loading => frame.render_widget(
            widgets::ProductGrid::new(&[], p).loading(true),
            grid,
        ),
        ListingPhase::Loaded | ListingPhase::Error => frame.render_widget(
            widgets::ProductGrid::new(listing.products(), p)
                .currency(state.currency())
                .selected((!sidebar_focused).then_some(listing.selected)),
            grid,
        ),
    }

    if show_pagination {
        if let Some(window) = state.page_window() {
            frame.render_widget(
                widgets::PaginationBar::new(window, p).showing(listing.showing()),
                areas.pagination,
            );
        }
    }
}

fn render_hero(frame: &mut Frame, area: Rect, p: &Palette) {
    let lines = vec![
        Line::from(Span::styled(HERO_TITLE, styles::accent_bold(p))),
        Line::from(Span::styled(HERO_TAGLINE, styles::text_secondary(p))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// "N Products Found", the search badge and "Page X of Y"
fn render_results_header(frame: &mut Frame, area: Rect, state: &AppState, p: &Palette) {
    let listing = &state.listing;

    let mut left = vec![Span::raw(" ")];
    match listing.pagination() {
        Some(pagination) => {
            left.push(Span::styled(
                format!("{} Products Found", pagination.total),
                styles::heading(p),
            ));
            if !listing.filters.search.is_empty() {
                left.push(Span::raw("  "));
                left.push(Span::styled(
                    format!(" \"{}\" ", listing.filters.search),
                    styles::badge(p),
                ));
            }
        }
        None if listing.is_loading() => {
            left.push(Span::styled("Loading products…", styles::text_muted(p)));
        }
        None => {}
    }
    if listing.is_loading() && listing.pagination().is_some() {
        left.push(Span::styled("  Loading…", styles::text_muted(p)));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), area);

    if let Some(pagination) = listing.pagination() {
        if pagination.pages > 0 {
            let page = Line::from(Span::styled(
                format!("Page {} of {} ", listing.current_page(), pagination.pages),
                styles::text_muted(p),
            ));
            frame.render_widget(Paragraph::new(page).alignment(Alignment::Right), area);
        }
    }
}

fn render_error_banner(frame: &mut Frame, area: Rect, p: &Palette) {
    let line = Line::from(vec![
        Span::styled(" ⚠ ", styles::danger(p)),
        Span::styled(LISTING_ERROR_MESSAGE, styles::danger(p)),
        Span::styled("  [", styles::text_muted(p)),
        Span::styled("r", styles::keybinding(p)),
        Span::styled("] Retry", styles::text_muted(p)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_empty_state(frame: &mut Frame, area: Rect, p: &Palette) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("⌕", styles::text_muted(p))),
        Line::from(Span::styled(EMPTY_TITLE, styles::heading(p))),
        Line::from(Span::styled(EMPTY_MESSAGE, styles::text_secondary(p))),
        Line::default(),
        Line::from(vec![
            Span::styled(" Clear all filters ", styles::button_outline(p, true)),
            Span::styled(" [c]", styles::text_muted(p)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
