//! Screen layout definitions for the TUI
//!
//! The catalog page places the filter sidebar beside the results on wide
//! terminals and stacks it above them on narrow ones.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + brand row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Copyright line
pub const FOOTER_HEIGHT: u16 = 1;

/// Hero headline + tagline
pub const HERO_HEIGHT: u16 = 2;

/// Terminals shorter than this skip the hero
pub const HERO_MIN_SCREEN_HEIGHT: u16 = 36;

/// Width of the sidebar column on wide terminals
pub const SIDEBAR_WIDTH: u16 = 32;

/// Height of the stacked sidebar on narrow terminals
pub const SIDEBAR_STACKED_HEIGHT: u16 = 12;

/// Filter summary line shown instead of the stacked sidebar when it is closed
pub const SIDEBAR_COLLAPSED_HEIGHT: u16 = 1;

/// Results title ("N Products Found" / "Page X of Y")
pub const RESULTS_HEADER_HEIGHT: u16 = 1;

/// Page buttons row + "Showing" row
pub const PAGINATION_HEIGHT: u16 = 2;

/// Areas shared by every page
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Areas of the catalog body
#[derive(Debug, Clone, Copy)]
pub struct CatalogAreas {
    /// Empty when the terminal is too short
    pub hero: Rect,
    pub sidebar: Rect,
    /// Whether the sidebar sits above the results instead of beside them
    pub stacked: bool,
    pub results_header: Rect,
    pub grid: Rect,
    pub pagination: Rect,
}

/// Split the screen into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}

/// Lay out the catalog body
///
/// # Arguments
/// * `body` - Body area from [`create`]
/// * `wide` - Viewport is at least the configured narrow width
/// * `sidebar_open` - Sidebar has focus (only matters when stacked)
/// * `show_pagination` - Result set spans more than one page
pub fn create_catalog(
    body: Rect,
    screen_height: u16,
    wide: bool,
    sidebar_open: bool,
    show_pagination: bool,
) -> CatalogAreas {
    let hero_height = if screen_height >= HERO_MIN_SCREEN_HEIGHT {
        HERO_HEIGHT
    } else {
        0
    };
    let [hero, rest] =
        Layout::vertical([Constraint::Length(hero_height), Constraint::Min(0)]).areas(body);

    let (sidebar, main) = if wide {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(rest);
        (sidebar, main)
    } else {
        let sidebar_height = if sidebar_open {
            SIDEBAR_STACKED_HEIGHT
        } else {
            SIDEBAR_COLLAPSED_HEIGHT
        };
        let [sidebar, main] =
            Layout::vertical([Constraint::Length(sidebar_height), Constraint::Min(0)])
                .areas(rest);
        (sidebar, main)
    };

    let pagination_height = if show_pagination {
        PAGINATION_HEIGHT
    } else {
        0
    };
    let [results_header, grid, pagination] = Layout::vertical([
        Constraint::Length(RESULTS_HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(pagination_height),
    ])
    .areas(main);

    CatalogAreas {
        hero,
        sidebar,
        stacked: !wide,
        results_header,
        grid,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_areas_contiguous() {
        let area = Rect::new(0, 0, 120, 40);
        let areas = create(area);
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.footer.height, FOOTER_HEIGHT);
        assert_eq!(
            areas.header.height + areas.body.height + areas.footer.height,
            area.height
        );
    }

    #[test]
    fn test_wide_catalog_puts_sidebar_beside_results() {
        let body = Rect::new(0, 3, 120, 36);
        let areas = create_catalog(body, 40, true, false, true);
        assert!(!areas.stacked);
        assert_eq!(areas.hero.height, HERO_HEIGHT);
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.grid.x, SIDEBAR_WIDTH);
        assert_eq!(areas.pagination.height, PAGINATION_HEIGHT);
    }

    #[test]
    fn test_narrow_catalog_stacks_sidebar() {
        let body = Rect::new(0, 3, 80, 20);
        let closed = create_catalog(body, 24, false, false, false);
        assert!(closed.stacked);
        assert_eq!(closed.hero.height, 0);
        assert_eq!(closed.sidebar.height, SIDEBAR_COLLAPSED_HEIGHT);
        assert_eq!(closed.pagination.height, 0);

        let open = create_catalog(body, 24, false, true, false);
        assert_eq!(open.sidebar.height, SIDEBAR_STACKED_HEIGHT);
        assert_eq!(open.grid.x, 0);
    }
}
