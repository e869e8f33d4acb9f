//! Pagination bar
//!
//! ```text
//!   ‹ Prev   1  …  4  [5]  6  …  10   Next ›
//!          Showing 49 - 60 of 120 products
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use storefront_core::PageWindow;

use crate::theme::{styles, Palette};

/// One control in the pagination row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Prev { enabled: bool },
    Page { number: u32, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Controls for `window`, left to right
pub fn page_items(window: &PageWindow) -> Vec<PageItem> {
    let mut items = vec![PageItem::Prev {
        enabled: window.has_previous(),
    }];

    if window.show_first() {
        items.push(PageItem::Page {
            number: 1,
            current: window.current == 1,
        });
    }
    if window.leading_ellipsis() {
        items.push(PageItem::Ellipsis);
    }
    for number in window.pages() {
        items.push(PageItem::Page {
            number,
            current: number == window.current,
        });
    }
    if window.trailing_ellipsis() {
        items.push(PageItem::Ellipsis);
    }
    if window.show_last() {
        items.push(PageItem::Page {
            number: window.total,
            current: window.current == window.total,
        });
    }

    items.push(PageItem::Next {
        enabled: window.has_next(),
    });
    items
}

pub struct PaginationBar<'a> {
    window: PageWindow,
    /// `(first, last, total)` item numbers
    showing: Option<(u32, u32, u32)>,
    palette: &'a Palette,
}

impl<'a> PaginationBar<'a> {
    pub fn new(window: PageWindow, palette: &'a Palette) -> Self {
        Self {
            window,
            showing: None,
            palette,
        }
    }

    pub fn showing(mut self, showing: Option<(u32, u32, u32)>) -> Self {
        self.showing = showing;
        self
    }

    fn item_span(&self, item: PageItem) -> Span<'static> {
        let p = self.palette;
        match item {
            PageItem::Prev { enabled } => {
                let style = if enabled {
                    styles::button_outline(p, false)
                } else {
                    styles::button_disabled(p)
                };
                Span::styled("‹ Prev", style)
            }
            PageItem::Next { enabled } => {
                let style = if enabled {
                    styles::button_outline(p, false)
                } else {
                    styles::button_disabled(p)
                };
                Span::styled("Next ›", style)
            }
            PageItem::Page {
                number,
                current: true,
            } => Span::styled(format!("[{number}]"), styles::selected(p)),
            PageItem::Page { number, .. } => {
                Span::styled(format!(" {number} "), styles::text_secondary(p))
            }
            PageItem::Ellipsis => Span::styled("…", styles::text_muted(p)),
        }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (i, item) in page_items(&self.window).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(self.item_span(item));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some((first, last, total)) = self.showing {
            lines.push(Line::from(Span::styled(
                format!("Showing {first} - {last} of {total} products"),
                styles::text_muted(self.palette),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
