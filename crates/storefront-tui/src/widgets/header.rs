//! Header bar
//!
//! Brand on the left, the current location next to it, key hints for the
//! current page in the middle and the locale pill on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::state::Page;

use crate::theme::{styles, Palette};

pub const BRAND: &str = "PESONA";

/// Main header showing brand, location and keybindings
pub struct MainHeader<'a> {
    palette: &'a Palette,
    location: &'a str,
    page: Page,
    currency: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(palette: &'a Palette, location: &'a str, page: Page) -> Self {
        Self {
            palette,
            location,
            page,
            currency: "USD",
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.page {
            Page::Catalog => &[
                ("/", "Filter"),
                ("←→", "Page"),
                ("↵", "Open"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
            Page::Product => &[
                ("Esc", "Back"),
                ("o", "Order"),
                ("s", "Contact"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("◆ ", styles::accent(p)),
            Span::styled(BRAND, styles::heading(p)),
            Span::styled("  ", styles::text_muted(p)),
            Span::styled(self.location, styles::text_secondary(p)),
        ]);
        let left_width = left.width() as u16;

        let mut hint_spans = Vec::new();
        for (key, label) in self.key_hints() {
            hint_spans.push(Span::styled("[", styles::text_muted(p)));
            hint_spans.push(Span::styled(*key, styles::keybinding(p)));
            hint_spans.push(Span::styled(format!("] {label}  "), styles::text_muted(p)));
        }
        let hints = Line::from(hint_spans);
        let hints_width = hints.width() as u16;

        let pill = Line::from(vec![
            Span::styled(format!("English - {} ", self.currency), styles::text_muted(p)),
        ]);
        let pill_width = pill.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Hints only when everything fits with padding
        let with_pill = left_width.saturating_add(pill_width).saturating_add(2);
        if with_pill.saturating_add(hints_width).saturating_add(2) <= inner.width {
            let hints_x = inner.x.saturating_add(left_width).saturating_add(2);
            buf.set_line(hints_x, inner.y, &hints, hints_width);
        }
        if with_pill <= inner.width {
            let pill_x = inner.right().saturating_sub(pill_width);
            buf.set_line(pill_x, inner.y, &pill, pill_width);
        }
    }
}
