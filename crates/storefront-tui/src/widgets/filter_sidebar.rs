//! Filter sidebar
//!
//! The full form (search, price range sliders, apply/reset) and the
//! one-line summary shown in its place on narrow terminals.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use storefront_app::{FilterForm, FormField};
use storefront_core::format_price;

use super::product_card::truncate;
use crate::theme::{styles, Palette};

pub const SEARCH_PLACEHOLDER: &str = "e.g., iPhone 12 Pro";

/// Filled part of a slider track for `value` within `[min, max]`
pub fn slider_fill(value: i64, min: i64, max: i64, width: usize) -> usize {
    if max <= min || width == 0 {
        return 0;
    }
    let clamped = value.clamp(min, max) - min;
    ((clamped as i128 * width as i128) / (max - min) as i128) as usize
}

pub struct FilterSidebar<'a> {
    form: &'a FilterForm,
    palette: &'a Palette,
    currency: &'a str,
    focused: bool,
}

impl<'a> FilterSidebar<'a> {
    pub fn new(form: &'a FilterForm, palette: &'a Palette) -> Self {
        Self {
            form,
            palette,
            currency: "USD",
            focused: false,
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    /// Sidebar has keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn has_focus(&self, field: FormField) -> bool {
        self.focused && self.form.focus == field
    }

    fn label(&self, text: &'static str, field: Option<FormField>) -> Span<'static> {
        let p = self.palette;
        match field {
            Some(field) if self.has_focus(field) => Span::styled(text, styles::accent_bold(p)),
            _ => Span::styled(text, styles::heading(p)),
        }
    }

    fn search_line(&self, width: usize) -> Line<'static> {
        let p = self.palette;
        let marker = if self.has_focus(FormField::Search) {
            Span::styled("› ", styles::accent(p))
        } else {
            Span::styled("  ", styles::text_muted(p))
        };

        let text = if self.form.search.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, styles::text_muted(p))
        } else {
            Span::styled(
                truncate(&self.form.search, width.saturating_sub(3)),
                styles::text_primary(p),
            )
        };

        let mut spans = vec![marker, text];
        if self.has_focus(FormField::Search) {
            spans.push(Span::styled("▏", styles::accent(p)));
        }
        Line::from(spans)
    }

    fn slider_line(
        &self,
        name: &'static str,
        value: i64,
        field: FormField,
        width: usize,
    ) -> Line<'static> {
        let p = self.palette;
        let focused = self.has_focus(field);
        let track_width = width.saturating_sub(6);
        let fill = slider_fill(value, self.form.limit_min, self.form.limit_max, track_width);

        let (name_style, knob_style) = if focused {
            (styles::accent_bold(p), styles::accent_bold(p))
        } else {
            (styles::text_secondary(p), styles::accent(p))
        };

        Line::from(vec![
            Span::styled(format!("{name} "), name_style),
            Span::styled("━".repeat(fill), styles::accent(p)),
            Span::styled("●", knob_style),
            Span::styled(
                "─".repeat(track_width.saturating_sub(fill)),
                styles::text_muted(p),
            ),
        ])
    }

    fn button_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let apply_focused = self.has_focus(FormField::Apply);
        let reset_focused = self.has_focus(FormField::Reset);
        vec![
            Line::from(Span::styled(" Apply Filters ", styles::button(p, apply_focused))),
            Line::from(Span::styled(" Reset All ", styles::button_outline(p, reset_focused))),
        ]
    }
}

impl Widget for FilterSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut title = vec![Span::styled(" Filters ", styles::heading(p))];
        if self.form.is_active() {
            title.push(Span::styled(" Active ", styles::badge(p)));
            title.push(Span::raw(" "));
        }

        let block = styles::card_block(p, self.focused).title(Line::from(title));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        let range = format!(
            "{} - {}",
            format_price(self.form.min_price, self.currency),
            format_price(self.form.max_price, self.currency)
        );

        let mut lines = vec![
            Line::from(self.label("Search Products", Some(FormField::Search))),
            self.search_line(width),
            Line::default(),
            Line::from(vec![
                self.label("Price Range", None),
                Span::styled(format!("  {range}"), styles::text_secondary(p)),
            ]),
            self.slider_line("Min", self.form.min_price, FormField::MinPrice, width),
            self.slider_line("Max", self.form.max_price, FormField::MaxPrice, width),
            Line::default(),
        ];
        lines.extend(self.button_lines());

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Collapsed sidebar: current filters on one line
pub struct FilterSummary<'a> {
    form: &'a FilterForm,
    palette: &'a Palette,
    currency: &'a str,
}

impl<'a> FilterSummary<'a> {
    pub fn new(form: &'a FilterForm, palette: &'a Palette) -> Self {
        Self {
            form,
            palette,
            currency: "USD",
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }
}

impl Widget for FilterSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![Span::styled(" Filters", styles::heading(p))];
        if self.form.is_active() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(" Active ", styles::badge(p)));
        }
        if !self.form.search.is_empty() {
            spans.push(Span::styled(
                format!("  \"{}\"", truncate(&self.form.search, 20)),
                styles::text_primary(p),
            ));
        }
        spans.push(Span::styled(
            format!(
                "  {} - {}",
                format_price(self.form.min_price, self.currency),
                format_price(self.form.max_price, self.currency)
            ),
            styles::text_secondary(p),
        ));
        spans.push(Span::styled("  [", styles::text_muted(p)));
        spans.push(Span::styled("/", styles::keybinding(p)));
        spans.push(Span::styled("] Edit", styles::text_muted(p)));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SIDEBAR_STACKED_HEIGHT, SIDEBAR_WIDTH};
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use storefront_core::FilterState;

    fn form() -> FilterForm {
        FilterForm::new(&FilterState::default(), 10)
    }

    fn render(form: &FilterForm, focused: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(SIDEBAR_WIDTH, SIDEBAR_STACKED_HEIGHT);
        term.render_widget(
            FilterSidebar::new(form, &DARK).focused(focused),
            Rect::new(0, 0, SIDEBAR_WIDTH, SIDEBAR_STACKED_HEIGHT),
        );
        term
    }

    #[test]
    fn test_default_form_shows_placeholder_and_range() {
        let term = render(&form(), false);
        assert!(term.buffer_contains("Filters"));
        assert!(term.buffer_contains("Search Products"));
        assert!(term.buffer_contains(SEARCH_PLACEHOLDER));
        assert!(term.buffer_contains("$0 - $2,000"));
        assert!(term.buffer_contains("Apply Filters"));
        assert!(term.buffer_contains("Reset All"));
        assert!(!term.buffer_contains("Active"));
    }

    #[test]
    fn test_active_badge_and_search_text() {
        let mut form = form();
        form.search = "lamp".to_string();
        form.max_price = 500;
        let term = render(&form, true);
        assert!(term.buffer_contains("Active"));
        assert!(term.buffer_contains("› lamp"));
        assert!(term.buffer_contains("$0 - $500"));
    }

    #[test]
    fn test_slider_fill_proportional() {
        assert_eq!(slider_fill(0, 0, 2000, 20), 0);
        assert_eq!(slider_fill(1000, 0, 2000, 20), 10);
        assert_eq!(slider_fill(2000, 0, 2000, 20), 20);
        assert_eq!(slider_fill(5000, 0, 2000, 20), 20);
        assert_eq!(slider_fill(5, 5, 5, 20), 0);
    }

    #[test]
    fn test_summary_line() {
        let mut form = form();
        form.search = "phone".to_string();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(FilterSummary::new(&form, &DARK), Rect::new(0, 0, 80, 1));
        assert!(term.line_contains(0, "\"phone\""));
        assert!(term.line_contains(0, "$0 - $2,000"));
        assert!(term.line_contains(0, "] Edit"));
    }
}
