//! Product card and its loading skeleton

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use storefront_core::{format_price, Product};

use crate::theme::{styles, Palette};

/// Border + price, name, category/rating, stock badge and action rows
pub const CARD_HEIGHT: u16 = 7;

/// Cards narrower than this are not laid out side by side
pub const CARD_MIN_WIDTH: u16 = 26;

/// Render `rating` (0..=5) as filled and empty stars
pub fn rating_stars(rating: f32) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Cut `text` to `width` columns, ending in an ellipsis when shortened
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// A single product in the grid
pub struct ProductCard<'a> {
    product: &'a Product,
    palette: &'a Palette,
    currency: &'a str,
    selected: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, palette: &'a Palette) -> Self {
        Self {
            product,
            palette,
            currency: "USD",
            selected: false,
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn stock_line(&self) -> Line<'static> {
        let p = self.palette;
        let stock = self.product.stock_quantity;
        if !self.product.is_in_stock() {
            Line::from(Span::styled("Out of stock", styles::danger(p)))
        } else if self.product.is_low_stock() {
            Line::from(Span::styled(
                format!(" Only {stock} left "),
                styles::destructive_badge(p),
            ))
        } else {
            Line::from(Span::styled("Fast shipping", styles::success(p)))
        }
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let width = inner.width as usize;

        // Price, with the verified mark on the right
        let price = format_price(self.product.price, self.currency);
        buf.set_line(
            inner.x,
            inner.y,
            &Line::from(Span::styled(price.clone(), styles::price(p))),
            inner.width,
        );
        if self.product.verified == Some(true) && price.width() + 12 <= width {
            let mark = "✓ Verified";
            let x = inner.right().saturating_sub(mark.width() as u16);
            buf.set_string(x, inner.y, mark, styles::accent(p).fg(p.info));
        }

        let mut rows: Vec<Line> = Vec::new();

        let name_style = if self.selected {
            styles::accent_bold(p)
        } else {
            styles::heading(p)
        };
        rows.push(Line::from(Span::styled(
            truncate(&self.product.name, width),
            name_style,
        )));

        let mut meta = vec![Span::styled(
            truncate(&self.product.category.name, width / 2),
            styles::text_muted(p),
        )];
        if let Some(rating) = self.product.rating {
            meta.push(Span::raw(" "));
            meta.push(Span::styled(rating_stars(rating), styles::keybinding(p)));
            if let Some(reviews) = self.product.review_count {
                meta.push(Span::styled(format!(" ({reviews})"), styles::text_muted(p)));
            }
        }
        rows.push(Line::from(meta));

        rows.push(self.stock_line());

        let action = if self.selected {
            Span::styled(" View Details ", styles::button(p, true))
        } else {
            Span::styled("View Details", styles::button_outline(p, false))
        };
        rows.push(Line::from(action));

        for (i, row) in rows.iter().enumerate() {
            let y = inner.y.saturating_add(1).saturating_add(i as u16);
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, row, inner.width);
        }
    }
}

/// Placeholder card shown while a page is loading
pub struct SkeletonCard<'a> {
    palette: &'a Palette,
}

impl<'a> SkeletonCard<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for SkeletonCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        // Bars of decreasing width, like the price, name and badge rows
        let widths = [8, inner.width, inner.width.saturating_mul(3) / 4, 12, 12];
        for (i, w) in widths.iter().enumerate() {
            let y = inner.y.saturating_add(i as u16);
            if y >= inner.bottom() {
                break;
            }
            let w = (*w).min(inner.width) as usize;
            buf.set_string(inner.x, y, "░".repeat(w), styles::skeleton(p));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use storefront_api::test_utils::test_product;

    fn render_card(product: &Product) -> TestTerminal {
        let mut term = TestTerminal::with_size(30, CARD_HEIGHT);
        term.render_widget(
            ProductCard::new(product, &DARK),
            Rect::new(0, 0, 30, CARD_HEIGHT),
        );
        term
    }

    #[test]
    fn test_card_shows_price_and_name() {
        let term = render_card(&test_product("lamp", "Desk Lamp", 1299, 40));
        assert!(term.buffer_contains("$1,299"));
        assert!(term.buffer_contains("Desk Lamp"));
        assert!(term.buffer_contains("Electronics"));
        assert!(term.buffer_contains("View Details"));
    }

    #[test]
    fn test_low_stock_badge_at_threshold() {
        let term = render_card(&test_product("lamp", "Desk Lamp", 45, 5));
        assert!(term.buffer_contains("Only 5 left"));

        let term = render_card(&test_product("lamp", "Desk Lamp", 45, 6));
        assert!(!term.buffer_contains("left"));
    }

    #[test]
    fn test_out_of_stock_card() {
        let term = render_card(&test_product("lamp", "Desk Lamp", 45, 0));
        assert!(term.buffer_contains("Out of stock"));
        assert!(!term.buffer_contains("Only 0 left"));
    }

    #[test]
    fn test_rating_and_verified_when_present() {
        let mut product = test_product("lamp", "Desk Lamp", 45, 10);
        product.rating = Some(4.0);
        product.review_count = Some(37);
        product.verified = Some(true);
        let term = render_card(&product);
        assert!(term.buffer_contains("★★★★☆"));
        assert!(term.buffer_contains("(37)"));
        assert!(term.buffer_contains("Verified"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        assert_eq!(truncate("Wireless Noise Cancelling", 10), "Wireless …");
        assert_eq!(truncate("Lamp", 10), "Lamp");
    }

    #[test]
    fn test_skeleton_has_no_text() {
        let mut term = TestTerminal::with_size(30, CARD_HEIGHT);
        term.render_widget(SkeletonCard::new(&DARK), Rect::new(0, 0, 30, CARD_HEIGHT));
        assert!(term.buffer_contains("░"));
        assert!(!term.buffer_contains("$"));
    }
}
