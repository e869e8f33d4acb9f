//! Product detail page
//!
//! Loading skeleton, the not-found message, or the product itself: title
//! block, description, specifications, stock and the order actions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use storefront_app::{DetailPhase, DetailState};
use storefront_core::{format_price, Product};

use super::product_card::rating_stars;
use crate::theme::{styles, Palette};

pub const NOT_FOUND_TITLE: &str = "Product Not Found";
pub const NOT_FOUND_MESSAGE: &str =
    "The product you're looking for doesn't exist or has been removed.";

/// Width of the specifications/actions column on wide screens
const SIDE_COLUMN_WIDTH: u16 = 36;

/// Below this width the side column moves under the description
const TWO_COLUMN_MIN_WIDTH: u16 = 90;

fn back_link(p: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("← ", styles::accent(p)),
        Span::styled("Back to Products", styles::accent(p)),
        Span::styled("  [Esc]", styles::text_muted(p)),
    ])
}

pub struct ProductDetailView<'a> {
    detail: &'a DetailState,
    palette: &'a Palette,
    currency: &'a str,
}

impl<'a> ProductDetailView<'a> {
    pub fn new(detail: &'a DetailState, palette: &'a Palette) -> Self {
        Self {
            detail,
            palette,
            currency: "USD",
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        buf.set_line(area.x, area.y, &back_link(p), area.width);
        let w = area.width;
        let bars = [w / 2, w / 4, 0, w, w, w.saturating_mul(2) / 3];
        for (i, width) in bars.iter().enumerate() {
            let y = area.y.saturating_add(2).saturating_add(i as u16);
            if y >= area.bottom() {
                break;
            }
            buf.set_string(area.x, y, "░".repeat(*width as usize), styles::skeleton(p));
        }
    }

    fn render_not_found(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(NOT_FOUND_TITLE, styles::heading(p))),
            Line::default(),
            Line::from(Span::styled(NOT_FOUND_MESSAGE, styles::text_secondary(p))),
            Line::default(),
            Line::from(Span::styled(" ← Back to Products ", styles::button(p, true))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn title_lines(&self, product: &Product) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = vec![back_link(p), Line::default()];

        let mut badges = vec![Span::styled(
            format!(" {} ", product.category.name),
            styles::badge(p),
        )];
        if product.verified == Some(true) {
            badges.push(Span::raw(" "));
            badges.push(Span::styled("✓ Verified Supplier", styles::success(p)));
        }
        lines.push(Line::from(badges));

        lines.push(Line::from(Span::styled(product.name.clone(), styles::heading(p))));

        if let Some(rating) = product.rating {
            let mut spans = vec![
                Span::styled(rating_stars(rating), styles::keybinding(p)),
                Span::styled(format!(" {rating:.1}"), styles::text_secondary(p)),
            ];
            if let Some(reviews) = product.review_count {
                spans.push(Span::styled(
                    format!(" ({reviews} reviews)"),
                    styles::text_muted(p),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![
            Span::styled(format_price(product.price, self.currency), styles::price(p)),
            Span::styled(format!("  SKU {}", product.sku), styles::text_muted(p)),
        ]));
        lines.push(Line::default());
        lines
    }

    fn description_lines(&self, product: &Product) -> Vec<Line<'static>> {
        let p = self.palette;
        vec![
            Line::from(Span::styled("Product Description", styles::heading(p))),
            Line::from(Span::styled(
                product.description.clone(),
                styles::text_secondary(p),
            )),
            Line::default(),
        ]
    }

    fn side_lines(&self, product: &Product) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();

        if !product.variants.is_empty() {
            lines.push(Line::from(Span::styled("Specifications", styles::heading(p))));
            for variant in &product.variants {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", variant.name), styles::text_muted(p)),
                    Span::styled(variant.value.clone(), styles::text_primary(p)),
                ]));
            }
            lines.push(Line::default());
        }

        let stock = if product.is_in_stock() {
            Span::styled(
                format!("● {} units in stock", product.stock_quantity),
                styles::success(p),
            )
        } else {
            Span::styled("● Out of stock", styles::danger(p))
        };
        lines.push(Line::from(stock));
        lines.push(Line::default());

        lines.push(Line::from(vec![
            Span::styled(" Contact Supplier ", styles::button_outline(p, true)),
            Span::styled(" [s]", styles::text_muted(p)),
        ]));
        let order = if product.is_in_stock() {
            Span::styled(" Start Order ", styles::button(p, true))
        } else {
            Span::styled(" Start Order ", styles::button_disabled(p))
        };
        lines.push(Line::from(vec![order, Span::styled(" [o]", styles::text_muted(p))]));
        lines
    }

    fn render_found(&self, product: &Product, area: Rect, buf: &mut Buffer) {
        let title = self.title_lines(product);
        let title_height = title.len() as u16;
        let [title_area, rest] =
            Layout::vertical([Constraint::Length(title_height), Constraint::Min(0)]).areas(area);
        Paragraph::new(title).render(title_area, buf);

        let description = self.description_lines(product);
        let side = self.side_lines(product);

        if area.width >= TWO_COLUMN_MIN_WIDTH {
            let [left, _, right] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(2),
                Constraint::Length(SIDE_COLUMN_WIDTH),
            ])
            .areas(rest);
            Paragraph::new(description)
                .wrap(Wrap { trim: true })
                .render(left, buf);
            Paragraph::new(side).render(right, buf);
        } else {
            let mut lines = description;
            lines.extend(side);
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(rest, buf);
        }
    }
}

impl Widget for ProductDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let area = area.inner(Margin::new(1, 0));
        match &self.detail.phase {
            DetailPhase::Loading => self.render_loading(area, buf),
            DetailPhase::NotFound => self.render_not_found(area, buf),
            DetailPhase::Found(product) => self.render_found(product, area, buf),
        }
    }
}
