//! Responsive product grid
//!
//! Cards flow left to right in as many columns as fit (at most
//! [`MAX_COLUMNS`]). Rows scroll so the selected card stays on screen.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use storefront_core::Product;

use super::product_card::{ProductCard, SkeletonCard, CARD_HEIGHT, CARD_MIN_WIDTH};
use crate::theme::Palette;

pub const MAX_COLUMNS: u16 = 4;

/// Placeholder cards drawn while a page is loading
pub const SKELETON_COUNT: usize = 12;

/// Gap between adjacent cards
const GUTTER: u16 = 1;

/// Number of card columns that fit in `width`
pub fn columns_for_width(width: u16) -> u16 {
    (width.saturating_add(GUTTER) / (CARD_MIN_WIDTH + GUTTER)).clamp(1, MAX_COLUMNS)
}

/// First row to draw so that `selected_row` is visible
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    (selected_row + 1).saturating_sub(visible_rows)
}

pub struct ProductGrid<'a> {
    products: &'a [Product],
    palette: &'a Palette,
    currency: &'a str,
    loading: bool,
    selected: Option<usize>,
}

impl<'a> ProductGrid<'a> {
    pub fn new(products: &'a [Product], palette: &'a Palette) -> Self {
        Self {
            products,
            palette,
            currency: "USD",
            loading: false,
            selected: None,
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    /// Draw skeleton cards instead of products
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    fn cell(area: Rect, columns: u16, col: u16, row: u16) -> Rect {
        let total_gutter = GUTTER.saturating_mul(columns.saturating_sub(1));
        let card_width = area.width.saturating_sub(total_gutter) / columns.max(1);
        Rect::new(
            area.x
                .saturating_add(col.saturating_mul(card_width.saturating_add(GUTTER))),
            area.y.saturating_add(row.saturating_mul(CARD_HEIGHT)),
            card_width,
            CARD_HEIGHT,
        )
    }
}

impl Widget for ProductGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < CARD_HEIGHT {
            return;
        }

        let columns = columns_for_width(area.width);
        let visible_rows = (area.height / CARD_HEIGHT) as usize;

        if self.loading {
            let count = SKELETON_COUNT.min(visible_rows * columns as usize);
            for i in 0..count {
                let col = (i % columns as usize) as u16;
                let row = (i / columns as usize) as u16;
                SkeletonCard::new(self.palette).render(Self::cell(area, columns, col, row), buf);
            }
            return;
        }

        let selected_row = self.selected.unwrap_or(0) / columns as usize;
        let skip_rows = first_visible_row(selected_row, visible_rows);
        let first = skip_rows * columns as usize;

        for (offset, product) in self.products.iter().skip(first).enumerate() {
            let row = offset / columns as usize;
            if row >= visible_rows {
                break;
            }
            let col = (offset % columns as usize) as u16;
            let index = first + offset;
            ProductCard::new(product, self.palette)
                .currency(self.currency)
                .selected(self.selected == Some(index))
                .render(Self::cell(area, columns, col, row as u16), buf);
        }
    }
}
