//! Toast stack in the bottom-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use storefront_app::{Toast, ToastVariant};

use crate::theme::{styles, Palette};

pub const TOAST_WIDTH: u16 = 44;

/// Border + title + two description lines
const TOAST_HEIGHT: u16 = 5;

/// Distance from the bottom edge, clearing the footer
const BOTTOM_MARGIN: u16 = 1;

pub struct ToastStack<'a> {
    toasts: Vec<&'a Toast>,
    palette: &'a Palette,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: impl IntoIterator<Item = &'a Toast>, palette: &'a Palette) -> Self {
        Self {
            toasts: toasts.into_iter().collect(),
            palette,
        }
    }

    fn render_toast(&self, toast: &Toast, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (border, title_style) = match toast.variant {
            ToastVariant::Destructive => (styles::danger(p), styles::danger(p)),
            ToastVariant::Default => (styles::accent(p), styles::heading(p)),
        };

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(Style::default().bg(p.card_bg));

        let mut lines = vec![Line::from(Span::styled(
            toast.title.clone(),
            title_style.add_modifier(Modifier::BOLD),
        ))];
        if let Some(description) = &toast.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                styles::text_secondary(p),
            )));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        if width < 10 {
            return;
        }

        // Newest toast nearest the bottom
        let mut bottom = area.bottom().saturating_sub(BOTTOM_MARGIN);
        for toast in self.toasts.iter().rev() {
            if bottom < area.y.saturating_add(TOAST_HEIGHT) {
                break;
            }
            let toast_area = Rect::new(
                area.right() - width,
                bottom - TOAST_HEIGHT,
                width,
                TOAST_HEIGHT,
            );
            self.render_toast(toast, toast_area, buf);
            bottom -= TOAST_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use storefront_app::ToastQueue;

    #[test]
    fn test_stack_shows_newest_at_bottom() {
        let mut queue = ToastQueue::default();
        queue.info("Message sent", "The supplier will reply soon");
        queue.error("Failed to load products. Please try again later.");

        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ToastStack::new(queue.visible(), &DARK), area);

        let (x, sent_row) = term.find("Message sent").unwrap();
        let (_, error_row) = term.find("Error").unwrap();
        assert!(error_row > sent_row);
        assert!(x >= 120 - TOAST_WIDTH);
    }

    #[test]
    fn test_empty_queue_draws_nothing() {
        let queue = ToastQueue::default();
        let mut term = TestTerminal::with_size(60, 10);
        let area = term.area();
        term.render_widget(ToastStack::new(queue.visible(), &DARK), area);
        assert!(!term.buffer_contains("╭"));
    }
}
