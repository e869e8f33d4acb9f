//! Copyright footer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::header::BRAND;
use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    palette: &'a Palette,
    year: i32,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette, year: i32) -> Self {
        Self { palette, year }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let line = Line::from(vec![
            Span::styled(format!("◆ {BRAND}  "), styles::accent(p)),
            Span::styled(
                format!("© {} {BRAND}. All rights reserved.", self.year),
                styles::text_muted(p),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_footer_shows_copyright_year() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(Footer::new(&LIGHT, 2025), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("© 2025 PESONA. All rights reserved."));
    }
}
