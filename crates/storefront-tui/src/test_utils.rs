//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's `TestBackend` and
//! asserted on as plain text.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(Footer::new(&DARK, 2025), term.area());
//! assert!(term.buffer_contains("PESONA"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Wide terminal: sidebar beside the results
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 40;

/// Narrow terminal: sidebar stacked above the results
pub const NARROW_WIDTH: u16 = 80;
pub const NARROW_HEIGHT: u16 = 24;

/// Wrapper around a `TestBackend` terminal with text assertions
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 120x40
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 80x24
    pub fn narrow() -> Self {
        Self::with_size(NARROW_WIDTH, NARROW_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Number of lines containing `text`
    pub fn count_lines_containing(&self, text: &str) -> usize {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .filter(|&y| line_content(buffer, y).contains(text))
            .count()
    }

    /// Find the first cell whose symbol starts `text` on some line
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        (0..buffer.area.height).find_map(|y| {
            line_content(buffer, y)
                .find(text)
                .map(|byte| (column_at_byte(buffer, y, byte), y))
        })
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y) + "\n")
            .collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Column of the cell that contributes byte `byte` of the line string
fn column_at_byte(buffer: &Buffer, line: u16, byte: usize) -> u16 {
    let mut offset = 0;
    for x in 0..buffer.area.width {
        if offset >= byte {
            return x;
        }
        offset += buffer[(x, line)].symbol().len();
    }
    buffer.area.width
}
