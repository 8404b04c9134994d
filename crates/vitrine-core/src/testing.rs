//! Headless rendering harness for exercising renderables in plain tests.

use crate::renderable::Renderable;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Render a [`Renderable`] into a buffer of the given dimensions.
///
/// Drives a `ratatui` [`TestBackend`] — no terminal or async runtime
/// required — and returns the raw buffer for cell-by-cell inspection.  For
/// simpler string-based assertions, see [`render_string`].
pub fn render(renderable: &dyn Renderable, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            renderable.render(frame, frame.area());
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render a [`Renderable`] and return the visible content as a plain string.
///
/// Each buffer row becomes one line; rows are separated by newlines and
/// trailing whitespace within a row is preserved.
pub fn render_string(renderable: &dyn Renderable, width: u16, height: u16) -> String {
    let buf = render(renderable, width, height);
    let area = Rect::new(0, 0, width, height);
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buf[(x, y)];
            output.push_str(cell.symbol());
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }
    output
}
