//! Media-embedding exhibit: a fixed-size framed pane for an external source.

use crate::color::{parse_accent, theme_axis_color};
use crate::textutil::truncate_to_width;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use vitrine_core::{BoxedRenderable, ExampleRequest, Exhibit, ExhibitKind, RenderError, Renderable};

/// Catalog key for this exhibit.
pub const KEY: &str = "MEDIA";

const REFERENCE: &str = "https://docs.rs/ratatui/latest/ratatui/widgets/struct.Paragraph.html";
const DOCS: &str = "https://ratatui.rs/recipes/widgets/";
const IMPORTS: &str = "\
use ratatui::widgets::Paragraph;
";

const SAMPLE_URL: &str =
    "https://test-videos.co.uk/vids/bigbuckbunny/mp4/h264/720/Big_Buck_Bunny_720_10s_1MB.mp4";

/// The pane keeps a fixed height rather than stretching with the host.
const PANE_HEIGHT: u16 = 12;

/// Media-embedding capability demo.
///
/// Terminals cannot play video, so the pane renders what a host media
/// widget would show before playback: a framed placeholder with a play
/// glyph and the media source URL.
#[derive(Debug)]
pub struct MediaPane {
    url: String,
}

impl MediaPane {
    /// Create the exhibit pointing at the bundled sample clip.
    pub fn new() -> Self {
        Self {
            url: SAMPLE_URL.to_string(),
        }
    }

    /// Point the pane at a different media URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for MediaPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Exhibit for MediaPane {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::Media
    }

    fn reference(&self) -> &str {
        REFERENCE
    }

    fn docs(&self) -> &str {
        DOCS
    }

    fn imports(&self) -> &str {
        IMPORTS
    }

    fn example(&self, request: &ExampleRequest) -> Result<BoxedRenderable, RenderError> {
        let accent = parse_accent(&request.accent_color).map_err(RenderError::new)?;
        Ok(Box::new(MediaExample {
            url: self.url.clone(),
            accent,
            frame_color: theme_axis_color(&request.theme),
        }))
    }
}

#[derive(Debug)]
struct MediaExample {
    url: String,
    accent: Color,
    frame_color: Color,
}

impl Renderable for MediaExample {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Fixed sizing: never grow beyond the pane height.
        let area = Rect {
            height: area.height.min(PANE_HEIGHT),
            ..area
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("video")
            .border_style(Style::default().fg(self.frame_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let play = Paragraph::new("\u{25B6}")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(play, chunks[0]);

        let caption = truncate_to_width(&self.url, inner.width as usize);
        let url = Paragraph::new(caption)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.frame_color));
        frame.render_widget(url, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::testing;

    #[test]
    fn example_renders_play_glyph_and_url() {
        let exhibit = MediaPane::new();
        let renderable = exhibit.example(&ExampleRequest::default()).unwrap();
        let out = testing::render_string(renderable.as_ref(), 100, 14);
        assert!(out.contains('\u{25B6}'));
        assert!(out.contains("test-videos.co.uk"));
    }

    #[test]
    fn long_urls_are_truncated_to_fit() {
        let long_url = format!("https://example.com/{}", "x".repeat(200));
        let exhibit = MediaPane::new().with_url(long_url);
        let renderable = exhibit.example(&ExampleRequest::default()).unwrap();
        let out = testing::render_string(renderable.as_ref(), 40, 14);
        assert!(out.contains('\u{2026}'));
    }

    #[test]
    fn pane_height_is_fixed() {
        let exhibit = MediaPane::new();
        let renderable = exhibit.example(&ExampleRequest::default()).unwrap();
        let buf = testing::render(renderable.as_ref(), 60, 30);
        // Nothing below the fixed pane height gets drawn.
        let below: String = (PANE_HEIGHT..30)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(below.trim().is_empty());
    }

    #[test]
    fn metadata_is_populated() {
        let exhibit = MediaPane::new();
        assert!(!exhibit.reference().is_empty());
        assert!(!exhibit.docs().is_empty());
        assert_eq!(exhibit.kind(), ExhibitKind::Media);
    }
}
