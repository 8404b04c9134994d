//! Large-data exhibit: a dense temperature series rasterized on a canvas.

use crate::color::{parse_accent, theme_axis_color};
use crate::data;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use vitrine_core::{BoxedRenderable, ExampleRequest, Exhibit, ExhibitKind, RenderError, Renderable};

/// Catalog key for this exhibit.
pub const KEY: &str = "SCATTER";

const REFERENCE: &str = "https://docs.rs/ratatui/latest/ratatui/widgets/canvas/struct.Canvas.html";
const DOCS: &str = "https://ratatui.rs/recipes/widgets/";
const IMPORTS: &str = "\
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line, Points};
";

const SERIES_SEED: u64 = 1117;

/// Ochre tone for the raw point cloud, in the spirit of a heat colormap.
const POINT_CLOUD_COLOR: Color = Color::Rgb(0xCC, 0x79, 0x02);

/// Large-data capability demo.
///
/// Generates a multi-thousand-point synthetic temperature series, rasterizes
/// the raw points onto a braille canvas, and overlays the rolling mean as a
/// line in the accent color.
#[derive(Debug)]
pub struct TemperatureScatter {
    points: usize,
}

impl TemperatureScatter {
    /// Create the exhibit with the default series length.
    pub fn new() -> Self {
        Self { points: 4000 }
    }

    /// Set the number of points in the generated series.
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points.max(2);
        self
    }
}

impl Default for TemperatureScatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exhibit for TemperatureScatter {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::Canvas
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
        let points = data::temperature_series(SERIES_SEED, self.points);
        // A window of ~2% of the series gives a visibly smooth mean.
        let window = (self.points / 50).max(2);
        let mean = data::rolling_mean(&points, window);
        Ok(Box::new(ScatterExample {
            points,
            mean,
            accent,
            axis_color: theme_axis_color(&request.theme),
        }))
    }
}

#[derive(Debug)]
struct ScatterExample {
    points: Vec<(f64, f64)>,
    mean: Vec<(f64, f64)>,
    accent: Color,
    axis_color: Color,
}

impl Renderable for ScatterExample {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (y_min, y_max) = data::y_bounds(&self.points);
        let x_max = self.points.last().map(|(x, _)| *x).unwrap_or(1.0);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("air temperature (synthetic)")
                    .border_style(Style::default().fg(self.axis_color)),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, x_max])
            .y_bounds([y_min, y_max])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &self.points,
                    color: POINT_CLOUD_COLOR,
                });
                for pair in self.mean.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color: self.accent,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::testing;

    #[test]
    fn example_renders_a_dense_cloud() {
        let exhibit = TemperatureScatter::new().with_points(1000);
        let renderable = exhibit.example(&ExampleRequest::default()).unwrap();
        let buf = testing::render(renderable.as_ref(), 80, 24);
        let cloud_cells = buf
            .content
            .iter()
            .filter(|cell| cell.style().fg == Some(POINT_CLOUD_COLOR))
            .count();
        assert!(cloud_cells > 50, "expected a dense cloud, got {cloud_cells}");
    }

    #[test]
    fn mean_line_uses_the_accent_color() {
        let exhibit = TemperatureScatter::new().with_points(500);
        let renderable = exhibit
            .example(&ExampleRequest::new().with_accent_color("#00FF00"))
            .unwrap();
        let buf = testing::render(renderable.as_ref(), 80, 24);
        let accent_cells = buf
            .content
            .iter()
            .any(|cell| cell.style().fg == Some(Color::Rgb(0x00, 0xFF, 0x00)));
        assert!(accent_cells);
    }

    #[test]
    fn bad_accent_token_propagates() {
        let exhibit = TemperatureScatter::new();
        assert!(exhibit
            .example(&ExampleRequest::new().with_accent_color(""))
            .is_err());
    }

    #[test]
    fn metadata_is_populated() {
        let exhibit = TemperatureScatter::new();
        assert!(!exhibit.reference().is_empty());
        assert!(!exhibit.docs().is_empty());
        assert!(exhibit.imports().contains("Canvas"));
        assert_eq!(exhibit.kind(), ExhibitKind::Canvas);
    }
}
