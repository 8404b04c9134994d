//! Line-chart exhibit: a random-walk curve linked to a point table.

use crate::color::{parse_accent, theme_axis_color, theme_point_color};
use crate::data;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Row, Table};
use ratatui::Frame;
use vitrine_core::{BoxedRenderable, ExampleRequest, Exhibit, ExhibitKind, RenderError, Renderable};

/// Catalog key for this exhibit.
pub const KEY: &str = "CHART";

const REFERENCE: &str = "https://docs.rs/ratatui/latest/ratatui/widgets/struct.Chart.html";
const DOCS: &str = "https://ratatui.rs/recipes/widgets/";
const IMPORTS: &str = "\
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Row, Table};
";

const WALK_SEED: u64 = 7;

/// Line-chart capability demo.
///
/// Draws a cumulative random walk as a curve in the accent color, with the
/// individual points marked in a theme-sensitive color, and lists the same
/// dataset in a table below the plot — one dataset feeding two linked
/// views.
#[derive(Debug)]
pub struct CurveChart {
    steps: usize,
}

impl CurveChart {
    /// Create the exhibit with the default walk length.
    pub fn new() -> Self {
        Self { steps: 10 }
    }

    /// Set the number of walk steps in the generated curve.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(2);
        self
    }
}

impl Default for CurveChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Exhibit for CurveChart {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::Chart
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
        Ok(Box::new(CurveExample {
            points: data::random_walk(WALK_SEED, self.steps),
            accent,
            point_color: theme_point_color(&request.theme),
            axis_color: theme_axis_color(&request.theme),
        }))
    }
}

#[derive(Debug)]
struct CurveExample {
    points: Vec<(f64, f64)>,
    accent: Color,
    point_color: Color,
    axis_color: Color,
}

impl Renderable for CurveExample {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let table_height = (self.points.len() as u16 + 2).min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(table_height)])
            .split(area);

        let datasets = vec![
            Dataset::default()
                .name("walk")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.accent))
                .data(&self.points),
            Dataset::default()
                .name("points")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(self.point_color))
                .data(&self.points),
        ];

        let (y_min, y_max) = data::y_bounds(&self.points);
        let x_max = (self.points.len().saturating_sub(1)) as f64;
        let axis_style = Style::default().fg(self.axis_color);

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title("curve"))
            .x_axis(
                Axis::default()
                    .title("step")
                    .style(axis_style)
                    .bounds([0.0, x_max])
                    .labels(["0".to_string(), format!("{x_max:.0}")]),
            )
            .y_axis(
                Axis::default()
                    .title("value")
                    .style(axis_style)
                    .bounds([y_min, y_max])
                    .labels([format!("{y_min:.1}"), format!("{y_max:.1}")]),
            );
        frame.render_widget(chart, chunks[0]);

        let rows: Vec<Row> = self
            .points
            .iter()
            .map(|(x, y)| Row::new([format!("{x:.0}"), format!("{y:+.2}")]))
            .collect();
        let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(8)])
            .header(
                Row::new(["step", "value"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL).title("data"));
        frame.render_widget(table, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::testing;

    fn any_cell_has_fg(renderable: &dyn Renderable, color: Color) -> bool {
        let buf = testing::render(renderable, 60, 24);
        buf.content.iter().any(|cell| cell.style().fg == Some(color))
    }

    #[test]
    fn example_renders_chart_and_table() {
        let exhibit = CurveChart::new();
        let renderable = exhibit.example(&ExampleRequest::default()).unwrap();
        let out = testing::render_string(renderable.as_ref(), 60, 24);
        assert!(out.contains("curve"));
        assert!(out.contains("data"));
        assert!(out.contains("step"));
    }

    #[test]
    fn repeated_calls_return_independent_instances() {
        let exhibit = CurveChart::new();
        let request = ExampleRequest::default();
        let a = exhibit.example(&request).unwrap();
        let b = exhibit.example(&request).unwrap();
        let pa = a.as_ref() as *const dyn Renderable as *const u8;
        let pb = b.as_ref() as *const dyn Renderable as *const u8;
        assert_ne!(pa, pb);
        // Identical requests produce identical output.
        assert_eq!(
            testing::render_string(a.as_ref(), 60, 24),
            testing::render_string(b.as_ref(), 60, 24)
        );
    }

    #[test]
    fn dark_theme_switches_point_color() {
        let exhibit = CurveChart::new();
        let light = exhibit.example(&ExampleRequest::default()).unwrap();
        let dark = exhibit
            .example(&ExampleRequest::new().with_theme("dark"))
            .unwrap();
        assert!(any_cell_has_fg(light.as_ref(), Color::Black));
        assert!(any_cell_has_fg(dark.as_ref(), Color::Rgb(0xE5, 0xE5, 0xE5)));
    }

    #[test]
    fn accent_color_is_applied() {
        let exhibit = CurveChart::new();
        let renderable = exhibit
            .example(&ExampleRequest::new().with_accent_color("#FF00FF"))
            .unwrap();
        assert!(any_cell_has_fg(renderable.as_ref(), Color::Rgb(0xFF, 0x00, 0xFF)));
    }

    #[test]
    fn bad_accent_token_propagates() {
        let exhibit = CurveChart::new();
        let err = exhibit
            .example(&ExampleRequest::new().with_accent_color("chartreuse???"))
            .unwrap_err();
        assert!(err.to_string().contains("chartreuse???"));
    }

    #[test]
    fn metadata_is_populated() {
        let exhibit = CurveChart::new();
        assert!(!exhibit.reference().is_empty());
        assert!(!exhibit.docs().is_empty());
        assert!(exhibit.imports().contains("use ratatui"));
        assert_eq!(exhibit.kind(), ExhibitKind::Chart);
    }

    #[test]
    fn zero_sized_area_is_a_no_op() {
        let exhibit = CurveChart::new();
        let renderable = exhibit.example(&ExampleRequest::default()).unwrap();
        // Must not panic.
        testing::render(renderable.as_ref(), 0, 0);
    }
}
