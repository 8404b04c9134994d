//! Reactive parameter-binding exhibit: two bounded inputs and a derived sum.

use crate::color::{parse_accent, theme_axis_color, theme_point_color};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;
use vitrine_core::{BoxedRenderable, ExampleRequest, Exhibit, ExhibitKind, RenderError, Renderable};

/// Catalog key for this exhibit.
pub const KEY: &str = "FORM";

const REFERENCE: &str = "https://docs.rs/ratatui/latest/ratatui/widgets/struct.Gauge.html";
const DOCS: &str = "https://ratatui.rs/recipes/widgets/";
const IMPORTS: &str = "\
use ratatui::widgets::{Gauge, Paragraph};
";

const A_MAX: f64 = 1.0;
const B_MAX: i64 = 10;

/// Reactive parameter-binding capability demo.
///
/// Two bounded parameters — `a` in `0.0..=1.0` and `b` in `0..=10` — with a
/// derived output line that always reflects their current values.  The
/// produced [`AdderExample`] exposes setters so a host embedding the
/// concrete type can drive the binding; values are clamped to their bounds
/// on every write.
#[derive(Debug)]
pub struct AdderForm;

impl AdderForm {
    /// Create the exhibit.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Exhibit for AdderForm {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::Form
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
        let mut example = AdderExample::new(accent, theme_axis_color(&request.theme));
        example.output_color = theme_point_color(&request.theme);
        example.set_a(1.0);
        example.set_b(2);
        Ok(Box::new(example))
    }
}

/// The live form produced by [`AdderForm`].
#[derive(Debug)]
pub struct AdderExample {
    a: f64,
    b: i64,
    accent: Color,
    frame_color: Color,
    output_color: Color,
}

impl AdderExample {
    fn new(accent: Color, frame_color: Color) -> Self {
        Self {
            a: 0.0,
            b: 0,
            accent,
            frame_color,
            output_color: Color::Black,
        }
    }

    /// Set `a`, clamped to `0.0..=1.0`.  Non-finite values are ignored.
    pub fn set_a(&mut self, a: f64) {
        if a.is_finite() {
            self.a = a.clamp(0.0, A_MAX);
        }
    }

    /// Set `b`, clamped to `0..=10`.
    pub fn set_b(&mut self, b: i64) {
        self.b = b.clamp(0, B_MAX);
    }

    /// Current value of `a`.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Current value of `b`.
    pub fn b(&self) -> i64 {
        self.b
    }

    /// The derived output line, recomputed from the current values.
    pub fn output(&self) -> String {
        format!("{} + {} = {:.1}", self.a, self.b, self.a + self.b as f64)
    }
}

impl Renderable for AdderExample {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(area);

        let frame_style = Style::default().fg(self.frame_color);

        let a_gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("a (0.0 ..= 1.0)")
                    .border_style(frame_style),
            )
            .gauge_style(Style::default().fg(self.accent))
            .ratio(self.a / A_MAX)
            .label(format!("{:.2}", self.a));
        frame.render_widget(a_gauge, chunks[0]);

        let b_gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("b (0 ..= 10)")
                    .border_style(frame_style),
            )
            .gauge_style(Style::default().fg(self.accent))
            .ratio(self.b as f64 / B_MAX as f64)
            .label(format!("{}", self.b));
        frame.render_widget(b_gauge, chunks[1]);

        let output = Paragraph::new(self.output()).style(
            Style::default()
                .fg(self.output_color)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(output, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::testing;

    #[test]
    fn output_tracks_current_values() {
        let mut form = AdderExample::new(Color::Blue, Color::DarkGray);
        form.set_a(1.0);
        form.set_b(2);
        assert_eq!(form.output(), "1 + 2 = 3.0");

        form.set_a(0.5);
        form.set_b(7);
        assert_eq!(form.output(), "0.5 + 7 = 7.5");
    }

    #[test]
    fn values_are_clamped_to_bounds() {
        let mut form = AdderExample::new(Color::Blue, Color::DarkGray);
        form.set_a(3.5);
        form.set_b(-4);
        assert_eq!(form.a(), 1.0);
        assert_eq!(form.b(), 0);

        form.set_a(f64::NAN);
        assert_eq!(form.a(), 1.0);
    }

    #[test]
    fn example_renders_gauges_and_output() {
        let exhibit = AdderForm::new();
        let renderable = exhibit.example(&ExampleRequest::default()).unwrap();
        let out = testing::render_string(renderable.as_ref(), 50, 10);
        assert!(out.contains("a (0.0 ..= 1.0)"));
        assert!(out.contains("b (0 ..= 10)"));
        assert!(out.contains("1 + 2 = 3.0"));
    }

    #[test]
    fn dark_request_renders_without_error() {
        let exhibit = AdderForm::new();
        let renderable = exhibit
            .example(
                &ExampleRequest::new()
                    .with_theme("dark")
                    .with_accent_color("#E5E5E5"),
            )
            .unwrap();
        let out = testing::render_string(renderable.as_ref(), 50, 10);
        assert!(out.contains("= 3.0"));
    }

    #[test]
    fn metadata_is_populated() {
        let exhibit = AdderForm::new();
        assert!(!exhibit.reference().is_empty());
        assert!(!exhibit.docs().is_empty());
        assert_eq!(exhibit.kind(), ExhibitKind::Form);
    }
}
