//! Statistical-distribution exhibit: sprint times binned per medal.

use crate::color::theme_axis_color;
use crate::data;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;
use vitrine_core::{BoxedRenderable, ExampleRequest, Exhibit, ExhibitKind, RenderError, Renderable};

/// Catalog key for this exhibit.
pub const KEY: &str = "HISTOGRAM";

const REFERENCE: &str = "https://docs.rs/ratatui/latest/ratatui/widgets/struct.BarChart.html";
const DOCS: &str = "https://ratatui.rs/recipes/widgets/";
const IMPORTS: &str = "\
use ratatui::widgets::{Bar, BarChart, BarGroup};
";

/// Fixed medal palette: gold, silver, brown.  The accent color is unused
/// by design.
const MEDAL_COLORS: [Color; 3] = [
    Color::Rgb(0xFF, 0xD7, 0x00),
    Color::Rgb(0xC0, 0xC0, 0xC0),
    Color::Rgb(0xA5, 0x2A, 0x2A),
];

/// Statistical-distribution capability demo.
///
/// Bins the sprint-time sample data into a per-medal histogram and renders
/// it as grouped bars, one group per medal, in the fixed medal palette.
#[derive(Debug)]
pub struct MedalHistogram {
    bins: usize,
}

impl MedalHistogram {
    /// Create the exhibit with the default bin count.
    pub fn new() -> Self {
        Self { bins: 4 }
    }

    /// Set the number of time bins per medal group.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins.max(1);
        self
    }
}

impl Default for MedalHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Count how many of `values` fall into each of `bins` equal-width buckets
/// spanning `[min, max]`.  Values on the top edge land in the last bucket.
fn bin_counts(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    let span = max - min;
    if span <= 0.0 {
        if let Some(first) = counts.first_mut() {
            *first = values.len() as u64;
        }
        return counts;
    }
    for &v in values {
        let idx = (((v - min) / span) * bins as f64) as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    counts
}

impl Exhibit for MedalHistogram {
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
        let groups = data::sprint_times();
        let min = groups
            .iter()
            .flat_map(|(_, times)| times.iter().copied())
            .fold(f64::INFINITY, f64::min);
        let max = groups
            .iter()
            .flat_map(|(_, times)| times.iter().copied())
            .fold(f64::NEG_INFINITY, f64::max);

        let groups = groups
            .iter()
            .zip(MEDAL_COLORS)
            .map(|((medal, times), color)| MedalBins {
                label: medal.to_string(),
                color,
                counts: bin_counts(times, min, max, self.bins),
            })
            .collect();

        Ok(Box::new(HistogramExample {
            groups,
            axis_color: theme_axis_color(&request.theme),
        }))
    }
}

#[derive(Debug)]
struct MedalBins {
    label: String,
    color: Color,
    counts: Vec<u64>,
}

#[derive(Debug)]
struct HistogramExample {
    groups: Vec<MedalBins>,
    axis_color: Color,
}

impl Renderable for HistogramExample {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("sprint times by medal")
                    .border_style(Style::default().fg(self.axis_color)),
            )
            .bar_width(3)
            .bar_gap(1)
            .group_gap(3);

        for group in &self.groups {
            let bars: Vec<Bar> = group
                .counts
                .iter()
                .map(|&count| {
                    Bar::default()
                        .value(count)
                        .style(Style::default().fg(group.color))
                })
                .collect();
            chart = chart.data(
                BarGroup::default()
                    .label(group.label.clone())
                    .bars(&bars),
            );
        }

        frame.render_widget(chart, area);
    }
}
