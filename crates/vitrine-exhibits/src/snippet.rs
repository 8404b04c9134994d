//! Syntax-highlighted view of an exhibit's setup snippet.
//!
//! Exhibit `imports` text is display-only Rust source; this module turns it
//! into styled ratatui [`Line`]s for a host's metadata pane.  Syntax and
//! theme sets load once at construction and are reused per call.
//!
//! Feature-gated behind `syntax-highlighting`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Highlighter for exhibit setup snippets.
pub struct SnippetView {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl Default for SnippetView {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetView {
    /// Create a snippet view with the default theme (`base16-ocean.dark`).
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: "base16-ocean.dark".to_string(),
        }
    }

    /// Set the syntect theme by name.  Unknown names keep the current theme.
    pub fn with_theme(mut self, theme: &str) -> Self {
        if self.theme_set.themes.contains_key(theme) {
            self.theme_name = theme.to_string();
        }
        self
    }

    /// Highlight a setup snippet as Rust source, returning styled lines.
    ///
    /// Lines that fail to highlight are passed through unstyled.
    pub fn lines(&self, snippet: &str) -> Vec<Line<'static>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token("rust")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("at least one theme")
            });

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(snippet) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    let spans: Vec<Span<'static>> = ranges
                        .iter()
                        .map(|(style, text)| {
                            let mut out = Style::default().fg(Color::Rgb(
                                style.foreground.r,
                                style.foreground.g,
                                style.foreground.b,
                            ));
                            if style.font_style.contains(FontStyle::BOLD) {
                                out = out.add_modifier(Modifier::BOLD);
                            }
                            if style.font_style.contains(FontStyle::ITALIC) {
                                out = out.add_modifier(Modifier::ITALIC);
                            }
                            Span::styled(text.trim_end_matches('\n').to_string(), out)
                        })
                        .collect();
                    lines.push(Line::from(spans));
                }
                Err(_) => {
                    lines.push(Line::from(Span::raw(
                        line.trim_end_matches('\n').to_string(),
                    )));
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_each_snippet_line() {
        let view = SnippetView::new();
        let lines = view.lines("use ratatui::widgets::Paragraph;\n");
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].spans.is_empty());
    }

    #[test]
    fn unknown_theme_keeps_default() {
        let view = SnippetView::new().with_theme("does_not_exist");
        assert_eq!(view.theme_name, "base16-ocean.dark");
    }

    #[test]
    fn multi_line_snippet_round_trips_text() {
        let view = SnippetView::new();
        let snippet = "use a::b;\nuse c::d;\n";
        let lines = view.lines(snippet);
        assert_eq!(lines.len(), 2);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("use a::b;"));
        assert!(text.contains("use c::d;"));
    }
}
