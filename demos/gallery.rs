//! # Gallery Demo
//!
//! Interactive browser over the built-in exhibit catalog:
//! - Tab bar across catalog keys
//! - Metadata pane (capability, reference, docs, setup snippet)
//! - Live example pane, rebuilt on every configuration change
//! - Theme toggle and accent cycling
//!
//! Run with: `cargo run --example gallery`

use std::io::{self, Stdout};
use std::time::Duration;

use futures::StreamExt;
use vitrine::crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use vitrine::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use vitrine::crossterm::{cursor, execute};
use vitrine::ratatui::backend::CrosstermBackend;
use vitrine::ratatui::layout::{Constraint, Direction, Layout, Rect};
use vitrine::ratatui::style::{Color, Modifier, Style};
use vitrine::ratatui::text::Line;
use vitrine::ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use vitrine::ratatui::{Frame, Terminal};
use vitrine::{builtin_catalog, BoxedRenderable, Catalog, ExampleRequest, Renderable, RenderError};

const ACCENTS: &[&str] = &["blue", "magenta", "green", "#E5A10E"];

struct Gallery {
    catalog: Catalog,
    keys: Vec<String>,
    selected: usize,
    dark: bool,
    accent: usize,
    current: Result<BoxedRenderable, RenderError>,
}

impl Gallery {
    fn new(catalog: Catalog) -> Self {
        let mut keys: Vec<String> = catalog.keys().map(str::to_string).collect();
        keys.sort();
        let mut gallery = Self {
            catalog,
            keys,
            selected: 0,
            dark: false,
            accent: 0,
            current: Err(RenderError::new(io::Error::other("no exhibit selected"))),
        };
        gallery.rebuild();
        gallery
    }

    fn request(&self) -> ExampleRequest {
        ExampleRequest::new()
            .with_theme(if self.dark { "dark" } else { "default" })
            .with_accent_color(ACCENTS[self.accent])
    }

    /// Produce a fresh renderable for the current selection and config.
    fn rebuild(&mut self) {
        let Some(key) = self.keys.get(self.selected) else {
            return;
        };
        self.current = match self.catalog.lookup(key) {
            Ok(exhibit) => exhibit.example(&self.request()),
            Err(err) => Err(RenderError::new(err)),
        };
    }

    fn next_exhibit(&mut self) {
        if !self.keys.is_empty() {
            self.selected = (self.selected + 1) % self.keys.len();
            self.rebuild();
        }
    }

    fn prev_exhibit(&mut self) {
        if !self.keys.is_empty() {
            self.selected = (self.selected + self.keys.len() - 1) % self.keys.len();
            self.rebuild();
        }
    }

    fn view(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let tabs = Tabs::new(self.keys.iter().map(String::as_str))
            .select(self.selected)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
        frame.render_widget(tabs, chunks[0]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(20)])
            .split(chunks[1]);
        self.metadata_pane(frame, panes[0]);
        self.example_pane(frame, panes[1]);

        let status = Paragraph::new(format!(
            "q quit | tab/←→ switch | d theme ({}) | a accent ({})",
            if self.dark { "dark" } else { "default" },
            ACCENTS[self.accent],
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, chunks[2]);
    }

    fn metadata_pane(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("about");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(key) = self.keys.get(self.selected) else {
            return;
        };
        let Ok(exhibit) = self.catalog.lookup(key) else {
            return;
        };

        let mut lines = vec![
            Line::from(format!("kind:      {}", exhibit.kind().label())),
            Line::from(format!("reference: {}", exhibit.reference())),
            Line::from(format!("docs:      {}", exhibit.docs())),
            Line::from(""),
            Line::from("setup:"),
        ];
        lines.extend(exhibit.imports().lines().map(|l| Line::from(l.to_string())));

        let text = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(text, inner);
    }

    fn example_pane(&self, frame: &mut Frame, area: Rect) {
        match &self.current {
            Ok(renderable) => renderable.render(frame, area),
            Err(err) => {
                let message = Paragraph::new(format!("failed to produce example:\n\n{err}"))
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: false })
                    .block(Block::default().borders(Borders::ALL).title("error"));
                frame.render_widget(message, area);
            }
        }
    }
}

fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let mut terminal = init_terminal()?;

    // Restore the terminal even if the app panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(&mut terminal).await;
    restore_terminal()?;
    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let mut gallery = Gallery::new(builtin_catalog());
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(Duration::from_millis(33));
    let mut dirty = true;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event.transpose()? else {
                    return Ok(());
                };
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Tab | KeyCode::Right => gallery.next_exhibit(),
                        KeyCode::BackTab | KeyCode::Left => gallery.prev_exhibit(),
                        KeyCode::Char('d') => {
                            gallery.dark = !gallery.dark;
                            gallery.rebuild();
                        }
                        KeyCode::Char('a') => {
                            gallery.accent = (gallery.accent + 1) % ACCENTS.len();
                            gallery.rebuild();
                        }
                        KeyCode::Char('r') => gallery.rebuild(),
                        _ => {}
                    },
                    Event::Resize(_, _) => {}
                    _ => continue,
                }
                dirty = true;
            }
            _ = frames.tick() => {
                if dirty {
                    terminal.draw(|frame| gallery.view(frame))?;
                    dirty = false;
                }
            }
        }
    }
}
