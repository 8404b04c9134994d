//! Accent-token parsing and theme-sensitive color selection.

use ratatui::style::Color;
use thiserror::Error;
use vitrine_core::DEFAULT_THEME;

/// Raised when an accent token cannot be interpreted as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color token `{0}`")]
pub struct ColorTokenError(pub String);

/// Parse a free-form accent token into a [`Color`].
///
/// Accepts whatever `ratatui` itself accepts: named colors (`"blue"`,
/// `"lightcyan"`), `#RRGGBB` hex, and indexed values.  Anything else is
/// rejected with [`ColorTokenError`], which exhibits surface through
/// [`RenderError`](vitrine_core::RenderError).
pub fn parse_accent(token: &str) -> Result<Color, ColorTokenError> {
    token
        .trim()
        .parse::<Color>()
        .map_err(|_| ColorTokenError(token.to_string()))
}

/// Foreground used for point markers and emphasis text.
///
/// The default theme gets black; any other theme token is treated as a
/// dark variant and gets a light gray.
pub fn theme_point_color(theme: &str) -> Color {
    if theme == DEFAULT_THEME {
        Color::Black
    } else {
        Color::Rgb(0xE5, 0xE5, 0xE5)
    }
}

/// Muted foreground used for axes, borders, and labels.
pub fn theme_axis_color(theme: &str) -> Color {
    if theme == DEFAULT_THEME {
        Color::DarkGray
    } else {
        Color::Gray
    }
}
