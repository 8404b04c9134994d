//! Display configuration passed to an exhibit when producing an example.

/// Theme token used when none is specified.
pub const DEFAULT_THEME: &str = "default";

/// Accent color token used when none is specified.
pub const DEFAULT_ACCENT: &str = "blue";

/// How an example should be rendered: a theme token and an accent color.
///
/// Both fields are free-form strings and are passed through to the exhibit
/// untouched.  The catalog performs no validation; an exhibit may reject a
/// token it cannot interpret (typically the accent color) by returning a
/// [`RenderError`](crate::RenderError) from its example production.
///
/// The conventional theme tokens are `"default"` and `"dark"`.  Exhibits
/// treat any non-default token as a dark variant, so hosts with custom
/// theme names degrade gracefully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRequest {
    /// Theme token, e.g. `"default"` or `"dark"`.
    pub theme: String,
    /// Accent color token, e.g. `"blue"` or `"#E5E5E5"`.
    pub accent_color: String,
}

impl Default for ExampleRequest {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            accent_color: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl ExampleRequest {
    /// Create a request with the default theme and accent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme token.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the accent color token.
    pub fn with_accent_color(mut self, accent: impl Into<String>) -> Self {
        self.accent_color = accent.into();
        self
    }

    /// Whether this request uses the default theme.
    pub fn is_default_theme(&self) -> bool {
        self.theme == DEFAULT_THEME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let req = ExampleRequest::default();
        assert_eq!(req.theme, "default");
        assert_eq!(req.accent_color, "blue");
        assert!(req.is_default_theme());
    }

    #[test]
    fn builders_override_defaults() {
        let req = ExampleRequest::new()
            .with_theme("dark")
            .with_accent_color("#E5E5E5");
        assert_eq!(req.theme, "dark");
        assert_eq!(req.accent_color, "#E5E5E5");
        assert!(!req.is_default_theme());
    }
}
