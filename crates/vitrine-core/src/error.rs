//! Error types for catalog lookup and example production.

use thiserror::Error;

/// Returned by [`Catalog::lookup`](crate::Catalog::lookup) when no exhibit
/// is registered under the requested key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no exhibit registered under key `{key}`")]
pub struct NotFoundError {
    /// The key that was looked up.
    pub key: String,
}

impl NotFoundError {
    /// Create a not-found error for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// A failure raised while producing an example renderable.
///
/// The catalog never interprets, retries, or translates these: whatever the
/// wrapped capability reports (an unrecognized accent token, unavailable
/// sample data) is passed through to the caller unchanged.  Hosts typically
/// show an error pane or a placeholder in response.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RenderError(#[from] Box<dyn std::error::Error + Send + Sync + 'static>);

impl RenderError {
    /// Wrap a concrete error raised by the underlying capability.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    /// Borrow the underlying error.
    pub fn source_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_key() {
        let err = NotFoundError::new("NOT_A_KEY");
        assert_eq!(
            err.to_string(),
            "no exhibit registered under key `NOT_A_KEY`"
        );
    }

    #[test]
    fn render_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "dataset missing");
        let err = RenderError::new(io);
        assert_eq!(err.to_string(), "dataset missing");
    }
}
