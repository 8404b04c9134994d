//! String-keyed catalog of exhibits, plus a swappable handle for hot reload.

use crate::error::NotFoundError;
use crate::exhibit::Exhibit;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Lookup table from stable string keys to exhibits.
///
/// Keys are conventionally uppercase tokens (e.g. `"CHART"`).  The catalog
/// is populated once during explicit application initialization and treated
/// as read-only afterward; it is `Sync`, so a populated catalog can be
/// shared freely across threads without further coordination.  Iteration
/// order carries no meaning.
pub struct Catalog {
    entries: HashMap<String, Arc<dyn Exhibit>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for `key`.  Last write wins.
    pub fn register(&mut self, key: impl Into<String>, exhibit: Arc<dyn Exhibit>) {
        self.entries.insert(key.into(), exhibit);
    }

    /// Look up the exhibit registered under `key`.
    ///
    /// Returns the exact instance passed to [`register`](Catalog::register)
    /// (the same `Arc`), or [`NotFoundError`] if the key is absent.
    pub fn lookup(&self, key: &str) -> Result<Arc<dyn Exhibit>, NotFoundError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| NotFoundError::new(key))
    }

    /// Iterate over all registered keys.
    ///
    /// Lazy, finite, and restartable; order is unspecified.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// A process-wide catalog handle that supports atomic hot reload.
///
/// Readers take cheap [`Arc`] snapshots via
/// [`snapshot`](SharedCatalog::snapshot) and keep using them for as long as
/// they like.  A reload replaces the whole table in one step via
/// [`swap`](SharedCatalog::swap) — entries are never mutated in place, so a
/// reader can never observe a partially updated catalog.
pub struct SharedCatalog {
    inner: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    /// Wrap an already-populated catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Take a snapshot of the current catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the entire catalog, returning the displaced table.
    ///
    /// Snapshots taken before the swap remain valid and keep serving the
    /// old table.
    pub fn swap(&self, catalog: Catalog) -> Arc<Catalog> {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::exhibit::ExhibitKind;
    use crate::renderable::{BoxedRenderable, Renderable};
    use crate::request::ExampleRequest;
    use ratatui::layout::Rect;
    use ratatui::widgets::Paragraph;
    use ratatui::Frame;
    use std::collections::HashSet;

    #[derive(Debug)]
    struct Placeholder;

    impl Renderable for Placeholder {
        fn render(&self, frame: &mut Frame, area: Rect) {
            frame.render_widget(Paragraph::new("placeholder"), area);
        }
    }

    #[derive(Debug)]
    struct StubExhibit {
        reference: &'static str,
    }

    impl StubExhibit {
        fn new() -> Self {
            Self {
                reference: "https://example.com/reference",
            }
        }
    }

    impl Exhibit for StubExhibit {
        fn kind(&self) -> ExhibitKind {
            ExhibitKind::Chart
        }

        fn reference(&self) -> &str {
            self.reference
        }

        fn docs(&self) -> &str {
            "https://example.com/docs"
        }

        fn imports(&self) -> &str {
            "use ratatui::widgets::Paragraph;\n"
        }

        fn example(&self, _request: &ExampleRequest) -> Result<BoxedRenderable, RenderError> {
            Ok(Box::new(Placeholder))
        }
    }

    #[test]
    fn lookup_returns_registered_instance() {
        let mut catalog = Catalog::new();
        let exhibit: Arc<dyn Exhibit> = Arc::new(StubExhibit::new());
        catalog.register("CHART", exhibit.clone());

        let found = catalog.lookup("CHART").unwrap();
        assert!(Arc::ptr_eq(&found, &exhibit));
    }

    #[test]
    fn lookup_unknown_key_fails() {
        let catalog = Catalog::new();
        let err = catalog.lookup("NOT_A_KEY").unwrap_err();
        assert_eq!(err.key, "NOT_A_KEY");
    }

    #[test]
    fn reregister_overwrites() {
        let mut catalog = Catalog::new();
        let first: Arc<dyn Exhibit> = Arc::new(StubExhibit::new());
        let second: Arc<dyn Exhibit> = Arc::new(StubExhibit::new());
        catalog.register("CHART", first.clone());
        catalog.register("CHART", second.clone());

        let found = catalog.lookup("CHART").unwrap();
        assert!(Arc::ptr_eq(&found, &second));
        assert!(!Arc::ptr_eq(&found, &first));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn keys_yields_each_key_once() {
        let mut catalog = Catalog::new();
        for key in ["CHART", "FORM", "MEDIA"] {
            catalog.register(key, Arc::new(StubExhibit::new()));
        }

        let keys: HashSet<&str> = catalog.keys().collect();
        assert_eq!(keys, HashSet::from(["CHART", "FORM", "MEDIA"]));
        // Restartable: a second pass sees the same keys.
        assert_eq!(catalog.keys().count(), 3);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.keys().count(), 0);
    }

    #[test]
    fn shared_catalog_swap_replaces_whole_table() {
        let mut first = Catalog::new();
        first.register("CHART", Arc::new(StubExhibit::new()));
        let shared = SharedCatalog::new(first);

        let before = shared.snapshot();
        assert!(before.lookup("CHART").is_ok());

        let mut second = Catalog::new();
        second.register("FORM", Arc::new(StubExhibit::new()));
        let displaced = shared.swap(second);

        // Old snapshots keep serving the old table.
        assert!(before.lookup("CHART").is_ok());
        assert!(displaced.lookup("CHART").is_ok());

        let after = shared.snapshot();
        assert!(after.lookup("CHART").is_err());
        assert!(after.lookup("FORM").is_ok());
    }
}
