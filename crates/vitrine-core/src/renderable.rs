//! The opaque renderable handle returned by example production.

use ratatui::layout::Rect;
use ratatui::Frame;

/// A live UI element that draws itself into a region of a [`Frame`].
///
/// Renderables are handed to a host as opaque values: the catalog never
/// inspects or caches them, and every call to
/// [`Exhibit::example`](crate::Exhibit::example) produces a fresh instance
/// owned by the caller.  Implementations should confine all drawing to the
/// given rectangle.
pub trait Renderable: Send + std::fmt::Debug {
    /// Draw this element into `area`.
    fn render(&self, frame: &mut Frame, area: Rect);
}

/// Owned, type-erased renderable.
pub type BoxedRenderable = Box<dyn Renderable>;

impl Renderable for BoxedRenderable {
    fn render(&self, frame: &mut Frame, area: Rect) {
        self.as_ref().render(frame, area);
    }
}
