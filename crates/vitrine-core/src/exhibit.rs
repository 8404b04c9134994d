//! The descriptor contract every catalog entry implements.

use crate::error::RenderError;
use crate::renderable::BoxedRenderable;
use crate::request::ExampleRequest;

/// Capability tag describing what an exhibit renders with.
///
/// Informational only: the catalog attaches no semantics to it, and hosts
/// may use it for filtering or grouping (or ignore it entirely).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExhibitKind {
    /// Line/curve plotting.
    Chart,
    /// Freeform point rasterization.
    Canvas,
    /// Tabular data display.
    Table,
    /// Reactive parameter inputs.
    Form,
    /// Embedded external media.
    Media,
}

impl ExhibitKind {
    /// Short human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            ExhibitKind::Chart => "chart",
            ExhibitKind::Canvas => "canvas",
            ExhibitKind::Table => "table",
            ExhibitKind::Form => "form",
            ExhibitKind::Media => "media",
        }
    }
}

/// One catalog entry: immutable metadata plus an example factory.
///
/// An exhibit pairs a short metadata record (reference/docs URLs, a
/// setup-code snippet) with the ability to produce a live
/// [`Renderable`](crate::Renderable) for a given [`ExampleRequest`].
/// Exhibits are constructed once during catalog initialization and are
/// immutable afterward; the catalog stores them behind `Arc<dyn Exhibit>`
/// and hands out shared references.
///
/// Variants differ only in metadata and in the body of
/// [`example`](Exhibit::example); there is no shared state or interaction
/// between entries.
pub trait Exhibit: Send + Sync + std::fmt::Debug {
    /// Capability tag for this entry.
    fn kind(&self) -> ExhibitKind;

    /// URL of a reference page for the wrapped capability.
    fn reference(&self) -> &str;

    /// URL of the wrapped capability's documentation.
    fn docs(&self) -> &str;

    /// Setup code a user would write to reproduce this example.
    ///
    /// Display-only sample text: it is never parsed or executed.
    fn imports(&self) -> &str;

    /// Produce a fresh renderable for the given display configuration.
    ///
    /// May generate or load sample data on first use.  Failures (an
    /// unrecognized accent token, unavailable data) propagate unchanged to
    /// the caller; no retries are attempted.
    fn example(&self, request: &ExampleRequest) -> Result<BoxedRenderable, RenderError>;
}
