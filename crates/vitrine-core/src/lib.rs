//! Core catalog types for **vitrine**, a terminal dashboard-component
//! showcase.
//!
//! `vitrine-core` defines the uniform "exhibit" shape every catalog entry
//! fits: a small immutable metadata record (reference/docs URLs, a
//! setup-code snippet) paired with a factory that produces a fresh,
//! opaque renderable for a given display configuration.  A string-keyed
//! [`Catalog`] maps stable uppercase tokens to exhibits; a host gallery
//! looks an entry up, asks it for an example, and embeds the result.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Exhibit`] | Descriptor trait: metadata + example production |
//! | [`ExhibitKind`] | Informational capability tag |
//! | [`ExampleRequest`] | Display configuration (theme, accent color) |
//! | [`Renderable`] | Opaque UI element that draws into a [`ratatui::Frame`] |
//! | [`Catalog`] | Lookup table from key to exhibit |
//! | [`SharedCatalog`] | Atomic whole-table swap for hot reload |
//! | [`NotFoundError`] / [`RenderError`] | The two failure conditions |
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitrine_core::{Catalog, ExampleRequest};
//!
//! let mut catalog = Catalog::new();
//! catalog.register("CHART", Arc::new(my_chart_exhibit));
//!
//! let exhibit = catalog.lookup("CHART")?;
//! let request = ExampleRequest::new().with_theme("dark");
//! let renderable = exhibit.example(&request)?;
//! // hand `renderable` to the host UI
//! ```
//!
//! The catalog is passive and synchronous: populate it once during
//! application initialization, share it read-only, and use
//! [`SharedCatalog`] only if the host needs to reload the table at
//! runtime.

pub mod catalog;
pub mod error;
pub mod exhibit;
pub mod renderable;
pub mod request;
pub mod testing;

pub use catalog::{Catalog, SharedCatalog};
pub use error::{NotFoundError, RenderError};
pub use exhibit::{Exhibit, ExhibitKind};
pub use renderable::{BoxedRenderable, Renderable};
pub use request::{ExampleRequest, DEFAULT_ACCENT, DEFAULT_THEME};
