//! **vitrine** -- a catalog of demo dashboard components for terminal UIs.
//!
//! This is the umbrella crate that re-exports everything a host gallery
//! needs from a single dependency:
//!
//! ```toml
//! [dependencies]
//! vitrine = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`vitrine_core`] are available at the crate root
//!   ([`Catalog`], [`Exhibit`], [`ExampleRequest`], [`Renderable`], etc.).
//! * The [`exhibits`] module re-exports everything from `vitrine-exhibits`
//!   (the built-in chart, histogram, scatter, form, and media entries).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use vitrine::{builtin_catalog, ExampleRequest};
//!
//! let catalog = builtin_catalog();
//! let exhibit = catalog.lookup("CHART")?;
//! let renderable = exhibit.example(&ExampleRequest::new().with_theme("dark"))?;
//! // embed `renderable` in the host UI
//! ```
//!
//! Run the interactive gallery with `cargo run --example gallery`.

pub use vitrine_core::*;
pub mod exhibits {
    pub use vitrine_exhibits::*;
}

// Re-export dependencies for use in examples and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;

use std::sync::Arc;
use vitrine_exhibits::{chart, form, histogram, media, scatter};
use vitrine_exhibits::{AdderForm, CurveChart, MedalHistogram, MediaPane, TemperatureScatter};

/// Build a catalog populated with the five built-in exhibits.
///
/// Construct this once during application initialization and share it
/// read-only; wrap it in a [`SharedCatalog`] if the host needs hot reload.
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.register(chart::KEY, Arc::new(CurveChart::new()));
    catalog.register(histogram::KEY, Arc::new(MedalHistogram::new()));
    catalog.register(scatter::KEY, Arc::new(TemperatureScatter::new()));
    catalog.register(form::KEY, Arc::new(AdderForm::new()));
    catalog.register(media::KEY, Arc::new(MediaPane::new()));
    catalog
}
