//! Built-in exhibits for **vitrine** — demo dashboard components over
//! [`ratatui`].
//!
//! Every exhibit in this crate implements
//! [`vitrine_core::Exhibit`], so it can be registered in a
//! [`Catalog`](vitrine_core::Catalog) and displayed by any host gallery.
//! Each module wraps one ratatui capability and exports its stable catalog
//! key as a `KEY` constant.
//!
//! # Exhibits
//!
//! | Module | Key | Description |
//! |--------|-----|-------------|
//! | [`chart`] | `CHART` | Random-walk curve linked to a point table |
//! | [`histogram`] | `HISTOGRAM` | Sprint-time distributions grouped by medal |
//! | [`scatter`] | `SCATTER` | Dense temperature series on a braille canvas |
//! | [`form`] | `FORM` | Bounded parameters with a derived sum |
//! | [`media`] | `MEDIA` | Fixed-size framed media placeholder |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | Accent-token parsing and theme-sensitive colors |
//! | [`data`] | Deterministic sample datasets |
//! | [`textutil`] | Unicode-aware width truncation |
//! | [`snippet`] | Syntect-highlighted setup snippets (feature `syntax-highlighting`) |

pub mod chart;
pub mod color;
pub mod data;
pub mod form;
pub mod histogram;
pub mod media;
pub mod scatter;
#[cfg(feature = "syntax-highlighting")]
pub mod snippet;
pub mod textutil;

pub use chart::CurveChart;
pub use form::AdderForm;
pub use histogram::MedalHistogram;
pub use media::MediaPane;
pub use scatter::TemperatureScatter;
