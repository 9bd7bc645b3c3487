//! Embeddable recommendation widget
//!
//! Fetches recommendation batches from a vendor content API, normalizes them
//! into a stable internal shape, and renders each item into an abstract UI
//! tree through a pluggable per-kind renderer registry.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod ui;
pub mod widget;

pub use config::WidgetConfig;
pub use error::{WidgetError, WidgetResult};
pub use models::Recommendation;
pub use render::{Navigator, Renderer, RendererRegistry};
pub use ui::UiNode;
pub use widget::{Widget, WidgetState};
