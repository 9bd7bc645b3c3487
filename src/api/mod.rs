/// Recommendation source abstraction
///
/// This module provides a pluggable architecture for different recommendation
/// feeds. Each source fetches from its vendor API and hands back batches of
/// normalized [`Recommendation`]s, so the widget never sees vendor field
/// names.
use std::sync::Arc;

use crate::{
    config::WidgetConfig,
    error::{WidgetError, WidgetResult},
    models::Recommendation,
};

pub mod taboola;

pub use taboola::TaboolaClient;

/// Trait for recommendation sources
///
/// Returns `anyhow::Result` rather than `WidgetResult` on purpose: a source
/// implementation may fail with something opaque, and the widget maps
/// anything that is not a recognized [`WidgetError`] to a generic user-facing
/// message.
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch one batch of normalized recommendations
    async fn fetch_recommendations(
        &self,
        config: &WidgetConfig,
    ) -> anyhow::Result<Vec<Recommendation>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the source selected by `config.source`
///
/// "organic" and "video" are reserved names for feeds that exist upstream but
/// have no client here yet.
pub fn source_for(config: &WidgetConfig) -> WidgetResult<Arc<dyn RecommendationSource>> {
    match config.source.as_str() {
        "taboola" => Ok(Arc::new(TaboolaClient::new())),
        "organic" => Err(WidgetError::SourceNotImplemented("organic")),
        "video" => Err(WidgetError::SourceNotImplemented("video")),
        other => Err(WidgetError::UnknownSource(other.to_string())),
    }
}
