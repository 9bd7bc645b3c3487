/// Registry that maps recommendation kinds to their renderers.
/// Allows adding new recommendation kinds without modifying widget logic.
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    error::{WidgetError, WidgetResult},
    models::Recommendation,
    render::{OrganicRenderer, Renderer, SponsoredRenderer},
};

/// Kind → renderer mapping, shared across widget instances via `Arc`
///
/// Entries are only ever added or replaced, never removed. Registration is
/// `&self` behind an `RwLock` so a shared registry can be extended while
/// widgets hold it; callers must treat registration as additive-only to
/// avoid cross-instance surprises.
pub struct RendererRegistry {
    renderers: RwLock<HashMap<String, Arc<dyn Renderer>>>,
}

impl RendererRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            renderers: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry with the stock renderers pre-registered
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register("sponsored", Arc::new(SponsoredRenderer));
        registry.register("organic", Arc::new(OrganicRenderer));
        registry
    }

    /// Registers a renderer for a given recommendation kind.
    /// Upsert: a later registration for the same kind wins.
    pub fn register(&self, kind: impl Into<String>, renderer: Arc<dyn Renderer>) {
        let kind = kind.into();
        tracing::debug!(kind = %kind, renderer = renderer.name(), "renderer registered");
        self.renderers
            .write()
            .expect("renderer registry lock poisoned")
            .insert(kind, renderer);
    }

    /// Returns the renderer responsible for the given recommendation.
    ///
    /// A miss is a hard failure here on purpose: deciding to skip an
    /// unrenderable item is the widget's call, not the registry's.
    pub fn resolve(&self, recommendation: &Recommendation) -> WidgetResult<Arc<dyn Renderer>> {
        self.renderers
            .read()
            .expect("renderer registry lock poisoned")
            .get(&recommendation.kind)
            .cloned()
            .ok_or_else(|| WidgetError::UnknownRendererKind(recommendation.kind.clone()))
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
