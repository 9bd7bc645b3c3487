/// Widget controller: fetch → normalize → render, plus delegated click
/// dispatch
use std::sync::Arc;

use crate::{
    api::RecommendationSource,
    config::WidgetConfig,
    error::WidgetError,
    models::Recommendation,
    render::{Navigator, RendererRegistry, RECOMMENDATION_ID_ATTR},
    ui::UiNode,
};

/// Root class the mount container carries while a widget owns it
pub const WIDGET_CLASS: &str = "reco-widget";
pub const LOADING_CLASS: &str = "reco-widget-loading";
pub const ERROR_CLASS: &str = "reco-widget-error";

const LOADING_MESSAGE: &str = "Loading recommendations...";
/// Shown when a fetch failure is not a recognized error; raw values never
/// reach the UI
const GENERIC_ERROR_MESSAGE: &str = "Failed to load recommendations";

/// Observable widget states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Loading,
    Rendered,
    Errored,
}

impl WidgetState {
    fn class(self) -> &'static str {
        match self {
            WidgetState::Idle => "is-idle",
            WidgetState::Loading => "is-loading",
            WidgetState::Rendered => "is-loaded",
            WidgetState::Errored => "is-error",
        }
    }
}

/// Source-agnostic widget that renders recommendations into a mount container
///
/// One controller per mount point. The registry and navigator come in as
/// explicit constructed objects, so instances can share a registry or own an
/// isolated one by choice.
pub struct Widget {
    mount: UiNode,
    config: WidgetConfig,
    source: Arc<dyn RecommendationSource>,
    registry: Arc<RendererRegistry>,
    navigator: Arc<dyn Navigator>,
    recommendations: Vec<Recommendation>,
    state: WidgetState,
}

impl Widget {
    /// Takes over a pre-existing container node. Nothing outside the
    /// container is touched. The widget stays `Idle` until [`Widget::load`].
    pub fn new(
        mount: UiNode,
        config: WidgetConfig,
        source: Arc<dyn RecommendationSource>,
        registry: Arc<RendererRegistry>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut widget = Self {
            mount,
            config,
            source,
            registry,
            navigator,
            recommendations: Vec::new(),
            state: WidgetState::Idle,
        };
        widget.set_state(WidgetState::Idle);
        widget
    }

    /// Fetches a fresh batch and re-renders
    ///
    /// Each call re-enters `Loading` and replaces the previous batch
    /// wholesale. `&mut self` rules out overlapping in-flight fetches on one
    /// instance by construction.
    pub async fn load(&mut self) {
        self.show_loading();

        match self.source.fetch_recommendations(&self.config).await {
            Ok(recommendations) => {
                tracing::debug!(
                    count = recommendations.len(),
                    source = self.source.name(),
                    "recommendations received"
                );
                self.recommendations = recommendations;
                self.render_batch();
            }
            Err(error) => {
                tracing::error!(error = %error, source = self.source.name(), "fetch failed");
                self.show_error(&user_message(&error));
            }
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// The container, for the host to materialize or for tests to inspect
    pub fn mount(&self) -> &UiNode {
        &self.mount
    }

    /// The batch from the last successful fetch
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Delegated click entry point
    ///
    /// `target` is the child-index path of the clicked node, relative to the
    /// mount container. The handler walks up to the nearest ancestor
    /// carrying a recommendation id, resolves it against the held batch
    /// (first match wins if a batch reuses an id), and lets that kind's
    /// renderer perform the activation. Clicks outside any item, or with an
    /// id no longer held, are ignored.
    pub fn dispatch_click(&self, target: &[usize]) {
        let Some(id) = self.closest_recommendation_id(target) else {
            return;
        };
        let Some(recommendation) = self.recommendations.iter().find(|rec| rec.id == id) else {
            return;
        };

        match self.registry.resolve(recommendation) {
            Ok(renderer) => renderer.handle_click(recommendation, self.navigator.as_ref()),
            Err(error) => {
                tracing::warn!(
                    kind = %recommendation.kind,
                    error = %error,
                    "click on item with no renderer ignored"
                );
            }
        }
    }

    fn closest_recommendation_id(&self, target: &[usize]) -> Option<String> {
        for depth in (0..=target.len()).rev() {
            if let Some(node) = self.mount.descendant(&target[..depth]) {
                if let Some(id) = node.attr(RECOMMENDATION_ID_ATTR) {
                    return Some(id.to_string());
                }
            }
        }
        None
    }

    /// Renders the held batch into the container
    ///
    /// Items are staged off-tree and attached in one append, so hosts
    /// mirroring the tree see a single mutation. An item whose kind has no
    /// renderer is skipped; one unrecognized kind must not blank the widget.
    fn render_batch(&mut self) {
        let mut staged = Vec::with_capacity(self.recommendations.len());

        for recommendation in &self.recommendations {
            match self.registry.resolve(recommendation) {
                Ok(renderer) => staged.push(renderer.render(recommendation)),
                Err(error) => {
                    tracing::warn!(
                        id = %recommendation.id,
                        kind = %recommendation.kind,
                        error = %error,
                        "skipping recommendation with no registered renderer"
                    );
                }
            }
        }

        self.set_state(WidgetState::Rendered);
        self.mount.clear();
        self.mount.append_all(staged);
    }

    fn show_loading(&mut self) {
        self.set_state(WidgetState::Loading);
        self.mount.clear();
        self.mount.append(
            UiNode::element("div")
                .with_class(LOADING_CLASS)
                .with_text(LOADING_MESSAGE),
        );
    }

    fn show_error(&mut self, message: &str) {
        self.set_state(WidgetState::Errored);
        self.mount.clear();
        self.mount.append(
            UiNode::element("div")
                .with_class(ERROR_CLASS)
                .with_text(message),
        );
    }

    fn set_state(&mut self, state: WidgetState) {
        self.state = state;
        self.mount.class = format!("{} {}", WIDGET_CLASS, state.class());
    }
}

/// Maps a fetch failure to the message shown in the error state: recognized
/// widget errors surface their own message, anything opaque gets the generic
/// fallback.
fn user_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<WidgetError>() {
        Some(widget_error) => widget_error.to_string(),
        None => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MockNavigator, ITEM_CLASS};
    use std::sync::Mutex;

    struct StubSource {
        result: Mutex<Option<anyhow::Result<Vec<Recommendation>>>>,
    }

    impl StubSource {
        fn ok(recommendations: Vec<Recommendation>) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(Ok(recommendations))),
            })
        }

        fn err(error: anyhow::Error) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(Err(error))),
            })
        }
    }

    #[async_trait::async_trait]
    impl RecommendationSource for StubSource {
        async fn fetch_recommendations(
            &self,
            _config: &WidgetConfig,
        ) -> anyhow::Result<Vec<Recommendation>> {
            self.result
                .lock()
                .unwrap()
                .take()
                .expect("stub source polled twice")
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn sponsored(id: &str) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            title: format!("Article {}", id),
            description: "Desc".to_string(),
            image_url: "img.jpg".to_string(),
            url: format!("http://example.com/{}", id),
            kind: "sponsored".to_string(),
            branding: Some("Brand".to_string()),
        }
    }

    fn widget_with(source: Arc<dyn RecommendationSource>) -> Widget {
        Widget::new(
            UiNode::element("div"),
            WidgetConfig::default(),
            source,
            Arc::new(RendererRegistry::with_defaults()),
            Arc::new(MockNavigator::new()),
        )
    }

    #[test]
    fn test_construction_is_idle_and_tags_container() {
        let widget = widget_with(StubSource::ok(vec![]));
        assert_eq!(widget.state(), WidgetState::Idle);
        assert!(widget.mount().has_class(WIDGET_CLASS));
    }

    #[test]
    fn test_load_renders_batch() {
        tokio_test::block_on(async {
            let mut widget = widget_with(StubSource::ok(vec![sponsored("1"), sponsored("2")]));
            widget.load().await;

            assert_eq!(widget.state(), WidgetState::Rendered);
            assert_eq!(widget.mount().query_class(ITEM_CLASS).len(), 2);
        });
    }

    #[tokio::test]
    async fn test_loading_indicator_shown_before_fetch_resolves() {
        let mut widget = widget_with(StubSource::ok(vec![]));
        widget.show_loading();

        assert_eq!(widget.state(), WidgetState::Loading);
        let loading = widget.mount().query_class(LOADING_CLASS);
        assert_eq!(loading.len(), 1);
        assert_eq!(loading[0].text.as_deref(), Some(LOADING_MESSAGE));
        assert!(widget.mount().has_class("is-loading"));
    }

    #[tokio::test]
    async fn test_recognized_error_message_is_surfaced() {
        let source = StubSource::err(
            WidgetError::ExternalApi("Taboola API returned status 500: boom".to_string()).into(),
        );
        let mut widget = widget_with(source);
        widget.load().await;

        assert_eq!(widget.state(), WidgetState::Errored);
        let error = widget.mount().query_class(ERROR_CLASS);
        assert_eq!(error.len(), 1);
        assert!(error[0]
            .text
            .as_deref()
            .unwrap()
            .contains("Taboola API returned status 500"));
    }

    #[tokio::test]
    async fn test_opaque_error_gets_generic_message() {
        let mut widget = widget_with(StubSource::err(anyhow::anyhow!("boom")));
        widget.load().await;

        assert_eq!(widget.state(), WidgetState::Errored);
        let error = widget.mount().query_class(ERROR_CLASS);
        assert_eq!(error[0].text.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_click_outside_any_item_is_ignored() {
        let navigator = Arc::new(MockNavigator::new());
        let mut widget = Widget::new(
            UiNode::element("div"),
            WidgetConfig::default(),
            StubSource::ok(vec![sponsored("1")]),
            Arc::new(RendererRegistry::with_defaults()),
            navigator,
        );
        widget.load().await;

        // Path pointing at the mount root itself: no ancestor carries an id.
        // MockNavigator with no expectations panics if anything is invoked.
        widget.dispatch_click(&[]);
    }

    #[tokio::test]
    async fn test_click_with_stale_id_is_ignored() {
        let mut widget = widget_with(StubSource::ok(vec![sponsored("1")]));
        widget.load().await;

        // Forge a node carrying an id that is not in the held batch.
        let mut forged = widget.mount.clone();
        forged.children[0].set_attr(RECOMMENDATION_ID_ATTR, "gone");
        widget.mount = forged;

        widget.dispatch_click(&[0]);
    }
}
