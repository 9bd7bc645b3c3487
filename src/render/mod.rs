/// Renderer capability and shared construction
///
/// A renderer owns one recommendation kind: it knows how to build the visual
/// subtree for an item and what activating that item does. New kinds are
/// supported by implementing [`Renderer`] and registering it (see
/// [`registry::RendererRegistry`]); nothing else in the widget changes.
use crate::{models::Recommendation, ui::UiNode};

pub mod organic;
pub mod registry;
pub mod sponsored;

pub use organic::OrganicRenderer;
pub use registry::RendererRegistry;
pub use sponsored::SponsoredRenderer;

/// Structural class every rendered item root carries
pub const ITEM_CLASS: &str = "reco-widget-item";
pub const IMAGE_WRAPPER_CLASS: &str = "reco-widget-item-image-wrapper";
pub const IMAGE_CLASS: &str = "reco-widget-item-image";
pub const CONTENT_CLASS: &str = "reco-widget-item-content";
pub const TITLE_CLASS: &str = "reco-widget-item-title";
pub const DESCRIPTION_CLASS: &str = "reco-widget-item-description";
pub const BRANDING_CLASS: &str = "reco-widget-item-branding";

/// Attribute the delegated click handler resolves items by
pub const RECOMMENDATION_ID_ATTR: &str = "data-recommendation-id";
pub const KIND_ATTR: &str = "data-kind";

/// Neutral background painted where a broken image used to be
const PLACEHOLDER_BACKGROUND: &str = "linear-gradient(135deg, #f5f5f5 0%, #e0e0e0 100%)";

pub trait Renderer: Send + Sync {
    /// Builds a self-contained visual subtree for one recommendation
    ///
    /// The root must come from [`item_container`] so the widget's delegated
    /// click handler can map UI events back to recommendations.
    fn render(&self, recommendation: &Recommendation) -> UiNode;

    /// Kind-specific activation behavior when the user clicks the item
    fn handle_click(&self, recommendation: &Recommendation, navigator: &dyn Navigator);

    /// Renderer name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Navigation capability renderers activate items through
///
/// Abstracted so activation is observable in tests and so the demo binary
/// can log instead of opening anything.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigate the current browsing context to `url`
    fn navigate(&self, url: &str);

    /// Open `url` in a new browsing context
    fn open_new(&self, url: &str);
}

/// Navigator that only logs; used by the demo binary
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, url: &str) {
        tracing::info!(url = %url, "navigate");
    }

    fn open_new(&self, url: &str) {
        tracing::info!(url = %url, "open in new context");
    }
}

/// Creates the shared root node for a recommendation.
/// Used by all renderers to ensure consistent structure and event handling.
pub fn item_container(recommendation: &Recommendation) -> UiNode {
    UiNode::element("div")
        .with_class(ITEM_CLASS)
        .with_attr(RECOMMENDATION_ID_ATTR, &recommendation.id)
        .with_attr(KIND_ATTR, &recommendation.kind)
}

/// Degrades an item whose image failed to load: the image node is hidden and
/// its wrapper gets a neutral placeholder background. No-op when the item
/// carries no image node; never fails.
pub fn apply_image_fallback(item: &mut UiNode) {
    let Some(path) = item.find_class_path(IMAGE_CLASS) else {
        return;
    };
    if let Some(image) = item.descendant_mut(&path) {
        image.set_style("display", "none");
    }
    if let Some(wrapper_path) = item.find_class_path(IMAGE_WRAPPER_CLASS) {
        if let Some(wrapper) = item.descendant_mut(&wrapper_path) {
            wrapper.set_style("background", PLACEHOLDER_BACKGROUND);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation() -> Recommendation {
        Recommendation {
            id: "rec-1".to_string(),
            title: "Test".to_string(),
            description: "Desc".to_string(),
            image_url: "img.jpg".to_string(),
            url: "http://example.com".to_string(),
            kind: "sponsored".to_string(),
            branding: Some("Brand".to_string()),
        }
    }

    #[test]
    fn test_item_container_attrs() {
        let container = item_container(&recommendation());
        assert_eq!(container.tag, "div");
        assert!(container.has_class(ITEM_CLASS));
        assert_eq!(container.attr(RECOMMENDATION_ID_ATTR), Some("rec-1"));
        assert_eq!(container.attr(KIND_ATTR), Some("sponsored"));
    }

    #[test]
    fn test_image_fallback_hides_image_and_paints_wrapper() {
        let mut item = SponsoredRenderer.render(&recommendation());
        apply_image_fallback(&mut item);

        let image = item.query_class(IMAGE_CLASS)[0];
        assert_eq!(image.style("display"), Some("none"));

        let wrapper = item.query_class(IMAGE_WRAPPER_CLASS)[0];
        assert_eq!(wrapper.style("background"), Some(PLACEHOLDER_BACKGROUND));
    }

    #[test]
    fn test_image_fallback_is_noop_without_image() {
        let mut bare = UiNode::element("div").with_class(ITEM_CLASS);
        let before = bare.clone();
        apply_image_fallback(&mut bare);
        assert_eq!(bare, before);
    }
}
