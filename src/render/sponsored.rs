/// Renderer for sponsored recommendations
///
/// Displays thumbnail, title, description, and a branding label; activation
/// opens the target in a new browsing context.
use crate::{
    models::Recommendation,
    render::{
        item_container, Navigator, Renderer, BRANDING_CLASS, CONTENT_CLASS, DESCRIPTION_CLASS,
        IMAGE_CLASS, IMAGE_WRAPPER_CLASS, TITLE_CLASS,
    },
    ui::UiNode,
};

pub struct SponsoredRenderer;

impl Renderer for SponsoredRenderer {
    fn render(&self, recommendation: &Recommendation) -> UiNode {
        let mut container = item_container(recommendation);

        let mut image_wrapper = UiNode::element("div").with_class(IMAGE_WRAPPER_CLASS);
        image_wrapper.append(
            UiNode::element("img")
                .with_class(IMAGE_CLASS)
                .with_attr("src", &recommendation.image_url)
                .with_attr("alt", &recommendation.title)
                .with_attr("loading", "lazy"),
        );

        let mut content = UiNode::element("div").with_class(CONTENT_CLASS);
        content.append(
            UiNode::element("h3")
                .with_class(TITLE_CLASS)
                .with_text(&recommendation.title),
        );
        content.append(
            UiNode::element("p")
                .with_class(DESCRIPTION_CLASS)
                .with_text(&recommendation.description),
        );
        // The branding span is always part of the structure; it is simply
        // empty when the item carries no brand.
        content.append(
            UiNode::element("span")
                .with_class(BRANDING_CLASS)
                .with_text(recommendation.branding.as_deref().unwrap_or_default()),
        );

        container.append(image_wrapper);
        container.append(content);
        container
    }

    fn handle_click(&self, recommendation: &Recommendation, navigator: &dyn Navigator) {
        navigator.open_new(&recommendation.url);
    }

    fn name(&self) -> &'static str {
        "sponsored"
    }
}
