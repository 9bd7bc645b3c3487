/// Renderer for organic recommendations
///
/// Same layout as sponsored minus the branding label; activation navigates
/// the current context in place.
use crate::{
    models::Recommendation,
    render::{
        item_container, Navigator, Renderer, CONTENT_CLASS, DESCRIPTION_CLASS, IMAGE_CLASS,
        IMAGE_WRAPPER_CLASS, TITLE_CLASS,
    },
    ui::UiNode,
};

pub struct OrganicRenderer;

impl Renderer for OrganicRenderer {
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

        container.append(image_wrapper);
        container.append(content);
        container
    }

    fn handle_click(&self, recommendation: &Recommendation, navigator: &dyn Navigator) {
        navigator.navigate(&recommendation.url);
    }

    fn name(&self) -> &'static str {
        "organic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MockNavigator, BRANDING_CLASS, ITEM_CLASS, RECOMMENDATION_ID_ATTR};

    fn recommendation() -> Recommendation {
        Recommendation {
            id: "2".to_string(),
            title: "Organic Article".to_string(),
            description: "Description".to_string(),
            image_url: "img.jpg".to_string(),
            url: "http://example.com".to_string(),
            kind: "organic".to_string(),
            branding: None,
        }
    }

    #[test]
    fn test_render_structure() {
        let item = OrganicRenderer.render(&recommendation());

        assert!(item.has_class(ITEM_CLASS));
        assert_eq!(item.attr(RECOMMENDATION_ID_ATTR), Some("2"));
        assert_eq!(item.query_class(IMAGE_CLASS).len(), 1);
        assert_eq!(
            item.query_class(TITLE_CLASS)[0].text.as_deref(),
            Some("Organic Article")
        );
    }

    #[test]
    fn test_render_has_no_branding() {
        let item = OrganicRenderer.render(&recommendation());
        assert!(item.query_class(BRANDING_CLASS).is_empty());
    }

    #[test]
    fn test_handle_click_navigates_in_place() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|url| url == "http://example.com")
            .times(1)
            .return_const(());
        navigator.expect_open_new().never();

        OrganicRenderer.handle_click(&recommendation(), &navigator);
    }
}
