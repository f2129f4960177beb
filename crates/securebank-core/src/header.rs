//! Top bar shown on every SecureBank page: logo badge, product name and a
//! help action.
//!
//! The class constants are shared with the Leptos component so the client and
//! the server render the same markup.

use crate::button::{button, ButtonProps, ButtonVariant};
use crate::markup::{Element, Node};

pub const BRAND_NAME: &str = "SecureBank";
pub const BRAND_GLYPH: &str = "B";
pub const HELP_LABEL: &str = "Help & Support";

pub const BAR_CLASS: &str = "w-full bg-white border-b border-border px-6 py-4";
pub const INNER_CLASS: &str = "max-w-7xl mx-auto flex items-center justify-between";
pub const BRAND_GROUP_CLASS: &str = "flex items-center";
pub const BADGE_CLASS: &str =
    "w-8 h-8 bg-primary rounded-md flex items-center justify-center";
pub const GLYPH_CLASS: &str = "text-primary-foreground font-bold text-lg";
pub const BRAND_LABEL_CLASS: &str = "ml-3 text-xl font-semibold text-secondary";
pub const ACTION_GROUP_CLASS: &str = "flex items-center";
pub const HELP_BUTTON_VARIANT: ButtonVariant = ButtonVariant::Ghost;
pub const HELP_BUTTON_CLASS: &str = "text-secondary hover:text-primary hover:bg-transparent";

pub fn bank_header() -> Node {
    let badge = Element::new("div")
        .class(BADGE_CLASS)
        .child(Element::new("span").class(GLYPH_CLASS).text(BRAND_GLYPH));

    let brand = Element::new("div")
        .class(BRAND_GROUP_CLASS)
        .child(badge)
        .child(Element::new("span").class(BRAND_LABEL_CLASS).text(BRAND_NAME));

    let help = button(
        &ButtonProps::default()
            .variant(HELP_BUTTON_VARIANT)
            .class(HELP_BUTTON_CLASS),
        [Node::text(HELP_LABEL)],
    );
    let actions = Element::new("div").class(ACTION_GROUP_CLASS).child(help);

    Element::new("header")
        .class(BAR_CLASS)
        .child(
            Element::new("div")
                .class(INNER_CLASS)
                .child(brand)
                .child(actions),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(header: &Node) -> Vec<&Element> {
        let landmark = header.as_element().unwrap();
        let inner = landmark.element_children().next().unwrap();
        inner.element_children().collect()
    }

    #[test]
    fn test_single_landmark_with_two_groups() {
        let header = bank_header();
        assert_eq!(header.find_all(|el| el.tag == "header").len(), 1);

        let landmark = header.as_element().unwrap();
        assert_eq!(landmark.tag, "header");
        assert_eq!(landmark.element_children().count(), 1);
        assert_eq!(groups(&header).len(), 2);
    }

    #[test]
    fn test_brand_group_badge_then_label() {
        let header = bank_header();
        let brand = groups(&header)[0];
        let parts: Vec<_> = brand.element_children().collect();
        assert_eq!(parts.len(), 2);

        let badge = parts[0];
        assert!(badge.has_class("rounded-md"));
        assert!(badge.has_class("bg-primary"));
        let glyph: Node = badge.clone().into();
        assert_eq!(glyph.text_content(), BRAND_GLYPH);

        let label = parts[1];
        assert_eq!(label.tag, "span");
        assert!(label.has_class("font-semibold"));
        assert_eq!(Node::from(label.clone()).text_content(), BRAND_NAME);
    }

    #[test]
    fn test_action_group_has_one_help_button() {
        let header = bank_header();
        let actions: Node = groups(&header)[1].clone().into();
        let buttons = actions.find_all(Element::is_interactive);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].tag, "button");
        assert_eq!(Node::from(buttons[0].clone()).text_content(), "Help & Support");
    }

    #[test]
    fn test_texts_and_no_other_interactive_elements() {
        let header = bank_header();
        let text = header.text_content();
        assert!(text.contains("SecureBank"));
        assert!(text.contains("Help & Support"));
        assert_eq!(header.find_all(Element::is_interactive).len(), 1);
    }

    #[test]
    fn test_help_button_is_ghost() {
        let header = bank_header();
        let button = header.find_all(Element::is_interactive)[0];
        let variant: ButtonVariant = button.get_attr("data-variant").unwrap().parse().unwrap();
        assert_eq!(variant, ButtonVariant::Ghost);
        assert!(!variant.is_filled());
    }

    #[test]
    fn test_help_button_suppresses_hover_background() {
        let header = bank_header();
        let button = header.find_all(Element::is_interactive)[0];
        assert!(button.has_class("hover:bg-transparent"));
        assert!(button.has_class("hover:text-primary"));
        assert!(button.has_class("text-secondary"));
        assert!(!button.has_class("hover:bg-accent"));
        assert!(!button.has_class("hover:text-accent-foreground"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(bank_header(), bank_header());
        assert_eq!(bank_header().to_html(), bank_header().to_html());
    }

    #[test]
    fn test_html_escapes_label() {
        let html = bank_header().to_html();
        assert!(html.starts_with("<header class=\"w-full bg-white"));
        assert!(html.contains(">Help &amp; Support</button>"));
        assert!(html.contains(">SecureBank</span>"));
    }
}
