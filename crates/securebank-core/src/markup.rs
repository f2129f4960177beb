//! Plain value tree for rendered UI.
//!
//! Components build a [`Node`] instead of writing HTML directly, so the
//! structure can be inspected in tests and serialized on the server.

use std::fmt::Write;

const INTERACTIVE_TAGS: &[&str] = &["button", "a", "input", "select", "textarea"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any earlier value for the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn is_interactive(&self) -> bool {
        INTERACTIVE_TAGS.contains(&self.tag.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Depth-first, pre-order walk starting at this node
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants()
            .filter_map(Node::as_element)
            .filter(|el| pred(*el))
            .collect()
    }

    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self);
        out
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(el) = node {
            self.stack.extend(el.children.iter().rev());
        }
        Some(node)
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in &el.attrs {
                // Writing into a String cannot fail
                let _ = write!(out, " {}=\"{}\"", name, escape(value));
            }
            out.push('>');
            for child in &el.children {
                write_node(out, child);
            }
            let _ = write!(out, "</{}>", el.tag);
        }
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("div")
            .class("outer box")
            .child(Element::new("span").text("a"))
            .child(Element::new("button").text("b").text("c"))
            .text("d")
            .into()
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el = Element::new("div").class("one").attr("id", "x").class("two");
        assert_eq!(el.attrs.len(), 2);
        assert_eq!(el.get_attr("class"), Some("two"));
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = sample();
        let tags: Vec<_> = tree
            .descendants()
            .map(|n| match n {
                Node::Element(el) => el.tag.clone(),
                Node::Text(t) => format!("#{t}"),
            })
            .collect();
        assert_eq!(tags, ["div", "span", "#a", "button", "#b", "#c", "#d"]);
    }

    #[test]
    fn test_text_content_and_queries() {
        let tree = sample();
        assert_eq!(tree.text_content(), "abcd");
        assert_eq!(tree.find_all(Element::is_interactive).len(), 1);

        let root = tree.as_element().unwrap();
        assert!(root.has_class("box"));
        assert!(!root.has_class("bo"));
        assert_eq!(root.element_children().count(), 2);
    }

    #[test]
    fn test_to_html_escapes() {
        let node: Node = Element::new("p")
            .attr("title", "\"quoted\" <tag>")
            .text("Help & Support")
            .into();
        assert_eq!(
            node.to_html(),
            "<p title=\"&quot;quoted&quot; &lt;tag&gt;\">Help &amp; Support</p>"
        );
    }
}
