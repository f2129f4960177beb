use crate::header::bank_header;
use crate::markup::{escape, Element, Node};

pub const PAGE_CLASS: &str =
    "min-h-screen bg-gradient-to-br from-red-400 via-white to-blue-500";
pub const MAIN_CLASS: &str = "flex items-center justify-center px-4 py-12 md:py-20";
pub const FOOTER_CLASS: &str = "fixed bottom-4 left-1/2 transform -translate-x-1/2";
pub const COPYRIGHT_CLASS: &str = "text-xs text-gray-700 text-center";
pub const COPYRIGHT: &str = "© 2024 TrustyfinBank. All rights reserved. Member FDIC.";

/// Landing layout: header, empty content slot, copyright footer
pub fn landing_page() -> Node {
    Element::new("div")
        .class(PAGE_CLASS)
        .child(bank_header())
        .child(Element::new("main").class(MAIN_CLASS))
        .child(
            Element::new("footer")
                .class(FOOTER_CLASS)
                .child(Element::new("p").class(COPYRIGHT_CLASS).text(COPYRIGHT)),
        )
        .into()
}

/// Wrap a rendered tree in a standalone HTML document
pub fn document(title: &str, body: &Node) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>{}</body>\n</html>\n",
        escape(title),
        body.to_html()
    )
}
