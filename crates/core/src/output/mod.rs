//! HTML serialization of element trees.

use crate::dom::{Element, ElementKind, Node, Primitive};
use crate::tags;

/// Elements whose text content is emitted without escaping.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Serialize a list of nodes as HTML.
///
/// Markers and fragments are transparent, composites are expanded, and
/// `Null`/`Bool` values render nothing.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out, false);
    }
    out
}

pub fn node_to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out, false);
    out
}

/// Serialize a document root, prefixed with the HTML5 doctype.
pub fn document_to_html(root: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>");
    write_node(root, &mut out, false);
    out
}

fn write_node(node: &Node, out: &mut String, raw_text: bool) {
    match node {
        Node::Primitive(Primitive::Text(text)) => {
            if raw_text {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        Node::Primitive(Primitive::Number(n)) => out.push_str(&n.to_string()),
        Node::Primitive(Primitive::Bool(_) | Primitive::Null) => {}
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    let tag = match &element.kind {
        ElementKind::Host(tag) => tag.as_str(),
        ElementKind::Composite(component) => {
            write_node(&component.render(element), out, false);
            return;
        }
        ElementKind::Fragment | ElementKind::Marker(_) => {
            for child in &element.children {
                write_node(child, out, false);
            }
            return;
        }
    };

    out.push('<');
    out.push_str(tag);
    for (name, value) in &element.attributes {
        write_attr(name, value, out);
    }
    if !element.style.is_empty() {
        write_attr("style", &element.style.to_string(), out);
    }
    out.push('>');

    if tags::is_void(tag) {
        return;
    }

    let raw_text = RAW_TEXT_TAGS.contains(&tag);
    for child in &element.children {
        write_node(child, out, raw_text);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{el, keep, Component};

    #[test]
    fn escapes_text_and_attributes() {
        let node: Node = el("a").with_attr("title", "\"x\" & y").with_child("1 < 2").into();
        assert_eq!(
            node_to_html(&node),
            "<a title=\"&quot;x&quot; &amp; y\">1 &lt; 2</a>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: Node = el("img").with_attr("src", "a.png").into();
        assert_eq!(node_to_html(&node), "<img src=\"a.png\">");
    }

    #[test]
    fn markers_and_composites_are_transparent() {
        let badge = Component::new("Badge", |_| el("b").with_child("new").into());
        let nodes = vec![keep([el("i").with_child("k")]).into(), badge.element().into()];
        assert_eq!(to_html(&nodes), "<i>k</i><b>new</b>");
    }
}
