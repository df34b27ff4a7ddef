//! Placeholder builders.

use super::style::SkeletonStyle;
use crate::dom::{el, Element, Node};

const SIZE_PROPERTIES: [&str; 2] = ["width", "height"];

fn placeholder(style: &SkeletonStyle) -> Element {
    let mut block = el("div").with_class(&style.class);
    block.style = style.style.clone();
    block
}

/// Hidden, non-interactive container that still occupies layout space.
pub(crate) fn invisible(children: Vec<Node>) -> Element {
    el("div")
        .with_style("opacity", "0")
        .with_style("pointer-events", "none")
        .with_children(children)
}

/// A placeholder block with no copy of the content.
///
/// Elements lend their explicit width/height to the block so it takes the
/// same box; raw values get a one-line minimum height.
pub fn wrap_opaque(node: &Node, style: &SkeletonStyle) -> Node {
    let mut block = placeholder(style);
    match node {
        Node::Element(element) => {
            for property in SIZE_PROPERTIES {
                if let Some(size) = explicit_size(element, property) {
                    block.style.set(property, &size);
                }
            }
        }
        Node::Primitive(_) => block.style.set("min-height", "1em"),
    }
    block.into()
}

/// A placeholder block around an invisible copy of `node`, so the block is
/// exactly as large as the content would be.
pub fn wrap_leaf(node: &Node, style: &SkeletonStyle) -> Node {
    placeholder(style)
        .with_child(invisible(vec![node.clone()]))
        .into()
}

/// A single placeholder block for a Unite marker. The marker's own class and
/// style apply to the block; its children become the invisible copy.
pub fn wrap_unite(marker: &Element, style: &SkeletonStyle) -> Node {
    let mut block = placeholder(style);
    if let Some(class) = marker.get_attr("class").map(str::trim).filter(|c| !c.is_empty()) {
        block = block.with_class(&format!("{} {}", style.class, class));
    }
    block.style.merge(&marker.style);
    block
        .with_child(invisible(marker.children.clone()))
        .into()
}

fn explicit_size(element: &Element, property: &str) -> Option<String> {
    if let Some(value) = element.style.get(property) {
        return Some(value.to_string());
    }
    let value = element.get_attr(property)?.trim();
    if value.is_empty() {
        return None;
    }
    // Presentational attributes are bare pixel counts
    if value.parse::<f64>().is_ok() {
        Some(format!("{}px", value))
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Style;

    fn style() -> SkeletonStyle {
        SkeletonStyle {
            class: "skeletonify".to_string(),
            style: [("background", "#eee")].into_iter().collect::<Style>(),
        }
    }

    #[test]
    fn opaque_carries_image_size() {
        let img: Node = el("img").with_attr("width", "120").with_attr("style", "height: 3em").into();
        let Node::Element(block) = wrap_opaque(&img, &style()) else {
            panic!("expected element");
        };
        assert_eq!(block.style.get("width"), Some("120px"));
        assert_eq!(block.style.get("height"), Some("3em"));
        assert!(block.children.is_empty());
    }

    #[test]
    fn leaf_hides_original() {
        let p: Node = el("p").with_child("hi").into();
        let Node::Element(block) = wrap_leaf(&p, &style()) else {
            panic!("expected element");
        };
        let inner = block.children[0].as_element().unwrap();
        assert_eq!(inner.style.get("opacity"), Some("0"));
        assert_eq!(inner.style.get("pointer-events"), Some("none"));
        assert_eq!(inner.children, vec![p]);
    }
}
