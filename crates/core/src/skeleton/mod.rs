//! The loading-state tree walk.

mod style;
mod wrap;

pub use style::{resolve_style, SkeletonStyle, ANIMATION_SPEED_PROPERTY, SKELETON_CLASS};
pub use wrap::{wrap_leaf, wrap_opaque, wrap_unite};
pub(crate) use wrap::invisible;

use crate::config::SkeletonConfig;
use crate::dom::{Component, Element, ElementKind, Marker, Node};
use crate::tags;

/// What a node is, as far as the walk is concerned. Resolved once per node.
#[derive(Debug, Clone, Copy)]
enum NodeKind<'a> {
    Primitive,
    Host(&'a str),
    Composite(&'a Component),
    Fragment,
    Keep,
    Ignore,
    Unite,
}

impl<'a> NodeKind<'a> {
    fn of(node: &'a Node) -> Self {
        let Node::Element(element) = node else {
            return NodeKind::Primitive;
        };
        match &element.kind {
            ElementKind::Host(tag) => NodeKind::Host(tag),
            ElementKind::Composite(component) => NodeKind::Composite(component),
            ElementKind::Fragment => NodeKind::Fragment,
            ElementKind::Marker(Marker::Keep) => NodeKind::Keep,
            ElementKind::Marker(Marker::Ignore) => NodeKind::Ignore,
            ElementKind::Marker(Marker::Unite) => NodeKind::Unite,
        }
    }
}

/// Rewrites element trees into their loading state.
///
/// The placeholder style is computed once when the skeletonizer is built and
/// reused for every node of the walk.
///
/// Composite elements are expanded by calling their render function out of
/// band, so every component in a walked tree must render purely from its
/// props.
#[derive(Debug, Clone)]
pub struct Skeletonizer<'a> {
    config: &'a SkeletonConfig,
    style: SkeletonStyle,
    text_style: SkeletonStyle,
}

impl<'a> Skeletonizer<'a> {
    pub fn new(config: &'a SkeletonConfig) -> Self {
        let style = resolve_style(config);
        let text_style = style.with_margin(&config.text_tags_margin);
        Self {
            config,
            style,
            text_style,
        }
    }

    /// Skeletonize a list of siblings. Nodes that render nothing are dropped.
    pub fn skeletonize_all(&self, nodes: &[Node]) -> Vec<Node> {
        tracing::debug!(nodes = nodes.len(), animation = %self.config.animation, "skeletonizing");
        nodes.iter().filter_map(|n| self.skeletonize(n)).collect()
    }

    /// Skeletonize one node. `None` means the node renders nothing.
    pub fn skeletonize(&self, node: &Node) -> Option<Node> {
        match NodeKind::of(node) {
            NodeKind::Primitive => Some(wrap_opaque(node, &self.style)),
            NodeKind::Keep => Some(node.clone()),
            NodeKind::Ignore => None,
            NodeKind::Unite => {
                let element = node.as_element()?;
                Some(wrap_unite(element, &self.style))
            }
            NodeKind::Host(tag) => self.skeletonize_host(node, tag),
            NodeKind::Composite(component) => {
                let element = node.as_element()?;
                let rendered = component.render(element);
                if rendered.is_null() {
                    tracing::trace!(component = component.name(), "composite rendered nothing");
                    return Some(wrap_leaf(node, &self.style));
                }
                self.skeletonize(&rendered)
            }
            NodeKind::Fragment => {
                let element = node.as_element()?;
                Some(self.container_or_leaf(node, element))
            }
        }
    }

    fn skeletonize_host(&self, node: &Node, tag: &str) -> Option<Node> {
        if self.config.is_except_tag(tag) {
            tracing::trace!(tag, "except tag");
            return Some(node.clone());
        }
        if tags::is_in_group(tag, &self.config.except_tag_groups) {
            tracing::trace!(tag, "except tag group");
            return Some(node.clone());
        }
        if tags::is_text_like(tag) {
            return Some(wrap_leaf(node, &self.text_style));
        }
        if tags::is_image(tag) {
            return Some(wrap_opaque(node, &self.style));
        }
        let element = node.as_element()?;
        Some(self.container_or_leaf(node, element))
    }

    /// Recurse into containers; anything childless or holding a single raw
    /// string becomes a leaf.
    fn container_or_leaf(&self, node: &Node, element: &Element) -> Node {
        if element.children.is_empty() || element.has_single_text_child() {
            return wrap_leaf(node, &self.style);
        }
        let children = element
            .children
            .iter()
            .filter_map(|child| self.skeletonize(child))
            .collect();
        Node::Element(Element {
            kind: element.kind.clone(),
            attributes: element.attributes.clone(),
            style: element.style.clone(),
            children,
        })
    }
}

/// Skeletonize `nodes` when `loading`, otherwise return them unchanged.
pub fn skeletonize(nodes: &[Node], config: &SkeletonConfig, loading: bool) -> Vec<Node> {
    if !loading {
        return nodes.to_vec();
    }
    Skeletonizer::new(config).skeletonize_all(nodes)
}
