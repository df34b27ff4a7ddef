use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{local_name, ns, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::css::Style;

/// Custom element names that parse into marker elements.
pub const KEEP_TAG: &str = "skeleton-keep";
pub const IGNORE_TAG: &str = "skeleton-ignore";
pub const UNITE_TAG: &str = "skeleton-unite";

/// A node in a UI element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Primitive(Primitive),
    Element(Element),
}

/// Raw values that can appear as children. They have no box of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    /// Every attribute except `style`, which lives in [`Element::style`].
    pub attributes: BTreeMap<String, String>,
    pub style: Style,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// A platform element identified by its (lowercase) tag name.
    Host(String),
    /// A component whose rendered shape is only known after expansion.
    Composite(Component),
    /// Groups children without producing a box.
    Fragment,
    Marker(Marker),
}

/// Sentinels that change how a loading walk treats their subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Subtree stays live while loading.
    Keep,
    /// Subtree renders nothing while loading.
    Ignore,
    /// Subtree becomes a single placeholder block.
    Unite,
}

impl Marker {
    pub fn tag_name(self) -> &'static str {
        match self {
            Marker::Keep => KEEP_TAG,
            Marker::Ignore => IGNORE_TAG,
            Marker::Unite => UNITE_TAG,
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            KEEP_TAG => Some(Marker::Keep),
            IGNORE_TAG => Some(Marker::Ignore),
            UNITE_TAG => Some(Marker::Unite),
            _ => None,
        }
    }
}

pub type RenderFn = dyn Fn(&Element) -> Node + Send + Sync;

/// A composite element type: a named render function.
///
/// Two components are the same type only if they share the same render
/// function allocation; clones of a `Component` compare equal, two
/// separately constructed components never do.
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
    render: Arc<RenderFn>,
}

impl Component {
    pub fn new<F>(name: &str, render: F) -> Self
    where
        F: Fn(&Element) -> Node + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name),
            render: Arc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expand an element of this component type into what it renders.
    pub fn render(&self, element: &Element) -> Node {
        (self.render)(element)
    }

    /// Create an element of this component type.
    pub fn element(&self) -> Element {
        Element::new(ElementKind::Composite(self.clone()))
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name).finish()
    }
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    pub fn host(tag: &str) -> Self {
        Self::new(ElementKind::Host(tag.to_ascii_lowercase()))
    }

    pub fn fragment() -> Self {
        Self::new(ElementKind::Fragment)
    }

    pub fn marker(marker: Marker) -> Self {
        Self::new(ElementKind::Marker(marker))
    }

    /// Tag name for host elements.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Host(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if name.eq_ignore_ascii_case("style") {
            self.style = Style::parse(value);
        } else {
            self.attributes.insert(name.to_string(), value.to_string());
        }
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// True when the only child is raw text. Such elements are sized by
    /// their text run and are never recursed into.
    pub fn has_single_text_child(&self) -> bool {
        matches!(self.children.as_slice(), [Node::Primitive(Primitive::Text(_))])
    }
}

impl Node {
    pub fn text(text: &str) -> Self {
        Node::Primitive(Primitive::Text(text.to_string()))
    }

    pub fn null() -> Self {
        Node::Primitive(Primitive::Null)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Primitive(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Primitive(Primitive::Null))
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Primitive> for Node {
    fn from(p: Primitive) -> Self {
        Node::Primitive(p)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Primitive(Primitive::Text(text))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Primitive(Primitive::Number(n))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Primitive(Primitive::Bool(b))
    }
}

/// Shorthand for [`Element::host`].
pub fn el(tag: &str) -> Element {
    Element::host(tag)
}

/// Wrap children in a Keep marker.
pub fn keep<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Element::marker(Marker::Keep).with_children(children)
}

/// Wrap children in an Ignore marker.
pub fn ignore<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Element::marker(Marker::Ignore).with_children(children)
}

/// Wrap children in a Unite marker. Class and style set on the marker are
/// applied to the single placeholder it becomes.
pub fn unite<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Element::marker(Marker::Unite).with_children(children)
}

// ---------------------------------------------------------------------------
// HTML parsing
// ---------------------------------------------------------------------------

fn parse_opts() -> ParseOpts {
    ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Parse a full HTML document. Returns the `<html>` element.
pub fn parse_document(html: &str) -> Node {
    let dom = html5ever::parse_document(RcDom::default(), parse_opts()).one(html);

    let mut top = convert_children(&dom.document);
    match top.iter().position(|n| is_host(n, "html")) {
        Some(idx) => top.swap_remove(idx),
        None => Element::fragment().with_children(top).into(),
    }
}

/// Parse an HTML fragment as if it were the content of a `<body>`.
///
/// Head-level tags (`<style>`, `<link>`, `<title>`, ...) stay where they
/// appear instead of being hoisted into a document head.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let dom = html5ever::parse_fragment(RcDom::default(), parse_opts(), context, vec![], false)
        .one(html);

    // The fragment's nodes hang off a synthetic <html> root
    let document = dom.document.children.borrow();
    match document.first() {
        Some(root) => convert_children(root),
        None => Vec::new(),
    }
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .filter(|node| !is_blank_text(node))
        .collect()
}

fn is_blank_text(node: &Node) -> bool {
    matches!(node, Node::Primitive(Primitive::Text(text)) if text.trim().is_empty())
}

fn is_host(node: &Node, tag: &str) -> bool {
    node.as_element().and_then(Element::tag) == Some(tag)
}

fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_string();

            let mut node = match Marker::from_tag(&tag) {
                Some(marker) => Element::marker(marker),
                None => Element::host(&tag),
            };
            for attr in attrs.borrow().iter() {
                node = node.with_attr(&attr.name.local, &attr.value);
            }
            // Whitespace-only text between elements is dropped
            node.children = convert_children(handle);
            Some(node.into())
        }
        NodeData::Text { contents } => Some(Node::text(&contents.borrow())),
        _ => None, // Comments, PIs, doctypes → ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_compare_by_identity() {
        let a = Component::new("Card", |_| Node::null());
        let b = Component::new("Card", |_| Node::null());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn style_attribute_is_parsed_into_style() {
        let div = el("div").with_attr("style", "width: 10px; color: red");
        assert_eq!(div.style.get("width"), Some("10px"));
        assert!(div.get_attr("style").is_none());
    }

    #[test]
    fn single_text_child_detection() {
        assert!(el("button").with_child("Go").has_single_text_child());
        assert!(!el("button").with_child(3.0).has_single_text_child());
        assert!(!el("p").with_child("a").with_child("b").has_single_text_child());
    }
}
