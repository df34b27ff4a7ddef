pub mod components;
pub mod config;
pub mod css;
pub mod dom;
pub mod output;
pub mod skeleton;
pub mod tags;

use config::SkeletonConfig;
use dom::{Element, Node};

/// Parse an HTML fragment and render its loading state.
/// This is the primary entry point for skeletonify-core.
pub fn skeletonize_html(html: &str, config: &SkeletonConfig, loading: bool) -> String {
    let nodes = dom::parse_fragment(html);
    output::to_html(&skeleton::skeletonize(&nodes, config, loading))
}

/// Parse a full HTML document and render its loading state. Only the
/// content of `<body>` is skeletonized; `<head>` passes through.
pub fn skeletonize_document(html: &str, config: &SkeletonConfig, loading: bool) -> String {
    let root = dom::parse_document(html);
    if !loading {
        return output::document_to_html(&root);
    }
    output::document_to_html(&skeletonize_body(&root, config))
}

fn skeletonize_body(root: &Node, config: &SkeletonConfig) -> Node {
    let Node::Element(html) = root else {
        return root.clone();
    };
    let skeletonizer = skeleton::Skeletonizer::new(config);
    let children = html
        .children
        .iter()
        .map(|child| match child {
            Node::Element(body) if body.tag() == Some("body") => {
                Node::Element(Element {
                    children: skeletonizer.skeletonize_all(&body.children),
                    ..body.clone()
                })
            }
            other => other.clone(),
        })
        .collect();
    Node::Element(Element {
        children,
        ..html.clone()
    })
}
