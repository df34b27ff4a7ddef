//! Invocation-site components: the places a subtree opts into a loading
//! state.

use crate::config::{PartialConfig, SkeletonProvider};
use crate::css::Style;
use crate::dom::{el, Node};
use crate::skeleton::{invisible, resolve_style, Skeletonizer};

pub use crate::dom::{ignore, keep, unite};

/// Skeletonizes its children while `loading`.
#[derive(Debug, Clone, Default)]
pub struct SkeletonWrapper {
    pub loading: bool,
    pub children: Vec<Node>,
    pub override_config: PartialConfig,
    pub style: Style,
}

impl SkeletonWrapper {
    pub fn new(loading: bool) -> Self {
        Self {
            loading,
            ..Default::default()
        }
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_overrides(mut self, overrides: PartialConfig) -> Self {
        self.override_config = overrides;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn render(&self, provider: &SkeletonProvider) -> Vec<Node> {
        if !self.loading {
            return self.children.clone();
        }
        let config = provider.resolve(&self.override_config, &self.style);
        Skeletonizer::new(&config).skeletonize_all(&self.children)
    }
}

/// Covers all of its children with one placeholder block while `loading`.
#[derive(Debug, Clone, Default)]
pub struct SkeletonLeaf {
    pub loading: bool,
    pub children: Vec<Node>,
    pub override_config: PartialConfig,
    pub style: Style,
}

impl SkeletonLeaf {
    pub fn new(loading: bool) -> Self {
        Self {
            loading,
            ..Default::default()
        }
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_overrides(mut self, overrides: PartialConfig) -> Self {
        self.override_config = overrides;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn render(&self, provider: &SkeletonProvider) -> Vec<Node> {
        if !self.loading {
            return self.children.clone();
        }
        let config = provider.resolve(&self.override_config, &self.style);
        let skeleton = resolve_style(&config);

        let mut block = el("div").with_class(&skeleton.class);
        block.style = skeleton.style;
        block.style.set("display", "inline-block");
        block.style.set("width", "100%");
        block.style.set("height", "auto");
        block.style.set("min-height", "1em");

        let hidden = invisible(self.children.clone());

        vec![block.with_child(hidden).into()]
    }
}
