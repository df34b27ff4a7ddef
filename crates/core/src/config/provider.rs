use std::sync::Arc;

use super::{PartialConfig, SkeletonConfig};
use crate::css::Style;

/// Supplies the configuration for a subtree.
///
/// A provider is a plain value passed down to the places that render
/// skeletons. Nesting derives a new provider whose overrides win inside the
/// inner scope; the outer provider is unaffected.
#[derive(Debug, Clone, Default)]
pub struct SkeletonProvider {
    config: Arc<SkeletonConfig>,
}

impl SkeletonProvider {
    /// A provider with `overrides` merged over the defaults.
    pub fn new(overrides: &PartialConfig) -> Self {
        Self::from_config(SkeletonConfig::default().merged(overrides))
    }

    pub fn from_config(config: SkeletonConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    /// Derive an inner provider.
    pub fn nested(&self, overrides: &PartialConfig) -> Self {
        Self::from_config(self.config.as_ref().clone().merged(overrides))
    }

    /// Resolve the configuration for one invocation site: local overrides
    /// first, then the site's own style on top of every other style layer.
    pub fn resolve(&self, overrides: &PartialConfig, style: &Style) -> SkeletonConfig {
        let mut config = self.config.as_ref().clone().merged(overrides);
        config.style.merge(style);
        config
    }
}
