//! Skeleton configuration: defaults, partial overrides, and file loading.

mod provider;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::css::Style;
use crate::tags::TagGroup;

pub use provider::SkeletonProvider;

/// Named placeholder animations. Each has a stylesheet class and a default
/// background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Animation {
    /// Pulsing solid block.
    #[default]
    #[serde(rename = "animation-1")]
    Pulse,
    /// Gradient sweeping across the block.
    #[serde(rename = "animation-2")]
    Shimmer,
}

impl Animation {
    pub const ALL: [Animation; 2] = [Animation::Pulse, Animation::Shimmer];

    pub fn name(self) -> &'static str {
        match self {
            Animation::Pulse => "animation-1",
            Animation::Shimmer => "animation-2",
        }
    }

    /// Background used when the configuration leaves `background` blank.
    pub fn default_background(self) -> &'static str {
        match self {
            Animation::Pulse => "#e2e5e7",
            Animation::Shimmer => {
                "linear-gradient(90deg, #e2e5e7 25%, #f2f4f5 50%, #e2e5e7 75%) 0 0 / 200% 100%"
            }
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Animation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Animation::ALL
            .into_iter()
            .find(|a| a.name() == s.trim())
            .ok_or_else(|| format!("unknown animation '{}' (expected animation-1 or animation-2)", s))
    }
}

/// A fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkeletonConfig {
    pub animation: Animation,
    /// Seconds per animation cycle.
    #[serde(alias = "animation_speed")]
    pub animation_speed: f64,
    /// Empty means "use the animation's default background".
    pub background: String,
    pub border: String,
    #[serde(alias = "border_radius")]
    pub border_radius: String,
    /// Margin shorthand applied to text-like placeholders.
    #[serde(alias = "text_tags_margin")]
    pub text_tags_margin: String,
    /// Extra class token added to every placeholder.
    #[serde(alias = "class_name")]
    pub class_name: String,
    /// Tags left untouched while loading.
    #[serde(alias = "except_tags")]
    pub except_tags: Vec<String>,
    /// Tag groups left untouched while loading.
    #[serde(alias = "except_tag_groups")]
    pub except_tag_groups: Vec<TagGroup>,
    /// Declarations applied on top of the generated placeholder style.
    pub style: Style,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            animation: Animation::Pulse,
            animation_speed: 1.5,
            background: String::new(),
            border: "none".to_string(),
            border_radius: "4px".to_string(),
            text_tags_margin: "4px 0".to_string(),
            class_name: String::new(),
            except_tags: Vec::new(),
            except_tag_groups: Vec::new(),
            style: Style::new(),
        }
    }
}

impl SkeletonConfig {
    /// Apply overrides: each field the overrides set replaces ours, and the
    /// style overlay is merged per property.
    pub fn merge(&mut self, overrides: &PartialConfig) {
        if let Some(animation) = overrides.animation {
            self.animation = animation;
        }
        if let Some(speed) = overrides.animation_speed {
            self.animation_speed = speed;
        }
        if let Some(background) = &overrides.background {
            self.background = background.clone();
        }
        if let Some(border) = &overrides.border {
            self.border = border.clone();
        }
        if let Some(radius) = &overrides.border_radius {
            self.border_radius = radius.clone();
        }
        if let Some(margin) = &overrides.text_tags_margin {
            self.text_tags_margin = margin.clone();
        }
        if let Some(class_name) = &overrides.class_name {
            self.class_name = class_name.clone();
        }
        if let Some(tags) = &overrides.except_tags {
            self.except_tags = tags.clone();
        }
        if let Some(groups) = &overrides.except_tag_groups {
            self.except_tag_groups = groups.clone();
        }
        if let Some(style) = &overrides.style {
            self.style.merge(style);
        }
    }

    pub fn merged(mut self, overrides: &PartialConfig) -> Self {
        self.merge(overrides);
        self
    }

    pub fn is_except_tag(&self, tag: &str) -> bool {
        self.except_tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag))
    }
}

/// A configuration where every field is optional. Used for provider
/// overrides, per-site overrides, config files, and request bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(alias = "animation_speed", skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(alias = "border_radius", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(alias = "text_tags_margin", skip_serializing_if = "Option::is_none")]
    pub text_tags_margin: Option<String>,
    #[serde(alias = "class_name", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(alias = "except_tags", skip_serializing_if = "Option::is_none")]
    pub except_tags: Option<Vec<String>>,
    #[serde(alias = "except_tag_groups", skip_serializing_if = "Option::is_none")]
    pub except_tag_groups: Option<Vec<TagGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl PartialConfig {
    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: &PartialConfig) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        take!(
            animation,
            animation_speed,
            background,
            border,
            border_radius,
            text_tags_margin,
            class_name,
            except_tags,
            except_tag_groups
        );
        if let Some(style) = &other.style {
            self.style.get_or_insert_with(Style::new).merge(style);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(speed) = self.animation_speed {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ConfigError::InvalidAnimationSpeed(speed));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let partial: PartialConfig = serde_json::from_str(json)?;
        partial.validate()?;
        Ok(partial)
    }

    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let partial: PartialConfig = toml::from_str(toml)?;
        partial.validate()?;
        Ok(partial)
    }

    /// Load overrides from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let partial = match extension.as_deref() {
            Some("json") => Self::from_json(&contents)?,
            Some("toml") => Self::from_toml(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::debug!(path = %path.display(), "loaded skeleton config overrides");
        Ok(partial)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format for {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
    #[error("animation speed must be a positive number of seconds, got {0}")]
    InvalidAnimationSpeed(f64),
}
