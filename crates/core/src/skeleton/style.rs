use crate::config::SkeletonConfig;
use crate::css::Style;

/// Class carried by every placeholder block.
pub const SKELETON_CLASS: &str = "skeletonify";

/// Custom property the animation keyframes read their duration from.
pub const ANIMATION_SPEED_PROPERTY: &str = "--skeletonify-animation-speed";

/// Class list and declarations for a placeholder block.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonStyle {
    pub class: String,
    pub style: Style,
}

impl SkeletonStyle {
    pub fn with_margin(&self, margin: &str) -> Self {
        let mut style = self.clone();
        style.style.set("margin", margin);
        style
    }
}

/// Compute the placeholder class list and declarations for a configuration.
pub fn resolve_style(config: &SkeletonConfig) -> SkeletonStyle {
    let mut class = format!("{} {}-{}", SKELETON_CLASS, SKELETON_CLASS, config.animation);
    let extra = config.class_name.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }

    let background = match config.background.trim() {
        "" => config.animation.default_background(),
        bg => bg,
    };

    let mut style = Style::new();
    style.set("background", background);
    style.set("border", &config.border);
    style.set("border-radius", &config.border_radius);
    style.set(
        ANIMATION_SPEED_PROPERTY,
        &format!("{}s", config.animation_speed),
    );
    style.merge(&config.style);

    SkeletonStyle { class, style }
}
