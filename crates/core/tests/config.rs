//! Tests for configuration merging, providers, and file loading.

use pretty_assertions::assert_eq;
use skeletonify_core::config::{
    Animation, ConfigError, PartialConfig, SkeletonConfig, SkeletonProvider,
};
use skeletonify_core::css::Style;
use skeletonify_core::tags::TagGroup;

#[test]
fn test_overrides_replace_only_given_fields() {
    let overrides = PartialConfig {
        animation: Some(Animation::Shimmer),
        border_radius: Some("0".to_string()),
        ..Default::default()
    };
    let config = SkeletonConfig::default().merged(&overrides);
    assert_eq!(config.animation, Animation::Shimmer);
    assert_eq!(config.border_radius, "0");
    assert_eq!(config.animation_speed, 1.5);
    assert_eq!(config.text_tags_margin, "4px 0");
}

#[test]
fn test_nested_providers() {
    let outer = SkeletonProvider::new(&PartialConfig {
        class_name: Some("outer".to_string()),
        animation_speed: Some(3.0),
        ..Default::default()
    });
    let inner = outer.nested(&PartialConfig {
        class_name: Some("inner".to_string()),
        ..Default::default()
    });

    assert_eq!(inner.config().class_name, "inner");
    assert_eq!(inner.config().animation_speed, 3.0);
    // The outer scope is unaffected
    assert_eq!(outer.config().class_name, "outer");
}

#[test]
fn test_resolve_layers_styles() {
    let provider = SkeletonProvider::new(&PartialConfig {
        style: Some([("color", "red"), ("opacity", "0.8")].into_iter().collect()),
        ..Default::default()
    });
    let local = PartialConfig {
        style: Some([("color", "blue")].into_iter().collect()),
        ..Default::default()
    };
    let site: Style = [("opacity", "1")].into_iter().collect();

    let config = provider.resolve(&local, &site);
    assert_eq!(config.style.get("color"), Some("blue"));
    assert_eq!(config.style.get("opacity"), Some("1"));
}

#[test]
fn test_partial_merge_prefers_later_layer() {
    let mut base = PartialConfig {
        border: Some("1px solid #ccc".to_string()),
        background: Some("#fff".to_string()),
        ..Default::default()
    };
    base.merge(&PartialConfig {
        background: Some("#000".to_string()),
        ..Default::default()
    });
    assert_eq!(base.border.as_deref(), Some("1px solid #ccc"));
    assert_eq!(base.background.as_deref(), Some("#000"));
}

#[test]
fn test_json_uses_camel_case() {
    let partial = PartialConfig::from_json(
        r#"{
            "animation": "animation-2",
            "animationSpeed": 0.8,
            "exceptTags": ["button"],
            "exceptTagGroups": ["form-controls"],
            "style": { "opacity": "0.5" }
        }"#,
    )
    .unwrap();
    assert_eq!(partial.animation, Some(Animation::Shimmer));
    assert_eq!(partial.animation_speed, Some(0.8));
    assert_eq!(partial.except_tags, Some(vec!["button".to_string()]));
    assert_eq!(partial.except_tag_groups, Some(vec![TagGroup::FormControls]));
}

#[test]
fn test_toml_accepts_snake_case() {
    let partial = PartialConfig::from_toml(
        r#"
animation_speed = 2.5
text_tags_margin = "8px 0"
except_tag_groups = ["headings"]
"#,
    )
    .unwrap();
    assert_eq!(partial.animation_speed, Some(2.5));
    assert_eq!(partial.text_tags_margin.as_deref(), Some("8px 0"));
    assert_eq!(partial.except_tag_groups, Some(vec![TagGroup::Headings]));
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = PartialConfig::from_json(r#"{ "animationSpeed": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAnimationSpeed(_)));

    let err = PartialConfig::from_json(r#"{ "exceptTagGroups": ["widgets"] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));

    let err = PartialConfig::from_json(r#"{ "animation": "animation-9" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let dir = std::env::temp_dir().join(format!("skeletonify-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let json_path = dir.join("skeleton.json");
    std::fs::write(&json_path, r#"{ "className": "brand" }"#).unwrap();
    let partial = PartialConfig::load(&json_path).unwrap();
    assert_eq!(partial.class_name.as_deref(), Some("brand"));

    let yaml_path = dir.join("skeleton.yaml");
    std::fs::write(&yaml_path, "className: brand").unwrap();
    let err = PartialConfig::load(&yaml_path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

    let err = PartialConfig::load(&dir.join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_full_config_round_trips_through_json() {
    let config = SkeletonConfig {
        except_tag_groups: vec![TagGroup::Media],
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"exceptTagGroups\":[\"media\"]"));
    let back: SkeletonConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
