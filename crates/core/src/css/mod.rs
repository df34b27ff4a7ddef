//! Inline style declarations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A block of CSS declarations, keyed by property name.
///
/// Later writes to the same property replace earlier ones, so overlaying one
/// `Style` on another is a per-property override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inline `style` attribute.
    pub fn parse(style_str: &str) -> Self {
        let mut style = Style::new();
        for declaration in style_str.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            let mut parts = declaration.splitn(2, ':');
            let property = match parts.next() {
                Some(p) => p.trim(),
                None => continue,
            };
            let value = match parts.next() {
                Some(v) => v.trim(),
                None => continue,
            };
            if property.is_empty() || value.is_empty() {
                continue;
            }
            style.set(property, value);
        }
        style
    }

    /// Set a property. Names are lowercased, except custom properties
    /// (`--name`), which are case-sensitive.
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.trim();
        let key = if property.starts_with("--") {
            property.to_string()
        } else {
            property.to_ascii_lowercase()
        };
        self.0.insert(key, value.trim().to_string());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply `other` on top of this style.
    pub fn merge(&mut self, other: &Style) {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
    }

    pub fn merged(mut self, other: &Style) -> Self {
        self.merge(other);
        self
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property.as_ref(), value.as_ref());
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inline_declarations() {
        let style = Style::parse("Width: 20px; ;color:red;bogus; --Speed: 2s");
        assert_eq!(style.get("width"), Some("20px"));
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("--Speed"), Some("2s"));
        assert_eq!(style.len(), 3);
    }

    #[test]
    fn merge_overrides_per_property() {
        let base: Style = [("color", "red"), ("margin", "0")].into_iter().collect();
        let top: Style = [("color", "blue")].into_iter().collect();
        let merged = base.merged(&top);
        assert_eq!(merged.get("color"), Some("blue"));
        assert_eq!(merged.get("margin"), Some("0"));
    }

    #[test]
    fn displays_as_inline_style() {
        let style: Style = [("margin", "0"), ("color", "red")].into_iter().collect();
        assert_eq!(style.to_string(), "color: red; margin: 0");
    }
}
