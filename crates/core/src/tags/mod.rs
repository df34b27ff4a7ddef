//! Tag classification tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tags that carry a run of text and get a line-sized placeholder.
const TEXT_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "label", "li", "strong", "em", "b", "i", "u",
    "small", "mark", "code", "pre", "blockquote", "figcaption", "dt", "dd", "td", "th", "caption",
    "legend", "abbr", "cite", "q", "s", "sub", "sup", "time", "kbd", "samp", "var",
];

/// Named groups of tags that can be excluded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagGroup {
    Headings,
    Text,
    Lists,
    Tables,
    Media,
    FormControls,
    Links,
}

impl TagGroup {
    pub const ALL: [TagGroup; 7] = [
        TagGroup::Headings,
        TagGroup::Text,
        TagGroup::Lists,
        TagGroup::Tables,
        TagGroup::Media,
        TagGroup::FormControls,
        TagGroup::Links,
    ];

    pub fn members(self) -> &'static [&'static str] {
        match self {
            TagGroup::Headings => &["h1", "h2", "h3", "h4", "h5", "h6"],
            TagGroup::Text => &[
                "p", "span", "strong", "em", "b", "i", "u", "small", "mark", "code", "pre",
                "blockquote", "label", "abbr", "cite", "q", "s", "sub", "sup", "time", "kbd",
                "samp", "var",
            ],
            TagGroup::Lists => &["ul", "ol", "li", "dl", "dt", "dd"],
            TagGroup::Tables => &[
                "table", "caption", "thead", "tbody", "tfoot", "tr", "td", "th", "colgroup", "col",
            ],
            TagGroup::Media => &[
                "img", "picture", "video", "audio", "svg", "canvas", "iframe", "figure",
                "figcaption", "object", "embed",
            ],
            TagGroup::FormControls => &[
                "form", "fieldset", "legend", "input", "textarea", "select", "option", "button",
                "output", "progress", "meter",
            ],
            TagGroup::Links => &["a"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TagGroup::Headings => "headings",
            TagGroup::Text => "text",
            TagGroup::Lists => "lists",
            TagGroup::Tables => "tables",
            TagGroup::Media => "media",
            TagGroup::FormControls => "form-controls",
            TagGroup::Links => "links",
        }
    }

    pub fn contains(self, tag: &str) -> bool {
        contains_tag(self.members(), tag)
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TagGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagGroup::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = TagGroup::ALL.iter().map(|g| g.name()).collect();
                format!("unknown tag group '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

fn contains_tag(table: &[&str], tag: &str) -> bool {
    table.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

pub fn is_text_like(tag: &str) -> bool {
    contains_tag(TEXT_TAGS, tag)
}

/// True if `tag` is a member of any of `groups`.
pub fn is_in_group(tag: &str, groups: &[TagGroup]) -> bool {
    groups.iter().any(|g| g.contains(tag))
}

pub fn is_image(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("img")
}

/// HTML void elements: no children, no closing tag.
pub fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}
