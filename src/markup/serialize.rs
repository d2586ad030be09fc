//! Serialization of synthetic reference elements

use super::{Element, Node};

/// Attributes that are boolean on every element
const GLOBAL_BOOL_ATTRS: &[&str] = &["autofocus", "hidden", "inert"];

/// Elements that never have a closing tag
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn tag_bool_attrs(tag: &str) -> &'static [&'static str] {
    match tag {
        "script" => &["defer", "async", "nomodule"],
        "link" => &["disabled"],
        _ => &[],
    }
}

pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

/// Whether `attr` is a boolean attribute on `tag`
pub fn is_bool_attr(tag: &str, attr: &str) -> bool {
    GLOBAL_BOOL_ATTRS.contains(&attr) || tag_bool_attrs(tag).contains(&attr)
}

/// Options controlling how synthetic elements are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Write void tags as `<link ... />` rather than `<link ...>`
    pub self_close_void_tags: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            self_close_void_tags: true,
        }
    }
}

/// Escape `<`, `>`, `&`, `'` and `"` for use inside a double-quoted attribute
pub fn escape_attr_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize `element` as a single tag
///
/// Falsy boolean attributes are written bare, everything else as
/// `name="value"`. Text children are written verbatim; nested elements are
/// serialized recursively.
pub fn serialize_element(element: &Element, options: SerializeOptions) -> String {
    let mut html = format!("<{}", element.name);

    for (name, value) in &element.attributes {
        if value.is_falsy() && is_bool_attr(&element.name, name) {
            html.push(' ');
            html.push_str(name);
        } else {
            html.push_str(&format!(
                " {}=\"{}\"",
                name,
                escape_attr_value(value.as_str())
            ));
        }
    }

    if is_void_tag(&element.name) {
        html.push_str(if options.self_close_void_tags { " />" } else { ">" });
        return html;
    }

    html.push('>');
    for child in &element.children {
        match child {
            Node::Text { text } => html.push_str(text),
            Node::Element(nested) => html.push_str(&serialize_element(nested, options)),
        }
    }
    html.push_str(&format!("</{}>", element.name));
    html
}
