//! Markup model shared by the tokenizer, the classifier and the serializer
//!
//! Selections are tokenized into [`MarkupEvent`]s, folded into a small
//! [`Element`] tree by the classifier, and synthetic replacement elements are
//! written back out by [`serialize`].

pub mod classify;
pub mod serialize;
pub mod tokenizer;

use indexmap::IndexMap;
use serde::Serialize;

pub use classify::{classify, Fragment};
pub use serialize::{escape_attr_value, serialize_element, SerializeOptions};
pub use tokenizer::{tokenize, MarkupEvent};

/// Value of a single attribute
///
/// `Bare` is an attribute written without `=`; `Value("")` is an explicit
/// empty string. Both are falsy when deciding how to serialize boolean
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bare,
    Value(String),
}

impl AttrValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bare => "",
            Self::Value(v) => v,
        }
    }

    pub fn is_falsy(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// Attributes in source order, keyed by lower-cased name
pub type Attributes = IndexMap<String, AttrValue>;

/// A node of a classified fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

/// An element with its attributes and children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Concatenated text of the immediate text children
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text { text } => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }
}

/// The embedded elements a selection can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddedTag {
    Script,
    Style,
}

impl EmbeddedTag {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "script" => Some(Self::Script),
            "style" => Some(Self::Style),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
        }
    }

    /// The tag whose open prefix and close tag wrap `text`, if any
    ///
    /// Matching is case-sensitive, like the editor commands it mirrors.
    pub fn wrapping(text: &str) -> Option<Self> {
        [Self::Script, Self::Style].into_iter().find(|tag| {
            text.starts_with(&format!("<{}", tag.name()))
                && text.ends_with(&format!("</{}>", tag.name()))
        })
    }
}

/// A selection that parsed to exactly one `script` or `style` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementDescriptor {
    pub tag: EmbeddedTag,
    pub element: Element,
}

impl ElementDescriptor {
    pub fn attributes(&self) -> &Attributes {
        &self.element.attributes
    }

    pub fn text_content(&self) -> String {
        self.element.text_content()
    }

    /// Empty elements are extracted but never replaced by a reference
    pub fn has_content(&self) -> bool {
        self.element
            .children
            .iter()
            .any(|child| matches!(child, Node::Text { text } if !text.is_empty()))
    }
}
