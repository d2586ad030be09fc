//! Fragment classification
//!
//! Decides whether a selection is exactly one `<script>` or `<style>`
//! element. Tokenizer events are folded with an explicit stack of open
//! elements: an open pushes, a close pops only when its name matches the top
//! of the stack, and the popped element is attached to its parent (or to the
//! top-level list). Mismatched closes are ignored, so unbalanced XML never
//! fails, it just stops qualifying as a single element.

use serde::Serialize;

use super::tokenizer::{tokenize, MarkupEvent};
use super::{Element, ElementDescriptor, EmbeddedTag, Node};
use crate::dialect::Dialect;
use crate::error::Result;

/// Outcome of classifying a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "element", rename_all = "snake_case")]
pub enum Fragment {
    /// Not `script`/`style` markup at all; moved as plain text
    Text,
    /// Looked like `script`/`style` markup but did not parse to exactly one
    /// closed top-level element
    Markup,
    /// Exactly one top-level `script` or `style` element
    Element(ElementDescriptor),
}

impl Fragment {
    pub fn element(&self) -> Option<&ElementDescriptor> {
        match self {
            Self::Element(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

/// Classify `selection` for a document of the given dialect
pub fn classify(selection: &str, dialect: Dialect) -> Result<Fragment> {
    if !dialect.recognizes_elements() {
        return Ok(Fragment::Text);
    }

    let trimmed = selection.trim();
    if EmbeddedTag::wrapping(trimmed).is_none() {
        return Ok(Fragment::Text);
    }

    let mut builder = TreeBuilder::default();
    for event in tokenize(trimmed)? {
        builder.feed(event);
    }

    let fragment = match builder.finish() {
        Some(element) => match EmbeddedTag::from_name(&element.name) {
            Some(tag) => Fragment::Element(ElementDescriptor { tag, element }),
            None => Fragment::Markup,
        },
        None => Fragment::Markup,
    };

    tracing::debug!(
        dialect = dialect.name(),
        kind = match &fragment {
            Fragment::Text => "text",
            Fragment::Markup => "markup",
            Fragment::Element(_) => "element",
        },
        "classified selection"
    );
    Ok(fragment)
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Element>,
    roots: Vec<Node>,
}

impl TreeBuilder {
    fn feed(&mut self, event: MarkupEvent) {
        match event {
            MarkupEvent::Open { name, attributes } => {
                self.stack.push(Element::new(name, attributes));
            }
            MarkupEvent::Text(text) => match self.stack.last_mut() {
                Some(top) => top.children.push(Node::Text { text }),
                // Whitespace between top-level nodes is not a node
                None if text.trim().is_empty() => {}
                None => self.roots.push(Node::Text { text }),
            },
            MarkupEvent::Close { name } => {
                if self.stack.last().is_some_and(|top| top.name == name) {
                    if let Some(element) = self.stack.pop() {
                        self.attach(Node::Element(element));
                    }
                } else {
                    tracing::trace!(%name, "ignoring mismatched close tag");
                }
            }
        }
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    /// The single closed top-level element, if that is all there was
    fn finish(mut self) -> Option<Element> {
        if !self.stack.is_empty() || self.roots.len() != 1 {
            return None;
        }
        match self.roots.pop() {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    }
}
