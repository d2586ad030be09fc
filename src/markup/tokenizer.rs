//! Streaming tag/text events over a markup string
//!
//! The tree-sitter HTML grammar does the lexing; its concrete syntax tree is
//! flattened back into open/text/close events in source order. Text events
//! are exact source slices between tags, so `<script>`/`<style>` bodies keep
//! their whitespace byte for byte.
//!
//! Close events are only produced for end tags that are actually written,
//! for self-closing tags and for HTML void tags. Elements the grammar closes
//! implicitly produce no close event, and stray end tags still produce one.

use tree_sitter::{Node, Parser};

use super::serialize::is_void_tag;
use super::{AttrValue, Attributes};
use crate::error::{RefactorError, Result};

/// One tokenizer event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    Open { name: String, attributes: Attributes },
    Text(String),
    Close { name: String },
}

/// Tokenize `source` into events
pub fn tokenize(source: &str) -> Result<Vec<MarkupEvent>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_html::LANGUAGE.into())
        .map_err(|e| RefactorError::ParseFailure {
            message: format!("Failed to load HTML grammar: {}", e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| RefactorError::ParseFailure {
            message: "tree-sitter produced no syntax tree".to_string(),
        })?;

    let mut walker = EventWalker {
        source,
        events: Vec::new(),
        pos: 0,
    };
    walker.walk(tree.root_node());
    walker.flush_text(source.len());

    tracing::trace!(events = walker.events.len(), "tokenized selection");
    Ok(walker.events)
}

struct EventWalker<'a> {
    source: &'a str,
    events: Vec<MarkupEvent>,
    /// End of the last structural token; text runs start here
    pos: usize,
}

impl<'a> EventWalker<'a> {
    fn walk(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();

        for child in children {
            if child.is_missing() {
                continue;
            }
            match child.kind() {
                // Covered by the text runs between structural tokens
                "text" | "raw_text" | "entity" => {}
                "start_tag" => {
                    self.flush_text(child.start_byte());
                    let (name, attributes) = self.read_tag(child);
                    let void = is_void_tag(&name);
                    self.events.push(MarkupEvent::Open {
                        name: name.clone(),
                        attributes,
                    });
                    if void {
                        self.events.push(MarkupEvent::Close { name });
                    }
                    self.pos = child.end_byte();
                }
                "self_closing_tag" => {
                    self.flush_text(child.start_byte());
                    let (name, attributes) = self.read_tag(child);
                    self.events.push(MarkupEvent::Open {
                        name: name.clone(),
                        attributes,
                    });
                    self.events.push(MarkupEvent::Close { name });
                    self.pos = child.end_byte();
                }
                "end_tag" | "erroneous_end_tag" => {
                    self.flush_text(child.start_byte());
                    let (name, _) = self.read_tag(child);
                    self.events.push(MarkupEvent::Close { name });
                    self.pos = child.end_byte();
                }
                "comment" | "doctype" => {
                    self.flush_text(child.start_byte());
                    self.pos = child.end_byte();
                }
                // element, script_element, style_element, ERROR, ...
                _ => self.walk(child),
            }
        }
    }

    fn flush_text(&mut self, upto: usize) {
        if upto > self.pos {
            if let Some(text) = self.source.get(self.pos..upto) {
                self.events.push(MarkupEvent::Text(text.to_string()));
            }
            self.pos = upto;
        }
    }

    fn slice(&self, node: Node<'_>) -> &'a str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    fn read_tag(&self, tag: Node<'_>) -> (String, Attributes) {
        let mut name = String::new();
        let mut attributes = Attributes::new();

        let mut cursor = tag.walk();
        for child in tag.children(&mut cursor) {
            match child.kind() {
                "tag_name" | "erroneous_end_tag_name" => {
                    name = self.slice(child).to_lowercase();
                }
                "attribute" => {
                    if let Some((attr_name, value)) = self.read_attribute(child) {
                        // First occurrence wins, as in browsers
                        attributes.entry(attr_name).or_insert(value);
                    }
                }
                _ => {}
            }
        }

        (name, attributes)
    }

    fn read_attribute(&self, attribute: Node<'_>) -> Option<(String, AttrValue)> {
        let mut name = None;
        let mut value = AttrValue::Bare;

        let mut cursor = attribute.walk();
        for child in attribute.children(&mut cursor) {
            match child.kind() {
                "attribute_name" => name = Some(self.slice(child).to_lowercase()),
                "attribute_value" => {
                    value = AttrValue::Value(decode_entities(self.slice(child)));
                }
                "quoted_attribute_value" => {
                    let mut inner_cursor = child.walk();
                    let inner = child
                        .children(&mut inner_cursor)
                        .find(|n| n.kind() == "attribute_value")
                        .map(|n| decode_entities(self.slice(n)))
                        .unwrap_or_default();
                    value = AttrValue::Value(inner);
                }
                _ => {}
            }
        }

        name.map(|n| (n, value))
    }
}

/// Decode the character references that commonly appear in attribute values
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest.find(';').and_then(|semi| {
            let entity = &rest[1..semi];
            decode_entity(entity).map(|c| (c, semi + 1))
        });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                entity.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
