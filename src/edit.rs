//! Text edits against a document buffer

use serde::Serialize;
use std::ops::Range;

use crate::error::{RefactorError, Result};

/// Edit type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Replace,
    Delete,
    Insert,
}

/// A single edit, in byte offsets into the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub kind: EditKind,
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(range: Range<usize>, new_text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Replace,
            start: range.start,
            end: range.end,
            new_text: new_text.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self {
            kind: EditKind::Delete,
            start: range.start,
            end: range.end,
            new_text: String::new(),
        }
    }

    pub fn insert(offset: usize, new_text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            start: offset,
            end: offset,
            new_text: new_text.into(),
        }
    }
}

/// Apply non-overlapping edits to `text`
///
/// Edits are applied back to front so earlier offsets stay valid. An
/// insertion at the start of a replaced or deleted range ends up in front of
/// the new content.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> Result<String> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| (b.start, b.end).cmp(&(a.start, a.end)));

    let mut result = text.to_string();
    let mut limit = text.len();
    for edit in ordered {
        if edit.start > edit.end || edit.end > limit {
            return Err(RefactorError::InvalidSelection {
                message: format!(
                    "edit {}..{} is out of bounds or overlaps another edit",
                    edit.start, edit.end
                ),
            });
        }
        if !text.is_char_boundary(edit.start) || !text.is_char_boundary(edit.end) {
            return Err(RefactorError::InvalidSelection {
                message: format!("edit {}..{} splits a character", edit.start, edit.end),
            });
        }
        result.replace_range(edit.start..edit.end, &edit.new_text);
        limit = edit.start;
    }
    Ok(result)
}
