//! The document a command acts on, and positions within it
//!
//! Positions are 1-based `LINE:COL` pairs where the column counts
//! characters. A selection is either `LINE-LINE` (whole lines, without the
//! final line terminator) or `LINE:COL-LINE:COL` (end exclusive).

use std::collections::HashMap;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::dialect::{dotted_extension, language_id_for_extension, Dialect};
use crate::error::{RefactorError, Result};
use crate::text::LineEnding;

/// An open document
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
    pub eol: LineEnding,
    pub language_id: String,
}

impl Document {
    /// Build a document, detecting its language id from the extension
    /// unless one is given
    pub fn new(
        path: impl Into<PathBuf>,
        text: String,
        language_id: Option<&str>,
        overrides: &HashMap<String, String>,
    ) -> Self {
        let path = path.into();
        let language_id = match language_id {
            Some(id) => id.to_string(),
            None => {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default();
                language_id_for_extension(ext, overrides)
            }
        };
        let eol = LineEnding::detect(&text);
        Self {
            path,
            text,
            eol,
            language_id,
        }
    }

    pub fn dialect(&self) -> Dialect {
        Dialect::from_language_id(&self.language_id)
    }

    /// Lower-cased extension with leading dot, or empty
    pub fn extension(&self) -> String {
        dotted_extension(&self.path)
    }

    /// Directory references are computed from
    pub fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn text_in(&self, range: Range<usize>) -> &str {
        self.text.get(range).unwrap_or("")
    }
}

/// 1-based line and character column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Byte offset of this position in `text`
    ///
    /// A column one past the end of a line addresses the line end.
    pub fn offset_in(&self, text: &str) -> Result<usize> {
        let column_index =
            self.column
                .checked_sub(1)
                .ok_or_else(|| RefactorError::InvalidPosition {
                    message: "columns start at 1".to_string(),
                })?;
        let line_start = line_start_offset(text, self.line)?;
        let line_end = line_end_offset(text, line_start);
        let line = &text[line_start..line_end];

        let column_offset = line
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(line.len()))
            .nth(column_index);

        column_offset
            .map(|c| line_start + c)
            .ok_or_else(|| RefactorError::InvalidPosition {
                message: format!(
                    "column {} is past the end of line {}",
                    self.column, self.line
                ),
            })
    }
}

impl FromStr for Position {
    type Err = RefactorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RefactorError::InvalidPosition {
            message: format!("expected LINE:COL, got '{}'", s),
        };
        let (line, column) = s.split_once(':').ok_or_else(invalid)?;
        let line: usize = line.trim().parse().map_err(|_| invalid())?;
        let column: usize = column.trim().parse().map_err(|_| invalid())?;
        if line == 0 || column == 0 {
            return Err(invalid());
        }
        Ok(Self { line, column })
    }
}

/// A selection given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSpec {
    Lines { first: usize, last: usize },
    Span { start: Position, end: Position },
}

impl SelectionSpec {
    /// Byte range of the selection in `text`
    pub fn resolve(&self, text: &str) -> Result<Range<usize>> {
        match self {
            Self::Lines { first, last } => {
                let start = line_start_offset(text, *first)?;
                let last_start = line_start_offset(text, *last)?;
                let end = line_end_offset(text, last_start);
                Ok(start..end)
            }
            Self::Span { start, end } => {
                let start = start.offset_in(text)?;
                let end = end.offset_in(text)?;
                if end < start {
                    return Err(RefactorError::InvalidSelection {
                        message: "selection ends before it starts".to_string(),
                    });
                }
                Ok(start..end)
            }
        }
    }
}

impl FromStr for SelectionSpec {
    type Err = RefactorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RefactorError::InvalidSelection {
            message: format!("expected LINE-LINE or LINE:COL-LINE:COL, got '{}'", s),
        };
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;

        if start.contains(':') || end.contains(':') {
            let start = start.parse::<Position>().map_err(|_| invalid())?;
            let end = end.parse::<Position>().map_err(|_| invalid())?;
            return Ok(Self::Span { start, end });
        }

        let first: usize = start.trim().parse().map_err(|_| invalid())?;
        let last: usize = end.trim().parse().map_err(|_| invalid())?;
        if first == 0 || last < first {
            return Err(invalid());
        }
        Ok(Self::Lines { first, last })
    }
}

fn line_start_offset(text: &str, line: usize) -> Result<usize> {
    match line {
        0 => {
            return Err(RefactorError::InvalidPosition {
                message: "lines start at 1".to_string(),
            })
        }
        1 => return Ok(0),
        _ => {}
    }
    text.match_indices('\n')
        .nth(line - 2)
        .map(|(i, _)| i + 1)
        .ok_or_else(|| RefactorError::InvalidPosition {
            message: format!("line {} is past the end of the document", line),
        })
}

/// End of the line starting at `line_start`, before any `\r\n` or `\n`
fn line_end_offset(text: &str, line_start: usize) -> usize {
    let rest = &text[line_start..];
    match rest.find('\n') {
        Some(i) if i > 0 && rest.as_bytes()[i - 1] == b'\r' => line_start + i - 1,
        Some(i) => line_start + i,
        None => text.len(),
    }
}
