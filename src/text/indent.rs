//! Indentation clean-up for extracted fragments
//!
//! Content lifted out of a `<script>` or `<style>` element usually carries
//! the indentation of its host document. This strips the common leading
//! indentation, measured in the unit the first line uses (two-space pairs or
//! tabs), and drops leading blank lines. It is a heuristic, not a formatter:
//! relative indentation between lines is never changed.

use super::LineEnding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndentUnit {
    SpacePair,
    Tab,
}

impl IndentUnit {
    fn detect(text: &str) -> Option<Self> {
        if text.starts_with("  ") {
            Some(Self::SpacePair)
        } else if text.starts_with('\t') {
            Some(Self::Tab)
        } else {
            None
        }
    }

    /// Width in bytes of the leading run of whole units
    fn depth(&self, line: &str) -> usize {
        match self {
            Self::SpacePair => {
                let spaces = line.bytes().take_while(|b| *b == b' ').count();
                spaces - spaces % 2
            }
            Self::Tab => line.bytes().take_while(|b| *b == b'\t').count(),
        }
    }
}

/// Strip leading blank lines and one level of common indentation
///
/// Repeats until the text stops changing, so the result is stable under
/// another call.
pub fn normalize_indent(text: &str, eol: LineEnding) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = strip_leading_line_breaks(&current, eol);
        let next = dedent_once(stripped, eol).unwrap_or_else(|| stripped.to_string());
        if next == current {
            return next;
        }
        current = next;
    }
}

fn strip_leading_line_breaks(text: &str, eol: LineEnding) -> &str {
    match eol {
        LineEnding::Lf => text.trim_start_matches('\n'),
        LineEnding::CrLf => text.trim_start_matches(['\r', '\n']),
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// One dedent pass; `None` when nothing can be stripped
fn dedent_once(text: &str, eol: LineEnding) -> Option<String> {
    let unit = IndentUnit::detect(text)?;
    let lines: Vec<&str> = text.split(eol.as_str()).collect();

    // Blank lines never constrain the minimum
    let min_depth = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| unit.depth(line))
        .min()?;

    if min_depth == 0 {
        return None;
    }

    let dedented: Vec<&str> = lines
        .iter()
        .map(|line| if is_blank(line) { "" } else { &line[min_depth..] })
        .collect();
    Some(dedented.join(eol.as_str()))
}
