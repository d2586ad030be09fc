//! Text clean-up applied to extracted content

pub mod cdata;
pub mod indent;

use serde::Serialize;

pub use cdata::strip_cdata;
pub use indent::normalize_indent;

/// Line terminator convention of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF if the text uses it anywhere, LF otherwise
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}
