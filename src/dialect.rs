//! Markup dialect detection
//!
//! A document's dialect is decided once, from its language id, and then
//! passed explicitly through classification and rewriting.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

/// Markup flavor of the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Html,
    /// XML and XSL documents (including SVG and XSLT)
    Xml,
    /// Anything else; selections are moved as plain text
    Other,
}

impl Dialect {
    /// Map an editor language id to a dialect
    pub fn from_language_id(language_id: &str) -> Self {
        match language_id {
            "html" => Self::Html,
            "xml" | "xsl" => Self::Xml,
            _ => Self::Other,
        }
    }

    /// Get the canonical name of the dialect
    pub fn name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Other => "other",
        }
    }

    /// Whether `<script>`/`<style>` selections are recognized in this dialect
    pub fn recognizes_elements(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Language id for a file extension (lower-cased, without the dot)
///
/// `overrides` come from the `[languages]` config table and win over the
/// built-in table. Unknown extensions map to themselves, which always
/// resolves to [`Dialect::Other`] unless the extension is itself a known id.
pub fn language_id_for_extension(extension: &str, overrides: &HashMap<String, String>) -> String {
    let ext = extension.to_lowercase();
    if let Some(id) = overrides.get(&ext) {
        return id.clone();
    }
    match ext.as_str() {
        "html" | "htm" | "xhtml" => "html".to_string(),
        "xml" | "svg" | "xslt" | "xsd" | "rss" | "atom" => "xml".to_string(),
        "xsl" => "xsl".to_string(),
        "" => "plaintext".to_string(),
        _ => ext,
    }
}

/// Lower-cased extension of `path` including the leading dot, or empty
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// XML host documents that get their own reference templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlFlavor {
    Svg,
    Xslt,
    Generic,
}

impl XmlFlavor {
    /// Pick the flavor from a dotted, lower-cased host extension
    pub fn from_extension(dotted: &str) -> Self {
        match dotted {
            ".svg" => Self::Svg,
            ".xslt" => Self::Xslt,
            _ => Self::Generic,
        }
    }
}
