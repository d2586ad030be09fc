//! Reference rewriting
//!
//! Given a classified fragment, the host document and the path the fragment
//! was saved to, decide what replaces the original selection. Also owns the
//! per-dialect save filters and the clean-up applied to extracted content.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use std::path::Path;

use crate::dialect::{dotted_extension, Dialect, XmlFlavor};
use crate::edit::TextEdit;
use crate::markup::{
    escape_attr_value, serialize_element, AttrValue, Attributes, Element, ElementDescriptor,
    EmbeddedTag, Fragment, SerializeOptions,
};
use crate::text::{normalize_indent, strip_cdata, LineEnding};

/// A save-dialog filter group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFilter {
    pub label: String,
    /// Extensions without the dot; `*` matches everything
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(label: &str, extensions: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn all_files() -> Self {
        Self::new("All files", &["*"])
    }

    /// Group for the host document's own extension, labelled upper-case
    pub fn for_host(dotted_extension: &str) -> Option<Self> {
        let ext = dotted_extension.trim_start_matches('.');
        if ext.is_empty() {
            return None;
        }
        Some(Self::new(&ext.to_uppercase(), &[ext]))
    }

    /// Extension appended to a bare file name picked under this filter
    pub fn default_extension(&self) -> Option<&str> {
        self.extensions
            .first()
            .map(String::as_str)
            .filter(|e| *e != "*")
    }

    pub fn matches(&self, path: &Path) -> bool {
        let ext = dotted_extension(path);
        self.extensions
            .iter()
            .any(|e| e == "*" || ext.trim_start_matches('.') == e.to_lowercase())
    }
}

/// Extension and filter group a recognized element implies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpliedTarget {
    /// Dotted extension, e.g. `.js`
    pub extension: &'static str,
    pub label: &'static str,
}

impl ImpliedTarget {
    pub fn filter(&self) -> FileFilter {
        FileFilter::new(self.label, &[self.extension.trim_start_matches('.')])
    }
}

/// The file type a recognized element should be saved as
///
/// In HTML the script `type` picks the extension; XML scripts are always
/// JavaScript.
pub fn implied_target(descriptor: &ElementDescriptor, dialect: Dialect) -> ImpliedTarget {
    const JS: ImpliedTarget = ImpliedTarget {
        extension: ".js",
        label: "JavaScript",
    };

    match descriptor.tag {
        EmbeddedTag::Style => ImpliedTarget {
            extension: ".css",
            label: "CSS",
        },
        EmbeddedTag::Script if dialect == Dialect::Html => {
            match descriptor.attributes().get("type").map(AttrValue::as_str) {
                Some("importmap") => ImpliedTarget {
                    extension: ".importmap",
                    label: "JSON",
                },
                Some("speculationrules") => ImpliedTarget {
                    extension: ".json",
                    label: "JSON",
                },
                _ => JS,
            }
        }
        EmbeddedTag::Script => JS,
    }
}

/// Filter groups offered when asking where to save a fragment
pub fn save_filters(fragment: &Fragment, dialect: Dialect, host_extension: &str) -> Vec<FileFilter> {
    let host = FileFilter::for_host(host_extension);
    let mut filters = Vec::new();

    match dialect {
        Dialect::Html => {
            let html = FileFilter::new("HTML", &["html"]);
            match fragment {
                Fragment::Element(descriptor) => {
                    filters.push(implied_target(descriptor, dialect).filter());
                    filters.push(html);
                }
                Fragment::Markup => filters.push(html),
                Fragment::Text => {
                    filters.push(html);
                    filters.push(FileFilter::new("JavaScript", &["js"]));
                    filters.push(FileFilter::new("CSS", &["css"]));
                }
            }
        }
        Dialect::Xml => match fragment {
            Fragment::Element(descriptor) => {
                filters.push(implied_target(descriptor, dialect).filter());
                filters.extend(host);
            }
            Fragment::Markup => filters.extend(host),
            Fragment::Text => {
                filters.extend(host);
                filters.push(FileFilter::new("JavaScript", &["js"]));
                filters.push(FileFilter::new("CSS", &["css"]));
            }
        },
        Dialect::Other => {
            filters.extend(host);
            filters.push(FileFilter::all_files());
        }
    }

    filters
}

/// Content written to the new file
///
/// A recognized element contributes its text; anything else contributes the
/// whole selection. XML content loses its CDATA wrapper. HTML and XML
/// content is re-indented; other dialects are copied verbatim.
pub fn extracted_content(
    fragment: &Fragment,
    selection: &str,
    dialect: Dialect,
    eol: LineEnding,
) -> String {
    let raw = match fragment.element() {
        Some(descriptor) => descriptor.text_content(),
        None => selection.to_string(),
    };

    match dialect {
        Dialect::Html => normalize_indent(&raw, eol),
        Dialect::Xml => normalize_indent(&strip_cdata(&raw), eol),
        Dialect::Other => raw,
    }
}

/// What happens to the original selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplacementPlan {
    /// Replace the selection with reference markup
    ReplaceWithMarkup { markup: String },
    /// Plain text move: remove the selection
    DeleteOnly,
    /// Remove the selection and insert a stylesheet processing instruction
    /// (with a trailing line ending when it starts a line)
    DeleteWithStylesheet { offset: usize, instruction: String },
    /// Leave the selection exactly as it was
    KeepOriginal,
}

impl ReplacementPlan {
    /// Edits realizing this plan for the selected byte range
    pub fn edits(&self, selection: Range<usize>) -> Vec<TextEdit> {
        match self {
            Self::ReplaceWithMarkup { markup } => vec![TextEdit::replace(selection, markup.clone())],
            Self::DeleteOnly => vec![TextEdit::delete(selection)],
            Self::DeleteWithStylesheet {
                offset,
                instruction,
            } => vec![
                TextEdit::delete(selection),
                TextEdit::insert(*offset, instruction.clone()),
            ],
            Self::KeepOriginal => Vec::new(),
        }
    }

    /// Whether the document ends up referencing the new file
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::ReplaceWithMarkup { .. } | Self::DeleteWithStylesheet { .. }
        )
    }
}

/// Everything about the host document the rewriter needs
#[derive(Debug, Clone, Copy)]
pub struct RewriteContext<'a> {
    pub dialect: Dialect,
    /// Lower-cased host extension with leading dot
    pub host_extension: &'a str,
    /// Full host document text
    pub document: &'a str,
    pub eol: LineEnding,
    pub options: SerializeOptions,
}

/// Whether `target_extension` is the one the element's type implies
pub fn extension_matches(
    descriptor: &ElementDescriptor,
    dialect: Dialect,
    target_extension: &str,
) -> bool {
    target_extension.eq_ignore_ascii_case(implied_target(descriptor, dialect).extension)
}

/// Text written to the target file
///
/// An element saved under a foreign extension is written as the whole
/// selection, markup included; everything else gets the extracted content.
pub fn target_content(
    fragment: &Fragment,
    selection: &str,
    extracted: &str,
    dialect: Dialect,
    target_extension: &str,
) -> String {
    match fragment.element() {
        Some(descriptor) if !extension_matches(descriptor, dialect, target_extension) => {
            selection.to_string()
        }
        _ => extracted.to_string(),
    }
}

/// Plan for a fragment that was saved to a file with `target_extension`
///
/// Plain selections are moved. Recognized elements are replaced by a
/// reference, unless nothing was left to extract or they were saved under a
/// different extension than their type implies, in which case the document
/// is left untouched.
pub fn plan_move(
    fragment: &Fragment,
    content: &str,
    ctx: &RewriteContext<'_>,
    target_extension: &str,
    relative_path: &str,
) -> ReplacementPlan {
    let Some(descriptor) = fragment.element() else {
        return ReplacementPlan::DeleteOnly;
    };

    if content.is_empty() {
        tracing::debug!(tag = descriptor.tag.name(), "nothing extracted, keeping original selection");
        return ReplacementPlan::KeepOriginal;
    }

    if !extension_matches(descriptor, ctx.dialect, target_extension) {
        tracing::debug!(
            implied = implied_target(descriptor, ctx.dialect).extension,
            chosen = target_extension,
            "extension mismatch, keeping original selection"
        );
        return ReplacementPlan::KeepOriginal;
    }

    build_replacement(descriptor, ctx, relative_path)
}

/// Reference markup for a recognized element saved at `relative_path`
pub fn build_replacement(
    descriptor: &ElementDescriptor,
    ctx: &RewriteContext<'_>,
    relative_path: &str,
) -> ReplacementPlan {
    if !descriptor.has_content() {
        tracing::debug!(tag = descriptor.tag.name(), "empty element, keeping original selection");
        return ReplacementPlan::KeepOriginal;
    }

    let plan = match ctx.dialect {
        Dialect::Html => ReplacementPlan::ReplaceWithMarkup {
            markup: html_reference(descriptor, relative_path, ctx.options),
        },
        Dialect::Xml => xml_reference(descriptor.tag, ctx, relative_path),
        Dialect::Other => ReplacementPlan::KeepOriginal,
    };

    tracing::debug!(?plan, "built replacement");
    plan
}

fn html_reference(
    descriptor: &ElementDescriptor,
    relative_path: &str,
    options: SerializeOptions,
) -> String {
    match descriptor.tag {
        EmbeddedTag::Script => {
            let mut attributes = descriptor.attributes().clone();
            attributes.insert("src".to_string(), AttrValue::from(relative_path));
            serialize_element(&Element::new("script", attributes), options)
        }
        EmbeddedTag::Style => {
            let mut attributes = Attributes::new();
            attributes.insert("rel".to_string(), AttrValue::from("stylesheet"));
            for (name, value) in descriptor.attributes() {
                if name != "rel" {
                    attributes.insert(name.clone(), value.clone());
                }
            }
            attributes.insert("href".to_string(), AttrValue::from(relative_path));
            serialize_element(&Element::new("link", attributes), options)
        }
    }
}

fn xml_reference(tag: EmbeddedTag, ctx: &RewriteContext<'_>, relative_path: &str) -> ReplacementPlan {
    let path = escape_attr_value(relative_path);
    let markup = match (XmlFlavor::from_extension(ctx.host_extension), tag) {
        (XmlFlavor::Svg, EmbeddedTag::Script) => {
            format!(r#"<script type="text/javascript" xlink:href="{}" />"#, path)
        }
        (XmlFlavor::Svg, EmbeddedTag::Style) => format!(
            r#"<link xmlns="http://www.w3.org/1999/xhtml" rel="stylesheet" type="text/css" href="{}" />"#,
            path
        ),
        (XmlFlavor::Xslt | XmlFlavor::Generic, EmbeddedTag::Script) => {
            format!(r#"<script type="text/javascript" src="{}" />"#, path)
        }
        (XmlFlavor::Xslt, EmbeddedTag::Style) => {
            format!(r#"<link rel="stylesheet" type="text/css" href="{}" />"#, path)
        }
        (XmlFlavor::Generic, EmbeddedTag::Style) => {
            let pi = format!(r#"<?xml-stylesheet type="text/css" href="{}"?>"#, path);
            let (offset, instruction) = stylesheet_insertion(ctx.document, ctx.eol, &pi);
            return ReplacementPlan::DeleteWithStylesheet {
                offset,
                instruction,
            };
        }
    };
    ReplacementPlan::ReplaceWithMarkup { markup }
}

static XML_DECLARATION: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^<\?xml [^?>]+\?>\r?\n?").ok());

/// Where a stylesheet processing instruction goes, and the text to insert
///
/// Right after the XML declaration on the first line, or at the very start
/// of the document when there is none. Inserted at a line start, the
/// instruction gets its own line.
pub fn stylesheet_insertion(document: &str, eol: LineEnding, instruction: &str) -> (usize, String) {
    let first_line = match document.find('\n') {
        Some(i) => &document[..=i],
        None => document,
    };

    let declaration_end = XML_DECLARATION
        .as_ref()
        .and_then(|re| re.find(first_line))
        .map(|m| (m.end(), m.as_str().ends_with('\n')));

    match declaration_end {
        Some((end, true)) => (end, format!("{}{}", instruction, eol.as_str())),
        Some((end, false)) => (end, instruction.to_string()),
        None => (0, format!("{}{}", instruction, eol.as_str())),
    }
}
