//! refactor-extras: move markup fragments to files, and pull files back in
//!
//! The core takes a selection inside an HTML, XML or XSL document, decides
//! whether it is a single inline `<script>` or `<style>` element, computes
//! the content for a new file and the markup that should replace the
//! selection so the document keeps referencing the moved code.
//!
//! # Layers
//!
//! - [`markup`]: tokenizer (tree-sitter-html), fragment classifier and the
//!   serializer for synthetic reference elements
//! - [`text`]: indentation normalization and CDATA stripping
//! - [`rewrite`]: replacement plans, save filters and extracted content
//! - [`paths`]: relative references and byte-size formatting
//! - [`commands`]: the CLI commands, over the [`host`] traits
//!
//! Everything below [`commands`] is pure and never touches the file system.
//!
//! # Example
//!
//! ```
//! use refactor_extras::markup::{classify, Fragment};
//! use refactor_extras::Dialect;
//!
//! let fragment = classify("<style>p { color: red; }</style>", Dialect::Html).unwrap();
//! assert!(matches!(fragment, Fragment::Element(_)));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dialect;
pub mod document;
pub mod edit;
pub mod error;
pub mod fs_utils;
pub mod host;
pub mod markup;
pub mod paths;
pub mod rewrite;
pub mod text;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use config::ExtrasConfig;
pub use dialect::{Dialect, XmlFlavor};
pub use document::{Document, Position, SelectionSpec};
pub use edit::{apply_edits, TextEdit};
pub use error::{RefactorError, Result};
pub use markup::{classify, ElementDescriptor, Fragment};
pub use paths::{format_bytes, relative_path, Precision};
pub use rewrite::{build_replacement, plan_move, ReplacementPlan, RewriteContext};
pub use text::{normalize_indent, strip_cdata, LineEnding};
