//! Command modules for the refactor-extras CLI
//!
//! Each command module implements a single top-level command:
//! - `move_to_file` - Extract the selection to a new file and reference it
//! - `insert_file` - Insert another file's contents at the cursor
//! - `insert_path` - Insert a relative path to another file at the cursor
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` carrying the configuration and the
//! workspace/prompter seams. They return a [`Report`] that `main` renders.

pub mod insert_file;
pub mod insert_path;
pub mod move_to_file;

pub use insert_file::run_insert_file;
pub use insert_path::run_insert_path;
pub use move_to_file::run_move_to_file;

use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::cli::OutputFormat;
use crate::config::ExtrasConfig;
use crate::document::Document;
use crate::edit::{EditKind, TextEdit};
use crate::error::{RefactorError, Result};
use crate::host::{Prompter, Workspace};
use crate::rewrite::ReplacementPlan;

/// Shared context passed to all command handlers
pub struct CommandContext<'a> {
    pub config: &'a ExtrasConfig,
    pub workspace: &'a dyn Workspace,
    pub prompter: &'a dyn Prompter,
}

/// How a command ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    /// The user declined a prompt, or there was nothing to do
    Cancelled,
    /// The user's answer was unusable; nothing was changed
    Rejected { reason: String },
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Applied | Self::Cancelled => ExitCode::SUCCESS,
            Self::Rejected { .. } => ExitCode::from(2),
        }
    }
}

/// Result of a command, rendered by `main`
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub command: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub document: PathBuf,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ReplacementPlan>,
    pub edits: Vec<TextEdit>,
    pub message: String,
}

impl Report {
    pub fn new(command: &'static str, document: &Path, dry_run: bool) -> Self {
        Self {
            command,
            outcome: Outcome::Applied,
            document: document.to_path_buf(),
            dry_run,
            target: None,
            content: None,
            plan: None,
            edits: Vec::new(),
            message: String::new(),
        }
    }

    pub fn cancelled(mut self, message: impl Into<String>) -> Self {
        self.outcome = Outcome::Cancelled;
        self.message = message.into();
        self
    }

    pub fn rejected(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.outcome = Outcome::Rejected {
            reason: message.clone(),
        };
        self.message = message;
        self
    }

    /// Render for stdout; empty when there is nothing to print
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map(|json| json + "\n")
                .unwrap_or_else(|e| format!("{{\"error\": \"JSON encoding error: {}\"}}\n", e)),
            OutputFormat::Text => self.render_text(),
        }
    }

    fn render_text(&self) -> String {
        // Rejections were already shown through the prompter
        if matches!(self.outcome, Outcome::Rejected { .. }) {
            return String::new();
        }

        let mut out = String::new();
        if !self.message.is_empty() {
            let _ = writeln!(out, "{}", self.message);
        }
        if !self.dry_run || self.outcome != Outcome::Applied {
            return out;
        }

        if let (Some(target), Some(content)) = (&self.target, &self.content) {
            let _ = writeln!(out, "--- {}", target.display());
            let _ = writeln!(out, "{}", content);
        }
        let _ = writeln!(out, "--- {}", self.document.display());
        if self.edits.is_empty() {
            let _ = writeln!(out, "(unchanged)");
        }
        for edit in &self.edits {
            let action = match edit.kind {
                EditKind::Replace => "replace",
                EditKind::Delete => "delete",
                EditKind::Insert => "insert",
            };
            let _ = writeln!(
                out,
                "{} {}..{} {:?}",
                action, edit.start, edit.end, edit.new_text
            );
        }
        out
    }
}

/// Read a document as UTF-8 text
pub(crate) fn load_document(
    ctx: &CommandContext<'_>,
    path: &Path,
    language_id: Option<&str>,
) -> Result<Document> {
    let bytes = ctx.workspace.read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| RefactorError::IoError {
        path: path.to_path_buf(),
        message: format!("document is not valid UTF-8: {}", e),
    })?;
    Ok(Document::new(path, text, language_id, &ctx.config.languages))
}
