//! Move-to-file command handler - extract a selection and leave a reference

use std::ops::Range;
use std::path::Path;

use crate::cli::MoveToFileArgs;
use crate::commands::{load_document, CommandContext, Report};
use crate::dialect::dotted_extension;
use crate::document::Document;
use crate::edit::{apply_edits, TextEdit};
use crate::error::Result;
use crate::markup::{classify, Fragment, SerializeOptions};
use crate::paths::{canonical_or_lexical, relative_path, same_file};
use crate::rewrite::{
    extracted_content, plan_move, save_filters, target_content, FileFilter, ReplacementPlan,
    RewriteContext,
};

pub const SAVE_TITLE: &str = "Move selection to file";
pub const SAME_FILE_MESSAGE: &str = "Please save selection as another file";

/// What is known about a move before a target has been chosen
#[derive(Debug, Clone)]
pub struct PreparedMove {
    pub selection: Range<usize>,
    /// The selection without surrounding whitespace; reference markup
    /// replaces only this part
    pub trimmed: Range<usize>,
    pub fragment: Fragment,
    /// Extracted content, written to the new file unless the extension guard
    /// falls back to the whole selection
    pub content: String,
    pub filters: Vec<FileFilter>,
}

/// Everything a move changes once the target is known
#[derive(Debug, Clone)]
pub struct PlannedMove {
    pub plan: ReplacementPlan,
    pub edits: Vec<TextEdit>,
    /// Text written to the target
    pub content: String,
}

fn trimmed_range(text: &str, range: Range<usize>) -> Range<usize> {
    let selected = text.get(range.clone()).unwrap_or("");
    let start = range.start + (selected.len() - selected.trim_start().len());
    start..start + selected.trim().len()
}

/// Classify the selection and compute the content to extract
pub fn prepare_move(document: &Document, selection: Range<usize>) -> Result<PreparedMove> {
    let text = document.text_in(selection.clone());
    let dialect = document.dialect();
    let fragment = classify(text, dialect)?;
    let content = extracted_content(&fragment, text, dialect, document.eol);
    let filters = save_filters(&fragment, dialect, &document.extension());

    Ok(PreparedMove {
        trimmed: trimmed_range(&document.text, selection.clone()),
        selection,
        fragment,
        content,
        filters,
    })
}

/// Replacement plan, document edits and target content once the fragment
/// lives at `target`
pub fn plan_target(
    document: &Document,
    prepared: &PreparedMove,
    target: &Path,
    options: SerializeOptions,
) -> PlannedMove {
    let host_extension = document.extension();
    let target_extension = dotted_extension(target);
    let ctx = RewriteContext {
        dialect: document.dialect(),
        host_extension: &host_extension,
        document: &document.text,
        eol: document.eol,
        options,
    };
    let reference = relative_path(document.directory(), target);
    let plan = plan_move(
        &prepared.fragment,
        &prepared.content,
        &ctx,
        &target_extension,
        &reference,
    );

    let range = match &plan {
        ReplacementPlan::ReplaceWithMarkup { .. } => prepared.trimmed.clone(),
        _ => prepared.selection.clone(),
    };
    let edits = plan.edits(range);
    let content = target_content(
        &prepared.fragment,
        document.text_in(prepared.selection.clone()),
        &prepared.content,
        ctx.dialect,
        &target_extension,
    );

    PlannedMove {
        plan,
        edits,
        content,
    }
}

/// Run the move-to-file command
pub fn run_move_to_file(args: &MoveToFileArgs, ctx: &CommandContext<'_>) -> Result<Report> {
    let path = canonical_or_lexical(&args.document)?;
    let document = load_document(ctx, &path, args.language.as_deref())?;
    let selection = args.selection.resolve(&document.text)?;
    let report = Report::new("move-to-file", &path, args.dry_run);

    if selection.is_empty() {
        return Ok(report.cancelled("Nothing selected, nothing to move"));
    }

    let prepared = prepare_move(&document, selection)?;
    tracing::debug!(
        dialect = document.dialect().name(),
        fragment = ?prepared.fragment,
        "prepared move"
    );

    let answer = ctx
        .prompter
        .save_target(SAVE_TITLE, document.directory(), &prepared.filters)?;
    let Some(target) = answer else {
        return Ok(report.cancelled("Cancelled"));
    };
    let target = canonical_or_lexical(&target)?;

    if same_file(&target, &document.path)? {
        ctx.prompter.inform(SAME_FILE_MESSAGE);
        return Ok(report.rejected(SAME_FILE_MESSAGE));
    }

    let planned = plan_target(
        &document,
        &prepared,
        &target,
        ctx.config.markup.serialize_options(),
    );

    if !args.dry_run {
        ctx.workspace.write(&target, planned.content.as_bytes())?;
        if !planned.edits.is_empty() {
            let updated = apply_edits(&document.text, &planned.edits)?;
            ctx.workspace.write(&document.path, updated.as_bytes())?;
            tracing::info!(
                document = %document.path.display(),
                edits = planned.edits.len(),
                "rewrote document"
            );
        }
    }

    let verb = if args.dry_run { "Would move" } else { "Moved" };
    let mut message = format!("{} selection to {}", verb, target.display());
    if planned.plan == ReplacementPlan::KeepOriginal {
        message.push_str(" (document left unchanged)");
    }

    let mut report = report;
    report.message = message;
    report.target = Some(target);
    report.content = Some(planned.content);
    report.plan = Some(planned.plan);
    report.edits = planned.edits;
    Ok(report)
}
