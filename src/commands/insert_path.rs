//! Insert-path command handler - insert a relative reference to a file

use crate::cli::InsertPathArgs;
use crate::commands::{load_document, CommandContext, Report};
use crate::edit::{apply_edits, TextEdit};
use crate::error::Result;
use crate::paths::{canonical_or_lexical, relative_path};

pub const OPEN_TITLE: &str = "Insert path";

/// Run the insert-path command
pub fn run_insert_path(args: &InsertPathArgs, ctx: &CommandContext<'_>) -> Result<Report> {
    let path = canonical_or_lexical(&args.document)?;
    let document = load_document(ctx, &path, None)?;
    let offset = args.at.offset_in(&document.text)?;
    let report = Report::new("insert-path", &path, args.dry_run);

    let Some(file) = ctx.prompter.open_file(OPEN_TITLE, document.directory())? else {
        return Ok(report.cancelled("Cancelled"));
    };
    let file = canonical_or_lexical(&file)?;

    let reference = relative_path(document.directory(), &file);
    let edits = vec![TextEdit::insert(offset, reference.clone())];

    if !args.dry_run {
        let updated = apply_edits(&document.text, &edits)?;
        ctx.workspace.write(&document.path, updated.as_bytes())?;
    }

    let verb = if args.dry_run { "Would insert" } else { "Inserted" };
    let mut report = report;
    report.message = format!("{} {}", verb, reference);
    report.target = Some(file);
    report.content = Some(reference);
    report.edits = edits;
    Ok(report)
}
