//! Insert-file command handler - paste another file's contents at the cursor

use crate::cli::InsertFileArgs;
use crate::commands::{load_document, CommandContext, Report};
use crate::edit::{apply_edits, TextEdit};
use crate::error::Result;
use crate::paths::{canonical_or_lexical, format_bytes, same_file, Precision};

pub const OPEN_TITLE: &str = "Insert file";
pub const SAME_FILE_MESSAGE: &str = "Please choose another file";

/// Whether inserting a file of `size` bytes needs confirmation
pub fn needs_confirmation(size: u64, threshold: u64) -> bool {
    size > threshold
}

pub fn large_file_message(size: u64) -> String {
    format!(
        "The file is quite big ({}), are you sure you want to insert it?",
        format_bytes(size, Precision::default())
    )
}

/// Decode file bytes for insertion, replacing invalid UTF-8
pub fn decode_lossy(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if let std::borrow::Cow::Owned(_) = text {
        tracing::warn!("inserted file is not valid UTF-8; invalid sequences were replaced");
    }
    text.into_owned()
}

/// Run the insert-file command
pub fn run_insert_file(args: &InsertFileArgs, ctx: &CommandContext<'_>) -> Result<Report> {
    let path = canonical_or_lexical(&args.document)?;
    let document = load_document(ctx, &path, None)?;
    let offset = args.at.offset_in(&document.text)?;
    let report = Report::new("insert-file", &path, args.dry_run);

    let Some(source) = ctx.prompter.open_file(OPEN_TITLE, document.directory())? else {
        return Ok(report.cancelled("Cancelled"));
    };
    let source = canonical_or_lexical(&source)?;

    if same_file(&source, &document.path)? {
        ctx.prompter.inform(SAME_FILE_MESSAGE);
        return Ok(report.rejected(SAME_FILE_MESSAGE));
    }

    let size = ctx.workspace.size(&source)?;
    let threshold = ctx.config.insert.large_file_threshold;
    if needs_confirmation(size, threshold) && !ctx.prompter.confirm(&large_file_message(size))? {
        return Ok(report.cancelled("Cancelled"));
    }

    let text = decode_lossy(&ctx.workspace.read(&source)?);
    let edits = vec![TextEdit::insert(offset, text.clone())];

    if !args.dry_run {
        let updated = apply_edits(&document.text, &edits)?;
        ctx.workspace.write(&document.path, updated.as_bytes())?;
    }

    let verb = if args.dry_run { "Would insert" } else { "Inserted" };
    let mut report = report;
    report.message = format!(
        "{} {} ({})",
        verb,
        source.display(),
        format_bytes(size, Precision::default())
    );
    report.target = Some(source);
    if args.dry_run {
        report.content = Some(text);
    }
    report.edits = edits;
    Ok(report)
}
