//! Tests for the insert-file and insert-path commands

use refactor_extras::commands::Outcome;
use refactor_extras::config::InsertConfig;
use refactor_extras::ExtrasConfig;

use super::{insert_file, insert_path};
use crate::common::{ScriptedPrompter, TestRepo};

fn small_threshold(bytes: u64) -> ExtrasConfig {
    ExtrasConfig {
        insert: InsertConfig {
            large_file_threshold: bytes,
        },
        ..ExtrasConfig::default()
    }
}

// ============================================================================
// INSERT FILE
// ============================================================================

#[test]
fn test_insert_file_at_cursor() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "<style>\n</style>\n");
    repo.add_file("theme.css", "p { margin: 0; }\n");
    let prompter = ScriptedPrompter::answering(repo.file("theme.css"));

    let report = insert_file(&repo, "index.html", "2:1", &prompter, &ExtrasConfig::default());

    assert_eq!(report.outcome, Outcome::Applied);
    assert_eq!(
        repo.read("index.html"),
        "<style>\np { margin: 0; }\n</style>\n"
    );
    assert!(prompter.confirmations.borrow().is_empty());
}

#[test]
fn test_insert_large_file_asks_first() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "<body></body>");
    repo.add_sized_file("big.txt", 1536);
    let prompter = ScriptedPrompter::answering(repo.file("big.txt")).confirming(false);

    let report = insert_file(&repo, "index.html", "1:7", &prompter, &small_threshold(1024));

    assert_eq!(report.outcome, Outcome::Cancelled);
    assert_eq!(
        prompter.confirmations.borrow().as_slice(),
        ["The file is quite big (1.5 KiB), are you sure you want to insert it?".to_string()]
    );
    assert_eq!(repo.read("index.html"), "<body></body>");
}

#[test]
fn test_insert_large_file_when_confirmed() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "<body></body>");
    repo.add_sized_file("big.txt", 2048);
    let prompter = ScriptedPrompter::answering(repo.file("big.txt")).confirming(true);

    insert_file(&repo, "index.html", "1:7", &prompter, &small_threshold(1024));

    assert_eq!(
        repo.read("index.html"),
        format!("<body>{}</body>", "x".repeat(2048))
    );
}

#[test]
fn test_insert_document_into_itself_is_rejected() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "<p></p>");
    let prompter = ScriptedPrompter::answering(repo.file("index.html"));

    let report = insert_file(&repo, "index.html", "1:4", &prompter, &ExtrasConfig::default());

    assert!(matches!(report.outcome, Outcome::Rejected { .. }));
    assert_eq!(
        prompter.informed.borrow().as_slice(),
        ["Please choose another file".to_string()]
    );
    assert_eq!(repo.read("index.html"), "<p></p>");
}

#[test]
fn test_insert_binary_file_is_decoded_lossily() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "[]");
    std::fs::write(repo.file("blob.bin"), b"a\xffb").unwrap();
    let prompter = ScriptedPrompter::answering(repo.file("blob.bin"));

    insert_file(&repo, "index.html", "1:2", &prompter, &ExtrasConfig::default());

    assert_eq!(repo.read("index.html"), "[a\u{fffd}b]");
}

// ============================================================================
// INSERT PATH
// ============================================================================

#[test]
fn test_insert_path_to_parent_directory() {
    let repo = TestRepo::new();
    repo.add_file("pages/index.html", "<img src=\"\">");
    repo.add_file("assets/logo.svg", "<svg/>");
    let prompter = ScriptedPrompter::answering(repo.file("assets/logo.svg"));

    let report = insert_path(&repo, "pages/index.html", "1:11", &prompter);

    assert_eq!(report.content.as_deref(), Some("../assets/logo.svg"));
    assert_eq!(
        repo.read("pages/index.html"),
        "<img src=\"../assets/logo.svg\">"
    );
}

#[test]
fn test_insert_path_to_sibling() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "");
    repo.add_file("app.js", "");
    let prompter = ScriptedPrompter::answering(repo.file("app.js"));

    insert_path(&repo, "index.html", "1:1", &prompter);

    assert_eq!(repo.read("index.html"), "./app.js");
}

#[test]
fn test_insert_path_cancelled() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "x");
    let prompter = ScriptedPrompter::declining();

    let report = insert_path(&repo, "index.html", "1:1", &prompter);

    assert_eq!(report.outcome, Outcome::Cancelled);
    assert_eq!(repo.read("index.html"), "x");
}
