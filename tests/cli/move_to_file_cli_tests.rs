//! Tests for the `move-to-file` CLI command
//!
//! - `move-to-file <doc> --selection <range> --to <path>` - Move and rewrite
//! - `--dry-run` - Report the plan without writing
//! - `-f json` - Machine-readable report

use crate::common::{assert_contains, assert_status, assert_valid_json, TestRepo};

const PAGE: &str = "<html>\n<script type=\"module\">console.log(1)</script>\n</html>\n";

#[test]
fn test_move_to_file_writes_both_files() {
    let repo = TestRepo::new();
    repo.add_file("index.html", PAGE);

    let output = repo.run_cli_success(&[
        "move-to-file",
        "index.html",
        "--selection",
        "2-2",
        "--to",
        "util.js",
    ]);

    assert_contains(&output, "Moved selection to");
    assert_eq!(repo.read("util.js"), "console.log(1)");
    assert_eq!(
        repo.read("index.html"),
        "<html>\n<script type=\"module\" src=\"./util.js\"></script>\n</html>\n"
    );
}

#[test]
fn test_move_to_file_appends_implied_extension() {
    let repo = TestRepo::new();
    repo.add_file("index.html", PAGE);

    repo.run_cli_success(&["mv", "index.html", "-s", "2-2", "--to", "util"]);

    assert!(repo.exists("util.js"));
    assert_contains(&repo.read("index.html"), "src=\"./util.js\"");
}

#[test]
fn test_move_to_file_dry_run_json() {
    let repo = TestRepo::new();
    repo.add_file("index.html", PAGE);

    let output = repo.run_cli_success(&[
        "move-to-file",
        "index.html",
        "--selection",
        "2-2",
        "--to",
        "util.js",
        "--dry-run",
        "-f",
        "json",
    ]);

    let json = assert_valid_json(&output, "move-to-file dry run");
    assert_status(&json, "applied");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["content"], "console.log(1)");
    assert_eq!(json["plan"]["kind"], "replace_with_markup");
    assert_eq!(
        json["plan"]["markup"],
        "<script type=\"module\" src=\"./util.js\"></script>"
    );
    assert_eq!(json["edits"].as_array().map(Vec::len), Some(1));
    assert!(!repo.exists("util.js"));
    assert_eq!(repo.read("index.html"), PAGE);
}

#[test]
fn test_move_to_same_file_exits_with_rejection() {
    let repo = TestRepo::new();
    repo.add_file("index.html", PAGE);

    let (stdout, stderr) = repo.run_cli_exit(
        &["move-to-file", "index.html", "--selection", "2-2", "--to", "index.html"],
        2,
    );

    assert!(stdout.is_empty());
    assert_contains(&stderr, "Please save selection as another file");
    assert_eq!(repo.read("index.html"), PAGE);
}

#[test]
fn test_config_file_controls_void_tags() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "<style>p{}</style>\n");
    let config = repo.add_config("[markup]\nself_close_void_tags = false\n");
    let config = config.to_string_lossy().to_string();

    repo.run_cli_success(&[
        "--config",
        &config,
        "move-to-file",
        "index.html",
        "--selection",
        "1-1",
        "--to",
        "p.css",
    ]);

    assert_eq!(
        repo.read("index.html"),
        "<link rel=\"stylesheet\" href=\"./p.css\">\n"
    );
}

#[test]
fn test_invalid_config_exit_code() {
    let repo = TestRepo::new();
    repo.add_file("index.html", PAGE);
    let config = repo.add_config("[markup\n");
    let config = config.to_string_lossy().to_string();

    let (_, stderr) = repo.run_cli_exit(
        &["--config", &config, "move-to-file", "index.html", "-s", "2-2", "--to", "a.js"],
        5,
    );

    assert_contains(&stderr, "Configuration error");
}

#[test]
fn test_missing_document_exit_code() {
    let repo = TestRepo::new();

    let (_, stderr) = repo.run_cli_exit(
        &["move-to-file", "missing.html", "-s", "1-1", "--to", "a.js"],
        1,
    );

    assert_contains(&stderr, "File not found");
}

#[test]
fn test_selection_past_end_exit_code() {
    let repo = TestRepo::new();
    repo.add_file("index.html", PAGE);

    let (_, stderr) = repo.run_cli_exit(
        &["move-to-file", "index.html", "-s", "8-9", "--to", "a.js"],
        3,
    );

    assert_contains(&stderr, "Invalid position");
}
