//! Tests for the `insert-file` and `insert-path` CLI commands

use crate::common::{assert_contains, assert_status, assert_valid_json, TestRepo};

#[test]
fn test_insert_file_with_preset_answers() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "<script></script>");
    repo.add_file("app.js", "run();");

    repo.run_cli_success(&["insert-file", "index.html", "--at", "1:9", "--file", "app.js"]);

    assert_eq!(repo.read("index.html"), "<script>run();</script>");
}

#[test]
fn test_insert_large_file_with_yes() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "");
    repo.add_sized_file("big.txt", 64);
    let config = repo.add_config("[insert]\nlarge_file_threshold = 16\n");
    let config = config.to_string_lossy().to_string();

    repo.run_cli_success(&[
        "--config",
        &config,
        "insert-file",
        "index.html",
        "--at",
        "1:1",
        "--file",
        "big.txt",
        "--yes",
    ]);

    assert_eq!(repo.read("index.html").len(), 64);
}

#[test]
fn test_insert_large_file_without_terminal_fails() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "");
    repo.add_sized_file("big.txt", 64);
    let config = repo.add_config("[insert]\nlarge_file_threshold = 16\n");
    let config = config.to_string_lossy().to_string();

    let (_, stderr) = repo.run_cli_exit(
        &["--config", &config, "insert-file", "index.html", "--at", "1:1", "--file", "big.txt"],
        6,
    );

    assert_contains(&stderr, "pass --yes");
    assert_eq!(repo.read("index.html"), "");
}

#[test]
fn test_insert_path_json_report() {
    let repo = TestRepo::new();
    repo.add_file("pages/index.html", "<a href=\"\"></a>");
    repo.add_file("docs/guide.html", "");

    let output = repo.run_cli_success(&[
        "insert-path",
        "pages/index.html",
        "--at",
        "1:10",
        "--file",
        "docs/guide.html",
        "-f",
        "json",
    ]);

    let json = assert_valid_json(&output, "insert-path");
    assert_status(&json, "applied");
    assert_eq!(json["content"], "../docs/guide.html");
    assert_eq!(
        repo.read("pages/index.html"),
        "<a href=\"../docs/guide.html\"></a>"
    );
}
