//! CLI command integration tests
//!
//! These run the built `refactor-extras` binary with preset answers
//! (`--to`, `--file`, `--yes`) so no prompt is ever shown.

pub mod insert_cli_tests;
pub mod move_to_file_cli_tests;
