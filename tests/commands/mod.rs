//! Command tests through the library API
//!
//! Each test builds a temporary workspace, runs one command with a
//! `ScriptedPrompter` standing in for the terminal, and checks the files on
//! disk afterwards.

pub mod insert_tests;

use refactor_extras::cli::{InsertFileArgs, InsertPathArgs, MoveToFileArgs};
use refactor_extras::commands::{
    run_insert_file, run_insert_path, run_move_to_file, CommandContext, Report,
};
use refactor_extras::host::LocalWorkspace;
use refactor_extras::ExtrasConfig;

use crate::common::{ScriptedPrompter, TestRepo};

pub fn move_selection(
    repo: &TestRepo,
    document: &str,
    selection: &str,
    prompter: &ScriptedPrompter,
    config: &ExtrasConfig,
) -> Report {
    let args = MoveToFileArgs {
        document: repo.file(document),
        selection: selection.parse().expect("valid selection"),
        to: None,
        language: None,
        dry_run: false,
    };
    let ctx = CommandContext {
        config,
        workspace: &LocalWorkspace,
        prompter,
    };
    run_move_to_file(&args, &ctx).expect("move-to-file failed")
}

pub fn insert_file(
    repo: &TestRepo,
    document: &str,
    at: &str,
    prompter: &ScriptedPrompter,
    config: &ExtrasConfig,
) -> Report {
    let args = InsertFileArgs {
        document: repo.file(document),
        at: at.parse().expect("valid position"),
        file: None,
        yes: false,
        dry_run: false,
    };
    let ctx = CommandContext {
        config,
        workspace: &LocalWorkspace,
        prompter,
    };
    run_insert_file(&args, &ctx).expect("insert-file failed")
}

pub fn insert_path(repo: &TestRepo, document: &str, at: &str, prompter: &ScriptedPrompter) -> Report {
    let args = InsertPathArgs {
        document: repo.file(document),
        at: at.parse().expect("valid position"),
        file: None,
        dry_run: false,
    };
    let config = ExtrasConfig::default();
    let ctx = CommandContext {
        config: &config,
        workspace: &LocalWorkspace,
        prompter,
    };
    run_insert_path(&args, &ctx).expect("insert-path failed")
}
