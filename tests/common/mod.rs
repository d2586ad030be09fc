//! Common test utilities and fixtures for refactor-extras integration tests
//!
//! This module provides:
//! - `TestRepo` builder for temporary workspaces with documents to refactor
//! - `ScriptedPrompter`, a `Prompter` that replays preset answers
//! - Custom assertions for validating CLI output

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod scripted;
pub mod test_repo;

pub use assertions::*;
pub use scripted::ScriptedPrompter;
pub use test_repo::TestRepo;
