//! CLI argument definitions using clap with subcommand architecture
//!
//! Each subcommand acts on one document on disk. Editor concepts map to
//! flags: the selection and cursor are line/column arguments, and dialog
//! answers can be preset with `--to`, `--file` and `--yes`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_ENV;
use crate::document::{Position, SelectionSpec};

/// Move markup fragments to their own files, and pull files back in
#[derive(Parser, Debug)]
#[command(name = "refactor-extras")]
#[command(about = "Extract inline script/style blocks and other fragments to files, and insert files or paths")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", env = CONFIG_ENV, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Move the selected fragment to a new file and reference it
    #[command(visible_alias = "mv")]
    MoveToFile(MoveToFileArgs),

    /// Insert the contents of a file at the cursor
    InsertFile(InsertFileArgs),

    /// Insert the relative path of a file at the cursor
    InsertPath(InsertPathArgs),
}

/// Arguments for the move-to-file command
#[derive(Args, Debug)]
pub struct MoveToFileArgs {
    /// Document containing the selection
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Selected range: LINE-LINE or LINE:COL-LINE:COL (end exclusive)
    #[arg(short, long, value_name = "RANGE")]
    pub selection: SelectionSpec,

    /// Target file (prompted for when omitted)
    #[arg(long, value_name = "PATH")]
    pub to: Option<PathBuf>,

    /// Language id of the document (detected from the extension when omitted)
    #[arg(long, value_name = "ID")]
    pub language: Option<String>,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the insert-file command
#[derive(Args, Debug)]
pub struct InsertFileArgs {
    /// Document to insert into
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Cursor position: LINE:COL
    #[arg(long, value_name = "LINE:COL")]
    pub at: Position,

    /// File to insert (prompted for when omitted)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Insert large files without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the insert-path command
#[derive(Args, Debug)]
pub struct InsertPathArgs {
    /// Document to insert into
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Cursor position: LINE:COL
    #[arg(long, value_name = "LINE:COL")]
    pub at: Position,

    /// File whose path is inserted (prompted for when omitted)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON for machine parsing
    Json,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
