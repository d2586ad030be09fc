//! refactor-extras CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use refactor_extras::commands::{
    run_insert_file, run_insert_path, run_move_to_file, CommandContext, Report,
};
use refactor_extras::host::{LocalWorkspace, TerminalPrompter};
use refactor_extras::{Cli, Commands, ExtrasConfig};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(report) => {
            print!("{}", report.render(cli.format));
            report.outcome.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> refactor_extras::Result<Report> {
    let config = ExtrasConfig::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config.logging.level);

    let workspace = LocalWorkspace;
    let prompter = match &cli.command {
        Commands::MoveToFile(args) => TerminalPrompter::new(args.to.clone(), false),
        Commands::InsertFile(args) => TerminalPrompter::new(args.file.clone(), args.yes),
        Commands::InsertPath(args) => TerminalPrompter::new(args.file.clone(), false),
    };
    let ctx = CommandContext {
        config: &config,
        workspace: &workspace,
        prompter: &prompter,
    };

    match &cli.command {
        Commands::MoveToFile(args) => run_move_to_file(args, &ctx),
        Commands::InsertFile(args) => run_insert_file(args, &ctx),
        Commands::InsertPath(args) => run_insert_path(args, &ctx),
    }
}

/// Logs go to stderr: `RUST_LOG` wins, then `--verbose`, then the config level
fn init_tracing(verbose: bool, configured_level: &str) {
    let mut rejected_level = None;
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        let level = if verbose { "debug" } else { configured_level };
        EnvFilter::try_new(format!("refactor_extras={}", level)).unwrap_or_else(|_| {
            rejected_level = Some(level.to_string());
            EnvFilter::new("refactor_extras=warn")
        })
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Some(level) = rejected_level {
        tracing::warn!(%level, "unknown log level in config, using warn");
    }
}
