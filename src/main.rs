use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use workfleet::commands;
use workfleet::commands::status::OutputFormat;
use workfleet::config::UserConfig;
use workfleet::workspace;

#[derive(Parser, Debug)]
#[command(
    name = "wf",
    version,
    about,
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Operate on the workspace at the given path (like `git -C`).
    #[arg(short = 'C', long = "dir", global = true, value_name = "PATH")]
    workspace_dir: Option<PathBuf>,
    /// Log every git invocation and its output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show working tree and upstream status for every repository.
    Status {
        /// Count untracked files as changes to commit.
        #[arg(long)]
        strict: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run `git fetch` in every repository.
    Fetch,
    /// Run `git pull` in every repository with no uncommitted changes.
    Pull,
    /// Delete local branches whose upstream branch is gone.
    Purge {
        /// Show what would be deleted without making any changes.
        #[arg(short = 'd', long)]
        dry_run: bool,
    },
    /// Show the configured remote of every repository.
    Remote,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = UserConfig::load().context("failed to load workfleet config")?;
    let root = workspace::resolve_root(cli.workspace_dir, config.root_dir.as_deref())?;

    match cli.command {
        Command::Status { strict, format } => {
            commands::status::run(&root, strict || config.strict(), format)
        }
        Command::Fetch => commands::fetch::run(&root),
        Command::Pull => commands::pull::run(&root),
        Command::Purge { dry_run } => commands::purge::run(&root, dry_run),
        Command::Remote => commands::remote::run(&root),
    }
}

/// `--verbose` raises the default filter to debug; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
