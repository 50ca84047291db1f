//! Top-level CLI definition and dispatch.

use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};

use fs_janitor::core::errors::Result;
use fs_janitor::ignore::scan::find_ignored_files;
use fs_janitor::reaper::loop_main::Reaper;
use fs_janitor::reaper::signals::SignalHandler;

/// fs_janitor — ignore reporting and age-based trash cleanup.
#[derive(Debug, Parser)]
#[command(
    name = "fsj",
    author,
    version,
    about = "fs_janitor - ignored-file reports and trash reaping",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Force JSON output mode (ignored-file report only).
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Quiet mode (suppress console status messages).
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Report files a project's .gitignore would ignore.
    Ignored(IgnoredArgs),
    /// Run the trash reaper daemon until interrupted.
    Reap(ReapArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args)]
struct IgnoredArgs {
    /// Path to the project directory to scan.
    #[arg(value_name = "PROJECT_DIR")]
    project_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct ReapArgs {
    /// Path to the trash directory to reap.
    #[arg(value_name = "TRASH_DIR")]
    trash_dir: PathBuf,
    /// Age threshold in seconds before a file becomes eligible for deletion.
    #[arg(long, value_name = "SECONDS")]
    age_thr: u64,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_name = "SHELL")]
    shell: CompletionShell,
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        Command::Ignored(args) => run_ignored(args, cli.json),
        Command::Reap(args) => run_reap(args, cli.quiet),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "fsj", &mut io::stdout());
            Ok(())
        }
    }
}

fn run_ignored(args: &IgnoredArgs, json: bool) -> Result<()> {
    let report = find_ignored_files(&args.project_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Ignored files:".bold());
    for file in &report {
        println!(
            "{} ignored by expression {}",
            file.path.display(),
            file.pattern
        );
    }
    Ok(())
}

fn run_reap(args: &ReapArgs, quiet: bool) -> Result<()> {
    let reaper = Reaper::new(&args.trash_dir, args.age_thr, SignalHandler::new())?;
    reaper.run()?;

    if !quiet {
        println!("\nTrash cleaner stopped by user");
    }
    Ok(())
}
