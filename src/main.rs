use anyhow::Context;
use clap::{Parser, Subcommand};

use commit_pilot::{cli, config, tools, ui, CommitPilotError};

#[derive(Parser)]
#[command(
    name = "commit-pilot",
    about = "Conventional commit wizard, linter, and release planner"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactively compose and create a conventional commit
    Commit,

    /// Install git hooks that enforce the commit grammar
    InstallHooks {
        #[arg(
            long = "hook",
            help = "Hook to install (commit-msg, pre-push); may be repeated"
        )]
        hooks: Vec<String>,
    },

    /// Lint commit messages in a revision range
    Lint {
        #[arg(long, help = "Lower bound revision, exclusive (default: HEAD~1)")]
        from: Option<String>,

        #[arg(long, help = "Upper bound revision, inclusive (default: HEAD)")]
        to: Option<String>,
    },

    /// Validate a single commit message from a file or argument
    Check {
        #[arg(help = "File containing the message (as git passes to commit-msg)")]
        file: Option<String>,

        #[arg(short, long, help = "Message text to validate instead of a file")]
        message: Option<String>,
    },

    /// Compute the next release version for the current branch
    NextVersion,
}

fn run() -> anyhow::Result<i32> {
    let args = Args::parse();

    let config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let exit_code = match &args.command {
        Command::Commit => {
            cli::run_commit_wizard(&config)?;
            0
        }
        Command::InstallHooks { hooks } => {
            cli::run_install_hooks(hooks)?;
            0
        }
        Command::Lint { from, to } => {
            let failed = cli::run_lint_range(&config, from.as_deref(), to.as_deref())?;
            if failed == 0 {
                0
            } else {
                1
            }
        }
        Command::Check { file, message } => {
            let valid = cli::run_check(&config, file.as_deref(), message.as_deref())?;
            if valid {
                0
            } else {
                1
            }
        }
        Command::NextVersion => {
            cli::run_next_version(&config)?;
            0
        }
    };

    Ok(exit_code)
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // Cancellation is a distinct signal, not a failure
            if matches!(
                err.downcast_ref::<CommitPilotError>(),
                Some(CommitPilotError::Cancelled)
            ) {
                println!("Operation cancelled.");
                std::process::exit(tools::USER_CANCELLED_EXIT);
            }

            ui::display_error(&format!("{:#}", err));
            std::process::exit(1);
        }
    }
}
