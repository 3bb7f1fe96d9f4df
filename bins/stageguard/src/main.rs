//! Stageguard - pre-commit security audit for staged git content
//!
//! Checks every staged file for secrets before a commit lands. Meant to run
//! from the pre-commit hook, so a broken audit never blocks the commit.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use stageguard_core::error::exit_codes;
use stageguard_core::git::GitIndex;

#[derive(Parser)]
#[command(name = "stageguard")]
#[command(about = "Pre-commit security audit for staged git content")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit staged content for secrets (the default)
    Audit,

    /// Install the pre-commit hook into the current repository
    Install {
        /// Overwrite an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("stageguard_core=debug,stageguard_hooks=debug")
            .init();
    }

    let result = match cli.command.unwrap_or(Commands::Audit) {
        Commands::Audit => run_audit(),
        Commands::Install { force } => run_install(force),
    };

    std::process::exit(result);
}

/// Audit the current repository's index.
///
/// Every error path reports and exits zero: an audit that cannot run must
/// not stand between the developer and their commit.
fn run_audit() -> i32 {
    use stageguard_hooks::audit;

    match GitIndex::open_current().and_then(|index| audit::audit(&index)) {
        Ok(verdict) => audit::print_verdict(&verdict),
        Err(e) => audit::print_degraded(&e),
    }
}

fn run_install(force: bool) -> i32 {
    use stageguard_hooks::install;

    match GitIndex::open_current()
        .map_err(anyhow::Error::from)
        .and_then(|index| install::install(&index, force))
    {
        Ok(outcome) => {
            println!(
                "{} Installed pre-commit hook at {}",
                "✓".green(),
                outcome.path().display()
            );
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("{} Hook install failed: {}", "✗".red(), e);
            exit_codes::FAILURE
        }
    }
}
