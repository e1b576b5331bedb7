//! Game lobby console.
//!
//! Runs the lobby menu on stdin/stdout. Logs go to stderr so the console
//! transcript stays clean; set `RUST_LOG` to override the filter.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use game_lobby::{Console, ConsoleConfig};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "game-lobby")]
#[command(about = "Manage a first-in, first-out game lobby from the console")]
#[command(version)]
struct Args {
    /// TOML file with console options
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not print the lobby before each menu
    #[arg(long)]
    quiet_roster: bool,

    /// Keep whole input lines as player names
    #[arg(long)]
    multi_word_names: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn console_config(&self) -> Result<ConsoleConfig, game_lobby::ConfigError> {
        Ok(ConsoleConfig::load_or_default(self.config.as_deref())?
            .with_cli_flags(self.quiet_roster, self.multi_word_names))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    setup_tracing(args.verbose);

    let config = args.console_config()?;
    info!(?config, "starting game lobby");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Console::new(stdin.lock(), stdout.lock(), config).run()?;

    info!(
        commands = summary.commands,
        left_waiting = summary.lobby.len(),
        "game lobby closed"
    );
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("game_lobby=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
