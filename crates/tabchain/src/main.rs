//! tabchain: browser tab list on a doubly linked chain
//!
//! Main entry point. Initializes the global allocator, sets up logging,
//! loads configuration and runs the demo, the interactive shell, or a
//! command script.

mod command;
mod config;
mod demo;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ShellConfig;
use render::Renderer;
use shell::Shell;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Use mimalloc as the global allocator
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Browser tab list with navigation, bookmarks and memory-based eviction
#[derive(Parser, Debug)]
#[command(name = "tabchain", author, version, about)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run the scripted walk-through of every operation
    Demo,
    /// Read commands from stdin (default)
    Shell,
    /// Run commands from a script file
    Run {
        /// File with one command per line
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ShellConfig::default(),
    };
    info!(?config, "tabchain starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode.unwrap_or(Mode::Shell) {
        Mode::Demo => {
            demo::run(&Renderer::from_config(&config), &mut out)?;
        }
        Mode::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut shell = Shell::new(config);
            shell.run(stdin.lock(), &mut out, interactive)?;
            info!(open_tabs = shell.list().len(), "Shell closed");
        }
        Mode::Run { script } => {
            let file = File::open(&script)
                .with_context(|| format!("failed to open script {}", script.display()))?;
            let mut shell = Shell::new(config);
            shell.run(BufReader::new(file), &mut out, false)?;
            info!(
                open_tabs = shell.list().len(),
                script = %script.display(),
                "Script finished"
            );
        }
    }

    info!("tabchain shutting down");
    Ok(())
}

/// Log to stderr so the transcript on stdout stays clean. `RUST_LOG` wins
/// over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
