use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::console::GameLoop;
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play Connect Four with two players at one console.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four on the console")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // CLI flags and NO_COLOR override the file
    config.display = config.display.for_terminal(cli.no_color);
    config.validate().context("applying display settings")?;
    let level = match cli.log_level {
        Some(level) => level,
        None => config.logging.level_filter()?,
    };
    initialize_logging(level);

    if !cli.config.exists() {
        debug!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let stdin = io::stdin();
    let mut game_loop = GameLoop::new(stdin.lock(), io::stdout(), config.display);
    game_loop.run().context("console I/O failed")?;

    Ok(())
}

/// Log to stderr so stdout stays free for the board.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
